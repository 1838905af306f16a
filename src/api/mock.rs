//! Canned KYC review data for when the backend is unreachable.
//!
//! The hosted demo backend sleeps after inactivity, so the admin review
//! screen falls back to these rows instead of showing an empty error state.

use crate::types::{KycStatus, KycSubmission};

pub fn sample_kyc_submissions() -> Vec<KycSubmission> {
    vec![
        KycSubmission {
            id: 1,
            user_id: Some(101),
            document_type: "PASSPORT".to_string(),
            document_number: "A12345678".to_string(),
            status: KycStatus::Approved,
            document_front_image_url: None,
            document_back_image_url: None,
            selfie_image_url: None,
            submitted_at: Some("2023-01-15T10:30:00Z".to_string()),
            verified_at: Some("2023-01-16T14:20:00Z".to_string()),
            verified_by: Some("admin1".to_string()),
            rejection_reason: None,
        },
        KycSubmission {
            id: 2,
            user_id: Some(102),
            document_type: "DRIVERS_LICENSE".to_string(),
            document_number: "DL987654".to_string(),
            status: KycStatus::Rejected,
            document_front_image_url: None,
            document_back_image_url: None,
            selfie_image_url: None,
            submitted_at: Some("2023-01-16T11:45:00Z".to_string()),
            verified_at: Some("2023-01-17T09:15:00Z".to_string()),
            verified_by: Some("admin2".to_string()),
            rejection_reason: Some("Document image is blurry".to_string()),
        },
    ]
}
