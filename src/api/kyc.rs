//! KYC endpoints. Submission is a multipart upload of the document images.

use super::{ApiClient, ApiError};
use crate::types::{DocumentType, KycStatus, KycSubmission};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct KycSubmitRequest {
    pub document_type: DocumentType,
    pub document_number: String,
    pub front_image: PathBuf,
    pub back_image: Option<PathBuf>,
    pub selfie_image: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KycStatusUpdate {
    pub status: KycStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

// The server rejects the upload unless the image parts carry exactly
// these field names.
const FRONT_IMAGE_FIELD: &str = "documentFrontImage";
const BACK_IMAGE_FIELD: &str = "documentBackImage";
const SELFIE_IMAGE_FIELD: &str = "selfieImage";

fn image_fields(request: &KycSubmitRequest) -> Vec<(&'static str, &Path)> {
    let mut fields = vec![
        (FRONT_IMAGE_FIELD, request.front_image.as_path()),
        (SELFIE_IMAGE_FIELD, request.selfie_image.as_path()),
    ];
    if let Some(back) = &request.back_image {
        fields.push((BACK_IMAGE_FIELD, back.as_path()));
    }
    fields
}

async fn file_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ApiError::Api {
            status: 0,
            message: format!("Could not read {}: {e}", path.display()),
        })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };
    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime)
        .map_err(ApiError::Network)
}

impl ApiClient {
    pub async fn submit_kyc(&self, request: &KycSubmitRequest) -> Result<KycSubmission, ApiError> {
        let mut form = Form::new()
            .text("documentType", request.document_type.wire())
            .text("documentNumber", request.document_number.clone());
        for (field, path) in image_fields(request) {
            form = form.part(field, file_part(path).await?);
        }
        self.post_multipart_data("/kyc/submit", form).await
    }

    /// The user's own submission. 404 means nothing has been submitted yet,
    /// which callers treat as a state, not a failure.
    pub async fn get_kyc_status(&self) -> Result<KycSubmission, ApiError> {
        self.get_data("/kyc/status").await
    }

    // --- admin ---

    pub async fn get_all_kyc_submissions(&self) -> Result<Vec<KycSubmission>, ApiError> {
        self.get_data("/kyc/admin/submissions").await
    }

    pub async fn update_kyc_status(
        &self,
        kyc_id: i64,
        update: &KycStatusUpdate,
    ) -> Result<KycSubmission, ApiError> {
        self.put_data(&format!("/kyc/{kyc_id}/status"), update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(back: bool) -> KycSubmitRequest {
        KycSubmitRequest {
            document_type: DocumentType::Passport,
            document_number: "P1234567".to_string(),
            front_image: PathBuf::from("front.png"),
            back_image: back.then(|| PathBuf::from("back.png")),
            selfie_image: PathBuf::from("selfie.jpg"),
        }
    }

    #[test]
    fn submission_uses_the_server_field_names() {
        let names: Vec<&str> = image_fields(&request(true))
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            ["documentFrontImage", "selfieImage", "documentBackImage"]
        );
    }

    #[test]
    fn back_image_is_omitted_when_not_provided() {
        let names: Vec<&str> = image_fields(&request(false))
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["documentFrontImage", "selfieImage"]);
    }
}
