//! Customer-side KYC: document picking, preview, submission, status.

use super::App;
use crate::api::KycSubmitRequest;
use eframe::egui;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Which document image a file dialog is picking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KycImage {
    Front,
    Back,
    Selfie,
}

impl App {
    pub fn load_kyc_status(&mut self, ctx: &egui::Context) {
        let api = self.api.clone();
        self.spawn_into(ctx, &self.kyc_status_slot.clone(), async move {
            match api.get_kyc_status().await {
                Ok(submission) => Ok(Some(submission)),
                // 404 = nothing submitted yet, a valid state rather than an error
                Err(e) if e.is_not_found() => Ok(None),
                Err(e) => Err(e),
            }
        });
    }

    pub fn pick_kyc_image(&mut self, which: KycImage) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            .pick_file();
        let Some(path) = picked else { return };
        match which {
            KycImage::Front => self.kyc_front_path = Some(path),
            KycImage::Back => self.kyc_back_path = Some(path),
            KycImage::Selfie => self.kyc_selfie_path = Some(path),
        }
    }

    pub fn start_submit_kyc(&mut self, ctx: &egui::Context) {
        if self.kyc_document_number.trim().is_empty() {
            self.kyc_submit_slot.set(crate::types::Remote::Failed(
                "Enter the document number.".into(),
            ));
            return;
        }
        let (Some(front), Some(selfie)) = (self.kyc_front_path.clone(), self.kyc_selfie_path.clone())
        else {
            self.kyc_submit_slot.set(crate::types::Remote::Failed(
                "A front image and a selfie are required.".into(),
            ));
            return;
        };
        let api = self.api.clone();
        let request = KycSubmitRequest {
            document_type: self.kyc_document_type,
            document_number: self.kyc_document_number.trim().to_string(),
            front_image: front,
            back_image: self.kyc_back_path.clone(),
            selfie_image: selfie,
        };
        self.spawn_into(ctx, &self.kyc_submit_slot.clone(), async move {
            api.submit_kyc(&request).await
        });
    }

    pub fn poll_kyc(&mut self, ctx: &egui::Context) {
        if self.kyc_submit_slot.take_ready().is_some() {
            self.kyc_document_number.clear();
            self.kyc_front_path = None;
            self.kyc_back_path = None;
            self.kyc_selfie_path = None;
            self.kyc_previews.clear();
            self.show_toast("Documents submitted for review.");
            self.load_kyc_status(ctx);
        }
    }

    /// Decoded thumbnail for a picked file, cached by path. Files are small
    /// enough that decoding on the UI thread on first sight is fine.
    pub fn kyc_preview(
        &mut self,
        ctx: &egui::Context,
        path: &PathBuf,
    ) -> Option<egui::TextureHandle> {
        let key = path.to_string_lossy().into_owned();
        if !self.kyc_previews.contains_key(&key) {
            let texture = load_preview_texture(ctx, path, &key);
            self.kyc_previews.insert(key.clone(), texture);
        }
        self.kyc_previews.get(&key).cloned().flatten()
    }
}

fn load_preview_texture(
    ctx: &egui::Context,
    path: &Path,
    key: &str,
) -> Option<egui::TextureHandle> {
    let image = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Failed to decode preview");
            return None;
        }
    };
    let thumb = image.thumbnail(320, 320).to_rgba8();
    let size = [thumb.width() as usize, thumb.height() as usize];
    Some(ctx.load_texture(
        key.to_string(),
        egui::ColorImage::from_rgba_unmultiplied(size, &thumb.into_raw()),
        egui::TextureOptions::LINEAR,
    ))
}
