//! Local validation in front of the upload endpoint

use dioxus_logger::tracing::{error, info};
use shared_types::{UploadResponse, MAX_UPLOAD_BYTES};

use crate::api::QaBackend;
use crate::errors::{DocumentError, ValidationError};
use crate::session::SelectedFile;

pub fn is_pdf_media_type(media_type: &str) -> bool {
    media_type.to_ascii_lowercase().contains("pdf")
}

pub fn validate_pdf(media_type: &str, size: u64) -> Result<(), ValidationError> {
    if !is_pdf_media_type(media_type) {
        return Err(ValidationError::NotPdf {
            media_type: media_type.to_string(),
        });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::too_large(size));
    }
    Ok(())
}

/// Validates `file` and, only if it passes, sends it to the backend.
pub async fn upload_document<B: QaBackend>(
    backend: &B,
    file: &SelectedFile<B::Handle>,
) -> Result<UploadResponse, DocumentError> {
    validate_pdf(&file.media_type, file.size)?;

    match backend.upload(file).await {
        Ok(response) => {
            info!(
                "Uploaded {} as document {} ({} pages, {} chunks)",
                file.name, response.document_id, response.page_count, response.chunks_count
            );
            Ok(response)
        }
        Err(e) => {
            error!("Upload of {} failed: {}", file.name, e);
            Err(e.into())
        }
    }
}
