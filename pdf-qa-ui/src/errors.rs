//! Error taxonomy for the document and question flows.
//!
//! Display strings are what the user sees; causes are kept for the console.

use shared_types::MAX_UPLOAD_BYTES;

/// Fallback detail when the upload endpoint rejects without one
pub const GENERIC_UPLOAD_FAILURE: &str = "Upload failed";

pub const RENDER_FAILURE_MESSAGE: &str =
    "Failed to load PDF. The file might be corrupted or password protected.";

fn mebibytes(bytes: &u64) -> u64 {
    bytes / (1024 * 1024)
}

/// Local checks that run before any network call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please upload a valid PDF file.")]
    NotPdf { media_type: String },
    #[error("File is too large. Maximum size is {} MB.", mebibytes(.limit))]
    TooLarge { size: u64, limit: u64 },
}

impl ValidationError {
    pub fn too_large(size: u64) -> Self {
        Self::TooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    #[error("Failed to upload file: {0}")]
    Transport(String),
    #[error("Failed to read upload response: {0}")]
    Decode(String),
}

/// The PDF could not be parsed or drawn
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", RENDER_FAILURE_MESSAGE)]
pub struct RenderError {
    pub cause: String,
}

impl RenderError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// Everything that can put the document panel into its error state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Failure while asking a question. Never shown as-is: the entry gets the
/// fallback answer instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("answer endpoint returned HTTP {status}")]
    Rejected { status: u16 },
    #[error("answer request failed: {0}")]
    Transport(String),
    #[error("answer response unreadable: {0}")]
    Decode(String),
}

/// Why a question was not submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AskRejected {
    #[error("question is empty")]
    EmptyQuestion,
    #[error("no document is active")]
    NoDocument,
    #[error("another question is still pending")]
    AlreadyAsking,
}
