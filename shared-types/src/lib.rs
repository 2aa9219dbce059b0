//! Shared types between the front-end and the document Q&A backend
//!
//! These mirror the JSON bodies of the two endpoints the UI talks to:
//! - `POST /api/documents/upload` (multipart, field `file`)
//! - `POST /api/qa/ask` (JSON)

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Largest file the UI will send to the upload endpoint (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Number of retrieved chunks requested per question.
pub const DEFAULT_TOP_K: u32 = 2;

/// Media type attached to PDF uploads.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD_NAME: &str = "file";

pub const UPLOAD_PATH: &str = "/api/documents/upload";
pub const ASK_PATH: &str = "/api/qa/ask";

// ============================================================================
// Core Types
// ============================================================================

/// Opaque token the backend hands out for an uploaded document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Upload
// ============================================================================

/// Successful upload summary
///
/// Only `document_id`, `page_count` and `chunks_count` are guaranteed; the
/// remaining fields are displayed when the backend provides them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub document_id: DocumentId,
    pub page_count: u32,
    pub chunks_count: u32,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    /// Backend row id, unused by the UI
    #[serde(default)]
    pub id: Option<i64>,
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

// ============================================================================
// Question answering
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    pub document_id: DocumentId,
    pub question: String,
    pub top_k: u32,
}

impl AskRequest {
    pub fn new(document_id: DocumentId, question: impl Into<String>) -> Self {
        Self {
            document_id,
            question: question.into(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_minimal_body() {
        let json = r#"{"document_id":"doc_1","page_count":2,"chunks_count":7}"#;
        let parsed: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.document_id, DocumentId::new("doc_1"));
        assert_eq!(parsed.page_count, 2);
        assert_eq!(parsed.chunks_count, 7);
        assert!(parsed.filename.is_empty());
        assert!(parsed.upload_date.is_none());
    }

    #[test]
    fn test_upload_response_full_body() {
        let json = r#"{
            "id": 12,
            "filename": "report.pdf",
            "title": "Quarterly Report",
            "upload_date": "2024-05-01T10:20:30.123456",
            "chunks_count": 40,
            "page_count": 9,
            "document_id": "a1b2"
        }"#;
        let parsed: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.filename, "report.pdf");
        assert_eq!(parsed.title.as_deref(), Some("Quarterly Report"));
        assert_eq!(parsed.id, Some(12));
    }

    #[test]
    fn test_error_body_detail_is_optional() {
        let with: ApiErrorBody = serde_json::from_str(r#"{"detail":"Only PDF files are allowed"}"#)
            .unwrap();
        assert_eq!(with.detail.as_deref(), Some("Only PDF files are allowed"));

        let without: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(without.detail.is_none());
    }

    #[test]
    fn test_ask_request_wire_shape() {
        let request = AskRequest::new(DocumentId::new("doc_1"), "What is the main topic?");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "document_id": "doc_1",
                "question": "What is the main topic?",
                "top_k": 2
            })
        );
    }

    #[test]
    fn test_ask_response_ignores_extra_fields() {
        let parsed: AskResponse =
            serde_json::from_str(r#"{"answer":"It discusses X.","sources":[1,2]}"#).unwrap();
        assert_eq!(parsed.answer, "It discusses X.");
    }
}
