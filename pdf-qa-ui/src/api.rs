use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use shared_types::{
    ApiErrorBody, AskRequest, AskResponse, UploadResponse, ASK_PATH, UPLOAD_FIELD_NAME,
    UPLOAD_PATH,
};
use std::sync::OnceLock;
use web_sys::FormData;

use crate::errors::{AnswerError, UploadError, GENERIC_UPLOAD_FAILURE};
use crate::interop::js_error_text;
use crate::session::SelectedFile;

/// Port the backend listens on during local development.
const LOCAL_BACKEND: &str = "http://localhost:8000";

/// Backend base URL baked in at build time, e.g.
/// `PDF_QA_BACKEND_URL=https://qa.example.com dx build`.
const CONFIGURED_BACKEND: Option<&str> = option_env!("PDF_QA_BACKEND_URL");

/// Resolve the API base URL
/// - Configured at build time: use it as-is (trailing slash trimmed)
/// - In development (localhost): use the local backend
/// - In production: use same origin
pub fn resolve_api_base(configured: Option<&str>, hostname: &str) -> String {
    if let Some(url) = configured.map(str::trim).filter(|url| !url.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_BACKEND.to_string()
    } else {
        String::new()
    }
}

fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    resolve_api_base(CONFIGURED_BACKEND, &hostname)
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// The two calls the UI makes. `Handle` is whatever the file picker yields.
#[async_trait(?Send)]
pub trait QaBackend {
    type Handle;

    async fn upload(
        &self,
        file: &SelectedFile<Self::Handle>,
    ) -> Result<UploadResponse, UploadError>;

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, AnswerError>;
}

/// Browser backend over `fetch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackend {
    base: String,
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Detail text for a rejected upload: the body's `detail` if present.
pub fn upload_rejection_detail(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| GENERIC_UPLOAD_FAILURE.to_string())
}

async fn describe_upload_rejection(response: Response) -> UploadError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    UploadError::Rejected {
        status,
        detail: upload_rejection_detail(&body),
    }
}

#[async_trait(?Send)]
impl QaBackend for HttpBackend {
    type Handle = web_sys::File;

    async fn upload(&self, file: &SelectedFile<web_sys::File>) -> Result<UploadResponse, UploadError> {
        let url = self.url(UPLOAD_PATH);

        let form = FormData::new().map_err(|e| UploadError::Transport(js_error_text(e)))?;
        form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, &file.handle, &file.name)
            .map_err(|e| UploadError::Transport(js_error_text(e)))?;

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| UploadError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(describe_upload_rejection(response).await);
        }

        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))
    }

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, AnswerError> {
        let url = self.url(ASK_PATH);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| AnswerError::Transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(|e| AnswerError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(AnswerError::Rejected {
                status: response.status(),
            });
        }

        response
            .json::<AskResponse>()
            .await
            .map_err(|e| AnswerError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_base_wins_and_is_trimmed() {
        assert_eq!(
            resolve_api_base(Some("https://qa.example.com/"), "localhost"),
            "https://qa.example.com"
        );
    }

    #[test]
    fn localhost_points_at_local_backend() {
        assert_eq!(resolve_api_base(None, "localhost"), LOCAL_BACKEND);
        assert_eq!(resolve_api_base(Some("  "), "127.0.0.1"), LOCAL_BACKEND);
    }

    #[test]
    fn production_uses_same_origin() {
        assert_eq!(resolve_api_base(None, "pdf.example.com"), "");
    }

    #[test]
    fn backend_urls_join_base_and_path() {
        let backend = HttpBackend::new("http://localhost:8000");
        assert_eq!(
            backend.url(UPLOAD_PATH),
            "http://localhost:8000/api/documents/upload"
        );
        assert_eq!(backend.url(ASK_PATH), "http://localhost:8000/api/qa/ask");
    }

    #[test]
    fn rejection_detail_prefers_server_message() {
        assert_eq!(
            upload_rejection_detail(r#"{"detail":"Only PDF files are allowed"}"#),
            "Only PDF files are allowed"
        );
        assert_eq!(upload_rejection_detail("{}"), GENERIC_UPLOAD_FAILURE);
        assert_eq!(
            upload_rejection_detail("<html>502 Bad Gateway</html>"),
            GENERIC_UPLOAD_FAILURE
        );
        assert_eq!(upload_rejection_detail(""), GENERIC_UPLOAD_FAILURE);
    }
}
