pub mod api;
pub mod app;
pub mod errors;
pub mod interop;
pub mod layout;
pub mod pagination;
pub mod pdf_bridge;
pub mod session;
pub mod transcript;
pub mod upload;

pub use api::{HttpBackend, QaBackend};
pub use app::{BrowserSession, PdfQaApp};
pub use errors::*;
pub use layout::{Layout, ViewMode, ViewModeController, ViewportTier};
pub use pagination::PageCursor;
pub use session::{Completion, DisplayState, SelectedFile, Session};
pub use transcript::{AnswerStatus, EntryId, QaEntry, Transcript};
pub use upload::{upload_document, validate_pdf};
