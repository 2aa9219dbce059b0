//! Top-level UI state and its transitions.
//!
//! Every network completion carries the generation it was issued under; a
//! completion whose generation no longer matches is discarded untouched.

use shared_types::{AskRequest, AskResponse, DocumentId, UploadResponse};

use crate::errors::{AnswerError, AskRejected, DocumentError, RenderError};
use crate::pagination::PageCursor;
use crate::transcript::{EntryId, Transcript};

/// A file picked by the user. `H` is the browser handle (`web_sys::File`)
/// and is opaque to the state logic.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    pub name: String,
    pub size: u64,
    pub media_type: String,
    pub handle: H,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Idle,
    Uploading,
    Ready,
    Failed(DocumentError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadTicket<H> {
    pub generation: u64,
    pub file: SelectedFile<H>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskTicket {
    pub generation: u64,
    pub entry_id: EntryId,
    pub request: AskRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session<H> {
    file: Option<SelectedFile<H>>,
    document: Option<UploadResponse>,
    display: DisplayState,
    cursor: PageCursor,
    transcript: Transcript,
    generation: u64,
    pending_ask: Option<EntryId>,
}

impl<H> Default for Session<H> {
    fn default() -> Self {
        Self {
            file: None,
            document: None,
            display: DisplayState::Idle,
            cursor: PageCursor::default(),
            transcript: Transcript::new(),
            generation: 0,
            pending_ask: None,
        }
    }
}

impl<H> Session<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile<H>> {
        self.file.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn document(&self) -> Option<&UploadResponse> {
        self.document.as_ref()
    }

    pub fn document_id(&self) -> Option<&DocumentId> {
        self.document.as_ref().map(|d| &d.document_id)
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_uploading(&self) -> bool {
        self.display == DisplayState::Uploading
    }

    pub fn is_asking(&self) -> bool {
        self.pending_ask.is_some()
    }

    /// Whether a new question may be typed right now.
    pub fn can_ask(&self) -> bool {
        self.document.is_some() && !self.is_asking()
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.document = None;
        self.display = DisplayState::Idle;
        self.cursor = PageCursor::default();
        self.transcript.clear();
        self.pending_ask = None;
    }

    /// Replaces the current file; the previous document and its
    /// transcript are dropped.
    pub fn select_file(&mut self, file: SelectedFile<H>) {
        self.reset();
        self.file = Some(file);
    }

    pub fn clear(&mut self) {
        self.reset();
        self.file = None;
    }

    pub fn begin_upload(&mut self) -> Option<UploadTicket<H>>
    where
        H: Clone,
    {
        if self.display != DisplayState::Idle {
            return None;
        }
        let file = self.file.clone()?;
        self.display = DisplayState::Uploading;
        Some(UploadTicket {
            generation: self.generation,
            file,
        })
    }

    pub fn finish_upload(
        &mut self,
        ticket: &UploadTicket<H>,
        result: Result<UploadResponse, DocumentError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            return Completion::Stale;
        }
        match result {
            Ok(response) => {
                self.cursor = PageCursor::new(response.page_count);
                self.document = Some(response);
                self.transcript.clear();
                self.pending_ask = None;
                self.display = DisplayState::Ready;
            }
            Err(err) => {
                self.display = DisplayState::Failed(err);
            }
        }
        Completion::Applied
    }

    /// The renderer knows the real page count once it has parsed the file.
    pub fn document_loaded(&mut self, generation: u64, page_count: u32) -> Completion {
        if generation != self.generation || self.document.is_none() {
            return Completion::Stale;
        }
        self.cursor.set_total(page_count);
        Completion::Applied
    }

    /// Leaves the document id active so questions keep working.
    pub fn render_failed(&mut self, generation: u64, err: RenderError) -> Completion {
        if generation != self.generation {
            return Completion::Stale;
        }
        self.display = DisplayState::Failed(err.into());
        Completion::Applied
    }

    pub fn go_to_next(&mut self) {
        self.cursor.go_to_next();
    }

    pub fn go_to_previous(&mut self) {
        self.cursor.go_to_previous();
    }

    pub fn begin_ask(&mut self, text: &str) -> Result<AskTicket, AskRejected> {
        let question = text.trim();
        if question.is_empty() {
            return Err(AskRejected::EmptyQuestion);
        }
        let document_id = self.document_id().cloned().ok_or(AskRejected::NoDocument)?;
        if self.is_asking() {
            return Err(AskRejected::AlreadyAsking);
        }

        let entry_id = self.transcript.push_question(question);
        self.pending_ask = Some(entry_id);
        Ok(AskTicket {
            generation: self.generation,
            entry_id,
            request: AskRequest::new(document_id, question),
        })
    }

    pub fn finish_ask(
        &mut self,
        ticket: &AskTicket,
        result: Result<AskResponse, AnswerError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            return Completion::Stale;
        }
        match result {
            Ok(response) => self.transcript.resolve(ticket.entry_id, response.answer),
            Err(_) => self.transcript.fail(ticket.entry_id),
        };
        if self.pending_ask == Some(ticket.entry_id) {
            self.pending_ask = None;
        }
        Completion::Applied
    }
}
