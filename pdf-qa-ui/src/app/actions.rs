use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::{Signal, WritableExt};
use dioxus_logger::tracing::{error, info, warn};

use crate::api::QaBackend;
use crate::errors::AskRejected;
use crate::session::{Completion, Session};
use crate::upload::upload_document;

/// Somewhere a `Session` can be borrowed mutably between awaits.
pub trait SessionStore<H> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Session<H>) -> R) -> R;
}

impl<H: 'static> SessionStore<H> for Signal<Session<H>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Session<H>) -> R) -> R {
        let mut session = self.write();
        f(&mut session)
    }
}

impl<H> SessionStore<H> for Rc<RefCell<Session<H>>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Session<H>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Validate and upload the selected file. Returns `None` when there was
/// nothing to upload.
pub async fn upload_selected<B, S>(backend: &B, store: &mut S) -> Option<Completion>
where
    B: QaBackend,
    B::Handle: Clone,
    S: SessionStore<B::Handle>,
{
    let ticket = store.update(|session| session.begin_upload())?;
    let result = upload_document(backend, &ticket.file).await;
    let completion = store.update(|session| session.finish_upload(&ticket, result));
    if completion == Completion::Stale {
        info!("Discarded upload result for replaced file {}", ticket.file.name);
    }
    Some(completion)
}

/// Append the question, ask the backend, then settle that entry.
pub async fn submit_question<B, S>(
    backend: &B,
    store: &mut S,
    text: &str,
) -> Result<Completion, AskRejected>
where
    B: QaBackend,
    S: SessionStore<B::Handle>,
{
    let ticket = store.update(|session| session.begin_ask(text)).map_err(|e| {
        warn!("Question not submitted: {}", e);
        e
    })?;

    let result = backend.ask(&ticket.request).await;
    if let Err(e) = &result {
        error!("Error asking question: {}", e);
    }

    let completion = store.update(|session| session.finish_ask(&ticket, result));
    if completion == Completion::Stale {
        info!(
            "Discarded answer for document {} after it was replaced",
            ticket.request.document_id
        );
    }
    Ok(completion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use shared_types::{AskRequest, AskResponse, DocumentId, UploadResponse, MAX_UPLOAD_BYTES};
    use std::cell::Cell;

    use crate::errors::{AnswerError, DocumentError, UploadError, ValidationError};
    use crate::session::{DisplayState, SelectedFile};
    use crate::transcript::FALLBACK_ANSWER;

    #[derive(Default)]
    struct FakeBackend {
        upload_calls: Cell<usize>,
        upload_failure: Option<UploadError>,
        page_count: u32,
        asked: RefCell<Vec<AskRequest>>,
        answer_failure: Option<AnswerError>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl FakeBackend {
        fn with_pages(page_count: u32) -> Self {
            Self {
                page_count,
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl QaBackend for FakeBackend {
        type Handle = ();

        async fn upload(&self, file: &SelectedFile<()>) -> Result<UploadResponse, UploadError> {
            self.upload_calls.set(self.upload_calls.get() + 1);
            if let Some(err) = &self.upload_failure {
                return Err(err.clone());
            }
            Ok(UploadResponse {
                document_id: DocumentId::new("doc_1"),
                page_count: self.page_count,
                chunks_count: 3,
                filename: file.name.clone(),
                title: None,
                upload_date: None,
                id: None,
            })
        }

        async fn ask(&self, request: &AskRequest) -> Result<AskResponse, AnswerError> {
            self.asked.borrow_mut().push(request.clone());
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if let Some(err) = &self.answer_failure {
                return Err(err.clone());
            }
            Ok(AskResponse {
                answer: format!("Answer to: {}", request.question),
            })
        }
    }

    fn file(media_type: &str, size: u64) -> SelectedFile<()> {
        SelectedFile {
            name: "upload.pdf".to_string(),
            size,
            media_type: media_type.to_string(),
            handle: (),
        }
    }

    fn store_with(file: SelectedFile<()>) -> Rc<RefCell<Session<()>>> {
        let store = Rc::new(RefCell::new(Session::new()));
        store.borrow_mut().select_file(file);
        store
    }

    fn uploaded_store(backend: &FakeBackend) -> Rc<RefCell<Session<()>>> {
        let mut store = store_with(file("application/pdf", 1024));
        block_on(upload_selected(backend, &mut store));
        store
    }

    #[test]
    fn non_pdf_never_reaches_the_backend() {
        let backend = FakeBackend::with_pages(1);
        let mut store = store_with(file("text/plain", 100));

        let completion = block_on(upload_selected(&backend, &mut store));
        assert_eq!(completion, Some(Completion::Applied));
        assert_eq!(backend.upload_calls.get(), 0);

        let session = store.borrow();
        assert!(matches!(
            session.display(),
            DisplayState::Failed(DocumentError::Validation(ValidationError::NotPdf { .. }))
        ));
        assert!(session.transcript().is_empty());
        assert!(session.document_id().is_none());
    }

    #[test]
    fn oversized_pdf_never_reaches_the_backend() {
        let backend = FakeBackend::with_pages(1);
        let mut store = store_with(file("application/pdf", MAX_UPLOAD_BYTES + 1));

        block_on(upload_selected(&backend, &mut store));
        assert_eq!(backend.upload_calls.get(), 0);
        assert!(matches!(
            store.borrow().display(),
            DisplayState::Failed(DocumentError::Validation(ValidationError::TooLarge { .. }))
        ));
    }

    #[test]
    fn two_page_upload_scenario() {
        let backend = FakeBackend::with_pages(2);
        let store = uploaded_store(&backend);

        assert_eq!(backend.upload_calls.get(), 1);
        let session = store.borrow();
        assert_eq!(session.document_id(), Some(&DocumentId::new("doc_1")));
        assert!(session.transcript().is_empty());
        assert_eq!(session.cursor().current(), 1);
        assert!(!session.cursor().can_go_previous());
        assert!(session.cursor().can_go_next());
    }

    #[test]
    fn rejected_upload_surfaces_detail() {
        let backend = FakeBackend {
            upload_failure: Some(UploadError::Rejected {
                status: 400,
                detail: "Only PDF files are allowed".to_string(),
            }),
            ..FakeBackend::default()
        };
        let store = uploaded_store(&backend);

        let session = store.borrow();
        match session.display() {
            DisplayState::Failed(err) => assert_eq!(err.to_string(), "Only PDF files are allowed"),
            other => panic!("unexpected display state: {other:?}"),
        }
        assert!(session.document_id().is_none());
    }

    #[test]
    fn nothing_selected_means_no_upload() {
        let backend = FakeBackend::default();
        let mut store: Rc<RefCell<Session<()>>> = Rc::new(RefCell::new(Session::new()));
        assert_eq!(block_on(upload_selected(&backend, &mut store)), None);
        assert_eq!(backend.upload_calls.get(), 0);
    }

    #[test]
    fn answered_questions_fill_transcript_in_order() {
        let backend = FakeBackend::with_pages(2);
        let mut store = uploaded_store(&backend);

        for question in ["What is the main topic?", "Who is the author?", "When?"] {
            let completion = block_on(submit_question(&backend, &mut store, question));
            assert_eq!(completion, Ok(Completion::Applied));
        }

        let session = store.borrow();
        let entries = session.transcript().entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].question, "What is the main topic?");
        assert_eq!(entries[0].answer_text(), "Answer to: What is the main topic?");
        assert_eq!(entries[2].answer_text(), "Answer to: When?");

        let asked = backend.asked.borrow();
        assert!(asked.iter().all(|r| r.document_id.as_str() == "doc_1" && r.top_k == 2));
    }

    #[test]
    fn failing_answer_endpoint_yields_fallback() {
        let backend = FakeBackend {
            page_count: 1,
            answer_failure: Some(AnswerError::Transport("timed out".to_string())),
            ..FakeBackend::default()
        };
        let mut store = uploaded_store(&backend);

        block_on(submit_question(&backend, &mut store, "Anything?")).unwrap();
        let session = store.borrow();
        assert_eq!(
            session.transcript().last().map(|e| e.answer_text()),
            Some(FALLBACK_ANSWER)
        );
        assert!(!session.is_asking());
    }

    #[test]
    fn question_without_document_sends_nothing() {
        let backend = FakeBackend::default();
        let mut store = store_with(file("application/pdf", 10));

        let result = block_on(submit_question(&backend, &mut store, "Hello?"));
        assert_eq!(result, Err(AskRejected::NoDocument));
        assert!(backend.asked.borrow().is_empty());
        assert!(store.borrow().transcript().is_empty());
    }

    #[test]
    fn overlapping_question_is_rejected() {
        let (release, gate) = oneshot::channel();
        let backend = FakeBackend::with_pages(1);
        let store = uploaded_store(&backend);
        *backend.gate.borrow_mut() = Some(gate);

        let mut first_store = store.clone();
        let mut second_store = store.clone();
        let (first, second) = block_on(async {
            futures::join!(
                submit_question(&backend, &mut first_store, "first"),
                async {
                    let rejected = submit_question(&backend, &mut second_store, "second").await;
                    let _ = release.send(());
                    rejected
                }
            )
        });

        assert_eq!(first, Ok(Completion::Applied));
        assert_eq!(second, Err(AskRejected::AlreadyAsking));
        assert_eq!(backend.asked.borrow().len(), 1);
        assert_eq!(store.borrow().transcript().len(), 1);
    }

    #[test]
    fn answer_arriving_after_clear_is_dropped() {
        let (release, gate) = oneshot::channel();
        let backend = FakeBackend::with_pages(1);
        let store = uploaded_store(&backend);
        *backend.gate.borrow_mut() = Some(gate);

        let mut asking_store = store.clone();
        let mut clearing_store = store.clone();
        let (completion, ()) = block_on(async {
            futures::join!(
                submit_question(&backend, &mut asking_store, "slow question"),
                async {
                    clearing_store.update(|session| session.clear());
                    let _ = release.send(());
                }
            )
        });

        assert_eq!(completion, Ok(Completion::Stale));
        let session = store.borrow();
        assert!(session.transcript().is_empty());
        assert!(session.document_id().is_none());
        assert!(!session.is_asking());
    }
}
