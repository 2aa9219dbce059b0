use std::rc::Rc;

use chrono::{DateTime, NaiveDateTime};
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use shared_types::UploadResponse;

use super::status_views::{EmptyState, ErrorPanel, Spinner, UploadingState};
use crate::app::BrowserSession;
use crate::layout::Layout;
use crate::pdf_bridge::{load_pdf, LoadedPdf};
use crate::session::{Completion, DisplayState};

const PAGE_CANVAS_ID: &str = "pdf-page-canvas";

/// Format an upload timestamp (RFC 3339 or naive ISO 8601) as
/// "YYYY-MM-DD HH:MM". Unparseable input is returned trimmed.
pub fn format_upload_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return parsed.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    trimmed.to_string()
}

pub fn document_summary(doc: &UploadResponse) -> String {
    let pages = if doc.page_count == 1 { "page" } else { "pages" };
    let mut summary = format!(
        "Document ID: {} · {} {} · {} chunks",
        doc.document_id, doc.page_count, pages, doc.chunks_count
    );
    let uploaded = doc
        .upload_date
        .as_deref()
        .map(format_upload_date)
        .unwrap_or_default();
    if !uploaded.is_empty() {
        summary.push_str(&format!(" · {uploaded}"));
    }
    summary
}

/// Document display: upload progress, errors, and the paginated page view.
#[component]
pub fn DocumentPanel(
    session: Signal<BrowserSession>,
    layout: Memo<Layout>,
    on_clear: Callback<()>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> Element {
    let (has_file, display) = {
        let s = session.read();
        (s.has_file(), s.display().clone())
    };

    if !has_file {
        return rsx! {
            EmptyState {
                icon: "📄".to_string(),
                message: "Upload a PDF to view it here".to_string(),
            }
        };
    }

    match display {
        DisplayState::Failed(err) => rsx! {
            ErrorPanel { error: err.to_string(), on_clear }
        },
        DisplayState::Idle | DisplayState::Uploading => rsx! {
            UploadingState {}
        },
        DisplayState::Ready => rsx! {
            PageViewer { session, layout, on_clear, on_previous, on_next }
        },
    }
}

#[component]
fn PageViewer(
    session: Signal<BrowserSession>,
    layout: Memo<Layout>,
    on_clear: Callback<()>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> Element {
    let mut loaded = use_signal(|| None::<Rc<LoadedPdf>>);
    let mut loaded_generation = use_signal(|| None::<u64>);
    let generation = use_memo(move || session.read().generation());
    let page = use_memo(move || session.read().cursor().current());

    // Parse the file once per generation.
    use_effect(move || {
        let generation = generation();
        if *loaded_generation.peek() == Some(generation) {
            return;
        }
        loaded_generation.set(Some(generation));
        loaded.set(None);

        let Some(file) = session.peek().file().map(|f| f.handle.clone()) else {
            return;
        };
        spawn(async move {
            let mut session = session;
            match load_pdf(&file).await {
                Ok(pdf) => {
                    let pages = pdf.page_count();
                    if session.write().document_loaded(generation, pages) == Completion::Applied {
                        info!("Loaded PDF with {} pages", pages);
                        loaded.set(Some(Rc::new(pdf)));
                    }
                }
                Err(e) => {
                    error!("Error loading PDF: {}", e.cause);
                    session.write().render_failed(generation, e);
                }
            }
        });
    });

    // Redraw on page, scale or document change.
    use_effect(move || {
        let Some(pdf) = loaded() else {
            return;
        };
        let page = page();
        let layout = layout();
        let generation = *generation.peek();
        spawn(async move {
            let mut session = session;
            if let Err(e) = pdf
                .render_page(page, layout.page_scale(), PAGE_CANVAS_ID, layout.page_width())
                .await
            {
                error!("Error rendering page {}: {}", page, e.cause);
                session.write().render_failed(generation, e);
            }
        });
    });

    let (name, summary, cursor) = {
        let s = session.read();
        (
            s.file().map(|f| f.name.clone()).unwrap_or_else(|| "Document Viewer".to_string()),
            s.document().map(document_summary),
            s.cursor(),
        )
    };
    let page_label = cursor.label();
    let is_loading = loaded.read().is_none();

    rsx! {
        div {
            class: "panel-header",
            div {
                style: "min-width: 0;",
                h3 { class: "doc-name", "{name}" }
                if let Some(summary) = summary {
                    p { class: "doc-meta", "{summary}" }
                }
            }
            button {
                class: "icon-btn",
                title: "Remove document",
                onclick: move |_| on_clear.call(()),
                "×"
            }
        }

        div {
            class: "page-area",
            if is_loading {
                div { class: "page-overlay", Spinner {} }
            }
            canvas { id: PAGE_CANVAS_ID, class: "page-canvas" }
        }

        div {
            class: "pager",
            button {
                disabled: !cursor.can_go_previous(),
                onclick: move |_| on_previous.call(()),
                "‹ Previous"
            }
            span { "{page_label}" }
            button {
                disabled: !cursor.can_go_next(),
                onclick: move |_| on_next.call(()),
                "Next ›"
            }
        }
    }
}
