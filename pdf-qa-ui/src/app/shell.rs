use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use shared_types::PDF_MEDIA_TYPE;

use crate::api::HttpBackend;
use crate::app::actions;
use crate::app::components::{DocumentPanel, InteractionPanel, ViewTabs};
use crate::app::effects::use_viewport_layout;
use crate::app::styles::APP_STYLES;
use crate::app::BrowserSession;
use crate::interop::{open_file_picker, take_selected_file};
use crate::layout::{Layout, ViewMode, ViewModeController};

const FILE_INPUT_ID: &str = "pdf-file-input";

fn panes_class(layout: &Layout) -> &'static str {
    if layout.is_narrow() {
        "panes panes-column"
    } else {
        "panes panes-row"
    }
}

fn pane_style(layout: &Layout, tabs_visible: bool) -> String {
    let height = if tabs_visible {
        layout.pane_height().unwrap_or_else(|| layout.content_height())
    } else {
        layout.content_height()
    };
    format!("height: {height}px;")
}

fn toggle_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Document => "💬",
        _ => "📄",
    }
}

#[component]
pub fn AppShell() -> Element {
    let session = use_signal(BrowserSession::new);
    let backend = use_hook(|| Rc::new(HttpBackend::default()));
    let layout = use_viewport_layout();
    let mut view_mode = use_signal(ViewModeController::new);
    let has_file = use_memo(move || session.read().has_file());

    use_effect(move || {
        let narrow = layout().is_narrow();
        let has_file = has_file();
        view_mode.write().observe(narrow, has_file);
    });

    let on_file_change = {
        let backend = backend.clone();
        use_callback(move |_: FormEvent| {
            let Some(file) = take_selected_file(FILE_INPUT_ID) else {
                warn!("File input changed without a file");
                return;
            };
            info!("Selected {} ({} bytes)", file.name, file.size);

            let mut session = session;
            session.write().select_file(file);

            let backend = backend.clone();
            spawn(async move {
                actions::upload_selected(&*backend, &mut session).await;
            });
        })
    };

    let on_submit = {
        let backend = backend.clone();
        use_callback(move |text: String| {
            let backend = backend.clone();
            let mut session = session;
            spawn(async move {
                let _ = actions::submit_question(&*backend, &mut session, &text).await;
            });
        })
    };

    let on_clear = use_callback(move |_: ()| {
        let mut session = session;
        session.write().clear();
        info!("Cleared document");
    });

    let on_previous = use_callback(move |_: ()| {
        let mut session = session;
        session.write().go_to_previous();
    });

    let on_next = use_callback(move |_: ()| {
        let mut session = session;
        session.write().go_to_next();
    });

    let on_select_view = use_callback(move |mode: ViewMode| {
        view_mode.write().select(mode);
    });

    let current_layout = layout();
    let mode = view_mode.read().mode();
    let (uploading, transcript_len) = {
        let s = session.read();
        (s.is_uploading(), s.transcript().len())
    };
    let tabs_visible = current_layout.is_narrow() && has_file();
    let pane_css = pane_style(&current_layout, tabs_visible);

    rsx! {
        style { {APP_STYLES} }

        div {
            class: "app-shell",

            header {
                class: "app-header",
                h1 { class: "app-title", "PDF Q&A" }
                div {
                    style: "display: flex; align-items: center; gap: 0.5rem;",
                    if tabs_visible {
                        button {
                            class: "icon-btn",
                            title: "Switch view",
                            onclick: move |_| {
                                view_mode.write().toggle();
                            },
                            "{toggle_label(mode)}"
                        }
                    }
                    input {
                        id: FILE_INPUT_ID,
                        r#type: "file",
                        accept: ".pdf,{PDF_MEDIA_TYPE}",
                        style: "display: none;",
                        onchange: on_file_change,
                    }
                    button {
                        class: "primary-btn",
                        disabled: uploading,
                        onclick: move |_| open_file_picker(FILE_INPUT_ID),
                        if uploading { "Uploading..." } else { "Upload PDF" }
                    }
                }
            }

            main {
                class: "app-main",
                if tabs_visible {
                    ViewTabs { mode, transcript_len, on_select: on_select_view }
                }
                div {
                    class: panes_class(&current_layout),
                    if mode.shows_document() {
                        div {
                            class: "pane",
                            style: "{pane_css}",
                            div {
                                class: "card",
                                div {
                                    class: "card-body",
                                    DocumentPanel { session, layout, on_clear, on_previous, on_next }
                                }
                            }
                        }
                    }
                    if mode.shows_interaction() {
                        div {
                            class: "pane",
                            style: "{pane_css}",
                            div {
                                class: "card",
                                h2 { class: "card-title", "Ask Questions" }
                                div {
                                    class: "card-body",
                                    InteractionPanel { session, layout, on_submit }
                                }
                            }
                        }
                    }
                }
            }

            footer {
                class: "app-footer",
                "Upload a PDF, then ask questions about its contents."
            }
        }
    }
}
