use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::status_views::EmptyState;
use crate::app::BrowserSession;
use crate::interop::scroll_into_view;
use crate::layout::{Layout, ViewportTier};

const TRANSCRIPT_END_ID: &str = "transcript-end";
const COLLAPSED_SUGGESTIONS: usize = 3;

pub const SUGGESTED_QUESTIONS: [&str; 10] = [
    "What is the main topic of this document?",
    "Can you summarize this document?",
    "What are the key points in this document?",
    "Who is the author of this document?",
    "When was this document created?",
    "What are the conclusions in this document?",
    "What evidence is presented in this document?",
    "Are there any tables or figures in this document?",
    "What methodology was used in this document?",
    "What are the limitations mentioned in this document?",
];

pub fn visible_suggestions(show_all: bool) -> &'static [&'static str] {
    if show_all {
        &SUGGESTED_QUESTIONS
    } else {
        &SUGGESTED_QUESTIONS[..COLLAPSED_SUGGESTIONS]
    }
}

pub fn can_send(text: &str, has_document: bool, asking: bool) -> bool {
    has_document && !asking && !text.trim().is_empty()
}

fn input_placeholder(has_document: bool) -> &'static str {
    if has_document {
        "Ask a question about the PDF..."
    } else {
        "Upload a PDF first"
    }
}

fn transcript_style(tier: ViewportTier) -> &'static str {
    match tier {
        ViewportTier::Small => "max-height: calc(100vh - 240px);",
        ViewportTier::Normal => "max-height: calc(100vh - 280px);",
    }
}

/// Question input, suggested prompts and the Q&A transcript.
#[component]
pub fn InteractionPanel(
    session: Signal<BrowserSession>,
    layout: Memo<Layout>,
    on_submit: Callback<String>,
) -> Element {
    let mut input_text = use_signal(String::new);
    let mut show_all = use_signal(|| false);

    // (entries, entries still pending) changes whenever a question is
    // appended or settled.
    let transcript_shape = use_memo(move || {
        let s = session.read();
        let entries = s.transcript().entries();
        (
            entries.len(),
            entries.iter().filter(|e| e.status.is_pending()).count(),
        )
    });

    use_effect(move || {
        let (len, _) = transcript_shape();
        if len == 0 {
            return;
        }
        spawn(async move {
            // Let the new entry mount before scrolling to it.
            TimeoutFuture::new(16).await;
            scroll_into_view(TRANSCRIPT_END_ID);
        });
    });

    let (has_document, asking, entries) = {
        let s = session.read();
        (
            s.document_id().is_some(),
            s.is_asking(),
            s.transcript().entries().to_vec(),
        )
    };

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let text = input_text.read().clone();
        if !can_send(&text, has_document, asking) {
            return;
        }
        on_submit.call(text);
        input_text.set(String::new());
    };

    let oninput = move |e: FormEvent| {
        input_text.set(e.value());
    };

    let send_disabled = !can_send(&input_text.read(), has_document, asking);
    let list_style = transcript_style(layout().tier);

    rsx! {
        div {
            class: "transcript",
            style: list_style,
            if entries.is_empty() {
                if has_document {
                    div {
                        class: "suggestions",
                        h3 { "Suggested questions:" }
                        for question in visible_suggestions(show_all()) {
                            button {
                                key: "{question}",
                                class: "suggestion",
                                onclick: move |_| input_text.set(question.to_string()),
                                "{question}"
                            }
                        }
                        if !show_all() {
                            button {
                                class: "link-btn",
                                onclick: move |_| show_all.set(true),
                                "Show more suggestions"
                            }
                        }
                    }
                } else {
                    EmptyState {
                        icon: "💬".to_string(),
                        message: "Upload a PDF and start asking questions!".to_string(),
                    }
                }
            } else {
                for entry in entries {
                    div {
                        key: "{entry.id.get()}",
                        class: "qa-entry",
                        div { class: "bubble question", "{entry.question}" }
                        div {
                            class: if entry.status.is_pending() { "bubble answer pending" } else { "bubble answer" },
                            "{entry.answer_text()}"
                        }
                    }
                }
            }
            div { id: TRANSCRIPT_END_ID }
        }

        form {
            class: "ask-form",
            onsubmit,
            input {
                class: "ask-input",
                r#type: "text",
                placeholder: input_placeholder(has_document),
                value: "{input_text}",
                disabled: !has_document || asking,
                oninput,
            }
            button {
                class: "primary-btn",
                r#type: "submit",
                disabled: send_disabled,
                if asking { "Asking..." } else { "Ask" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_suggestions_until_expanded() {
        assert_eq!(
            visible_suggestions(false),
            &[
                "What is the main topic of this document?",
                "Can you summarize this document?",
                "What are the key points in this document?",
            ]
        );
        assert_eq!(visible_suggestions(true).len(), 10);
    }

    #[test]
    fn send_needs_document_idle_slot_and_text() {
        assert!(can_send("What is it?", true, false));
        assert!(!can_send("   ", true, false));
        assert!(!can_send("What is it?", false, false));
        assert!(!can_send("What is it?", true, true));
    }

    #[test]
    fn placeholder_follows_document_presence() {
        assert_eq!(input_placeholder(true), "Ask a question about the PDF...");
        assert_eq!(input_placeholder(false), "Upload a PDF first");
    }

    #[test]
    fn transcript_height_depends_on_tier() {
        assert_eq!(
            transcript_style(ViewportTier::Small),
            "max-height: calc(100vh - 240px);"
        );
        assert_eq!(
            transcript_style(ViewportTier::Normal),
            "max-height: calc(100vh - 280px);"
        );
    }
}
