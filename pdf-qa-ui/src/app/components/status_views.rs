use dioxus::prelude::*;

#[component]
pub fn EmptyState(icon: String, message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div { class: "empty-icon", "{icon}" }
            p { "{message}" }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner" }
    }
}

#[component]
pub fn UploadingState() -> Element {
    rsx! {
        div {
            class: "panel-header uploading",
            h3 { class: "doc-name", "Uploading Document" }
        }
        div {
            class: "empty-state",
            Spinner {}
            p { style: "color: var(--text-secondary);", "Uploading and processing your document..." }
            p { style: "font-size: 0.875rem;", "This may take a moment depending on file size" }
        }
    }
}

#[component]
pub fn ErrorPanel(error: String, on_clear: Callback<()>) -> Element {
    rsx! {
        div {
            class: "panel-header error",
            h3 { class: "doc-name", "⚠ Error" }
            button {
                class: "icon-btn",
                title: "Close",
                onclick: move |_| on_clear.call(()),
                "×"
            }
        }
        div {
            class: "empty-state",
            p { style: "color: var(--danger-text);", "{error}" }
            button {
                class: "primary-btn",
                onclick: move |_| on_clear.call(()),
                "Try another file"
            }
        }
    }
}
