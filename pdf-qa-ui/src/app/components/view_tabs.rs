use dioxus::prelude::*;

use crate::layout::ViewMode;

fn tab_class(mode: ViewMode, tab: ViewMode) -> &'static str {
    if mode == tab {
        "view-tab active"
    } else {
        "view-tab"
    }
}

/// Pane switcher shown on narrow viewports once a file is selected.
#[component]
pub fn ViewTabs(mode: ViewMode, transcript_len: usize, on_select: Callback<ViewMode>) -> Element {
    rsx! {
        div {
            class: "view-tabs",
            button {
                class: tab_class(mode, ViewMode::Document),
                onclick: move |_| on_select.call(ViewMode::Document),
                "PDF View"
            }
            button {
                class: tab_class(mode, ViewMode::Interaction),
                onclick: move |_| on_select.call(ViewMode::Interaction),
                "Chat"
                if transcript_len > 0 {
                    span { class: "tab-badge", "{transcript_len}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_current_tab_is_active() {
        assert_eq!(
            tab_class(ViewMode::Interaction, ViewMode::Interaction),
            "view-tab active"
        );
        assert_eq!(tab_class(ViewMode::Interaction, ViewMode::Document), "view-tab");
    }
}
