use dioxus::prelude::*;
use portfolio_ui::IconButton;

use crate::bridge;
use crate::context::use_decor;

/// Floating button that returns to the top, shown past the configured offset.
#[component]
pub fn BackToTop() -> Element {
    let decor = use_decor();
    let class = if decor().back_to_top_visible {
        "back-to-top visible"
    } else {
        "back-to-top"
    };

    rsx! {
        IconButton {
            onclick: move |_| bridge::scroll_to_top(),
            aria_label: "Back to top".to_string(),
            class: class.to_string(),
            "\u{2191}"
        }
    }
}
