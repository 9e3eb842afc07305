//! Success toast shown after the contact form is sent.

use dioxus::prelude::*;
use portfolio_core::ToastState;

use crate::context::use_ui;

#[component]
pub fn Toast() -> Element {
    let ui = use_ui();
    let visible = ui.view.read().toast() == ToastState::Visible;

    rsx! {
        div {
            class: if visible { "toast show" } else { "toast" },
            role: "status",
            span { class: "toast-icon", "\u{2713}" }
            span { class: "toast-message", "Message sent successfully!" }
        }
    }
}
