//! Technology tag list shown on project cards and in the modal.

use dioxus::prelude::*;

#[component]
pub fn TagList(tags: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "project-tags",
            for tag in tags.iter() {
                span { key: "{tag}", "{tag}" }
            }
        }
    }
}
