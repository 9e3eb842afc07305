use dioxus::prelude::*;

/// Full-page loader, faded out once the page has settled.
#[component]
pub fn Loader(loaded: bool) -> Element {
    rsx! {
        div { class: if loaded { "loader hidden" } else { "loader" },
            div { class: "loader-spinner" }
        }
    }
}
