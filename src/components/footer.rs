//! Footer with a persisted collapse toggle.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::context::{persist, use_pref_store, use_prefs};

#[component]
pub fn Footer() -> Element {
    let mut prefs = use_prefs();
    let store = use_pref_store();
    let collapsed = prefs().footer_collapsed;
    let year = chrono::Local::now().year();

    let toggle = move |_| {
        let collapsed = !prefs().footer_collapsed;
        prefs.write().footer_collapsed = collapsed;
        persist(store, |s| s.save_footer_collapsed(collapsed));
        tracing::info!(collapsed, "Footer toggled");
    };

    rsx! {
        footer { class: if collapsed { "footer minimized" } else { "footer" },
            button {
                class: "footer-toggle",
                r#type: "button",
                "aria-label": if collapsed { "Expand footer" } else { "Collapse footer" },
                onclick: toggle,
                if collapsed { "\u{25B2}" } else { "\u{25BC}" }
            }
            div { class: "footer-content",
                p { class: "footer-tagline", "Designed and built with care." }
                div { class: "social-links",
                    a { href: "#contact", "Contact" }
                    a { href: "#projects", "Projects" }
                }
            }
            p { class: "copyright", "\u{00A9} {year} Portfolio. All rights reserved." }
        }
    }
}
