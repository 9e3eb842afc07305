//! About section with the animated stat counters.

use dioxus::prelude::*;
use portfolio_core::{ContentMap, RevealKind};

use crate::app::stat_id;
use crate::components::Reveal;
use crate::context::use_reveals;

#[component]
pub fn About() -> Element {
    let reveals = use_reveals();
    let stats = ContentMap::new().stats();

    rsx! {
        section { id: "about", class: "about",
            h2 { class: "section-title", "About Me" }
            div { class: "about-content",
                Reveal { id: "about-text", kind: RevealKind::SlideLeft, class: "about-text".to_string(),
                    p {
                        "I'm a web developer from Mabini, Batangas who enjoys turning ideas "
                        "into clean, responsive pages."
                    }
                    p {
                        "Most of my work is plain HTML, CSS and JavaScript, with the "
                        "occasional canvas game on the side."
                    }
                    div { class: "stats",
                        for (i, stat) in stats.iter().enumerate() {
                            {
                                let id = stat_id(i);
                                let view = reveals.read().get(&id).cloned().unwrap_or_default();
                                let value = view
                                    .count
                                    .map(|c| c.to_string())
                                    .unwrap_or_else(|| stat.text.to_string());
                                rsx! {
                                    div { key: "{id}", class: "stat-item",
                                        span {
                                            id: "{id}",
                                            class: if view.active { "stat-number active" } else { "stat-number" },
                                            "data-reveal": "true",
                                            "{value}"
                                        }
                                        span { class: "stat-label", "{stat.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
                Reveal { id: "about-image", kind: RevealKind::SlideRight, class: "about-image".to_string(),
                    div { class: "about-card",
                        span { class: "about-card-icon", "\u{1F4BB}" }
                    }
                }
            }
        }
    }
}
