//! Skills section with delayed progress bars.

use dioxus::prelude::*;
use portfolio_core::reveal::parse_level;
use portfolio_core::{ContentMap, RevealKind};

use crate::app::skill_bar_id;
use crate::components::{reveal_class, Reveal};
use crate::context::use_reveals;

#[component]
pub fn Skills() -> Element {
    let reveals = use_reveals();
    let skills = ContentMap::new().skills();

    rsx! {
        section { id: "skills", class: "skills",
            Reveal { id: "skills-title", kind: RevealKind::FadeUp,
                h2 { class: "section-title", "Skills" }
            }
            div { class: "skills-grid",
                for (i, skill) in skills.iter().enumerate() {
                    {
                        let id = skill_bar_id(i);
                        let view = reveals.read().get(&id).cloned().unwrap_or_default();
                        let width = view.width.unwrap_or(0);
                        let kind = parse_level(skill.level)
                            .map_or(RevealKind::FadeUp, |level| RevealKind::SkillBar { level });
                        let class = reveal_class(kind, None, view.active);
                        let label = view
                            .count
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| skill.level.to_string());
                        rsx! {
                            div { key: "{id}", class: "skill-item",
                                div { class: "skill-info",
                                    span { class: "skill-name", "{skill.name}" }
                                    span { class: "skill-level", "{label}%" }
                                }
                                div { class: "skill-bar",
                                    div {
                                        id: "{id}",
                                        class: "{class}",
                                        "data-reveal": "true",
                                        "data-level": "{skill.level}",
                                        style: "width: {width}%",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
