//! Projects Section
//!
//! Filterable project cards and the details modal. Cards carry their id as
//! the raw `data-project` string; the coordinator parses it and ignores ids
//! it does not know.

use dioxus::prelude::*;
use portfolio_core::{ContentMap, ProjectCategory, ProjectFilter, ProjectRecord, RevealKind, UiEvent};
use portfolio_ui::{Button, ButtonVariant, CloseButton, TagList};

use crate::bridge;
use crate::components::Reveal;
use crate::context::use_ui;

/// Placeholder glyph per category, shown when a card image is missing
pub fn category_glyph(category: ProjectCategory) -> &'static str {
    match category {
        ProjectCategory::Web => "\u{1F310}",
        ProjectCategory::Game => "\u{1F3AE}",
    }
}

#[component]
pub fn Projects() -> Element {
    let content = ContentMap::new();
    let mut filter = use_signal(|| ProjectFilter::All);

    rsx! {
        section { id: "projects", class: "projects",
            Reveal { id: "projects-title", kind: RevealKind::FadeUp,
                h2 { class: "section-title", "Projects" }
            }

            div { class: "project-filters",
                for option in content.filters() {
                    Button {
                        key: "{option.label()}",
                        variant: ButtonVariant::Filter,
                        active: filter() == option,
                        onclick: move |_| {
                            tracing::debug!(filter = option.label(), "Project filter");
                            filter.set(option);
                        },
                        "{option.label()}"
                    }
                }
            }

            div { class: "projects-grid",
                for record in content.filtered(filter()) {
                    ProjectCard { key: "{record.id}", record }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(record: &'static ProjectRecord) -> Element {
    let ui = use_ui();
    let mut image_failed = use_signal(|| false);
    let attr = record.id.to_string();

    rsx! {
        div { class: "project-card", "data-category": record.category.as_str(),
            div { class: "project-image",
                if image_failed() {
                    div { class: "image-fallback", "{category_glyph(record.category)}" }
                } else {
                    img {
                        src: "assets/project-{record.id}.jpg",
                        alt: "{record.title}",
                        onerror: move |_| image_failed.set(true),
                    }
                }
            }
            div { class: "project-info",
                h3 { "{record.title}" }
                p { "{record.description}" }
                TagList { tags: record.technologies }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "view-project".to_string(),
                    onclick: move |_| ui.dispatch(UiEvent::ViewProject(attr.clone())),
                    "View Project"
                }
            }
        }
    }
}

/// Project details dialog.
///
/// Clicking the backdrop closes it; clicks inside the dialog do not bubble
/// out to the backdrop.
#[component]
pub fn ProjectModal() -> Element {
    let ui = use_ui();
    let record = ui.view.read().modal_record();

    let Some(record) = record else {
        return rsx! {
            div { class: "modal" }
        };
    };

    rsx! {
        div {
            class: "modal show",
            onclick: move |_| ui.dispatch(UiEvent::ModalBackdropClicked),
            div {
                class: "modal-content",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| ui.dispatch(UiEvent::ModalCloseClicked) }

                h2 { class: "modal-title", "{record.title}" }
                p { class: "modal-description", "{record.description}" }

                h3 { "Technologies" }
                TagList { tags: record.technologies }

                h3 { "Features" }
                ul { class: "modal-features",
                    for feature in record.features.iter() {
                        li { key: "{feature}", "{feature}" }
                    }
                }

                div { class: "modal-links",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| bridge::open_external(record.live_url),
                        "View Live"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_glyph() {
        assert_ne!(category_glyph(ProjectCategory::Web), category_glyph(ProjectCategory::Game));
    }
}
