//! Contact Section
//!
//! Validated contact form with a simulated send, plus the embedded map.
//! A valid submit disables the form for the send delay, clears it, and
//! raises the success toast through the coordinator.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::maps::{embed_url, refresh_embed_url, site_map_url};
use portfolio_core::{ContactForm, Field, PortfolioError, RevealKind, SubmitPhase, UiEvent};
use portfolio_ui::{Button, ButtonVariant, FormField};

use crate::bridge;
use crate::components::Reveal;
use crate::context::{use_site_config, use_ui};

/// Submit button label for a phase
pub fn submit_label(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Idle => "Send Message",
        SubmitPhase::Sending => "Sending...",
    }
}

#[component]
pub fn Contact() -> Element {
    let ui = use_ui();
    let config = use_site_config();
    let mut form = use_signal(ContactForm::new);
    let mut map_src = use_signal(|| embed_url(&config.map_location, config.map_zoom));
    let mut refreshed = use_signal(|| false);

    let send_delay = Duration::from_millis(config.send_delay_ms);
    let map_feedback = Duration::from_millis(config.map_feedback_ms);
    let maps_link = site_map_url(&config);

    let phase = form.read().phase();
    let sending = phase == SubmitPhase::Sending;

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let submitted = form.write().submit();
        match submitted {
            Ok(submission) => {
                tracing::info!(from = %submission.email, subject = %submission.subject, "Sending message");
                spawn(async move {
                    tokio::time::sleep(send_delay).await;
                    form.write().finish();
                    ui.dispatch(UiEvent::SubmissionSent { now_ms: ui.now_ms() });
                });
            }
            Err(PortfolioError::InvalidForm { fields }) => {
                tracing::debug!(?fields, "Contact form rejected");
            }
            Err(e) => tracing::debug!(error = %e, "Submit ignored"),
        }
    };

    let refresh_map = move |_| {
        let stamp = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let next = refresh_embed_url(&map_src.read(), stamp);
        map_src.set(next);
        refreshed.set(true);
        spawn(async move {
            tokio::time::sleep(map_feedback).await;
            refreshed.set(false);
        });
    };

    rsx! {
        section { id: "contact", class: "contact",
            Reveal { id: "contact-title", kind: RevealKind::FadeUp,
                h2 { class: "section-title", "Get In Touch" }
            }

            div { class: "contact-content",
                form { class: "contact-form", novalidate: true, onsubmit: on_submit,
                    for field in Field::ALL {
                        FormField {
                            key: "{field.label()}",
                            field,
                            value: form.read().value(field).to_string(),
                            result: form.read().result(field).cloned(),
                            multiline: field == Field::Message,
                            disabled: sending,
                            oninput: move |value: String| {
                                form.write().set(field, value);
                            },
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        disabled: sending,
                        "{submit_label(phase)}"
                    }
                }

                div { class: "contact-map",
                    iframe {
                        src: "{map_src}",
                        title: "Location map",
                        "loading": "lazy",
                    }
                    div { class: "map-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: refresh_map,
                            if refreshed() { "Refreshed" } else { "Refresh Map" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| bridge::open_external(&maps_link),
                            "Open in Maps"
                        }
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
    fn submit_label_follows_phase() {
        assert_eq!(submit_label(SubmitPhase::Idle), "Send Message");
        assert_eq!(submit_label(SubmitPhase::Sending), "Sending...");
    }
}
