//! Hero section with the floating particle background.

use dioxus::prelude::*;
use portfolio_core::particles::{self, Particle};
use portfolio_core::UiEvent;
use portfolio_ui::{Button, ButtonVariant};

use crate::bridge;
use crate::context::{use_site_config, use_ui};

/// Shown in place of the profile photo when it fails to load
pub const PROFILE_FALLBACK: &str = "\u{1F468}\u{200D}\u{1F4BB}";

#[component]
pub fn Hero() -> Element {
    let ui = use_ui();
    let config = use_site_config();
    let particles: Vec<Particle> =
        use_hook(|| particles::generate(&mut rand::rng(), config.particle_count));
    let mut image_failed = use_signal(|| false);

    let jump = move |id: &'static str| {
        bridge::scroll_to_section(id);
        ui.dispatch(UiEvent::AnchorFollowed);
    };

    rsx! {
        section { id: "home", class: "hero",
            div { class: "particles",
                for (i, particle) in particles.iter().enumerate() {
                    div { key: "{i}", class: "particle", style: "{particle.style()}" }
                }
            }

            div { class: "hero-content",
                div { class: "hero-text",
                    h1 { class: "hero-title", "Hi, I'm a ",
                        span { class: "highlight", "Web Developer" }
                    }
                    p { class: "hero-subtitle",
                        "I build responsive websites and small browser games."
                    }
                    div { class: "hero-buttons",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| jump("projects"),
                            "View My Work"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| jump("contact"),
                            "Get In Touch"
                        }
                    }
                }

                div { class: "hero-image",
                    if image_failed() {
                        div { class: "image-fallback", "{PROFILE_FALLBACK}" }
                    } else {
                        img {
                            src: "assets/profile.jpg",
                            alt: "Profile photo",
                            onerror: move |_| {
                                tracing::debug!("Profile image failed to load, using fallback");
                                image_failed.set(true);
                            },
                        }
                    }
                }
            }
        }
    }
}
