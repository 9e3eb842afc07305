//! Site Header
//!
//! Fixed header with the logo, section links and theme toggle. On narrow
//! windows the links collapse behind a hamburger that opens a full-screen
//! menu; the menu holds the scroll lock while open.

use dioxus::prelude::*;
use portfolio_core::{NavState, Theme, UiEvent};
use portfolio_ui::IconButton;

use crate::bridge;
use crate::context::{persist, use_decor, use_pref_store, use_prefs, use_ui};

/// In-page sections reachable from the header, as (element id, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Header class: the state machine's class, plus `scrolled` for the shadow
pub fn header_class(state_class: &str, shadow: bool) -> String {
    if shadow {
        format!("{state_class} scrolled")
    } else {
        state_class.to_string()
    }
}

/// Class of the dimming overlay behind the open mobile menu; `None` while
/// the menu is closed, so no overlay element exists.
pub fn nav_overlay_class(nav: NavState) -> Option<&'static str> {
    nav.is_open().then_some("nav-overlay")
}

#[component]
pub fn Header() -> Element {
    let ui = use_ui();
    let decor = use_decor();
    let mut prefs = use_prefs();
    let store = use_pref_store();

    let header = ui.view.read().header();
    let nav = ui.view.read().nav();
    let nav_open = nav == NavState::Open;
    let class = header_class(header.class(), decor().header_shadow);

    let follow = move |id: &'static str| {
        bridge::scroll_to_section(id);
        ui.dispatch(UiEvent::NavLinkClicked);
        ui.dispatch(UiEvent::AnchorFollowed);
    };

    let toggle_theme = move |_| {
        let theme = prefs().theme.toggled();
        prefs.write().theme = theme;
        persist(store, |s| s.save_theme(theme));
        tracing::info!(%theme, "Theme changed");
    };

    let theme_icon = match prefs().theme {
        Theme::Light => "\u{263E}",
        Theme::Dark => "\u{2600}",
    };

    rsx! {
        if let Some(overlay) = nav_overlay_class(nav) {
            div {
                class: overlay,
                onclick: move |_| ui.dispatch(UiEvent::NavLinkClicked),
            }
        }
        header { class: "{class}",
            div { class: "header-inner",
                a {
                    class: "logo",
                    href: "#home",
                    onclick: move |e| {
                        e.prevent_default();
                        follow("home");
                    },
                    "Portfolio"
                }

                nav { class: if nav_open { "nav-menu active" } else { "nav-menu" },
                    for (id, label) in NAV_LINKS.iter().copied() {
                        a {
                            key: "{id}",
                            class: "nav-link",
                            href: "#{id}",
                            onclick: move |e| {
                                e.prevent_default();
                                follow(id);
                            },
                            "{label}"
                        }
                    }
                }

                div { class: "header-actions",
                    IconButton {
                        onclick: toggle_theme,
                        aria_label: "Toggle theme".to_string(),
                        class: "theme-toggle".to_string(),
                        "{theme_icon}"
                    }
                    button {
                        class: if nav_open { "hamburger active" } else { "hamburger" },
                        r#type: "button",
                        "aria-label": "Menu",
                        "aria-expanded": "{nav_open}",
                        onclick: move |_| ui.dispatch(UiEvent::HamburgerClicked),
                        span { class: "bar" }
                        span { class: "bar" }
                        span { class: "bar" }
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
    fn header_class_adds_shadow() {
        assert_eq!(header_class("header minimized", true), "header minimized scrolled");
        assert_eq!(header_class("header", false), "header");
    }

    #[test]
    fn overlay_exists_only_while_nav_open() {
        assert_eq!(nav_overlay_class(NavState::Open), Some("nav-overlay"));
        assert_eq!(nav_overlay_class(NavState::Closed), None);
    }

    #[test]
    fn nav_links_start_at_home() {
        assert_eq!(NAV_LINKS[0].0, "home");
        assert_eq!(NAV_LINKS.len(), 5);
    }
}
