//! Reveal-on-scroll wrapper.

use dioxus::prelude::*;
use portfolio_core::RevealKind;

use crate::context::use_reveals;

/// Class for a reveal-armed element: the kind's class, any extra classes,
/// then `active` once revealed.
pub fn reveal_class(kind: RevealKind, extra: Option<&str>, active: bool) -> String {
    let mut class = kind.class().to_string();
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    if active {
        class.push_str(" active");
    }
    class
}

/// Block that animates in the first time it scrolls into view.
///
/// `id` must match an id armed on the animator.
#[component]
pub fn Reveal(
    id: String,
    kind: RevealKind,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let reveals = use_reveals();
    let active = reveals.read().get(&id).is_some_and(|v| v.active);
    let class = reveal_class(kind, class.as_deref(), active);

    rsx! {
        div { id: "{id}", class: "{class}", "data-reveal": "true",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_class_orders_parts() {
        assert_eq!(reveal_class(RevealKind::FadeUp, None, false), "fade-up");
        assert_eq!(
            reveal_class(RevealKind::SlideLeft, Some("about-text"), true),
            "slide-left about-text active"
        );
    }

    #[test]
    fn skill_bar_class_turns_active() {
        let kind = RevealKind::SkillBar { level: 95 };
        assert_eq!(reveal_class(kind, None, false), "skill-progress");
        assert_eq!(reveal_class(kind, None, true), "skill-progress active");
    }
}
