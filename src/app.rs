use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::reveal::{parse_level, parse_target};
use portfolio_core::{
    ContentMap, PreferenceStore, Preferences, RevealAnimator, RevealEffect, RevealKind,
    ScheduleFrame, ScrollDecor, ScrollTracker, UiEvent, ViewCoordinator,
};

use crate::bridge::{self, IntersectionReport};
use crate::components::{
    About, BackToTop, Contact, Footer, Header, Hero, Loader, ProjectModal, Projects, Skills, Toast,
};
use crate::context::{get_data_dir, get_site_config, RevealViews, Ui};
use crate::theme::GLOBAL_STYLES;

/// Section headings and blocks that fade or slide in
pub const SECTION_REVEALS: &[(&str, RevealKind)] = &[
    ("about-text", RevealKind::SlideLeft),
    ("about-image", RevealKind::SlideRight),
    ("skills-title", RevealKind::FadeUp),
    ("projects-title", RevealKind::FadeUp),
    ("contact-title", RevealKind::FadeUp),
];

/// Element id of the n-th skill bar
pub fn skill_bar_id(index: usize) -> String {
    format!("skill-{index}")
}

/// Element id of the n-th stat
pub fn stat_id(index: usize) -> String {
    format!("stat-{index}")
}

/// Every reveal-armed element, matched once at startup.
///
/// A skill or stat whose attribute does not parse still fades in, just
/// without its width or counter animation.
pub fn reveal_plan(content: &ContentMap) -> Vec<(String, RevealKind)> {
    let mut plan: Vec<(String, RevealKind)> = SECTION_REVEALS
        .iter()
        .map(|(id, kind)| (id.to_string(), *kind))
        .collect();

    for (i, skill) in content.skills().iter().enumerate() {
        let kind = match parse_level(skill.level) {
            Some(level) => RevealKind::SkillBar { level },
            None => {
                tracing::warn!(skill = skill.name, "Unreadable skill level");
                RevealKind::FadeUp
            }
        };
        plan.push((skill_bar_id(i), kind));
    }
    for (i, stat) in content.stats().iter().enumerate() {
        let kind = match parse_target(stat.target, stat.text) {
            Some(target) => RevealKind::Stat { target },
            None => RevealKind::FadeUp,
        };
        plan.push((stat_id(i), kind));
    }
    plan
}

/// Root application component.
///
/// Provides global styles, page state context, and the scroll/reveal bridges.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_site_config);
    let content = ContentMap::new();

    let view = use_signal(|| ViewCoordinator::new(content, &config));
    let toast_task = use_signal(|| None);
    let ui = use_hook(|| Ui::new(view, toast_task));

    let (stored_prefs, store) = use_hook(open_preferences);
    let prefs: Signal<Preferences> = use_signal(|| stored_prefs);
    let pref_store: Signal<Option<PreferenceStore>> = use_signal(|| store);
    let reveals: Signal<RevealViews> = use_signal(RevealViews::new);
    let mut decor: Signal<ScrollDecor> = use_signal(ScrollDecor::default);
    let mut loaded = use_signal(|| false);
    let mut animator = use_signal(|| {
        let mut animator = RevealAnimator::new(&config);
        for (id, kind) in reveal_plan(&content) {
            animator.arm(id, kind);
        }
        animator
    });
    let mut tracker = use_signal(ScrollTracker::new);

    use_context_provider(|| ui);
    use_context_provider(|| prefs);
    use_context_provider(|| pref_store);
    use_context_provider(|| reveals);
    use_context_provider(|| decor);
    use_context_provider(|| config.clone());

    // Scroll samples, one per frame
    let frame = Duration::from_millis(config.frame_ms);
    let scroll_config = config.clone();
    use_future(move || {
        let config = scroll_config.clone();
        async move {
            let mut offsets = bridge::scroll_offsets();
            if let Ok(initial) = offsets.recv::<f64>().await {
                let sample = tracker.write().prime(initial);
                decor.set(ScrollDecor::at(sample.now, &config));
                ui.dispatch(UiEvent::ScrollSample {
                    now: sample.now,
                    prev: sample.prev,
                });
            }
            while let Ok(offset) = offsets.recv::<f64>().await {
                if tracker.write().record(offset) != ScheduleFrame::Yes {
                    continue;
                }
                let config = config.clone();
                spawn(async move {
                    tokio::time::sleep(frame).await;
                    let sample = tracker.write().on_frame();
                    if let Some(sample) = sample {
                        decor.set(ScrollDecor::at(sample.now, &config));
                        ui.dispatch(UiEvent::ScrollSample {
                            now: sample.now,
                            prev: sample.prev,
                        });
                    }
                });
            }
            tracing::debug!("Scroll channel closed");
        }
    });

    // Hide the loader, then start watching for reveals
    let loader_delay = Duration::from_millis(config.loader_delay_ms);
    let threshold = config.reveal_threshold;
    use_future(move || async move {
        tokio::time::sleep(loader_delay).await;
        loaded.set(true);

        let mut reports = bridge::intersections(threshold);
        while let Ok(report) = reports.recv::<IntersectionReport>().await {
            let effects = animator.write().on_intersect(&report.id, report.ratio);
            for effect in effects {
                apply_reveal(reveals, report.id.clone(), effect);
            }
        }
        tracing::debug!("Intersection channel closed");
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: prefs().theme.body_class(),
            Loader { loaded: loaded() }
            Header {}
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Contact {}
            }
            Footer {}
            ProjectModal {}
            Toast {}
            BackToTop {}
        }
    }
}

/// Open the preference store and read both flags. On failure the page
/// runs on in-memory defaults and nothing is persisted.
fn open_preferences() -> (Preferences, Option<PreferenceStore>) {
    let path = get_data_dir().join("preferences.redb");
    let store = match PreferenceStore::new(&path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(?path, error = %e, "Failed to open preference store");
            return (Preferences::default(), None);
        }
    };
    tracing::info!(?path, "Preference store opened");

    let prefs = store.load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to read preferences");
        Preferences::default()
    });
    (prefs, Some(store))
}

/// Apply one reveal effect to the element's rendered state.
fn apply_reveal(mut reveals: Signal<RevealViews>, id: String, effect: RevealEffect) {
    match effect {
        RevealEffect::Activate => {
            reveals.write().entry(id).or_default().active = true;
        }
        RevealEffect::SetWidth { percent, delay_ms } => {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                reveals.write().entry(id).or_default().width = Some(percent);
            });
        }
        RevealEffect::StartCounter(mut counter) => {
            let tick = Duration::from_millis(counter.tick_ms().max(1));
            spawn(async move {
                while let Some(value) = counter.tick() {
                    reveals.write().entry(id.clone()).or_default().count = Some(value);
                    if counter.is_done() {
                        break;
                    }
                    tokio::time::sleep(tick).await;
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_plan_covers_every_element() {
        let content = ContentMap::new();
        let plan = reveal_plan(&content);
        assert_eq!(
            plan.len(),
            SECTION_REVEALS.len() + content.skills().len() + content.stats().len()
        );
        assert!(plan
            .iter()
            .any(|(id, kind)| id == "skill-0" && *kind == RevealKind::SkillBar { level: 95 }));
        // The last stat has no target attribute and counts up to its text
        let last = stat_id(content.stats().len() - 1);
        assert!(plan
            .iter()
            .any(|(id, kind)| *id == last && *kind == RevealKind::Stat { target: 120 }));
    }

    #[test]
    fn element_ids_are_unique() {
        let plan = reveal_plan(&ContentMap::new());
        let mut ids: Vec<_> = plan.iter().map(|(id, _)| id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), plan.len());
    }
}
