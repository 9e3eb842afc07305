//! Page context providers.
//!
//! The view coordinator, preferences and reveal state are provided once by
//! `App` and read by the sections via hooks:
//!
//! ```ignore
//! let ui = use_ui();
//! ui.dispatch(UiEvent::HamburgerClicked);
//!
//! let prefs = use_prefs();
//! let dark = prefs().theme == Theme::Dark;
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use dioxus::prelude::*;
use portfolio_core::{
    PortfolioResult, PreferenceStore, Preferences, ScrollDecor, SiteConfig, UiEffect, UiEvent,
    ViewCoordinator,
};

use crate::bridge;

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the site configuration.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Rendered state of one reveal-armed element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealView {
    pub active: bool,
    /// Bar width once the skill-bar delay has elapsed
    pub width: Option<u8>,
    /// Latest counter value
    pub count: Option<u32>,
}

pub type RevealViews = HashMap<String, RevealView>;

/// Handle to the view coordinator plus the task that will hide the toast.
///
/// All UI events go through [`Ui::dispatch`], which applies the coordinator's
/// effects to the webview.
#[derive(Clone, Copy)]
pub struct Ui {
    pub view: Signal<ViewCoordinator>,
    toast_task: Signal<Option<Task>>,
    started: Instant,
}

impl Ui {
    pub fn new(view: Signal<ViewCoordinator>, toast_task: Signal<Option<Task>>) -> Self {
        Self {
            view,
            toast_task,
            started: Instant::now(),
        }
    }

    /// Milliseconds since the page started
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn dispatch(mut self, event: UiEvent) {
        let effects = self.view.write().handle(event);
        for effect in effects {
            match effect {
                UiEffect::ScrollLock(locked) => bridge::set_scroll_lock(locked),
                UiEffect::ShowToast {
                    ticket,
                    duration_ms,
                } => {
                    if let Some(previous) = self.toast_task.write().take() {
                        previous.cancel();
                    }
                    let task = spawn(async move {
                        tokio::time::sleep(Duration::from_millis(duration_ms)).await;
                        self.dispatch(UiEvent::ToastTimerFired(ticket));
                    });
                    self.toast_task.set(Some(task));
                }
                UiEffect::HideToast => {
                    self.toast_task.set(None);
                }
                UiEffect::ShowProject(record) => {
                    tracing::info!(project = %record.id, title = record.title, "Showing project");
                }
                UiEffect::Header(_) | UiEffect::Nav(_) | UiEffect::HideProject => {}
            }
        }
    }
}

/// Hook to access the view coordinator handle.
pub fn use_ui() -> Ui {
    use_context::<Ui>()
}

/// Hook to access the preference flags.
pub fn use_prefs() -> Signal<Preferences> {
    use_context::<Signal<Preferences>>()
}

/// Hook to access the preference store (`None` if it failed to open).
pub fn use_pref_store() -> Signal<Option<PreferenceStore>> {
    use_context::<Signal<Option<PreferenceStore>>>()
}

/// Hook to access per-element reveal state.
pub fn use_reveals() -> Signal<RevealViews> {
    use_context::<Signal<RevealViews>>()
}

/// Hook to access offset-derived decorations (header shadow, back-to-top).
pub fn use_decor() -> Signal<ScrollDecor> {
    use_context::<Signal<ScrollDecor>>()
}

/// Hook to access the site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Write a preference, logging failures. The in-memory flag is already
/// updated, so a failed write only loses persistence.
pub fn persist(
    store: Signal<Option<PreferenceStore>>,
    write: impl FnOnce(&PreferenceStore) -> PortfolioResult<()>,
) {
    let guard = store.read();
    let Some(store) = guard.as_ref() else {
        tracing::debug!("No preference store, skipping save");
        return;
    };
    if let Err(e) = write(store) {
        tracing::error!(error = %e, "Failed to save preference");
    }
}
