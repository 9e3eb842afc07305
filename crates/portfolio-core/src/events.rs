//! UI event adapter.
//!
//! The webview is an untyped event source. Each listener normalises its event
//! into a [`UiEvent`]; [`ViewCoordinator::handle`] applies it and returns the
//! effects the view must apply. Errors never escape: an unknown project is
//! logged and produces no effects.

use crate::coordinator::{ToastTicket, ViewCoordinator};
use crate::types::{HeaderState, NavState, ProjectId, ProjectRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Coalesced scroll sample from the scroll tracker
    ScrollSample { now: f64, prev: f64 },
    HamburgerClicked,
    /// A link inside the mobile menu was followed
    NavLinkClicked,
    /// An in-page anchor was followed
    AnchorFollowed,
    /// "View project" clicked; carries the raw `data-project` attribute
    ViewProject(String),
    ModalCloseClicked,
    /// Click landed on the modal backdrop, outside the dialog
    ModalBackdropClicked,
    /// The simulated send finished
    SubmissionSent { now_ms: u64 },
    /// A deferred toast hide fired
    ToastTimerFired(ToastTicket),
}

/// Mutation the view must apply
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    Header(HeaderState),
    Nav(NavState),
    ShowProject(&'static ProjectRecord),
    HideProject,
    /// Background scrolling suppressed (`true`) or restored (`false`).
    /// Emitted only when the derived lock actually flips.
    ScrollLock(bool),
    /// Arm a deferred hide for `ticket` after `duration_ms`, cancelling any
    /// previously armed hide
    ShowToast { ticket: ToastTicket, duration_ms: u64 },
    HideToast,
}

impl ViewCoordinator {
    /// Apply one UI event.
    pub fn handle(&mut self, event: UiEvent) -> Vec<UiEffect> {
        let locked_before = self.scroll_locked();
        let mut effects = Vec::new();

        match event {
            UiEvent::ScrollSample { now, prev } => {
                effects.push(UiEffect::Header(self.on_scroll_sample(now, prev)));
            }
            UiEvent::HamburgerClicked => {
                effects.push(UiEffect::Nav(self.toggle_nav()));
            }
            UiEvent::NavLinkClicked => {
                effects.push(UiEffect::Nav(self.close_nav()));
            }
            UiEvent::AnchorFollowed => {
                effects.push(UiEffect::Header(self.reset_header()));
            }
            UiEvent::ViewProject(attr) => {
                match ProjectId::parse_attr(&attr).and_then(|id| self.open_modal(id)) {
                    Ok(record) => effects.push(UiEffect::ShowProject(record)),
                    Err(e) => tracing::warn!(error = %e, "Ignoring view-project click"),
                }
            }
            UiEvent::ModalCloseClicked | UiEvent::ModalBackdropClicked => {
                if self.modal().is_open() {
                    self.close_modal();
                    effects.push(UiEffect::HideProject);
                }
            }
            UiEvent::SubmissionSent { now_ms } => {
                let duration_ms = self.toast_duration_ms();
                let ticket = self.show_toast(now_ms, duration_ms);
                effects.push(UiEffect::ShowToast {
                    ticket,
                    duration_ms,
                });
            }
            UiEvent::ToastTimerFired(ticket) => {
                if self.expire_toast(ticket) {
                    effects.push(UiEffect::HideToast);
                }
            }
        }

        let locked_after = self.scroll_locked();
        if locked_after != locked_before {
            effects.push(UiEffect::ScrollLock(locked_after));
        }
        effects
    }
}
