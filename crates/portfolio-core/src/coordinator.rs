//! View-state coordinator.
//!
//! Sole owner of the four UI state variables and of the scroll-lock flag:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HeaderState  Full | Minimized | Hidden   (scroll)       │
//! │  NavState     Closed | Open               (hamburger)    │
//! │  ModalState   Closed | Open(ProjectId)    (view project) │
//! │  ToastState   Hidden | Visible            (form submit)  │
//! │                                                          │
//! │  scroll_locked = nav.is_open() || modal.is_open()        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock is recomputed from nav and modal after every transition rather
//! than counted, so closing both overlays in any order always releases it.
//! The coordinator has no environment access: time is passed in by the
//! caller and effects are applied by the UI layer.

use crate::config::SiteConfig;
use crate::content::ContentMap;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{
    HeaderCollapse, HeaderState, ModalState, NavState, ProjectId, ProjectRecord, ToastState,
};

/// Identifies one arming of the toast timer.
///
/// A deferred hide callback carries the ticket it was armed with; only the
/// current ticket may hide the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTicket(u64);

#[derive(Debug, Clone, Copy)]
struct PendingHide {
    ticket: ToastTicket,
    hide_at_ms: u64,
}

#[derive(Debug)]
pub struct ViewCoordinator {
    header: HeaderState,
    nav: NavState,
    modal: ModalState,
    toast: ToastState,
    scroll_locked: bool,
    pending_hide: Option<PendingHide>,
    next_ticket: u64,
    content: ContentMap,
    header_threshold: f64,
    collapse: HeaderCollapse,
    toast_ms: u64,
}

impl ViewCoordinator {
    pub fn new(content: ContentMap, config: &SiteConfig) -> Self {
        Self {
            header: HeaderState::Full,
            nav: NavState::Closed,
            modal: ModalState::Closed,
            toast: ToastState::Hidden,
            scroll_locked: false,
            pending_hide: None,
            next_ticket: 0,
            content,
            header_threshold: config.header_threshold,
            collapse: config.header_collapse,
            toast_ms: config.toast_ms,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Header
    // ═══════════════════════════════════════════════════════════════════════

    /// Derive the header state from a scroll sample.
    ///
    /// Only the threshold and the sign of the delta matter, so repeated
    /// identical samples leave the state unchanged.
    pub fn on_scroll_sample(&mut self, offset_now: f64, offset_prev: f64) -> HeaderState {
        let next = if offset_now <= self.header_threshold {
            HeaderState::Full
        } else if offset_now > offset_prev {
            self.collapse.collapsed_state()
        } else {
            HeaderState::Full
        };
        if next != self.header {
            tracing::debug!(from = ?self.header, to = ?next, offset_now, "Header state");
        }
        self.header = next;
        next
    }

    /// Show the full header, e.g. after in-page anchor navigation.
    pub fn reset_header(&mut self) -> HeaderState {
        self.header = HeaderState::Full;
        self.header
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mobile navigation
    // ═══════════════════════════════════════════════════════════════════════

    pub fn toggle_nav(&mut self) -> NavState {
        let state = self.nav.toggle();
        self.recompute_scroll_lock();
        tracing::debug!(nav = ?state, locked = self.scroll_locked, "Nav toggled");
        state
    }

    /// Close the mobile menu (a nav link was followed).
    pub fn close_nav(&mut self) -> NavState {
        self.nav = NavState::Closed;
        self.recompute_scroll_lock();
        self.nav
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Project modal
    // ═══════════════════════════════════════════════════════════════════════

    /// Open the details modal for `id`.
    ///
    /// An unknown id leaves every state untouched and returns
    /// [`PortfolioError::ProjectNotFound`]; the caller must not render.
    pub fn open_modal(&mut self, id: ProjectId) -> PortfolioResult<&'static ProjectRecord> {
        let record = self
            .content
            .get(id)
            .ok_or(PortfolioError::ProjectNotFound(id.0))?;
        self.modal = ModalState::Open(id);
        self.recompute_scroll_lock();
        tracing::debug!(project = %id, "Modal opened");
        Ok(record)
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.recompute_scroll_lock();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Toast
    // ═══════════════════════════════════════════════════════════════════════

    /// Show the toast and (re)arm its hide timer for `duration_ms` from
    /// `now_ms`. Any previously armed timer is replaced.
    pub fn show_toast(&mut self, now_ms: u64, duration_ms: u64) -> ToastTicket {
        let ticket = ToastTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_hide = Some(PendingHide {
            ticket,
            hide_at_ms: now_ms.saturating_add(duration_ms),
        });
        self.toast = ToastState::Visible;
        ticket
    }

    /// Deferred hide callback. Returns `true` if the toast was hidden; a
    /// stale ticket from a replaced timer is ignored.
    pub fn expire_toast(&mut self, ticket: ToastTicket) -> bool {
        match self.pending_hide {
            Some(pending) if pending.ticket == ticket => {
                self.pending_hide = None;
                self.toast = ToastState::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Deadline-driven hide for callers that drive time explicitly.
    ///
    /// Returns `Some(ToastState::Hidden)` exactly once per arming, at the
    /// first poll at or after the deadline.
    pub fn poll_toast(&mut self, now_ms: u64) -> Option<ToastState> {
        let pending = self.pending_hide?;
        if now_ms < pending.hide_at_ms {
            return None;
        }
        self.expire_toast(pending.ticket).then_some(ToastState::Hidden)
    }

    /// Deadline of the armed hide timer, if any
    #[cfg(test)]
    fn toast_deadline(&self) -> Option<u64> {
        self.pending_hide.map(|p| p.hide_at_ms)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn header(&self) -> HeaderState {
        self.header
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn toast(&self) -> ToastState {
        self.toast
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Configured toast display time
    pub fn toast_duration_ms(&self) -> u64 {
        self.toast_ms
    }

    pub fn content(&self) -> &ContentMap {
        &self.content
    }

    /// Record shown in the modal, if open
    pub fn modal_record(&self) -> Option<&'static ProjectRecord> {
        self.modal.project().and_then(|id| self.content.get(id))
    }

    fn recompute_scroll_lock(&mut self) {
        self.scroll_locked = self.nav.is_open() || self.modal.is_open();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> ViewCoordinator {
        ViewCoordinator::new(ContentMap::new(), &SiteConfig::default())
    }

    #[test]
    fn test_header_sequence() {
        let mut vc = coordinator();
        let offsets = [0.0, 50.0, 150.0, 120.0];
        let mut prev = 0.0;
        let states: Vec<_> = offsets
            .iter()
            .map(|&now| {
                let s = vc.on_scroll_sample(now, prev);
                prev = now;
                s
            })
            .collect();
        assert_eq!(
            states,
            vec![
                HeaderState::Full,
                HeaderState::Full,
                HeaderState::Minimized,
                HeaderState::Full
            ]
        );
    }

    #[test]
    fn test_header_hide_mode() {
        let config = SiteConfig {
            header_collapse: HeaderCollapse::Hide,
            ..SiteConfig::default()
        };
        let mut vc = ViewCoordinator::new(ContentMap::new(), &config);
        assert_eq!(vc.on_scroll_sample(150.0, 50.0), HeaderState::Hidden);
    }

    #[test]
    fn test_header_threshold_is_inclusive() {
        let mut vc = coordinator();
        assert_eq!(vc.on_scroll_sample(100.0, 10.0), HeaderState::Full);
        assert_eq!(vc.on_scroll_sample(100.5, 100.0), HeaderState::Minimized);
    }

    #[test]
    fn test_repeated_sample_is_idempotent() {
        let mut vc = coordinator();
        assert_eq!(vc.on_scroll_sample(400.0, 300.0), HeaderState::Minimized);
        assert_eq!(vc.on_scroll_sample(400.0, 300.0), HeaderState::Minimized);
        // Equal offsets count as "not scrolling down"
        assert_eq!(vc.on_scroll_sample(400.0, 400.0), HeaderState::Full);
        assert_eq!(vc.on_scroll_sample(400.0, 400.0), HeaderState::Full);
    }

    #[test]
    fn test_reset_header() {
        let mut vc = coordinator();
        vc.on_scroll_sample(500.0, 200.0);
        assert_eq!(vc.reset_header(), HeaderState::Full);
    }

    #[test]
    fn test_nav_then_modal_lock() {
        let mut vc = coordinator();
        vc.toggle_nav();
        assert!(vc.scroll_locked());
        vc.open_modal(ProjectId(1)).unwrap();
        vc.toggle_nav();
        assert!(vc.scroll_locked(), "modal still open");
        vc.close_modal();
        assert!(!vc.scroll_locked());
    }

    #[test]
    fn test_close_modal_keeps_nav_lock() {
        let mut vc = coordinator();
        vc.open_modal(ProjectId(3)).unwrap();
        vc.toggle_nav();
        vc.close_modal();
        assert!(vc.scroll_locked());
        vc.close_nav();
        assert!(!vc.scroll_locked());
    }

    #[test]
    fn test_open_modal_known() {
        let mut vc = coordinator();
        let record = vc.open_modal(ProjectId(2)).unwrap();
        assert_eq!(record.title, "Mabini Tourism Website");
        assert_eq!(record.technologies.len(), 4);
        assert_eq!(vc.modal(), ModalState::Open(ProjectId(2)));
        assert_eq!(vc.modal_record().map(|r| r.id), Some(ProjectId(2)));
    }

    #[test]
    fn test_open_modal_unknown_leaves_state() {
        let mut vc = coordinator();
        vc.open_modal(ProjectId(1)).unwrap();
        let err = vc.open_modal(ProjectId(9)).unwrap_err();
        assert!(matches!(err, PortfolioError::ProjectNotFound(9)));
        assert_eq!(vc.modal(), ModalState::Open(ProjectId(1)));
        assert!(vc.scroll_locked());

        let mut fresh = coordinator();
        assert!(fresh.open_modal(ProjectId(0)).is_err());
        assert_eq!(fresh.modal(), ModalState::Closed);
        assert!(!fresh.scroll_locked());
    }

    #[test]
    fn test_open_modal_replaces_project() {
        let mut vc = coordinator();
        vc.open_modal(ProjectId(1)).unwrap();
        vc.open_modal(ProjectId(3)).unwrap();
        assert_eq!(vc.modal().project(), Some(ProjectId(3)));
    }

    #[test]
    fn test_toast_rearm_single_hide() {
        let mut vc = coordinator();
        vc.show_toast(0, 3000);
        vc.show_toast(1000, 3000);

        let mut hides = Vec::new();
        for now in (0..=6000).step_by(100) {
            if vc.poll_toast(now).is_some() {
                hides.push(now);
            }
        }
        assert_eq!(hides, vec![4000]);
        assert_eq!(vc.toast(), ToastState::Hidden);
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut vc = coordinator();
        let first = vc.show_toast(0, 3000);
        let second = vc.show_toast(1000, 3000);
        assert!(!vc.expire_toast(first));
        assert_eq!(vc.toast(), ToastState::Visible);
        assert!(vc.expire_toast(second));
        assert_eq!(vc.toast(), ToastState::Hidden);
        assert!(!vc.expire_toast(second));
    }

    #[test]
    fn test_toast_deadline() {
        let mut vc = coordinator();
        assert_eq!(vc.toast_deadline(), None);
        vc.show_toast(250, 3000);
        assert_eq!(vc.toast_deadline(), Some(3250));
    }
}
