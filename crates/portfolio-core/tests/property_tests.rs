//! Property-based tests for the view-state coordinator and animations
//!
//! Uses proptest to verify invariants over arbitrary event sequences.

use proptest::prelude::*;
use portfolio_core::reveal::Counter;
use portfolio_core::{
    ContentMap, HeaderState, ProjectId, RevealAnimator, RevealKind, SiteConfig, ViewCoordinator,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations that touch the scroll-lock
#[derive(Debug, Clone)]
enum OverlayOp {
    ToggleNav,
    CloseNav,
    OpenModal(u32), // includes unknown ids
    CloseModal,
}

fn overlay_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<OverlayOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(OverlayOp::ToggleNav),
            1 => Just(OverlayOp::CloseNav),
            3 => (0..6u32).prop_map(OverlayOp::OpenModal),
            2 => Just(OverlayOp::CloseModal),
        ],
        0..max_ops,
    )
}

fn coordinator() -> ViewCoordinator {
    ViewCoordinator::new(ContentMap::new(), &SiteConfig::default())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Scroll-lock equals "nav open or modal open" after every transition
    #[test]
    fn scroll_lock_tracks_overlays(ops in overlay_ops_strategy(60)) {
        let mut vc = coordinator();
        for op in ops {
            match op {
                OverlayOp::ToggleNav => { vc.toggle_nav(); }
                OverlayOp::CloseNav => { vc.close_nav(); }
                OverlayOp::OpenModal(id) => { let _ = vc.open_modal(ProjectId(id)); }
                OverlayOp::CloseModal => vc.close_modal(),
            }
            prop_assert_eq!(vc.scroll_locked(), vc.nav().is_open() || vc.modal().is_open());
        }
    }

    /// Unknown ids never change the modal state
    #[test]
    fn unknown_project_is_noop(id in 4..u32::MAX, open_first in any::<bool>()) {
        let mut vc = coordinator();
        if open_first {
            vc.open_modal(ProjectId(1)).unwrap();
        }
        let before = (vc.modal(), vc.scroll_locked());
        prop_assert!(vc.open_modal(ProjectId(id)).is_err());
        prop_assert_eq!((vc.modal(), vc.scroll_locked()), before);
    }

    /// Header state depends only on the latest (now, prev) pair
    #[test]
    fn header_is_pure_in_latest_pair(
        history in prop::collection::vec(0.0..5000.0f64, 0..20),
        now in 0.0..5000.0f64,
        prev in 0.0..5000.0f64,
    ) {
        let mut with_history = coordinator();
        let mut last = 0.0;
        for offset in history {
            with_history.on_scroll_sample(offset, last);
            last = offset;
        }
        let mut fresh = coordinator();
        prop_assert_eq!(
            with_history.on_scroll_sample(now, prev),
            fresh.on_scroll_sample(now, prev)
        );
    }

    /// Offsets inside the threshold band always show the full header
    #[test]
    fn header_full_near_top(now in 0.0..=100.0f64, prev in 0.0..5000.0f64) {
        let mut vc = coordinator();
        prop_assert_eq!(vc.on_scroll_sample(now, prev), HeaderState::Full);
    }

    /// Counters are monotone, never overshoot, and land exactly on target
    #[test]
    fn counter_lands_on_target(target in 0..100_000u32, duration in 0..5000u64, tick in 1..100u64) {
        let mut counter = Counter::new(target, duration, tick);
        let mut last = 0;
        let mut ticks = 0u64;
        while let Some(v) = counter.tick() {
            prop_assert!(v <= target);
            prop_assert!(v >= last);
            last = v;
            ticks += 1;
            prop_assert!(ticks <= duration / tick + 2);
        }
        prop_assert_eq!(last, target);
    }

    /// A revealed element never yields effects again
    #[test]
    fn reveal_is_one_shot(ratios in prop::collection::vec(0.0..=1.0f64, 1..30)) {
        let mut animator = RevealAnimator::new(&SiteConfig::default());
        animator.arm("stat", RevealKind::Stat { target: 10 });
        let mut fired = 0;
        for ratio in ratios {
            if !animator.on_intersect("stat", ratio).is_empty() {
                fired += 1;
            }
        }
        prop_assert!(fired <= 1);
    }
}
