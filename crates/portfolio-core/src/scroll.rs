//! Frame-coalesced scroll sampling.
//!
//! Scroll events can arrive many times per frame. The tracker keeps only the
//! latest offset and asks the caller to schedule a frame callback when none is
//! pending. When the frame fires, one `(now, prev)` sample is produced from the
//! latest offset, so the final event of a burst is never lost.
//!
//! ```text
//! scroll(120) ─┐
//! scroll(135) ─┼─ record() ─► ScheduleFrame::Yes (first only)
//! scroll(150) ─┘
//!                  on_frame() ─► ScrollSample { now: 150, prev: <last frame> }
//! ```

use crate::config::SiteConfig;

/// Whether the caller must schedule a frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFrame {
    Yes,
    /// A callback is already pending; it will pick up this offset
    AlreadyPending,
}

/// One coalesced scroll sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub now: f64,
    pub prev: f64,
}

#[derive(Debug, Default)]
pub struct ScrollTracker {
    latest: f64,
    prev: f64,
    frame_pending: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw scroll offset.
    pub fn record(&mut self, offset: f64) -> ScheduleFrame {
        self.latest = offset;
        if self.frame_pending {
            ScheduleFrame::AlreadyPending
        } else {
            self.frame_pending = true;
            ScheduleFrame::Yes
        }
    }

    /// Frame callback: produce the coalesced sample.
    ///
    /// Returns `None` if no frame was pending (spurious callback).
    pub fn on_frame(&mut self) -> Option<ScrollSample> {
        if !self.frame_pending {
            return None;
        }
        self.frame_pending = false;
        let sample = ScrollSample {
            now: self.latest,
            prev: self.prev,
        };
        self.prev = self.latest;
        Some(sample)
    }

    /// Seed the tracker with the offset at startup and return the sample to
    /// apply immediately. The startup sample compares against the top of the
    /// page, so a window reopened below the threshold starts collapsed.
    pub fn prime(&mut self, offset: f64) -> ScrollSample {
        self.latest = offset;
        self.prev = offset;
        self.frame_pending = false;
        ScrollSample {
            now: offset,
            prev: 0.0,
        }
    }

    #[cfg(test)]
    fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }
}

/// Offset-derived cosmetic flags that sit outside the header state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollDecor {
    pub header_shadow: bool,
    pub back_to_top_visible: bool,
}

impl ScrollDecor {
    pub fn at(offset: f64, config: &SiteConfig) -> Self {
        Self {
            header_shadow: offset > config.shadow_offset,
            back_to_top_visible: offset > config.back_to_top_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_schedules_one_frame() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.record(10.0), ScheduleFrame::Yes);
        assert_eq!(tracker.record(20.0), ScheduleFrame::AlreadyPending);
        assert_eq!(tracker.record(30.0), ScheduleFrame::AlreadyPending);
        assert!(tracker.is_frame_pending());
    }

    #[test]
    fn test_frame_uses_last_offset_of_burst() {
        let mut tracker = ScrollTracker::new();
        tracker.record(10.0);
        tracker.record(20.0);
        tracker.record(30.0);

        let sample = tracker.on_frame().unwrap();
        assert_eq!(sample, ScrollSample { now: 30.0, prev: 0.0 });
        assert!(!tracker.is_frame_pending());
    }

    #[test]
    fn test_prev_advances_between_frames() {
        let mut tracker = ScrollTracker::new();
        tracker.record(150.0);
        tracker.on_frame();
        tracker.record(120.0);
        let sample = tracker.on_frame().unwrap();
        assert_eq!(sample, ScrollSample { now: 120.0, prev: 150.0 });
    }

    #[test]
    fn test_spurious_frame_is_ignored() {
        let mut tracker = ScrollTracker::new();
        assert!(tracker.on_frame().is_none());
        tracker.record(5.0);
        tracker.on_frame();
        assert!(tracker.on_frame().is_none());
    }

    #[test]
    fn test_prime_resets_pending() {
        let mut tracker = ScrollTracker::new();
        tracker.record(400.0);
        let sample = tracker.prime(250.0);
        assert_eq!(sample, ScrollSample { now: 250.0, prev: 0.0 });
        assert!(!tracker.is_frame_pending());
        assert_eq!(tracker.record(260.0), ScheduleFrame::Yes);
        // Later frames compare against the primed offset
        assert_eq!(tracker.on_frame(), Some(ScrollSample { now: 260.0, prev: 250.0 }));
    }

    #[test]
    fn test_decor_thresholds() {
        let config = SiteConfig::default();
        assert_eq!(ScrollDecor::at(50.0, &config), ScrollDecor::default());
        let mid = ScrollDecor::at(51.0, &config);
        assert!(mid.header_shadow && !mid.back_to_top_visible);
        let deep = ScrollDecor::at(301.0, &config);
        assert!(deep.header_shadow && deep.back_to_top_visible);
    }
}
