//! One-shot reveal animations driven by viewport intersection.
//!
//! Elements are armed once at startup. The first intersection at or above
//! the visibility threshold reveals an element and yields its effects;
//! later intersections yield nothing.

use std::collections::HashMap;

use crate::config::SiteConfig;

/// What kind of reveal an element performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    FadeUp,
    SlideLeft,
    SlideRight,
    /// Progress bar that grows to `level` percent and counts up its label
    SkillBar { level: u8 },
    /// Headline number that counts up to `target`
    Stat { target: u32 },
}

impl RevealKind {
    /// CSS class that arms the element's transition
    pub fn class(&self) -> &'static str {
        match self {
            RevealKind::FadeUp => "fade-up",
            RevealKind::SlideLeft => "slide-left",
            RevealKind::SlideRight => "slide-right",
            RevealKind::SkillBar { .. } => "skill-progress",
            RevealKind::Stat { .. } => "stat",
        }
    }
}

/// Side effect requested by a reveal
#[derive(Debug, Clone, PartialEq)]
pub enum RevealEffect {
    /// Add the `active` class
    Activate,
    /// Set the element width after a delay
    SetWidth { percent: u8, delay_ms: u64 },
    /// Run a counter on the element's number label
    StartCounter(Counter),
}

#[derive(Debug)]
struct Armed {
    kind: RevealKind,
    revealed: bool,
}

#[derive(Debug)]
pub struct RevealAnimator {
    elements: HashMap<String, Armed>,
    threshold: f64,
    skill_bar_delay_ms: u64,
    counter_duration_ms: u64,
    counter_tick_ms: u64,
}

impl RevealAnimator {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            elements: HashMap::new(),
            threshold: config.reveal_threshold,
            skill_bar_delay_ms: config.skill_bar_delay_ms,
            counter_duration_ms: config.counter_duration_ms,
            counter_tick_ms: config.counter_tick_ms,
        }
    }

    /// Arm an element. Arming an id twice keeps the first registration.
    pub fn arm(&mut self, id: impl Into<String>, kind: RevealKind) {
        self.elements.entry(id.into()).or_insert(Armed {
            kind,
            revealed: false,
        });
    }

    /// Handle an intersection report for `id` with `ratio` of it visible.
    pub fn on_intersect(&mut self, id: &str, ratio: f64) -> Vec<RevealEffect> {
        if ratio < self.threshold {
            return Vec::new();
        }
        let Some(element) = self.elements.get_mut(id) else {
            tracing::debug!(id, "Intersection for unarmed element");
            return Vec::new();
        };
        if element.revealed {
            return Vec::new();
        }
        element.revealed = true;

        let mut effects = vec![RevealEffect::Activate];
        match element.kind {
            RevealKind::SkillBar { level } => {
                effects.push(RevealEffect::SetWidth {
                    percent: level,
                    delay_ms: self.skill_bar_delay_ms,
                });
                effects.push(RevealEffect::StartCounter(self.counter(u32::from(level))));
            }
            RevealKind::Stat { target } => {
                effects.push(RevealEffect::StartCounter(self.counter(target)));
            }
            RevealKind::FadeUp | RevealKind::SlideLeft | RevealKind::SlideRight => {}
        }
        effects
    }

    #[cfg(test)]
    fn is_revealed(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.revealed)
    }

    /// Ids still waiting for their first intersection
    #[cfg(test)]
    fn armed_ids(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter(|(_, e)| !e.revealed)
            .map(|(id, _)| id.as_str())
    }

    fn counter(&self, target: u32) -> Counter {
        Counter::new(target, self.counter_duration_ms, self.counter_tick_ms)
    }
}

/// Linear 0 -> target counter advanced on a fixed tick.
///
/// The value never exceeds `target`, and once it lands there the counter is
/// done and further ticks are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u32,
    step: f64,
    current: f64,
    done: bool,
    tick_ms: u64,
}

impl Counter {
    pub fn new(target: u32, duration_ms: u64, tick_ms: u64) -> Self {
        let ticks = if tick_ms == 0 {
            1.0
        } else {
            (duration_ms as f64 / tick_ms as f64).max(1.0)
        };
        Self {
            target,
            step: f64::from(target) / ticks,
            current: 0.0,
            done: false,
            tick_ms,
        }
    }

    /// Advance one tick and return the value to display, or `None` once done.
    pub fn tick(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        self.current += self.step;
        if self.current >= f64::from(self.target) {
            self.current = f64::from(self.target);
            self.done = true;
        }
        Some(self.current.floor() as u32)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }
}

/// Parse the leading integer of `s` the way the page's number labels are
/// written ("95%", " 1200+").
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// Parse a target-level attribute into a width percentage (clamped to 0-100).
pub fn parse_level(attr: &str) -> Option<u8> {
    parse_leading_int(attr).map(|n| n.clamp(0, 100) as u8)
}

/// Resolve a counter target from the target-count attribute, falling back to
/// the element's current text. Negative values are rejected.
pub fn parse_target(attr: Option<&str>, text: &str) -> Option<u32> {
    let n = match attr {
        Some(a) => parse_leading_int(a),
        None => parse_leading_int(text),
    }?;
    u32::try_from(n).ok()
}
