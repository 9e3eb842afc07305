//! Site configuration: every timing and threshold the page uses.
//!
//! Defaults reproduce the shipped page. A JSON file may override any subset
//! of fields:
//!
//! ```json
//! { "header_collapse": "hide", "toast_ms": 5000 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::HeaderCollapse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Offsets at or above the top of this band always show the full header
    pub header_threshold: f64,
    /// What the header does while scrolling down
    pub header_collapse: HeaderCollapse,
    /// Offset past which the header gets a drop shadow
    pub shadow_offset: f64,
    /// Offset past which the back-to-top button appears
    pub back_to_top_offset: f64,
    /// Minimum visible fraction that counts as an intersection
    pub reveal_threshold: f64,
    /// Delay before a skill bar grows to its level
    pub skill_bar_delay_ms: u64,
    /// Total counter animation time
    pub counter_duration_ms: u64,
    /// Counter tick interval
    pub counter_tick_ms: u64,
    /// Frame interval used to coalesce scroll samples
    pub frame_ms: u64,
    /// How long the submission toast stays up
    pub toast_ms: u64,
    /// Simulated send time for the contact form
    pub send_delay_ms: u64,
    /// Loader overlay time after launch
    pub loader_delay_ms: u64,
    /// How long the map refresh button shows its confirmation
    pub map_feedback_ms: u64,
    /// Location searched when opening the external map
    pub map_location: String,
    pub map_zoom: u8,
    /// Decorative particles in the hero background
    pub particle_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            header_collapse: HeaderCollapse::Minimize,
            shadow_offset: 50.0,
            back_to_top_offset: 300.0,
            reveal_threshold: 0.1,
            skill_bar_delay_ms: 300,
            counter_duration_ms: 1500,
            counter_tick_ms: 16,
            frame_ms: 16,
            toast_ms: 3000,
            send_delay_ms: 1500,
            loader_delay_ms: 800,
            map_feedback_ms: 1500,
            map_location: "Mabini, Batangas".to_string(),
            map_zoom: 15,
            particle_count: 30,
        }
    }
}

impl SiteConfig {
    /// Parse a config from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        serde_json::from_str(json).map_err(|e| PortfolioError::Config(e.to_string()))
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load `path` if given, otherwise use defaults. A broken file is logged
    /// and ignored.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load(p).unwrap_or_else(|e| {
                tracing::warn!(path = %p.display(), error = %e, "Ignoring site config");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
