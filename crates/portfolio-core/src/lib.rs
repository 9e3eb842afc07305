//! Portfolio Core Library
//!
//! Environment-free logic behind the portfolio page.
//!
//! ## Overview
//!
//! The page is a single document with cosmetic interactivity. The parts with
//! state and ordering semantics live here so they can be tested without a
//! webview:
//!
//! - **View-state coordinator**: header, mobile nav, project modal, toast and
//!   the scroll-lock they imply
//! - **Scroll tracker**: one sample per animation frame
//! - **Reveal animator**: one-shot viewport reveals, skill bars, counters
//! - **Form validator**: contact form predicates
//! - **Preference store**: theme and footer flags in redb
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{ContentMap, ProjectId, SiteConfig, ViewCoordinator};
//!
//! let config = SiteConfig::default();
//! let mut view = ViewCoordinator::new(ContentMap::new(), &config);
//!
//! view.toggle_nav();
//! let project = view.open_modal(ProjectId(2)).unwrap();
//! assert_eq!(project.title, "Mabini Tourism Website");
//!
//! view.toggle_nav();
//! assert!(view.scroll_locked());
//! view.close_modal();
//! assert!(!view.scroll_locked());
//! ```

pub mod config;
pub mod content;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod logging;
pub mod maps;
pub mod particles;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod types;
pub mod validate;

// Re-exports
pub use config::SiteConfig;
pub use content::{ContentMap, Skill, Stat};
pub use coordinator::{ToastTicket, ViewCoordinator};
pub use error::{PortfolioError, PortfolioResult};
pub use events::{UiEffect, UiEvent};
pub use prefs::{PreferenceStore, Preferences};
pub use reveal::{Counter, RevealAnimator, RevealEffect, RevealKind};
pub use scroll::{ScheduleFrame, ScrollDecor, ScrollSample, ScrollTracker};
pub use types::*;
pub use validate::{ContactForm, Field, FieldValidationResult, SubmitPhase, Submission};
