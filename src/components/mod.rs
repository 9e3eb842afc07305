//! Page sections.
//!
//! Each section reads the shared view state through the context hooks and
//! reports user input as [`portfolio_core::UiEvent`]s.

mod about;
mod back_to_top;
mod contact;
mod footer;
mod header;
mod hero;
mod loader;
mod projects;
mod reveal;
mod skills;
mod toast;

pub use about::About;
pub use back_to_top::BackToTop;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use loader::Loader;
pub use projects::{ProjectModal, Projects};
pub use reveal::{reveal_class, Reveal};
pub use skills::Skills;
pub use toast::Toast;
