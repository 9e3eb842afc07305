//! Portfolio UI Components
//!
//! Dioxus building blocks shared by the page sections:
//! - Buttons in the page's primary/secondary/filter styles
//! - Contact form fields that show their validation message inline
//! - Technology tag lists

pub mod components;

pub use components::*;
