//! Reusable page components

mod button;
mod field;
mod tags;

pub use button::*;
pub use field::*;
pub use tags::*;
