//! Hand landmarks and the finger states derived from them.

pub mod finger;
pub mod landmark;
