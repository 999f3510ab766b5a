//! Flappy Bird game model.
//!
//! A falling/jumping bird must pass through gaps in scrolling pipes; one
//! point per pipe cleared, until a collision or leaving the field ends the
//! round. No terminal types appear anywhere in here.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
