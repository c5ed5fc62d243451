//! Theme Module
//!
//! Color scheme and styling helpers for the dashboard UI: an iOS-blue
//! light theme with white cards on a light gray background.

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
