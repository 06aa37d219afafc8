//! Display models for CLI output
//!
//! Converts cached resources into CLI-friendly table rows and pretty text.

pub mod display;

pub use display::CacheStatusDisplay;
