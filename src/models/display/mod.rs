//! Display model implementations for table, pretty and JSON output
//!
//! Each resource implements `Formattable` next to its table row type.

mod cache;
mod media;
mod search;
mod user;

pub use cache::CacheStatusDisplay;
