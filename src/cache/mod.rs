//! Persisted read-through cache for upstream responses
//!
//! Entries are write-once: created on the first miss for a key and never
//! updated, expired or invalidated.

pub mod key;
pub mod proxy;
pub mod storage;

// Re-export main types
pub use proxy::MediaProxy;
pub use storage::{CacheStats, CacheStorage, KindStats};
