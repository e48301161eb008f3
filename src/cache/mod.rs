// Cache module for process-local response caching.
// Holds normalized upstream results with per-operation TTLs.

pub mod keys;
pub mod memo;
pub mod store;

pub use memo::with_cache;
pub use store::TtlCache;
