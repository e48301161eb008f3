// Memoization over the TTL cache.
// Serves hits from the cache and populates it from an async producer on a miss.

use std::future::Future;
use std::time::Duration;

use super::store::TtlCache;

/// Return the cached value for `key`, or run `producer` and cache its result.
///
/// The producer is not invoked on a hit. A failed producer caches nothing,
/// so the next call for the same key tries again. Concurrent misses for one
/// key each run their own producer.
pub async fn with_cache<V, E, F, Fut>(
    cache: &TtlCache<V>,
    key: &str,
    ttl: Duration,
    producer: F,
) -> Result<V, E>
where
    V: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
{
    if let Some(value) = cache.get(key) {
        tracing::debug!(key, "cache hit");
        return Ok(value);
    }

    tracing::debug!(key, ttl_secs = ttl.as_secs(), "cache miss");
    let value = producer().await?;
    cache.set(key, value.clone(), ttl);
    Ok(value)
}
