//! Bounded-concurrency resolution of collected tag calls.

use rayon::ThreadPool;
use rayon::prelude::*;

use crate::collector::CollectedTag;
use crate::error::RenderResult;

/// Resolves every collected entry on the pool, preserving registration
/// order in the returned vector.
///
/// The pool's thread count is the concurrency cap, so at most that many
/// resolvers run at once however large the collector is. Results land at
/// the index of their entry regardless of completion order. The first
/// failing entry aborts the batch.
///
/// The resolver is injected so tests can exercise ordering and abort
/// behavior with artificial delays and failures.
pub(crate) fn resolve_entries<T, F>(
    pool: &ThreadPool,
    entries: &[CollectedTag],
    resolver: F,
) -> RenderResult<Vec<T>>
where
    T: Send,
    F: Fn(&CollectedTag) -> RenderResult<T> + Sync,
{
    // One entry cannot contend; skip the pool handoff.
    if entries.len() <= 1 {
        return entries.iter().map(&resolver).collect();
    }
    pool.install(|| entries.par_iter().map(&resolver).collect())
}
