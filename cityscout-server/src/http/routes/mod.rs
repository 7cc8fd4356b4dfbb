//! Route handlers, one per data domain
//!
//! Every route has the same shape: read the cache, and on a miss call one
//! upstream provider, normalize, persist, and respond.

use std::future::Future;

use futures::future::join_all;

use crate::db::DbError;

pub mod health;
pub mod location;
pub mod movies;
pub mod weather;
pub mod yelp;

#[cfg(test)]
pub(crate) mod testing;

/// Insert every item independently and concurrently.
///
/// A failed insert is logged and skipped, so the batch may be partially
/// stored. Returns how many inserts succeeded.
pub(crate) async fn persist_all<'a, T, F, Fut>(kind: &'static str, items: &'a [T], insert: F) -> usize
where
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = Result<(), DbError>>,
{
    let results = join_all(items.iter().map(insert)).await;

    let mut stored = 0;
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(()) => stored += 1,
            Err(e) => tracing::warn!(kind, index, error = %e, "Failed to cache row, continuing"),
        }
    }
    stored
}
