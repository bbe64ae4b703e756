//! Seed units: one self-contained routine per entity type.
//!
//! Units are registered with the [`crate::runner::SeedRunner`], which executes
//! them in ascending priority order so that foreign-key prerequisites exist
//! before their dependents. A unit's row-level failures are logged and
//! skipped; only an unusable starting state (no prerequisite rows after
//! retries) fails the unit as a whole.

use std::future::Future;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::RetryConfig;
use crate::runner::SeedError;

mod category;
mod order;
mod product;
mod review;
mod user;

pub use category::CategoryUnit;
pub use order::OrderUnit;
pub use product::ProductUnit;
pub use review::ReviewUnit;
pub use user::UserUnit;

/// A self-contained routine that populates one entity type.
#[async_trait]
pub trait SeedUnit: Send + Sync {
    /// Unique unit name, used for subset selection and logging.
    fn name(&self) -> &'static str;

    /// Execution priority; lower runs first.
    fn priority(&self) -> i32;

    /// Populates the unit's entity against the given pool.
    async fn run(&self, pool: &PgPool) -> Result<(), SeedError>;
}

/// Fetches prerequisite rows with a bounded, linearly backed-off retry loop.
///
/// An empty result or a query error counts as a miss. The wait before attempt
/// N is `base_delay * N`, so a run that succeeds immediately never sleeps.
pub(crate) async fn fetch_prerequisites<T, F, Fut>(
    entity: &'static str,
    retry: &RetryConfig,
    mut fetch: F,
) -> Result<Vec<T>, SeedError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<T>, sqlx::Error>>,
{
    for attempt in 1..=retry.attempts {
        if attempt > 1 {
            debug!(entity, attempt, "retrying prerequisite fetch");
            sleep(retry.base_delay * attempt).await;
        }
        match fetch().await {
            Ok(rows) if !rows.is_empty() => return Ok(rows),
            Ok(_) => {}
            Err(err) => warn!(entity, error = %err, "prerequisite query failed"),
        }
    }

    Err(SeedError::EmptyPrerequisite {
        entity,
        attempts: retry.attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    fn fast_retry() -> RetryConfig {
        RetryConfig {
            attempts: 3,
            base_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn returns_first_non_empty_result() {
        let calls = Cell::new(0u32);
        let rows = fetch_prerequisites("users", &fast_retry(), || {
            calls.set(calls.get() + 1);
            async { Ok(vec![1, 2, 3]) }
        })
        .await
        .unwrap();

        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn empty_results_exhaust_every_attempt() {
        let calls = Cell::new(0u32);
        let err = fetch_prerequisites::<i32, _, _>("products", &fast_retry(), || {
            calls.set(calls.get() + 1);
            async { Ok(Vec::new()) }
        })
        .await
        .unwrap_err();

        assert_eq!(calls.get(), 3);
        match err {
            SeedError::EmptyPrerequisite { entity, attempts } => {
                assert_eq!(entity, "products");
                assert_eq!(attempts, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn recovers_after_an_empty_attempt() {
        let calls = Cell::new(0u32);
        let rows = fetch_prerequisites("categories", &fast_retry(), || {
            calls.set(calls.get() + 1);
            let rows = if calls.get() < 2 { Vec::new() } else { vec![7] };
            async move { Ok(rows) }
        })
        .await
        .unwrap();

        assert_eq!(rows, vec![7]);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn query_errors_count_as_misses() {
        let calls = Cell::new(0u32);
        let err = fetch_prerequisites::<i32, _, _>("users", &fast_retry(), || {
            calls.set(calls.get() + 1);
            async { Err(sqlx::Error::RowNotFound) }
        })
        .await
        .unwrap_err();

        assert_eq!(calls.get(), 3);
        assert!(matches!(err, SeedError::EmptyPrerequisite { .. }));
    }
}
