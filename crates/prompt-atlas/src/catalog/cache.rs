use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{CatalogError, PromptCatalog, PromptSource};

/// A parsed catalog together with the moment it was fetched.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub catalog: Arc<PromptCatalog>,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // a clock that moved backwards counts as stale
        match (now - self.fetched_at).to_std() {
            Ok(age) => age < ttl,
            Err(_) => false,
        }
    }
}

/// Serves the last fetched catalog until it is older than `ttl`.
///
/// Refreshes are serialized: concurrent callers wait on the same lock and
/// reuse the snapshot produced by whichever caller fetched first. Failed
/// fetches are never cached.
#[derive(Debug)]
pub struct CatalogCache<S> {
    source: S,
    ttl: Duration,
    snapshot: Mutex<Option<CatalogSnapshot>>,
}

impl<S> CatalogCache<S>
where
    S: PromptSource,
{
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn catalog(&self) -> Result<Arc<PromptCatalog>, CatalogError> {
        self.catalog_at(Utc::now()).await
    }

    pub async fn catalog_at(&self, now: DateTime<Utc>) -> Result<Arc<PromptCatalog>, CatalogError> {
        let mut guard = self.snapshot.lock().await;

        if let Some(snapshot) = guard.as_ref() {
            if snapshot.is_fresh(now, self.ttl) {
                debug!(fetched_at = %snapshot.fetched_at, "serving cached prompt catalog");
                return Ok(Arc::clone(&snapshot.catalog));
            }
        }

        let origin = self.source.describe();
        let body = self.source.fetch().await.map_err(|err| {
            warn!(source = %origin, error = %err, "prompt catalog fetch failed");
            err
        })?;
        let catalog = Arc::new(PromptCatalog::from_reader(body.as_bytes()).map_err(|err| {
            warn!(source = %origin, error = %err, "prompt catalog rejected");
            err
        })?);

        info!(source = %origin, prompts = catalog.len(), "prompt catalog refreshed");
        *guard = Some(CatalogSnapshot {
            catalog: Arc::clone(&catalog),
            fetched_at: now,
        });

        Ok(catalog)
    }

    pub async fn snapshot(&self) -> Option<CatalogSnapshot> {
        self.snapshot.lock().await.clone()
    }

    pub async fn invalidate(&self) {
        self.snapshot.lock().await.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SourceError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingSource {
        fetches: AtomicUsize,
        failing: AtomicBool,
    }

    #[async_trait]
    impl PromptSource for CountingSource {
        async fn fetch(&self) -> Result<String, SourceError> {
            let count = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
            if self.failing.load(Ordering::SeqCst) {
                return Err(SourceError::Io {
                    path: PathBuf::from("offline.csv"),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "offline"),
                });
            }
            Ok(format!("act,prompt\nPoet {count},Write a poem.\n"))
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    fn start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-09-24T10:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[tokio::test]
    async fn serves_cached_catalog_within_ttl() {
        let cache = CatalogCache::new(CountingSource::default(), Duration::from_secs(3600));

        let first = cache.catalog_at(start()).await.expect("first fetch");
        let second = cache
            .catalog_at(start() + chrono::Duration::minutes(59))
            .await
            .expect("cached");

        assert_eq!(cache.ttl(), Duration::from_secs(3600));
        assert_eq!(cache.source().fetches.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.entries()[0].act, "Poet 1");
    }

    #[tokio::test]
    async fn refetches_once_ttl_elapses() {
        let cache = CatalogCache::new(CountingSource::default(), Duration::from_secs(3600));

        cache.catalog_at(start()).await.expect("first fetch");
        let refreshed = cache
            .catalog_at(start() + chrono::Duration::hours(1))
            .await
            .expect("refetch");

        assert_eq!(cache.source().fetches.load(Ordering::SeqCst), 2);
        assert_eq!(refreshed.entries()[0].act, "Poet 2");
        let snapshot = cache.snapshot().await.expect("snapshot stored");
        assert_eq!(snapshot.fetched_at, start() + chrono::Duration::hours(1));
    }

    #[tokio::test]
    async fn failures_propagate_and_are_not_cached() {
        let cache = CatalogCache::new(CountingSource::default(), Duration::from_secs(60));
        cache.source().failing.store(true, Ordering::SeqCst);

        let err = cache.catalog_at(start()).await.expect_err("fetch fails");
        assert!(matches!(err, CatalogError::Source(SourceError::Io { .. })));
        assert!(cache.snapshot().await.is_none());

        cache.source().failing.store(false, Ordering::SeqCst);
        let catalog = cache.catalog_at(start()).await.expect("recovers");
        assert_eq!(catalog.len(), 1);
        assert_eq!(cache.source().fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cache = CatalogCache::new(CountingSource::default(), Duration::from_secs(3600));
        cache.catalog_at(start()).await.expect("first fetch");
        cache.invalidate().await;
        cache.catalog_at(start()).await.expect("refetch");
        assert_eq!(cache.source().fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn clock_moving_backwards_triggers_refetch() {
        let cache = CatalogCache::new(CountingSource::default(), Duration::from_secs(3600));
        cache.catalog_at(start()).await.expect("first fetch");
        cache
            .catalog_at(start() - chrono::Duration::minutes(5))
            .await
            .expect("refetch");
        assert_eq!(cache.source().fetches.load(Ordering::SeqCst), 2);
    }
}
