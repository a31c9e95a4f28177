//! Bounded retry around a [`ModuleFetcher`].

use std::time::Duration;

use fabplan_auth::Role;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{FetchError, LoadedModule, ModuleFetcher, ModuleRegistry, ModuleSpec};

/// Retry policy for module loads.
///
/// Bounded by attempt count only, with a fixed delay between attempts; there
/// is no overall wall-clock deadline. Cancellation happens by dropping the
/// load future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Zero is clamped to one.
    pub max_attempts: u32,
    /// Fixed pause between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(250),
        }
    }
}

/// A module failed to load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("module not registered: {0}")]
    NotRegistered(String),

    #[error("module '{module}' failed to load after {attempts} attempts")]
    Exhausted {
        module: String,
        attempts: u32,
        #[source]
        source: FetchError,
    },
}

/// Loader that retries a fetcher according to a [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryingLoader<F> {
    fetcher: F,
    policy: RetryPolicy,
}

impl<F: ModuleFetcher> RetryingLoader<F> {
    pub fn new(fetcher: F, policy: RetryPolicy) -> Self {
        Self { fetcher, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Load one module, retrying up to the policy bound.
    ///
    /// Attempts are sequential; each failure short of the bound sleeps the
    /// fixed delay and tries again. The final failure is returned with the
    /// attempt count, never silently dropped.
    pub async fn load(&self, spec: &ModuleSpec) -> Result<LoadedModule, LoadError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.fetcher.fetch(spec).await {
                Ok(module) => {
                    debug!(module = spec.name, attempt, "module loaded");
                    return Ok(module);
                }
                Err(err) if attempt < max_attempts => {
                    warn!(
                        module = spec.name,
                        attempt,
                        error = %err,
                        "module fetch failed; retrying"
                    );
                    tokio::time::sleep(self.policy.delay).await;
                }
                Err(err) => {
                    warn!(
                        module = spec.name,
                        attempts = attempt,
                        error = %err,
                        "module fetch failed; giving up"
                    );
                    return Err(LoadError::Exhausted {
                        module: spec.name.to_string(),
                        attempts: attempt,
                        source: err,
                    });
                }
            }
        }
    }

    /// Load a module by name out of a registry.
    pub async fn load_named(
        &self,
        registry: &ModuleRegistry,
        name: &str,
    ) -> Result<LoadedModule, LoadError> {
        let spec = registry
            .get(name)
            .ok_or_else(|| LoadError::NotRegistered(name.to_string()))?;
        self.load(spec).await
    }

    /// Background prefetch of a role's module subset, sequentially.
    ///
    /// Stops at the first exhausted module and surfaces the error; modules
    /// loaded before the failure are returned alongside it by the caller
    /// re-invoking as needed.
    pub async fn prefetch(
        &self,
        registry: &ModuleRegistry,
        role: Role,
    ) -> Result<Vec<LoadedModule>, LoadError> {
        let mut loaded = Vec::new();
        for spec in registry.prefetch_for(role) {
            loaded.push(self.load(spec).await?);
        }
        debug!(role = %role, count = loaded.len(), "prefetch complete");
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Fails the first `failures` fetches, then succeeds.
    struct FlakyFetcher {
        failures: u32,
        calls: AtomicU32,
    }

    impl FlakyFetcher {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModuleFetcher for &FlakyFetcher {
        async fn fetch(&self, spec: &ModuleSpec) -> Result<LoadedModule, FetchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(FetchError::Unavailable(spec.name.to_string()))
            } else {
                Ok(LoadedModule {
                    name: spec.name.to_string(),
                    chunk: spec.chunk.to_string(),
                })
            }
        }
    }

    const SPEC: ModuleSpec = ModuleSpec {
        name: "orders",
        chunk: "/static/js/orders.chunk.js",
    };

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn resolves_when_bound_exceeds_failures() {
        let fetcher = FlakyFetcher::new(2);
        let loader = RetryingLoader::new(&fetcher, policy(3));

        let module = loader.load(&SPEC).await.unwrap();
        assert_eq!(module.name, "orders");
        assert_eq!(fetcher.calls(), 3);
    }

    #[tokio::test]
    async fn rejects_after_exactly_bound_attempts() {
        let fetcher = FlakyFetcher::new(5);
        let loader = RetryingLoader::new(&fetcher, policy(3));

        let err = loader.load(&SPEC).await.unwrap_err();
        assert_eq!(fetcher.calls(), 3);
        match err {
            LoadError::Exhausted {
                module, attempts, ..
            } => {
                assert_eq!(module, "orders");
                assert_eq!(attempts, 3);
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn zero_attempt_bound_still_tries_once() {
        let fetcher = FlakyFetcher::new(0);
        let loader = RetryingLoader::new(&fetcher, policy(0));

        loader.load(&SPEC).await.unwrap();
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn load_named_rejects_unregistered() {
        let fetcher = FlakyFetcher::new(0);
        let loader = RetryingLoader::new(&fetcher, policy(1));
        let registry = ModuleRegistry::standard();

        let err = loader.load_named(&registry, "nope").await.unwrap_err();
        assert!(matches!(err, LoadError::NotRegistered(_)));
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn prefetch_loads_role_subset() {
        let loader = RetryingLoader::new(crate::StaticFetcher, policy(1));
        let registry = ModuleRegistry::standard();

        let loaded = loader.prefetch(&registry, Role::Employee).await.unwrap();
        let names: Vec<_> = loaded.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["employee-home", "orders", "teams"]);
    }

    #[tokio::test]
    async fn prefetch_surfaces_exhaustion() {
        // Every fetch fails; the first module exhausts and the error is
        // propagated instead of being swallowed.
        let fetcher = FlakyFetcher::new(u32::MAX);
        let loader = RetryingLoader::new(&fetcher, policy(2));
        let registry = ModuleRegistry::standard();

        let err = loader.prefetch(&registry, Role::Admin).await.unwrap_err();
        assert!(matches!(err, LoadError::Exhausted { .. }));
        assert_eq!(fetcher.calls(), 2);
    }
}
