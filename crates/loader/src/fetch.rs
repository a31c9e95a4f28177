use async_trait::async_trait;
use thiserror::Error;

use crate::ModuleSpec;

/// A page module that has finished loading and is ready to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    pub name: String,
    pub chunk: String,
}

/// A single fetch attempt failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("chunk unavailable: {0}")]
    Unavailable(String),

    #[error("fetch timed out: {0}")]
    Timeout(String),
}

/// Transport seam for fetching a module's code.
///
/// Implementations decide what "fetching" means (HTTP chunk download in the
/// real client, canned results in tests). One call is one attempt; retry is
/// the loader's job.
#[async_trait]
pub trait ModuleFetcher: Send + Sync {
    async fn fetch(&self, spec: &ModuleSpec) -> Result<LoadedModule, FetchError>;
}

/// Fetcher that resolves every registered module immediately.
///
/// Stand-in for a real chunk transport in demos and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticFetcher;

#[async_trait]
impl ModuleFetcher for StaticFetcher {
    async fn fetch(&self, spec: &ModuleSpec) -> Result<LoadedModule, FetchError> {
        Ok(LoadedModule {
            name: spec.name.to_string(),
            chunk: spec.chunk.to_string(),
        })
    }
}
