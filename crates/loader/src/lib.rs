//! `fabplan-loader` — deferred page-module loading.
//!
//! Pages are described by an explicit registry instead of framework-level
//! dynamic imports. A [`RetryingLoader`] wraps any [`ModuleFetcher`] with a
//! bounded, fixed-delay retry policy; exhausted retries are surfaced to the
//! caller, never swallowed.

pub mod fetch;
pub mod registry;
pub mod retry;

pub use fetch::{FetchError, LoadedModule, ModuleFetcher, StaticFetcher};
pub use registry::{ModuleRegistry, ModuleSpec};
pub use retry::{LoadError, RetryPolicy, RetryingLoader};
