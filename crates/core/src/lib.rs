//! `fabplan-core` — shared domain building blocks.
//!
//! Pure types only: errors and strongly-typed identifiers. No IO, no HTTP,
//! no storage concerns.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{ItemId, OrderId, ReportId, TeamId, UserId};
