//! `fabplan-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and UI frameworks: the
//! session is an immutable value passed in by the caller, and the access
//! guard is a pure function over it.

pub mod guard;
pub mod roles;
pub mod session;

pub use guard::{AccessDecision, LOGIN_PATH, evaluate};
pub use roles::Role;
pub use session::{Session, User};
