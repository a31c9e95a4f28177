//! `fabplan-shell` — client-side navigation shell.
//!
//! Composes the access guard, the static route table, role layouts, and the
//! module loader into per-navigation outcomes: render a page in the right
//! layout shell, or redirect.

pub mod layout;
pub mod navigator;
pub mod routes;

pub use layout::Layout;
pub use navigator::{NavError, Navigator, Outcome, RenderedPage};
pub use routes::{RouteDef, RouteTable};
