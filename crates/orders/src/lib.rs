//! Manufacturing orders and production teams.
//!
//! Mock data layer: models plus seeded in-memory stores. Nothing here
//! persists; stores reset on process restart.

pub mod order;
pub mod team;

pub use order::{NewOrder, Order, OrderStatus, OrderStore, OrderUpdate};
pub use team::{NewTeam, Shift, Team, TeamStore, TeamUpdate};
