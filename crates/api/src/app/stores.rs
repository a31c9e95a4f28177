//! In-memory store wiring.
//!
//! One instance of each mock store, seeded at startup and shared across
//! request handlers. Data resets on process restart.

use fabplan_inventory::InventoryStore;
use fabplan_orders::{OrderStore, TeamStore};
use fabplan_quality::ReportStore;

pub struct Stores {
    pub orders: OrderStore,
    pub teams: TeamStore,
    pub inventory: InventoryStore,
    pub quality: ReportStore,
}

pub fn build_stores() -> Stores {
    Stores {
        orders: OrderStore::seeded(),
        teams: TeamStore::seeded(),
        inventory: InventoryStore::seeded(),
        quality: ReportStore::seeded(),
    }
}
