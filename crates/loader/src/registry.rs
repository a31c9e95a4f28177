//! Explicit registry of page modules.
//!
//! The registry is static data built at startup: which modules exist, where
//! their chunks live, and which subset each role gets prefetched after login.

use fabplan_auth::Role;

/// Description of one lazily-loaded page module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSpec {
    pub name: &'static str,
    pub chunk: &'static str,
}

/// Fixed set of known page modules.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    specs: Vec<ModuleSpec>,
}

impl ModuleRegistry {
    pub fn new(specs: Vec<ModuleSpec>) -> Self {
        Self { specs }
    }

    /// Registry matching the default route table.
    pub fn standard() -> Self {
        Self::new(
            [
                "login",
                "admin-home",
                "employee-home",
                "maintenance-home",
                "orders",
                "teams",
                "inventory",
                "quality",
                "settings",
            ]
            .into_iter()
            .map(|name| ModuleSpec {
                name,
                chunk: chunk_path(name),
            })
            .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&ModuleSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    pub fn specs(&self) -> &[ModuleSpec] {
        &self.specs
    }

    /// Enumerated prefetch set for a role: the pages that role is expected
    /// to visit first after login.
    pub fn prefetch_for(&self, role: Role) -> Vec<&ModuleSpec> {
        let names: &[&str] = match role {
            Role::Admin => &["admin-home", "orders", "inventory", "quality", "settings"],
            Role::Employee => &["employee-home", "orders", "teams"],
            Role::Maintenance => &["maintenance-home", "inventory"],
            Role::Guest => &[],
        };
        names.iter().filter_map(|n| self.get(n)).collect()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn chunk_path(name: &str) -> &'static str {
    // Chunk names mirror module names; kept as a table so specs stay
    // 'static and comparable.
    match name {
        "login" => "/static/js/login.chunk.js",
        "admin-home" => "/static/js/admin-home.chunk.js",
        "employee-home" => "/static/js/employee-home.chunk.js",
        "maintenance-home" => "/static/js/maintenance-home.chunk.js",
        "orders" => "/static/js/orders.chunk.js",
        "teams" => "/static/js/teams.chunk.js",
        "inventory" => "/static/js/inventory.chunk.js",
        "quality" => "/static/js/quality.chunk.js",
        "settings" => "/static/js/settings.chunk.js",
        _ => "/static/js/unknown.chunk.js",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_resolves_all_prefetch_sets() {
        let registry = ModuleRegistry::standard();
        for role in Role::ALL {
            for spec in registry.prefetch_for(role) {
                assert!(registry.get(spec.name).is_some());
            }
        }
    }

    #[test]
    fn guest_prefetches_nothing() {
        let registry = ModuleRegistry::standard();
        assert!(registry.prefetch_for(Role::Guest).is_empty());
    }

    #[test]
    fn unknown_module_is_absent() {
        let registry = ModuleRegistry::standard();
        assert!(registry.get("reports-dashboard").is_none());
    }
}
