use serde::Serialize;

use fabplan_auth::Role;

/// Layout shell wrapped around a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Admin,
    Employee,
    Maintenance,
    Default,
}

impl Layout {
    /// Total role→layout mapping. Exhaustive by construction: a new role
    /// will not compile until it picks a shell.
    pub fn for_role(role: Role) -> Layout {
        match role {
            Role::Admin => Layout::Admin,
            Role::Employee => Layout::Employee,
            Role::Maintenance => Layout::Maintenance,
            Role::Guest => Layout::Default,
        }
    }
}
