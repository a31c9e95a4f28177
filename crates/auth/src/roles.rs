use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fabplan_core::DomainError;

/// User category governing route and layout access.
///
/// A closed set, matched exhaustively: adding a role forces every dispatch
/// site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
    Maintenance,
    Guest,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Employee, Role::Maintenance, Role::Guest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::Maintenance => "maintenance",
            Role::Guest => "guest",
        }
    }

    /// Default landing page for the role, if one is configured.
    ///
    /// Guests have no home of their own; callers fall back to the login
    /// route for roles without a mapping.
    pub fn home_path(&self) -> Option<&'static str> {
        match self {
            Role::Admin => Some("/admin-home"),
            Role::Employee => Some("/employee-home"),
            Role::Maintenance => Some("/maintenance-home"),
            Role::Guest => None,
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            "maintenance" => Ok(Role::Maintenance),
            "guest" => Ok(Role::Guest),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}
