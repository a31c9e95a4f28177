//! Static route table.
//!
//! Built once at startup and never mutated. Every protected route carries a
//! non-empty allowed-role set; `/login` is the only public route.

use fabplan_auth::{LOGIN_PATH, Role};

/// One navigable route: where it lives, who may see it, and which page
/// module renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub allowed_roles: &'static [Role],
    pub module: &'static str,
}

impl RouteDef {
    pub fn is_public(&self) -> bool {
        self.allowed_roles.is_empty() && self.path == LOGIN_PATH
    }
}

/// The application's fixed set of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

const STAFF: &[Role] = &[Role::Admin, Role::Employee, Role::Maintenance];

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    /// Default FabPlan route tree.
    pub fn standard() -> Self {
        Self::new(vec![
            RouteDef {
                path: LOGIN_PATH,
                allowed_roles: &[],
                module: "login",
            },
            RouteDef {
                path: "/admin-home",
                allowed_roles: &[Role::Admin],
                module: "admin-home",
            },
            RouteDef {
                path: "/employee-home",
                allowed_roles: &[Role::Employee],
                module: "employee-home",
            },
            RouteDef {
                path: "/maintenance-home",
                allowed_roles: &[Role::Maintenance],
                module: "maintenance-home",
            },
            RouteDef {
                path: "/orders",
                allowed_roles: STAFF,
                module: "orders",
            },
            RouteDef {
                path: "/teams",
                allowed_roles: &[Role::Admin, Role::Employee],
                module: "teams",
            },
            RouteDef {
                path: "/inventory",
                allowed_roles: STAFF,
                module: "inventory",
            },
            RouteDef {
                path: "/quality",
                allowed_roles: &[Role::Admin, Role::Employee],
                module: "quality",
            },
            RouteDef {
                path: "/settings",
                allowed_roles: &[Role::Admin],
                module: "settings",
            },
        ])
    }

    pub fn find(&self, path: &str) -> Option<&RouteDef> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_have_non_empty_allowed_roles() {
        for route in RouteTable::standard().routes() {
            assert!(
                route.is_public() || !route.allowed_roles.is_empty(),
                "route {} is neither public nor protected",
                route.path
            );
        }
    }

    #[test]
    fn role_homes_admit_their_role() {
        let table = RouteTable::standard();
        for role in [Role::Admin, Role::Employee, Role::Maintenance] {
            let home = role.home_path().unwrap();
            let route = table.find(home).unwrap();
            assert!(route.allowed_roles.contains(&role));
        }
    }

    #[test]
    fn unknown_path_is_absent() {
        assert!(RouteTable::standard().find("/payroll").is_none());
    }
}
