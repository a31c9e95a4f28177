use serde::{Deserialize, Serialize};

use fabplan_core::UserId;

use crate::Role;

/// An authenticated actor. The role is fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub role: Role,
}

impl User {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}

/// Runtime record of who is signed in.
///
/// Sessions are immutable values: login and logout construct fresh sessions
/// rather than mutating shared state, and callers pass the current session
/// into the guard explicitly on every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
    is_authenticated: bool,
}

impl Session {
    /// Session created at login.
    pub fn login(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    /// Session after logout (or before any login).
    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_authenticated: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated {
            return None;
        }
        self.user.map(|u| u.role)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
