//! Access guard: gate rendering of a protected view behind authentication
//! and role membership.
//!
//! The guard is a pure policy check:
//! - No IO
//! - No panics
//! - Re-evaluated fresh on every navigation (no cached decision)

use serde::Serialize;

use crate::{Role, Session};

/// Route users land on when a redirect has nowhere better to go.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating the guard for one navigation.
///
/// Redirects replace the current history entry; protected content is never
/// rendered on the redirect paths, not even transiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum AccessDecision {
    /// No authenticated user: send to the login route.
    RedirectToLogin,
    /// Authenticated but the role is not allowed here: send to the role's
    /// home route (or login when the role has no home mapping).
    Redirect { to: &'static str },
    /// Authenticated and allowed: render, wrapped in the role's layout.
    Grant { role: Role },
}

impl AccessDecision {
    pub fn is_grant(&self) -> bool {
        matches!(self, AccessDecision::Grant { .. })
    }

    /// Redirect target, if this decision is a redirect.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AccessDecision::RedirectToLogin => Some(LOGIN_PATH),
            AccessDecision::Redirect { to } => Some(to),
            AccessDecision::Grant { .. } => None,
        }
    }
}

/// Evaluate the guard for a session against a route's allowed roles.
///
/// An empty `allowed` set means deny-all: protected route definitions are
/// expected to carry a non-empty set, but the guard treats the violation as
/// a denial rather than an error.
pub fn evaluate(session: &Session, allowed: &[Role]) -> AccessDecision {
    let Some(role) = session.role() else {
        return AccessDecision::RedirectToLogin;
    };

    if allowed.contains(&role) {
        return AccessDecision::Grant { role };
    }

    match role.home_path() {
        Some(home) => AccessDecision::Redirect { to: home },
        None => AccessDecision::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use fabplan_core::UserId;
    use proptest::prelude::*;

    use super::*;
    use crate::User;

    fn authed(role: Role) -> Session {
        Session::login(User::new(UserId::new(), role))
    }

    #[test]
    fn unauthenticated_always_lands_on_login() {
        let session = Session::anonymous();
        for allowed in [&[Role::Admin][..], &[Role::Employee, Role::Guest][..], &[][..]] {
            let decision = evaluate(&session, allowed);
            assert_eq!(decision, AccessDecision::RedirectToLogin);
            assert_eq!(decision.redirect_target(), Some(LOGIN_PATH));
        }
    }

    #[test]
    fn denied_role_redirects_home() {
        let decision = evaluate(&authed(Role::Employee), &[Role::Admin]);
        assert_eq!(
            decision,
            AccessDecision::Redirect {
                to: "/employee-home"
            }
        );
    }

    #[test]
    fn denied_unmapped_role_falls_back_to_login() {
        let decision = evaluate(&authed(Role::Guest), &[Role::Admin]);
        assert_eq!(decision, AccessDecision::RedirectToLogin);
    }

    #[test]
    fn allowed_role_is_granted() {
        let decision = evaluate(&authed(Role::Admin), &[Role::Admin, Role::Employee]);
        assert_eq!(decision, AccessDecision::Grant { role: Role::Admin });
    }

    #[test]
    fn empty_allowed_set_denies() {
        let decision = evaluate(&authed(Role::Admin), &[]);
        assert_eq!(decision, AccessDecision::Redirect { to: "/admin-home" });
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop_oneof![
            Just(Role::Admin),
            Just(Role::Employee),
            Just(Role::Maintenance),
            Just(Role::Guest),
        ]
    }

    proptest! {
        /// Grant iff authenticated and the role is in the allowed set;
        /// everything else redirects. Never both.
        #[test]
        fn grant_iff_authenticated_and_allowed(
            role in role_strategy(),
            allowed in proptest::collection::vec(role_strategy(), 0..4),
            authenticated in any::<bool>(),
        ) {
            let session = if authenticated {
                authed(role)
            } else {
                Session::anonymous()
            };

            let decision = evaluate(&session, &allowed);
            let should_grant = authenticated && allowed.contains(&role);

            prop_assert_eq!(decision.is_grant(), should_grant);
            prop_assert_eq!(decision.redirect_target().is_some(), !should_grant);
        }

        /// Redirect targets are deterministic: role home, or login when the
        /// role has no home mapping.
        #[test]
        fn denied_redirect_is_deterministic(role in role_strategy()) {
            let decision = evaluate(&authed(role), &[]);
            let expected = role.home_path().unwrap_or(LOGIN_PATH);
            prop_assert_eq!(decision.redirect_target(), Some(expected));
        }
    }
}
