//! Per-navigation resolution: guard, layout, module load.

use thiserror::Error;
use tracing::debug;

use fabplan_auth::{AccessDecision, Session, guard};
use fabplan_loader::{LoadError, LoadedModule, ModuleFetcher, ModuleRegistry, RetryingLoader};

use crate::{Layout, RouteTable};

/// A page that passed the guard and whose module finished loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub path: String,
    pub layout: Layout,
    pub module: LoadedModule,
}

/// Result of one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Terminal navigation elsewhere. `replace` mirrors history-entry
    /// replacement: guard redirects never leave the denied path in history.
    Redirect { to: String, replace: bool },
    Page(RenderedPage),
}

impl Outcome {
    fn redirect(to: &str) -> Self {
        Outcome::Redirect {
            to: to.to_string(),
            replace: true,
        }
    }
}

/// Navigation failed after the guard allowed it.
///
/// Guard denials are not errors (they are redirect outcomes); the only
/// failure mode left is the module loader giving up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error(transparent)]
    ModuleLoad(#[from] LoadError),
}

/// Drives navigation: holds the static route table, the module registry,
/// and the retrying loader. The session is passed in per call, so every
/// navigation re-evaluates the guard against current state.
#[derive(Debug, Clone)]
pub struct Navigator<F> {
    table: RouteTable,
    registry: ModuleRegistry,
    loader: RetryingLoader<F>,
}

impl<F: ModuleFetcher> Navigator<F> {
    pub fn new(table: RouteTable, registry: ModuleRegistry, loader: RetryingLoader<F>) -> Self {
        Self {
            table,
            registry,
            loader,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve one navigation to `path` under `session`.
    ///
    /// The module is only fetched once the guard has granted access, so
    /// protected content is never loaded for a denied navigation.
    pub async fn navigate(&self, session: &Session, path: &str) -> Result<Outcome, NavError> {
        let Some(route) = self.table.find(path) else {
            // Unknown path: deny. Evaluating against an empty set yields
            // the same redirect a denied protected route would.
            let decision = guard::evaluate(session, &[]);
            let to = decision.redirect_target().unwrap_or(fabplan_auth::LOGIN_PATH);
            debug!(path, to, "unknown path; redirecting");
            return Ok(Outcome::redirect(to));
        };

        if route.is_public() {
            let module = self.loader.load_named(&self.registry, route.module).await?;
            return Ok(Outcome::Page(RenderedPage {
                path: route.path.to_string(),
                layout: Layout::Default,
                module,
            }));
        }

        match guard::evaluate(session, route.allowed_roles) {
            AccessDecision::RedirectToLogin => {
                debug!(path, "unauthenticated; redirecting to login");
                Ok(Outcome::redirect(fabplan_auth::LOGIN_PATH))
            }
            AccessDecision::Redirect { to } => {
                debug!(path, to, "role denied; redirecting home");
                Ok(Outcome::redirect(to))
            }
            AccessDecision::Grant { role } => {
                let module = self.loader.load_named(&self.registry, route.module).await?;
                Ok(Outcome::Page(RenderedPage {
                    path: route.path.to_string(),
                    layout: Layout::for_role(role),
                    module,
                }))
            }
        }
    }

    /// Post-login background fetch of the role's module subset.
    pub async fn prefetch_for_role(
        &self,
        role: fabplan_auth::Role,
    ) -> Result<Vec<LoadedModule>, NavError> {
        Ok(self.loader.prefetch(&self.registry, role).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use fabplan_auth::{LOGIN_PATH, Role, User};
    use fabplan_core::UserId;
    use fabplan_loader::{FetchError, ModuleSpec, RetryPolicy};

    use super::*;

    #[derive(Default)]
    struct CountingFetcher {
        calls: AtomicU32,
        fail: bool,
    }

    #[async_trait]
    impl ModuleFetcher for &CountingFetcher {
        async fn fetch(&self, spec: &ModuleSpec) -> Result<LoadedModule, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(FetchError::Unavailable(spec.name.to_string()))
            } else {
                Ok(LoadedModule {
                    name: spec.name.to_string(),
                    chunk: spec.chunk.to_string(),
                })
            }
        }
    }

    fn navigator(fetcher: &CountingFetcher) -> Navigator<&CountingFetcher> {
        let policy = RetryPolicy {
            max_attempts: 2,
            delay: Duration::ZERO,
        };
        Navigator::new(
            RouteTable::standard(),
            ModuleRegistry::standard(),
            RetryingLoader::new(fetcher, policy),
        )
    }

    fn session(role: Role) -> Session {
        Session::login(User::new(UserId::new(), role))
    }

    #[tokio::test]
    async fn unauthenticated_protected_path_redirects_to_login() {
        let fetcher = CountingFetcher::default();
        let nav = navigator(&fetcher);

        let outcome = nav
            .navigate(&Session::anonymous(), "/inventory")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Redirect {
                to: LOGIN_PATH.to_string(),
                replace: true
            }
        );
        // Denied navigation must not touch the loader.
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn employee_denied_admin_home_redirects_to_employee_home() {
        let fetcher = CountingFetcher::default();
        let nav = navigator(&fetcher);

        let outcome = nav
            .navigate(&session(Role::Employee), "/admin-home")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Redirect {
                to: "/employee-home".to_string(),
                replace: true
            }
        );
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn admin_settings_renders_in_admin_layout() {
        let fetcher = CountingFetcher::default();
        let nav = navigator(&fetcher);

        let outcome = nav
            .navigate(&session(Role::Admin), "/settings")
            .await
            .unwrap();
        let Outcome::Page(page) = outcome else {
            panic!("expected a rendered page");
        };
        assert_eq!(page.path, "/settings");
        assert_eq!(page.layout, Layout::Admin);
        assert_eq!(page.module.name, "settings");
    }

    #[tokio::test]
    async fn login_is_public_with_default_layout() {
        let fetcher = CountingFetcher::default();
        let nav = navigator(&fetcher);

        let outcome = nav
            .navigate(&Session::anonymous(), LOGIN_PATH)
            .await
            .unwrap();
        let Outcome::Page(page) = outcome else {
            panic!("expected a rendered page");
        };
        assert_eq!(page.layout, Layout::Default);
        assert_eq!(page.module.name, "login");
    }

    #[tokio::test]
    async fn unknown_path_redirects_by_role() {
        let fetcher = CountingFetcher::default();
        let nav = navigator(&fetcher);

        let outcome = nav
            .navigate(&session(Role::Maintenance), "/payroll")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Redirect {
                to: "/maintenance-home".to_string(),
                replace: true
            }
        );

        let outcome = nav.navigate(&Session::anonymous(), "/payroll").await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Redirect {
                to: LOGIN_PATH.to_string(),
                replace: true
            }
        );
    }

    #[tokio::test]
    async fn exhausted_load_surfaces_as_nav_error() {
        let fetcher = CountingFetcher {
            calls: AtomicU32::new(0),
            fail: true,
        };
        let nav = navigator(&fetcher);

        let err = nav
            .navigate(&session(Role::Admin), "/settings")
            .await
            .unwrap_err();
        assert!(matches!(err, NavError::ModuleLoad(LoadError::Exhausted { .. })));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn guard_reevaluates_on_every_navigation() {
        let fetcher = CountingFetcher::default();
        let nav = navigator(&fetcher);

        // Same path, fresh decision per session value: logout takes effect
        // immediately, no cached grant.
        let admin = session(Role::Admin);
        assert!(matches!(
            nav.navigate(&admin, "/settings").await.unwrap(),
            Outcome::Page(_)
        ));
        assert!(matches!(
            nav.navigate(&Session::anonymous(), "/settings").await.unwrap(),
            Outcome::Redirect { .. }
        ));
    }
}
