//! The navigation guard: gates every route transition on authentication
//! status, derived fresh from persistent storage each time.

use std::sync::Arc;

use tracing::debug;

use crate::models::{Access, RouteDescriptor};
use crate::session::SessionStore;
use crate::storage::StorageError;

/// The declared routes, looked up by path.
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        RouteTable { routes }
    }

    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }
}

/// Outcome of a guard check for one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the transition continue to its target.
    Proceed,
    /// Send the transition to the given path instead.
    Redirect(String),
}

/// Intercepts each route transition and allows or redirects it.
///
/// The guard keeps no state of its own between calls: it re-reads the
/// persisted session through the store on every check, so a login or logout
/// performed elsewhere against the same storage is honored immediately.
pub struct NavigationGuard {
    session: Arc<SessionStore>,
    table: RouteTable,
    login_route: String,
}

impl NavigationGuard {
    pub fn new(session: Arc<SessionStore>, table: RouteTable, login_route: String) -> Self {
        NavigationGuard {
            session,
            table,
            login_route,
        }
    }

    /// Decide one navigation attempt from `from` to `to`.
    ///
    /// Routes missing from the table are passed through unchanged; whatever
    /// the routing layer does with an unknown path is its own business.
    pub fn check(&self, from: &str, to: &str) -> Result<GuardDecision, StorageError> {
        self.session.initialize()?;

        let access = self.table.find(to).map(|route| route.access);
        let decision = match access {
            Some(Access::Authenticated) if !self.session.is_authenticated() => {
                GuardDecision::Redirect(self.login_route.clone())
            }
            Some(_) | None => GuardDecision::Proceed,
        };
        debug!("Navigation {} -> {}: {:?}", from, to, decision);
        Ok(decision)
    }
}
