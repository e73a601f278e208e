//! Application startup.
//!
//! This module wires the storage backend, session store, routing table, and
//! navigation guard together, and restores any persisted session.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ConfigV1;
use crate::guard::{GuardDecision, NavigationGuard, RouteTable};
use crate::session::SessionStore;
use crate::state::AppState;
use crate::storage::{create_storage, Storage, StorageError};

/// Build the application state: storage backend, session store (with any
/// persisted session restored), and navigation guard.
pub fn build_app(config: Arc<ConfigV1>) -> Result<AppState, StorageError> {
    let storage = create_storage(&config.storage)?;
    if !storage.is_durable() {
        warn!("Storage backend is not durable; sessions will not survive a restart.");
    }

    let session = Arc::new(SessionStore::new(storage));
    session.initialize()?;

    let guard = Arc::new(NavigationGuard::new(
        session.clone(),
        RouteTable::new(config.routes.clone()),
        config.login_route.clone(),
    ));

    Ok(AppState {
        config,
        session,
        guard,
    })
}

/// Binary entrypoint: bootstrap the shell and report the session status and
/// the guard decision for every declared route.
pub fn run(config: Arc<ConfigV1>) -> Result<(), StorageError> {
    let state = build_app(config)?;

    if state.session.is_authenticated() {
        info!("Restored a persisted session.");
    } else {
        info!("No persisted session; starting anonymous.");
    }

    for route in &state.config.routes {
        match state.guard.check(&state.config.login_route, &route.path)? {
            GuardDecision::Proceed => {
                info!("Route '{}' ({}): accessible", route.name, route.path);
            }
            GuardDecision::Redirect(target) => {
                info!(
                    "Route '{}' ({}): redirects to {}",
                    route.name, route.path, target
                );
            }
        }
    }

    Ok(())
}
