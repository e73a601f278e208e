//! Shared application state.
//!
//! Contains the state that is shared across the application shell:
//! configuration, the session store, and the navigation guard.

use std::sync::Arc;

use crate::config::ConfigV1;
use crate::guard::NavigationGuard;
use crate::session::SessionStore;

/// Application state handed to anything that needs to establish or clear a
/// session, or to run a navigation through the guard. Built once by
/// `startup::build_app` and cloned freely.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// The session store bridging memory and persistent storage.
    pub session: Arc<SessionStore>,
    /// The per-transition navigation guard.
    pub guard: Arc<NavigationGuard>,
}
