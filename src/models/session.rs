use serde_json::Value;

/// In-memory authentication state owned by the session store.
///
/// The user profile is opaque JSON: this subsystem never looks inside it,
/// it only mirrors it between memory and persistent storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<Value>,
    pub token: Option<String>,
}

impl SessionState {
    /// Populate the state from a restored or freshly issued session.
    pub fn set(&mut self, user: Value, token: String) {
        self.authenticated = true;
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Drop back to the anonymous state.
    pub fn clear(&mut self) {
        self.authenticated = false;
        self.user = None;
        self.token = None;
    }
}
