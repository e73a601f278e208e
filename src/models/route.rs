use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Access requirement for a route.
///
/// A closed tag instead of an open metadata bag, so the guard's decision
/// table stays exhaustive.
#[derive(Serialize, Deserialize, JsonSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// Reachable without a session.
    Public,
    /// Requires an authenticated session.
    Authenticated,
}

/// A declared navigable path and its access requirement.
#[derive(Serialize, Deserialize, JsonSchema, Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub access: Access,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_tags_round_trip() {
        let route: RouteDescriptor = serde_json::from_str(
            r#"{"path": "/home", "name": "Home", "access": "authenticated"}"#,
        )
        .expect("route should deserialize");
        assert_eq!(route.access, Access::Authenticated);
        assert_eq!(route.path, "/home");

        let json = serde_json::to_string(&route).expect("route should serialize");
        assert!(json.contains(r#""access":"authenticated""#));
    }

    #[test]
    fn test_unknown_access_tag_rejected() {
        let res: Result<RouteDescriptor, _> = serde_json::from_str(
            r#"{"path": "/", "name": "Login", "access": "maybe"}"#,
        );
        assert!(res.is_err(), "open-ended access values must not parse");
    }
}
