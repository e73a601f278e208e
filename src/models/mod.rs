pub mod route;
pub mod session;

pub use route::{Access, RouteDescriptor};
pub use session::SessionState;
