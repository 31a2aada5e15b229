//! # Client state for the food-delivery app
//!
//! What the views sit on top of:
//!
//! - [`SessionStore`]: the signed-in identity (token, user, and a vendor's
//!   restaurant), mirrored into an injected [`store::KeyValueStore`].
//! - [`Route`] and [`resolve`]: the route table, plus the navigation guard
//!   that checks each route's required role against the session.
//! - [`open_session`]: wires a platform store, the API client and a
//!   restored session together at startup.

mod error;
pub use error::SessionError;

mod session;
pub use session::{SessionState, SessionStore, RESTAURANT_KEY, SESSION_KEYS, TOKEN_KEY, USER_KEY};

mod routes;
pub use routes::{Route, RouteEntry, ROUTE_TABLE};

mod navigation;
pub use navigation::{guard, resolve, AccessDenied, Navigation};

mod platform;
pub use platform::{open_session, platform_store};
