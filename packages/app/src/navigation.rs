//! Navigation guard.
//!
//! [`guard`] is a pure function of the target route and the current session,
//! evaluated on every navigation. [`resolve`] adds path parsing and the static
//! redirects in front of it.

use api::Role;
use thiserror::Error;
use tracing::{debug, warn};

use crate::routes::Route;
use crate::session::SessionState;

/// Shown to the user when their role may not open a route.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("You do not have permission to access this section.")]
pub struct AccessDenied {
    pub required: Role,
    /// `None` when the session has a token but no readable user.
    pub actual: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allow(Route),
    Redirect {
        to: Route,
        notice: Option<AccessDenied>,
    },
    NotFound,
}

/// Decide whether `target` may be opened with `session`.
pub fn guard(target: &Route, session: &SessionState) -> Navigation {
    let Some(required) = target.required_role() else {
        return Navigation::Allow(target.clone());
    };

    if !session.is_authenticated() {
        debug!("Not signed in, redirecting {} to login", target);
        return Navigation::Redirect {
            to: Route::Login,
            notice: None,
        };
    }

    let actual = session.role();
    if actual != Some(required) {
        warn!(
            "Access denied to {}: requires {} but user is {}",
            target,
            required,
            actual.map(|r| r.as_str()).unwrap_or("unknown")
        );
        return Navigation::Redirect {
            to: Route::Home,
            notice: Some(AccessDenied { required, actual }),
        };
    }

    Navigation::Allow(target.clone())
}

/// Parse `path`, follow static redirects, then run the guard.
pub fn resolve(path: &str, session: &SessionState) -> Navigation {
    let Some(route) = Route::parse(path) else {
        debug!("No route for {}", path);
        return Navigation::NotFound;
    };

    match route.redirect() {
        Some(to) => Navigation::Redirect { to, notice: None },
        None => guard(&route, session),
    }
}
