//! Route table and access predicate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated on every navigation; holds no state of its own. Callers pass the
//! session freshly read from the store so a logout in another component is
//! seen on the next check.
//!
//! Wrong-role access sends the user to their own home page rather than
//! signing them out.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::Session;

/// Every page the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
    Admin,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
        }
    }

    /// Resolve a location path. Unknown paths land on the login page.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/dashboard" => Self::Dashboard,
            "/admin" => Self::Admin,
            _ => Self::Login,
        }
    }

    /// Role needed to view the page; `None` for public pages.
    pub fn required_role(self) -> Option<Role> {
        match self {
            Self::Login => None,
            Self::Dashboard => Some(Role::Employee),
            Self::Admin => Some(Role::Admin),
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Self::Login)
    }

    /// Landing page for a signed-in role.
    pub fn home(role: Role) -> Self {
        match role {
            Role::Employee => Self::Dashboard,
            Role::Admin => Self::Admin,
        }
    }
}

/// Outcome of an access check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Redirect(AppRoute),
}

/// Decide whether a session may view a page requiring `required`.
///
/// No session is always denied, even when no role is required.
pub fn can_access(session: Option<&Session>, required: Option<Role>) -> Access {
    let Some(session) = session else {
        return Access::Redirect(AppRoute::Login);
    };
    match required {
        Some(role) if role != session.role => Access::Redirect(AppRoute::home(session.role)),
        _ => Access::Allowed,
    }
}

/// Access check for navigating to `route`. Public pages are always allowed.
pub fn check_route(route: AppRoute, session: Option<&Session>) -> Access {
    if route.is_public() {
        return Access::Allowed;
    }
    can_access(session, route.required_role())
}
