//! # Authorization gate
//!
//! Every view declares the roles it accepts; the gate compares them with the
//! current session before the view does any work.
//!
//! | Session | Route roles | Decision |
//! |---|---|---|
//! | none | any | deny, redirect `/login`, no notice |
//! | role not listed | listed | deny, redirect `/posts`, [`ACCESS_DENIED_NOTICE`] |
//! | role listed / route without roles | | allow |
//!
//! ```rust
//! use newsroom_domain::{
//!     authz::{AccessDecision, Route},
//!     role::Role,
//!     session::Session,
//!     user::Username,
//! };
//!
//! let reader = Session::new(Username::new("alice").unwrap(), Role::Gebruiker);
//! assert_eq!(Route::Posts.authorize(Some(&reader)), AccessDecision::Allow);
//! assert!(Route::MyPosts.authorize(Some(&reader)).is_denied());
//! ```

use std::{fmt, str::FromStr};

use crate::{DomainError, post::{Post, PostId}, role::Role, session::Session};

/// Notice shown when the session role is not accepted by a route
pub const ACCESS_DENIED_NOTICE: &str = "Access denied: Insufficient permissions";

const ALL_ROLES: &[Role] = &[Role::Redacteur, Role::Gebruiker];
const EDITORS: &[Role] = &[Role::Redacteur];

/// Client routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Posts,
    PostDetail(PostId),
    MyPosts,
    CreatePost,
    EditPost(PostId),
    Review,
    ReviewDetail(PostId),
    Notifications,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Posts => "/posts".to_string(),
            Self::PostDetail(id) => format!("/posts/{id}"),
            Self::MyPosts => "/myposts".to_string(),
            Self::CreatePost => "/myposts/create".to_string(),
            Self::EditPost(id) => format!("/myposts/edit/{id}"),
            Self::Review => "/review".to_string(),
            Self::ReviewDetail(id) => format!("/review/{id}"),
            Self::Notifications => "/notifications".to_string(),
        }
    }

    /// Roles accepted by the route; `None` for routes open to everyone
    pub fn required_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::Login => None,
            Self::Posts | Self::PostDetail(_) => Some(ALL_ROLES),
            Self::MyPosts
            | Self::CreatePost
            | Self::EditPost(_)
            | Self::Review
            | Self::ReviewDetail(_)
            | Self::Notifications => Some(EDITORS),
        }
    }

    /// Runs the gate for this route
    pub fn authorize(&self, session: Option<&Session>) -> AccessDecision {
        match self.required_roles() {
            // The login screen stays reachable without a session
            None => AccessDecision::Allow,
            Some(roles) => authorize(session, Some(roles)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = DomainError;

    /// Parses a client path; `/` resolves to the login route
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s
            .trim_end_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        let route = match segments.as_slice() {
            [] | ["login"] => Self::Login,
            ["posts"] => Self::Posts,
            ["posts", id] => Self::PostDetail(id.parse()?),
            ["myposts"] => Self::MyPosts,
            ["myposts", "create"] => Self::CreatePost,
            ["myposts", "edit", id] => Self::EditPost(id.parse()?),
            ["review"] => Self::Review,
            ["review", id] => Self::ReviewDetail(id.parse()?),
            ["notifications"] => Self::Notifications,
            _ => {
                return Err(DomainError::NotFound {
                    entity_type: "Route",
                    id:          s.to_string(),
                });
            }
        };
        Ok(route)
    }
}

/// Gate outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny {
        redirect: Route,
        notice:   Option<&'static str>,
    },
}

impl AccessDecision {
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Deny { .. })
    }
}

/// Compares a session with the roles a route accepts
///
/// A `None` or empty role list only requires a session.
pub fn authorize(session: Option<&Session>, required_roles: Option<&[Role]>) -> AccessDecision {
    let Some(session) = session else {
        return AccessDecision::Deny {
            redirect: Route::Login,
            notice:   None,
        };
    };
    match required_roles {
        Some(roles) if !roles.is_empty() && !roles.contains(&session.role()) => {
            AccessDecision::Deny {
                redirect: Route::Posts,
                notice:   Some(ACCESS_DENIED_NOTICE),
            }
        }
        _ => AccessDecision::Allow,
    }
}

/// Extra check for acting on a post under review
///
/// # Errors
///
/// `DomainError::Forbidden` when the session user wrote the post.
pub fn authorize_review(session: &Session, post: &Post) -> Result<(), DomainError> {
    if session.is_author_of(post.author()) {
        return Err(DomainError::Forbidden(format!(
            "{} cannot review their own post {}",
            session.username(),
            post.id()
        )));
    }
    Ok(())
}
