//! # Views
//!
//! One module per screen of the newsroom. Each view runs the authorization
//! gate for its route before touching the remote API.
//!
//! | View | Route | Roles |
//! |---|---|---|
//! | [`login`] | `/login` | none |
//! | [`post_list`] | `/posts` | redacteur, gebruiker |
//! | [`post_detail`] | `/posts/:id` | redacteur, gebruiker |
//! | [`my_posts`] | `/myposts` | redacteur |
//! | [`post_editor`] | `/myposts/create`, `/myposts/edit/:id` | redacteur |
//! | [`review`] | `/review`, `/review/:id` | redacteur |
//! | [`notifications`] | `/notifications` | redacteur |

pub mod login;
pub mod my_posts;
pub mod notifications;
pub mod post_detail;
pub mod post_editor;
pub mod post_list;
pub mod review;

use newsroom_domain::{
    authz::{AccessDecision, Route},
    session::Session,
};
use newsroom_shared::{event_log::event, log_business_event};

use crate::{error::AppError, state::AppState};

/// Runs the gate for `route` and returns the session that passed it
pub(crate) fn enter(state: &AppState, route: Route) -> Result<Session, AppError> {
    let session = state.sessions.current();
    let denied = |redirect: Route, notice: Option<&'static str>| {
        log_business_event!(
            event.category = event::category::AUTH,
            event.action = event::action::ACCESS_DENIED,
            event.entity_type = event::entity_type::SESSION,
            event.actor = session.as_ref().map(|s| s.username().as_str()),
            event.result = event::result::FAILURE,
            route = %route,
            redirect = %redirect,
            "access denied"
        );
        AppError::AccessDenied { redirect, notice }
    };

    match route.authorize(session.as_ref()) {
        AccessDecision::Deny { redirect, notice } => Err(denied(redirect, notice)),
        AccessDecision::Allow => session.clone().ok_or_else(|| denied(Route::Login, None)),
    }
}
