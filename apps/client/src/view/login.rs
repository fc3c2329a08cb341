//! Login and logout

use newsroom_domain::{authz::Route, role::Role, session::Session, user::Username};
use newsroom_shared::{event_log::event, log_business_event};

use crate::{error::AppError, state::AppState};

/// Where a successful login lands
pub const AFTER_LOGIN: Route = Route::Posts;
/// Where a logout lands
pub const AFTER_LOGOUT: Route = Route::Login;

/// Validates the form and stores the session
///
/// Both fields are checked before anything is written, so a rejected login
/// leaves the previous session untouched.
///
/// # Errors
///
/// - `AppError::Validation`: username shorter than 3 characters, unknown role
/// - `AppError::Session`: the session file could not be written
#[tracing::instrument(skip_all, fields(username = %username))]
pub fn login(state: &AppState, username: &str, role: &str) -> Result<Session, AppError> {
    let username = Username::for_login(username)?;
    let role: Role = role.parse()?;

    state.sessions.set_user(username.as_str())?;
    state.sessions.set_role(role.as_str())?;

    log_business_event!(
        event.category = event::category::AUTH,
        event.action = event::action::LOGIN,
        event.entity_type = event::entity_type::SESSION,
        event.actor = %username,
        event.result = event::result::SUCCESS,
        role = role.as_str(),
        "user logged in"
    );

    Ok(Session::new(username, role))
}

/// Clears the session
#[tracing::instrument(skip_all)]
pub fn logout(state: &AppState) -> Result<Route, AppError> {
    let actor = state.sessions.get_user();
    state.sessions.logout()?;

    log_business_event!(
        event.category = event::category::AUTH,
        event.action = event::action::LOGOUT,
        event.entity_type = event::entity_type::SESSION,
        event.actor = actor.as_ref().map(|u| u.as_str()),
        event.result = event::result::SUCCESS,
        "user logged out"
    );

    Ok(AFTER_LOGOUT)
}

/// The current session, if any
pub fn whoami(state: &AppState) -> Option<Session> {
    state.sessions.current()
}
