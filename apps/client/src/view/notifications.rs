//! Review notifications for the session user (`/notifications`)

use newsroom_domain::{authz::Route, notification::Notification};

use super::enter;
use crate::{error::AppError, state::AppState};

/// Notifications about the session user's posts, newest first
#[tracing::instrument(skip_all)]
pub async fn list(state: &AppState) -> Result<Vec<Notification>, AppError> {
    let session = enter(state, Route::Notifications)?;

    let mut notifications = state.api.notifications_for(session.username()).await?;
    notifications.reverse();
    Ok(notifications)
}
