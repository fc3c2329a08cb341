//! The author's own posts (`/myposts`)

use newsroom_domain::{
    authz::Route,
    post::{Post, PostFilter},
};

use super::enter;
use crate::{error::AppError, state::AppState};

/// Every post of the session user, whatever its status, newest first
#[tracing::instrument(skip_all)]
pub async fn list(state: &AppState) -> Result<Vec<Post>, AppError> {
    let session = enter(state, Route::MyPosts)?;

    let mut posts = state
        .api
        .list_posts(&PostFilter::by_author(session.username().as_str()))
        .await?;
    posts.reverse();
    Ok(posts)
}
