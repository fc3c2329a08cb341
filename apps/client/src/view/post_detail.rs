//! Post detail with comments (`/posts/:id`)
//!
//! Open to every logged-in user regardless of the post's status. Comments can
//! be added by anyone who reaches the page; only their author may change or
//! remove them.

use newsroom_domain::{
    authz::Route,
    comment::{Comment, CommentBody, CommentId},
    post::{Post, PostId},
    session::Session,
};
use newsroom_shared::{event_log::event, log_business_event};

use super::enter;
use crate::{client::ApiError, error::AppError, state::AppState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post:     Post,
    pub comments: Vec<Comment>,
}

#[tracing::instrument(skip_all, fields(%post_id))]
pub async fn load(state: &AppState, post_id: PostId) -> Result<PostDetail, AppError> {
    enter(state, Route::PostDetail(post_id))?;

    let post = state.api.get_post(post_id).await?;
    let comments = state.api.comments_for(post_id).await?;
    Ok(PostDetail { post, comments })
}

/// Adds a comment authored by the session user
///
/// Blank text is rejected before any request.
#[tracing::instrument(skip_all, fields(%post_id))]
pub async fn add_comment(state: &AppState, post_id: PostId, text: &str) -> Result<Comment, AppError> {
    let session = enter(state, Route::PostDetail(post_id))?;
    let body = CommentBody::new(text)?;

    let comment = state
        .api
        .create_comment(post_id, &body, session.username())
        .await?;

    log_business_event!(
        event.category = event::category::COMMENT,
        event.action = event::action::COMMENT_CREATED,
        event.entity_type = event::entity_type::COMMENT,
        event.entity_id = %comment.id(),
        event.actor = %session.username(),
        event.result = event::result::SUCCESS,
        post_id = %post_id,
        "comment created"
    );

    Ok(comment)
}

/// Replaces the text of one of the session user's comments
#[tracing::instrument(skip_all, fields(%post_id, %comment_id))]
pub async fn edit_comment(
    state: &AppState,
    post_id: PostId,
    comment_id: CommentId,
    text: &str,
) -> Result<Comment, AppError> {
    let session = enter(state, Route::PostDetail(post_id))?;
    let body = CommentBody::new(text)?;

    let comment = find_comment(state, post_id, comment_id)
        .await?
        .edited(session.username(), body)?;
    let updated = state.api.update_comment(&comment).await?;

    log_comment_event(&session, &updated, event::action::COMMENT_UPDATED);
    Ok(updated)
}

/// Deletes one of the session user's comments
#[tracing::instrument(skip_all, fields(%post_id, %comment_id))]
pub async fn delete_comment(
    state: &AppState,
    post_id: PostId,
    comment_id: CommentId,
) -> Result<(), AppError> {
    let session = enter(state, Route::PostDetail(post_id))?;

    let comment = find_comment(state, post_id, comment_id).await?;
    comment.check_owned_by(session.username())?;
    state.api.delete_comment(comment_id).await?;

    log_comment_event(&session, &comment, event::action::COMMENT_DELETED);
    Ok(())
}

async fn find_comment(
    state: &AppState,
    post_id: PostId,
    comment_id: CommentId,
) -> Result<Comment, AppError> {
    state
        .api
        .comments_for(post_id)
        .await?
        .into_iter()
        .find(|c| c.id() == comment_id)
        .ok_or_else(|| ApiError::NotFound(format!("comment {comment_id}")).into())
}

fn log_comment_event(session: &Session, comment: &Comment, action: &'static str) {
    log_business_event!(
        event.category = event::category::COMMENT,
        event.action = action,
        event.entity_type = event::entity_type::COMMENT,
        event.entity_id = %comment.id(),
        event.actor = %session.username(),
        event.result = event::result::SUCCESS,
        post_id = %comment.post_id(),
        "comment changed"
    );
}
