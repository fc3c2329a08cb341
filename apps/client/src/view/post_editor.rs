//! Post editor (`/myposts/create`, `/myposts/edit/:id`)
//!
//! Saving as draft or submitting for review both land back on `/myposts`.
//! Existing posts can only be edited by their author while DRAFT or REJECTED.

use newsroom_domain::{
    authz::Route,
    post::{EditAction, NewPost, Post, PostContent, PostId},
    session::Session,
};
use newsroom_shared::{event_log::event, log_business_event};

use super::enter;
use crate::{client::ApiError, error::AppError, state::AppState};

/// Where the editor lands after saving
pub const AFTER_SAVE: Route = Route::MyPosts;

/// An existing post opened in the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    pub post:          Post,
    /// Reason of the rejecting review; only loaded for REJECTED posts, and
    /// `None` when no review is stored
    pub review_reason: Option<String>,
}

#[tracing::instrument(skip_all, fields(%post_id))]
pub async fn open(state: &AppState, post_id: PostId) -> Result<EditorForm, AppError> {
    let session = enter(state, Route::EditPost(post_id))?;

    let post = state.api.get_post(post_id).await?;
    post.check_editable_by(session.username())?;

    let review_reason = if post.shows_review_reason() {
        match state.api.review_for(post_id).await {
            Ok(review) => Some(review.reason().to_string()),
            Err(ApiError::NotFound(_)) => None,
            Err(e) => return Err(e.into()),
        }
    } else {
        None
    };

    Ok(EditorForm {
        post,
        review_reason,
    })
}

/// Creates a post as draft or straight into review
#[tracing::instrument(skip_all, fields(?action))]
pub async fn create(
    state: &AppState,
    title: &str,
    content: &str,
    action: EditAction,
) -> Result<Post, AppError> {
    let session = enter(state, Route::CreatePost)?;
    let content = PostContent::new(title, content)?;

    let post = NewPost::new(session.username().clone(), content, action);
    let created = state.api.create_post(&post).await?;

    log_post_event(&session, &created, action, event::action::POST_CREATED);
    Ok(created)
}

/// Saves new content on an existing post
///
/// The post is re-read first so the transition is checked against its
/// current status.
#[tracing::instrument(skip_all, fields(%post_id, ?action))]
pub async fn save(
    state: &AppState,
    post_id: PostId,
    title: &str,
    content: &str,
    action: EditAction,
) -> Result<Post, AppError> {
    let session = enter(state, Route::EditPost(post_id))?;
    let content = PostContent::new(title, content)?;

    let current = state.api.get_post(post_id).await?;
    let edited = current.edited(session.username(), content, action)?;
    let saved = state.api.update_post(&edited).await?;

    log_post_event(&session, &saved, action, event::action::POST_UPDATED);
    Ok(saved)
}

fn log_post_event(session: &Session, post: &Post, action: EditAction, saved_action: &'static str) {
    let action = match action {
        EditAction::SaveDraft => saved_action,
        EditAction::Submit => event::action::POST_SUBMITTED,
    };
    log_business_event!(
        event.category = event::category::POST,
        event.action = action,
        event.entity_type = event::entity_type::POST,
        event.entity_id = %post.id(),
        event.actor = %session.username(),
        event.result = event::result::SUCCESS,
        status = post.status().as_str(),
        "post saved"
    );
}
