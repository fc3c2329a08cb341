//! Review queue (`/review`, `/review/:id`)
//!
//! Redacteurs review SUBMITTED posts written by someone else. Accepting
//! publishes the post; rejecting sends it back to its author with a reason.

use newsroom_domain::{
    authz::{Route, authorize_review},
    post::{Post, PostId, PostStatus},
    review::{NewReview, ReviewStatus},
};
use newsroom_shared::{event_log::event, log_business_event};

use super::enter;
use crate::{error::AppError, state::AppState};

/// Where a decision lands
pub const AFTER_DECISION: Route = Route::Review;

/// SUBMITTED posts the session user may review
#[tracing::instrument(skip_all)]
pub async fn list(state: &AppState) -> Result<Vec<Post>, AppError> {
    let session = enter(state, Route::Review)?;

    let posts = state.api.list_posts_by_status(PostStatus::Submitted).await?;
    Ok(posts
        .into_iter()
        .filter(|p| !session.is_author_of(p.author()))
        .collect())
}

#[tracing::instrument(skip_all, fields(%post_id))]
pub async fn show(state: &AppState, post_id: PostId) -> Result<Post, AppError> {
    let session = enter(state, Route::ReviewDetail(post_id))?;

    let post = state.api.get_post(post_id).await?;
    authorize_review(&session, &post)?;
    Ok(post)
}

pub async fn accept(state: &AppState, post_id: PostId) -> Result<Post, AppError> {
    decide(state, post_id, ReviewStatus::Accepted, "").await
}

/// Rejects a post; `reason` must not be blank
pub async fn reject(state: &AppState, post_id: PostId, reason: &str) -> Result<Post, AppError> {
    decide(state, post_id, ReviewStatus::Rejected, reason).await
}

/// Sends the decision and returns the post with its new status
#[tracing::instrument(skip_all, fields(%post_id, %decision))]
async fn decide(
    state: &AppState,
    post_id: PostId,
    decision: ReviewStatus,
    reason: &str,
) -> Result<Post, AppError> {
    let session = enter(state, Route::ReviewDetail(post_id))?;

    let post = state.api.get_post(post_id).await?;
    authorize_review(&session, &post)?;
    let review = NewReview::new(&post, session.username().clone(), decision, reason)?;
    state.api.submit_review(&review).await?;

    let reviewed = post.reviewed(session.username(), decision)?;

    let action = match decision {
        ReviewStatus::Accepted => event::action::REVIEW_ACCEPTED,
        ReviewStatus::Rejected => event::action::REVIEW_REJECTED,
    };
    log_business_event!(
        event.category = event::category::REVIEW,
        event.action = action,
        event.entity_type = event::entity_type::REVIEW,
        event.entity_id = %post_id,
        event.actor = %session.username(),
        event.result = event::result::SUCCESS,
        post_author = %reviewed.author(),
        "review submitted"
    );

    Ok(reviewed)
}
