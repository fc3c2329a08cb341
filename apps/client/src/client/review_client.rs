//! Review endpoints of the remote news API

use async_trait::async_trait;
use newsroom_domain::{
    post::PostId,
    review::{NewReview, Review},
};
use reqwest::Method;

use super::{
    client_impl::NewsApiClientImpl,
    error::ApiError,
    response::handle_response,
    types::{ReviewDto, ReviewRequest},
};

#[async_trait]
pub trait NewsApiReviewClient: Send + Sync {
    /// `GET /reviews/{postId}`
    async fn review_for(&self, post_id: PostId) -> Result<Review, ApiError>;

    /// `POST /reviews`
    ///
    /// The remote side moves the post to PUBLISHED or REJECTED and records a
    /// notification for the post author.
    async fn submit_review(&self, review: &NewReview) -> Result<Review, ApiError>;
}

#[async_trait]
impl NewsApiReviewClient for NewsApiClientImpl {
    #[tracing::instrument(skip_all, level = "debug", fields(%post_id))]
    async fn review_for(&self, post_id: PostId) -> Result<Review, ApiError> {
        let response = self
            .request(Method::GET, &format!("/reviews/{post_id}"))
            .send()
            .await?;
        handle_response::<ReviewDto>(
            response,
            Some(ApiError::NotFound(format!("review of post {post_id}"))),
        )
        .await
        .map(Review::from)
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(post_id = %review.post_id(), decision = %review.decision())
    )]
    async fn submit_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        let response = self
            .request(Method::POST, "/reviews")
            .json(&ReviewRequest::from(review))
            .send()
            .await?;
        handle_response::<ReviewDto>(response, None)
            .await
            .map(Review::from)
    }
}
