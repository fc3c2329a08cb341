//! Comment endpoints of the remote news API

use async_trait::async_trait;
use newsroom_domain::{
    comment::{Comment, CommentBody, CommentId},
    post::PostId,
    user::Username,
};
use reqwest::Method;

use super::{
    client_impl::NewsApiClientImpl,
    error::ApiError,
    response::{handle_empty_response, handle_response},
    types::{CommentDto, CommentRequest},
};

fn comment_not_found(id: CommentId) -> Option<ApiError> {
    Some(ApiError::NotFound(format!("comment {id}")))
}

#[async_trait]
pub trait NewsApiCommentClient: Send + Sync {
    /// `GET /comments/{postId}`
    async fn comments_for(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError>;

    /// `POST /comments`
    async fn create_comment(
        &self,
        post_id: PostId,
        body: &CommentBody,
        author: &Username,
    ) -> Result<Comment, ApiError>;

    /// `PATCH /comments/{id}` with the comment's current text
    async fn update_comment(&self, comment: &Comment) -> Result<Comment, ApiError>;

    /// `DELETE /comments/{id}`
    async fn delete_comment(&self, id: CommentId) -> Result<(), ApiError>;
}

#[async_trait]
impl NewsApiCommentClient for NewsApiClientImpl {
    #[tracing::instrument(skip_all, level = "debug", fields(%post_id))]
    async fn comments_for(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        let response = self
            .request(Method::GET, &format!("/comments/{post_id}"))
            .send()
            .await?;
        handle_response::<Vec<CommentDto>>(response, None)
            .await
            .map(|dtos| dtos.into_iter().map(Comment::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%post_id, %author))]
    async fn create_comment(
        &self,
        post_id: PostId,
        body: &CommentBody,
        author: &Username,
    ) -> Result<Comment, ApiError> {
        let request = CommentRequest {
            post_id,
            content: body.as_str().to_string(),
            author: author.clone(),
        };
        let response = self
            .request(Method::POST, "/comments")
            .json(&request)
            .send()
            .await?;
        handle_response::<CommentDto>(response, None)
            .await
            .map(Comment::from)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %comment.id()))]
    async fn update_comment(&self, comment: &Comment) -> Result<Comment, ApiError> {
        let request = CommentRequest {
            post_id: comment.post_id(),
            content: comment.content().to_string(),
            author:  comment.author().clone(),
        };
        let response = self
            .request(Method::PATCH, &format!("/comments/{}", comment.id()))
            .json(&request)
            .send()
            .await?;
        handle_response::<CommentDto>(response, comment_not_found(comment.id()))
            .await
            .map(Comment::from)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete_comment(&self, id: CommentId) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/comments/{id}"))
            .send()
            .await?;
        handle_empty_response(response, comment_not_found(id)).await
    }
}
