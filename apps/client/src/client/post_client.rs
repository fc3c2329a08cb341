//! Post endpoints of the remote news API

use async_trait::async_trait;
use newsroom_domain::{
    notification::Notification,
    post::{NewPost, Post, PostFilter, PostId, PostStatus},
    user::Username,
};
use reqwest::Method;

use super::{
    client_impl::NewsApiClientImpl,
    error::ApiError,
    response::handle_response,
    types::{NotificationDto, PostDto, PostRequest},
};

fn post_not_found(id: PostId) -> Option<ApiError> {
    Some(ApiError::NotFound(format!("post {id}")))
}

fn into_posts(dtos: Vec<PostDto>) -> Vec<Post> {
    dtos.into_iter().map(Post::from).collect()
}

#[async_trait]
pub trait NewsApiPostClient: Send + Sync {
    /// `GET /posts`, sending only the filters that are set
    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, ApiError>;

    /// `GET /posts/{id}`
    async fn get_post(&self, id: PostId) -> Result<Post, ApiError>;

    /// `POST /posts`
    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError>;

    /// `PUT /posts/{id}` with the post's current title, content and status
    async fn update_post(&self, post: &Post) -> Result<Post, ApiError>;

    /// `GET /posts/status/{status}`
    async fn list_posts_by_status(&self, status: PostStatus) -> Result<Vec<Post>, ApiError>;

    /// `PATCH /posts/{id}/status?status=`
    async fn update_status(&self, id: PostId, status: PostStatus) -> Result<Post, ApiError>;

    /// `GET /posts/notifications/{author}`
    async fn notifications_for(&self, author: &Username) -> Result<Vec<Notification>, ApiError>;
}

#[async_trait]
impl NewsApiPostClient for NewsApiClientImpl {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, ApiError> {
        let pairs = filter.query_pairs();
        let mut request = self.request(Method::GET, "/posts");
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        let response = request.send().await?;
        handle_response(response, None).await.map(into_posts)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn get_post(&self, id: PostId) -> Result<Post, ApiError> {
        let response = self
            .request(Method::GET, &format!("/posts/{id}"))
            .send()
            .await?;
        handle_response::<PostDto>(response, post_not_found(id))
            .await
            .map(Post::from)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(author = %post.author()))]
    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        let response = self
            .request(Method::POST, "/posts")
            .json(&PostRequest::from(post))
            .send()
            .await?;
        handle_response::<PostDto>(response, None).await.map(Post::from)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %post.id()))]
    async fn update_post(&self, post: &Post) -> Result<Post, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/posts/{}", post.id()))
            .json(&PostRequest::from(post))
            .send()
            .await?;
        handle_response::<PostDto>(response, post_not_found(post.id()))
            .await
            .map(Post::from)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%status))]
    async fn list_posts_by_status(&self, status: PostStatus) -> Result<Vec<Post>, ApiError> {
        let response = self
            .request(Method::GET, &format!("/posts/status/{}", status.as_str()))
            .send()
            .await?;
        handle_response(response, None).await.map(into_posts)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id, %status))]
    async fn update_status(&self, id: PostId, status: PostStatus) -> Result<Post, ApiError> {
        let response = self
            .request(Method::PATCH, &format!("/posts/{id}/status"))
            .query(&[("status", status.as_str())])
            .send()
            .await?;
        handle_response::<PostDto>(response, post_not_found(id))
            .await
            .map(Post::from)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%author))]
    async fn notifications_for(&self, author: &Username) -> Result<Vec<Notification>, ApiError> {
        let path = format!(
            "/posts/notifications/{}",
            urlencoding::encode(author.as_str())
        );
        let response = self.request(Method::GET, &path).send().await?;
        handle_response::<Vec<NotificationDto>>(response, None)
            .await
            .map(|dtos| dtos.into_iter().map(Notification::from).collect())
    }
}
