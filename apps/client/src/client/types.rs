//! Request and response bodies of the remote news API (camelCase JSON)

use chrono::NaiveDateTime;
use newsroom_domain::{
    comment::{Comment, CommentId},
    notification::Notification,
    post::{NewPost, Post, PostId, PostRecord, PostStatus},
    review::{NewReview, Review, ReviewStatus},
    user::Username,
};
use serde::{Deserialize, Serialize};

// --- Posts ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id:            PostId,
    pub title:         String,
    pub content:       String,
    pub author:        Username,
    pub status:        PostStatus,
    pub creation_date: NaiveDateTime,
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Post::from_record(PostRecord {
            id:            dto.id,
            title:         dto.title,
            content:       dto.content,
            author:        dto.author,
            status:        dto.status,
            creation_date: dto.creation_date,
        })
    }
}

impl From<&Post> for PostDto {
    fn from(post: &Post) -> Self {
        Self {
            id:            post.id(),
            title:         post.title().to_string(),
            content:       post.content().to_string(),
            author:        post.author().clone(),
            status:        post.status(),
            creation_date: post.creation_date(),
        }
    }
}

/// Body of `POST /posts` and `PUT /posts/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub title:   String,
    pub content: String,
    pub author:  Username,
    pub status:  PostStatus,
}

impl From<&NewPost> for PostRequest {
    fn from(post: &NewPost) -> Self {
        Self {
            title:   post.title().to_string(),
            content: post.content().to_string(),
            author:  post.author().clone(),
            status:  post.status(),
        }
    }
}

impl From<&Post> for PostRequest {
    fn from(post: &Post) -> Self {
        Self {
            title:   post.title().to_string(),
            content: post.content().to_string(),
            author:  post.author().clone(),
            status:  post.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub message:     String,
    pub author:      Username,
    pub post_author: Username,
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Notification::new(dto.message, dto.author, dto.post_author)
    }
}

// --- Comments ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id:      CommentId,
    pub post_id: PostId,
    pub content: String,
    pub author:  Username,
}

impl From<CommentDto> for Comment {
    fn from(dto: CommentDto) -> Self {
        Comment::new(dto.id, dto.post_id, dto.content, dto.author)
    }
}

/// Body of `POST /comments` and `PATCH /comments/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub post_id: PostId,
    pub content: String,
    pub author:  Username,
}

// --- Reviews ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub post_id:     PostId,
    /// Null for most acceptances
    #[serde(default)]
    pub reason:      Option<String>,
    pub post_author: Username,
    pub author:      Username,
    pub status:      ReviewStatus,
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Review::new(
            dto.post_id,
            dto.reason.unwrap_or_default(),
            dto.post_author,
            dto.author,
            dto.status,
        )
    }
}

/// Body of `POST /reviews`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub post_id:     PostId,
    pub reason:      String,
    pub post_author: Username,
    pub author:      Username,
    pub status:      ReviewStatus,
}

impl From<&NewReview> for ReviewRequest {
    fn from(review: &NewReview) -> Self {
        Self {
            post_id:     review.post_id(),
            reason:      review.reason().to_string(),
            post_author: review.post_author().clone(),
            author:      review.reviewer().clone(),
            status:      review.decision(),
        }
    }
}
