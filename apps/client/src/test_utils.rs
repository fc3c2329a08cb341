//! In-memory stand-ins for the remote API, used by view tests

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use newsroom_domain::{
    comment::{Comment, CommentBody, CommentId},
    notification::Notification,
    post::{NewPost, Post, PostFilter, PostId, PostRecord, PostStatus},
    review::{NewReview, Review, ReviewStatus},
    user::Username,
};
use newsroom_infra::{SessionManager, mock::InMemorySessionStorage};

use crate::{
    client::{ApiError, NewsApiCommentClient, NewsApiPostClient, NewsApiReviewClient},
    state::AppState,
};

#[derive(Default)]
struct StubData {
    posts:         Vec<Post>,
    comments:      Vec<Comment>,
    reviews:       Vec<Review>,
    notifications: Vec<Notification>,
    /// `METHOD /path` of every call, in order
    calls:         Vec<String>,
    filters:       Vec<PostFilter>,
    fail_with:     Option<ApiError>,
}

/// Stub remote API that keeps its data in memory
///
/// Clones share the same data, so a test can keep one handle while the
/// state owns another.
#[derive(Clone, Default)]
pub struct StubApi {
    data: Arc<Mutex<StubData>>,
}

pub fn user(name: &str) -> Username {
    Username::new(name).unwrap()
}

pub fn creation_date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn post(id: i64, author: &str, status: PostStatus) -> Post {
    Post::from_record(PostRecord {
        id: PostId::new(id),
        title: format!("Post {id}"),
        content: format!("Content of post {id}"),
        author: user(author),
        status,
        creation_date: creation_date(1),
    })
}

pub fn comment(id: i64, post_id: i64, author: &str, content: &str) -> Comment {
    Comment::new(CommentId::new(id), PostId::new(post_id), content, user(author))
}

impl StubApi {
    fn data(&self) -> MutexGuard<'_, StubData> {
        self.data.lock().unwrap()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        let mut data = self.data();
        data.calls.push(call);
        match &data.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub fn with_post(self, post: Post) -> Self {
        self.data().posts.push(post);
        self
    }

    pub fn with_comment(self, comment: Comment) -> Self {
        self.data().comments.push(comment);
        self
    }

    pub fn with_review(self, review: Review) -> Self {
        self.data().reviews.push(review);
        self
    }

    pub fn with_notification(self, notification: Notification) -> Self {
        self.data().notifications.push(notification);
        self
    }

    /// Every call fails with `err` (after being recorded)
    pub fn failing_with(self, err: ApiError) -> Self {
        self.data().fail_with = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.data().calls.clone()
    }

    pub fn filters(&self) -> Vec<PostFilter> {
        self.data().filters.clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.data().posts.clone()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.data().comments.clone()
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.data().reviews.clone()
    }

    fn find_post(&self, id: PostId) -> Result<Post, ApiError> {
        self.data()
            .posts
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("post {id}")))
    }

    fn replace_post(&self, post: Post) {
        let mut data = self.data();
        if let Some(slot) = data.posts.iter_mut().find(|p| p.id() == post.id()) {
            *slot = post;
        }
    }
}

#[async_trait]
impl NewsApiPostClient for StubApi {
    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, ApiError> {
        self.record("GET /posts".to_string())?;
        self.data().filters.push(filter.clone());
        Ok(self
            .posts()
            .into_iter()
            .filter(|p| filter.author().is_none_or(|a| p.author() == a))
            .filter(|p| filter.status().is_none_or(|s| p.status() == s))
            .filter(|p| filter.content().is_none_or(|c| p.content().contains(c)))
            .collect())
    }

    async fn get_post(&self, id: PostId) -> Result<Post, ApiError> {
        self.record(format!("GET /posts/{id}"))?;
        self.find_post(id)
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<Post, ApiError> {
        self.record("POST /posts".to_string())?;
        let id = self.data().posts.len() as i64 + 1;
        let created = Post::from_record(PostRecord {
            id:            PostId::new(id),
            title:         new_post.title().to_string(),
            content:       new_post.content().to_string(),
            author:        new_post.author().clone(),
            status:        new_post.status(),
            creation_date: creation_date(2),
        });
        self.data().posts.push(created.clone());
        Ok(created)
    }

    async fn update_post(&self, post: &Post) -> Result<Post, ApiError> {
        self.record(format!("PUT /posts/{}", post.id()))?;
        self.find_post(post.id())?;
        self.replace_post(post.clone());
        Ok(post.clone())
    }

    async fn list_posts_by_status(&self, status: PostStatus) -> Result<Vec<Post>, ApiError> {
        self.record(format!("GET /posts/status/{status}"))?;
        Ok(self
            .posts()
            .into_iter()
            .filter(|p| p.status() == status)
            .collect())
    }

    async fn update_status(&self, id: PostId, status: PostStatus) -> Result<Post, ApiError> {
        self.record(format!("PATCH /posts/{id}/status"))?;
        let current = self.find_post(id)?;
        let updated = Post::from_record(PostRecord {
            id:            current.id(),
            title:         current.title().to_string(),
            content:       current.content().to_string(),
            author:        current.author().clone(),
            status,
            creation_date: current.creation_date(),
        });
        self.replace_post(updated.clone());
        Ok(updated)
    }

    async fn notifications_for(&self, author: &Username) -> Result<Vec<Notification>, ApiError> {
        self.record(format!("GET /posts/notifications/{author}"))?;
        Ok(self
            .data()
            .notifications
            .iter()
            .filter(|n| n.post_author() == author)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl NewsApiCommentClient for StubApi {
    async fn comments_for(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        self.record(format!("GET /comments/{post_id}"))?;
        Ok(self
            .comments()
            .into_iter()
            .filter(|c| c.post_id() == post_id)
            .collect())
    }

    async fn create_comment(
        &self,
        post_id: PostId,
        body: &CommentBody,
        author: &Username,
    ) -> Result<Comment, ApiError> {
        self.record("POST /comments".to_string())?;
        let id = self.data().comments.len() as i64 + 1;
        let created = Comment::new(CommentId::new(id), post_id, body.as_str(), author.clone());
        self.data().comments.push(created.clone());
        Ok(created)
    }

    async fn update_comment(&self, comment: &Comment) -> Result<Comment, ApiError> {
        self.record(format!("PATCH /comments/{}", comment.id()))?;
        let mut data = self.data();
        let slot = data
            .comments
            .iter_mut()
            .find(|c| c.id() == comment.id())
            .ok_or_else(|| ApiError::NotFound(format!("comment {}", comment.id())))?;
        *slot = comment.clone();
        Ok(comment.clone())
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), ApiError> {
        self.record(format!("DELETE /comments/{id}"))?;
        self.data().comments.retain(|c| c.id() != id);
        Ok(())
    }
}

#[async_trait]
impl NewsApiReviewClient for StubApi {
    async fn review_for(&self, post_id: PostId) -> Result<Review, ApiError> {
        self.record(format!("GET /reviews/{post_id}"))?;
        self.reviews()
            .into_iter()
            .rev()
            .find(|r| r.post_id() == post_id)
            .ok_or_else(|| ApiError::NotFound(format!("review of post {post_id}")))
    }

    async fn submit_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.record("POST /reviews".to_string())?;
        let stored = Review::new(
            review.post_id(),
            review.reason(),
            review.post_author().clone(),
            review.reviewer().clone(),
            review.decision(),
        );
        let post = self.find_post(review.post_id())?;
        let status = match review.decision() {
            ReviewStatus::Accepted => PostStatus::Published,
            ReviewStatus::Rejected => PostStatus::Rejected,
        };
        self.replace_post(Post::from_record(PostRecord {
            id: post.id(),
            title: post.title().to_string(),
            content: post.content().to_string(),
            author: post.author().clone(),
            status,
            creation_date: post.creation_date(),
        }));
        let mut data = self.data();
        data.reviews.push(stored.clone());
        data.notifications.push(Notification::new(
            format!("Post {} was {}", review.post_id(), review.decision()),
            review.reviewer().clone(),
            review.post_author().clone(),
        ));
        Ok(stored)
    }
}

fn state_with_storage(storage: InMemorySessionStorage, api: StubApi) -> AppState {
    AppState::new(
        Arc::new(SessionManager::new(Arc::new(storage))),
        Arc::new(api),
    )
}

/// State whose session storage already holds `user` / `role` (raw values)
pub fn state_with_session(user: &str, role: &str, api: StubApi) -> AppState {
    state_with_storage(InMemorySessionStorage::with_session(user, role), api)
}

pub fn state_without_session(api: StubApi) -> AppState {
    state_with_storage(InMemorySessionStorage::new(), api)
}
