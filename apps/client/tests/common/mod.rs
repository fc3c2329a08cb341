//! In-process fake of the remote news API
//!
//! Keeps posts, comments, reviews and notifications as JSON values and
//! records every request (method, path, query, `Role` header). `POST /reviews`
//! moves the post to PUBLISHED or REJECTED and adds a notification for its
//! author, like the real service does.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json,
    Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{Next, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use newsroom_client::{client::NewsApiClientImpl, state::AppState};
use newsroom_infra::{FileSessionStorage, SessionManager};
use serde::Deserialize;
use serde_json::{Value, json};
use tempfile::TempDir;

const CREATION_DATE: &str = "2024-05-01T09:00:00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: String,
    pub path:   String,
    pub query:  Option<String>,
    /// `None` when the header was missing, `Some("")` when sent empty
    pub role:   Option<String>,
}

#[derive(Default)]
struct Data {
    posts:         Vec<Value>,
    comments:      Vec<Value>,
    reviews:       Vec<Value>,
    notifications: Vec<Value>,
    requests:      Vec<Recorded>,
    fail_with:     Option<StatusCode>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    data: Arc<Mutex<Data>>,
}

impl FakeApi {
    fn data(&self) -> MutexGuard<'_, Data> {
        self.data.lock().unwrap()
    }

    pub fn with_post(self, id: i64, author: &str, status: &str) -> Self {
        self.data().posts.push(json!({
            "id": id,
            "title": format!("Post {id}"),
            "content": format!("Content of post {id}"),
            "author": author,
            "status": status,
            "creationDate": CREATION_DATE,
        }));
        self
    }

    /// Every request answers `status` from now on
    pub fn fail_with(&self, status: StatusCode) {
        self.data().fail_with = Some(status);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.data().requests.clone()
    }

    pub fn post(&self, id: i64) -> Option<Value> {
        self.data().posts.iter().find(|p| p["id"] == id).cloned()
    }

    pub fn reviews(&self) -> Vec<Value> {
        self.data().reviews.clone()
    }

    /// Starts the server on a random local port and returns its base URL
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind to random port");
        let addr = listener.local_addr().unwrap();
        let app = router(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{addr}")
    }
}

/// A client wired to `base_url`, with its session file in a fresh temp dir
pub fn client_state(base_url: &str) -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let sessions = Arc::new(SessionManager::new(Arc::new(FileSessionStorage::new(
        dir.path().join("session.json"),
    ))));
    let api = Arc::new(NewsApiClientImpl::new(base_url, sessions.clone()));
    (AppState::new(sessions, api), dir)
}

fn router(api: FakeApi) -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post))
        .route("/posts/{id}/status", patch(update_status))
        .route("/posts/status/{status}", get(posts_by_status))
        .route("/posts/notifications/{author}", get(notifications_for))
        .route("/comments", axum::routing::post(create_comment))
        .route(
            "/comments/{id}",
            get(comments_for).patch(update_comment).delete(delete_comment),
        )
        .route("/reviews", axum::routing::post(submit_review))
        .route("/reviews/{post_id}", get(review_for))
        .layer(from_fn_with_state(api.clone(), record))
        .with_state(api)
}

async fn record(State(api): State<FakeApi>, request: Request, next: Next) -> Response {
    let recorded = Recorded {
        method: request.method().to_string(),
        path:   request.uri().path().to_string(),
        query:  request.uri().query().map(str::to_string),
        role:   request
            .headers()
            .get("role")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    let fail_with = {
        let mut data = api.data();
        data.requests.push(recorded);
        data.fail_with
    };
    match fail_with {
        Some(status) => (status, "fake failure").into_response(),
        None => next.run(request).await,
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

fn contains(value: &Value, key: &str, needle: &str) -> bool {
    value[key].as_str().is_some_and(|s| s.contains(needle))
}

async fn list_posts(
    State(api): State<FakeApi>,
    Query(filter): Query<std::collections::HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let posts = api
        .data()
        .posts
        .iter()
        .filter(|p| filter.get("status").is_none_or(|s| p["status"] == *s))
        .filter(|p| filter.get("author").is_none_or(|a| p["author"] == *a))
        .filter(|p| filter.get("content").is_none_or(|c| contains(p, "content", c)))
        .cloned()
        .collect();
    Json(posts)
}

async fn create_post(State(api): State<FakeApi>, Json(mut body): Json<Value>) -> Json<Value> {
    let mut data = api.data();
    body["id"] = json!(data.posts.len() as i64 + 1);
    body["creationDate"] = json!(CREATION_DATE);
    data.posts.push(body.clone());
    Json(body)
}

async fn get_post(State(api): State<FakeApi>, Path(id): Path<i64>) -> Response {
    match api.post(id) {
        Some(post) => Json(post).into_response(),
        None => not_found(),
    }
}

async fn update_post(
    State(api): State<FakeApi>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut data = api.data();
    let Some(post) = data.posts.iter_mut().find(|p| p["id"] == id) else {
        return not_found();
    };
    for key in ["title", "content", "author", "status"] {
        post[key] = body[key].clone();
    }
    Json(post.clone()).into_response()
}

#[derive(Deserialize)]
struct StatusQuery {
    status: String,
}

async fn update_status(
    State(api): State<FakeApi>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> Response {
    let mut data = api.data();
    let Some(post) = data.posts.iter_mut().find(|p| p["id"] == id) else {
        return not_found();
    };
    post["status"] = json!(query.status);
    Json(post.clone()).into_response()
}

async fn posts_by_status(State(api): State<FakeApi>, Path(status): Path<String>) -> Json<Vec<Value>> {
    Json(
        api.data()
            .posts
            .iter()
            .filter(|p| p["status"] == status)
            .cloned()
            .collect(),
    )
}

async fn notifications_for(
    State(api): State<FakeApi>,
    Path(author): Path<String>,
) -> Json<Vec<Value>> {
    Json(
        api.data()
            .notifications
            .iter()
            .filter(|n| n["postAuthor"] == author)
            .cloned()
            .collect(),
    )
}

async fn comments_for(State(api): State<FakeApi>, Path(post_id): Path<i64>) -> Json<Vec<Value>> {
    Json(
        api.data()
            .comments
            .iter()
            .filter(|c| c["postId"] == post_id)
            .cloned()
            .collect(),
    )
}

async fn create_comment(State(api): State<FakeApi>, Json(mut body): Json<Value>) -> Json<Value> {
    let mut data = api.data();
    body["id"] = json!(data.comments.len() as i64 + 1);
    data.comments.push(body.clone());
    Json(body)
}

async fn update_comment(
    State(api): State<FakeApi>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut data = api.data();
    let Some(comment) = data.comments.iter_mut().find(|c| c["id"] == id) else {
        return not_found();
    };
    comment["content"] = body["content"].clone();
    Json(comment.clone()).into_response()
}

async fn delete_comment(State(api): State<FakeApi>, Path(id): Path<i64>) -> StatusCode {
    api.data().comments.retain(|c| c["id"] != id);
    StatusCode::NO_CONTENT
}

async fn submit_review(State(api): State<FakeApi>, Json(review): Json<Value>) -> Response {
    let mut data = api.data();
    let Some(post) = data.posts.iter_mut().find(|p| p["id"] == review["postId"]) else {
        return not_found();
    };
    let accepted = review["status"] == "ACCEPTED";
    post["status"] = json!(if accepted { "PUBLISHED" } else { "REJECTED" });
    let message = format!(
        "Your post \"{}\" was {}",
        post["title"].as_str().unwrap_or_default(),
        if accepted { "published" } else { "rejected" }
    );
    data.notifications.push(json!({
        "message": message,
        "author": review["author"],
        "postAuthor": review["postAuthor"],
    }));
    data.reviews.push(review.clone());
    (StatusCode::CREATED, Json(review)).into_response()
}

async fn review_for(State(api): State<FakeApi>, Path(post_id): Path<i64>) -> Response {
    match api
        .data()
        .reviews
        .iter()
        .rev()
        .find(|r| r["postId"] == post_id)
    {
        Some(review) => Json(review.clone()).into_response(),
        None => not_found(),
    }
}
