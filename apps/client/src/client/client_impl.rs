//! `NewsApiClient` supertrait and the reqwest-backed implementation

use std::sync::Arc;

use newsroom_infra::SessionManager;

use super::{
    comment_client::NewsApiCommentClient,
    post_client::NewsApiPostClient,
    review_client::NewsApiReviewClient,
};

/// Header carrying the session role on every request
pub const ROLE_HEADER: &str = "Role";

/// Remote news API client (supertrait)
///
/// Bundles the per-resource traits; views depend on `Arc<dyn NewsApiClient>`
/// and tests can stub a single resource at a time.
pub trait NewsApiClient: NewsApiPostClient + NewsApiCommentClient + NewsApiReviewClient {}

impl<T> NewsApiClient for T where T: NewsApiPostClient + NewsApiCommentClient + NewsApiReviewClient {}

/// reqwest implementation of [`NewsApiClient`]
#[derive(Clone)]
pub struct NewsApiClientImpl {
    pub(super) base_url: String,
    pub(super) client:   reqwest::Client,
    sessions:            Arc<SessionManager>,
}

impl NewsApiClientImpl {
    /// # Arguments
    ///
    /// - `base_url`: root of the remote API, e.g. `http://localhost:8080/api`
    /// - `sessions`: source of the `Role` header value
    pub fn new(base_url: &str, sessions: Arc<SessionManager>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            sessions,
        }
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a request with the `Role` header of the current session
    ///
    /// The header is always sent; it is empty when nobody is logged in.
    pub(super) fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let role = self.sessions.get_role().map(|role| role.as_str()).unwrap_or_default();
        self.client
            .request(method, self.url(path))
            .header(ROLE_HEADER, role)
    }
}
