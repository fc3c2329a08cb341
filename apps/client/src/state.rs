//! Shared state handed to every view

use std::sync::Arc;

use newsroom_infra::{FileSessionStorage, SessionManager};

use crate::{
    client::{NewsApiClient, NewsApiClientImpl},
    config::ClientConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub api:      Arc<dyn NewsApiClient>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionManager>, api: Arc<dyn NewsApiClient>) -> Self {
        Self { sessions, api }
    }

    /// Wires the file-backed session and the HTTP client from configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        let sessions = Arc::new(SessionManager::new(Arc::new(FileSessionStorage::new(
            config.session_file.clone(),
        ))));
        let api = Arc::new(NewsApiClientImpl::new(&config.api_url, sessions.clone()));
        Self::new(sessions, api)
    }
}
