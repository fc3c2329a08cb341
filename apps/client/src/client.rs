//! # Remote news API client
//!
//! Every call carries the `Role` header of the current session.
//!
//! ## Endpoints
//!
//! | Resource | Trait |
//! |---|---|
//! | `/posts`, `/posts/{id}`, `/posts/status/{status}`, `/posts/{id}/status`, `/posts/notifications/{author}` | [`NewsApiPostClient`] |
//! | `/comments`, `/comments/{id}` | [`NewsApiCommentClient`] |
//! | `/reviews`, `/reviews/{postId}` | [`NewsApiReviewClient`] |

mod client_impl;
mod comment_client;
mod error;
mod post_client;
mod response;
mod review_client;
pub mod types;

pub use client_impl::{NewsApiClient, NewsApiClientImpl, ROLE_HEADER};
pub use comment_client::NewsApiCommentClient;
pub use error::ApiError;
pub use post_client::NewsApiPostClient;
pub use review_client::NewsApiReviewClient;
