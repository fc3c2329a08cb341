//! # Newsroom Domain
//!
//! Domain model of the newsroom client: sessions and roles, the post
//! lifecycle, reviews, comments, notifications and the authorization gate.
//!
//! ## Design
//!
//! - **No I/O**: everything here is pure; network and storage live in
//!   `newsroom-infra` and `newsroom-client`
//! - **Closed enums at the edges**: roles and statuses are parsed once and
//!   never travel as free text
//! - **Consuming transitions**: lifecycle methods take `self` and return the
//!   next value or a [`DomainError`]
//!
//! ## Modules
//!
//! - [`authz`]: route table and authorization gate
//! - [`comment`]: comments on posts
//! - [`notification`]: review notifications for post authors
//! - [`post`]: posts, lifecycle and listing filter
//! - [`review`]: review decisions
//! - [`role`]: session roles
//! - [`session`]: logged-in user
//! - [`user`]: usernames

#[macro_use]
mod macros;

pub mod authz;
pub mod comment;
pub mod error;
pub mod notification;
pub mod post;
pub mod review;
pub mod role;
pub mod session;
pub mod user;

pub use error::DomainError;
