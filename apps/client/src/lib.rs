//! # Newsroom client
//!
//! Client for the newsroom article API: authoring, filtering, peer review and
//! notifications, with the route gate applied before every remote call.
//!
//! ## Layout
//!
//! - [`client`]: typed HTTP client for the remote API
//! - [`view`]: one module per screen, each a set of use cases
//! - [`cli`]: the `newsroom` command line front end
//! - [`config`] / [`state`]: wiring from environment variables
//!
//! ```text
//! newsroom CLI ──▶ view (gate + use case) ──▶ client ──▶ remote API
//!                          │
//!                          ▼
//!                   session file
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_utils;
