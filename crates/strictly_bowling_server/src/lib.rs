//! Strictly Bowling server library.
//!
//! Wraps the `strictly_bowling` scoring core in an HTTP service.
//!
//! # Architecture
//!
//! - **Session**: in-memory registry of games keyed by ID
//! - **Server**: axum REST routes over the registry
//! - **Config**: TOML server configuration with CLI overrides
//! - **Scorecard**: plain-text rendering for the command line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod models;
pub mod scorecard;
pub mod server;
pub mod session;

pub use config::{ConfigError, ServerConfig};
pub use server::{API_PREFIX, ApiError, router};
pub use session::{GameSession, SessionError, SessionId, SessionManager};
