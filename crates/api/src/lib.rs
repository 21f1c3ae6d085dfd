//! Anime wallpaper catalog API server library.
//!
//! Exposes config, state, error handling, extractors and routes so the
//! integration tests and the binary entrypoint share the same building blocks.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
