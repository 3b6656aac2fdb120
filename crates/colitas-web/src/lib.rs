//! HTTP API and server-rendered pages for the Colitas Felices directory.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **JSON endpoints** listing shelters, animals and veterinary clinics,
//!   plus single-record lookups
//! - **HTML pages** for the directory index, each shelter, and each animal,
//!   rendered with `minijinja`
//! - **Health endpoint** reporting load time and record counts
//!
//! # Architecture
//!
//! The directory is loaded once before the server starts and is never
//! mutated, so handlers share it through an [`Arc`](std::sync::Arc) with no
//! locking. Lookups go through
//! [`QueryService`](colitas_directory::QueryService); rendering goes through
//! [`Renderer`], which only ever sees typed records.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod render;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::WebError;
pub use render::{RenderError, Renderer, Template};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, start_server};
pub use state::AppState;
