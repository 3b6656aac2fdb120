//! Shared application state for the web server.
//!
//! [`AppState`] is built once, after the directory has loaded, and injected
//! into every handler through Axum's `State` extractor. Nothing in it is
//! mutable, so handlers on any worker thread read it without locks.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use colitas_directory::{Directory, QueryService};

use crate::render::Renderer;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Lookup facade over the loaded directory.
    pub query: QueryService,
    /// Page renderer.
    pub renderer: Arc<Renderer>,
    /// When the directory finished loading.
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    /// Create the state from a loaded directory and a renderer.
    pub fn new(directory: Directory, renderer: Renderer) -> Self {
        Self {
            query: QueryService::new(Arc::new(directory)),
            renderer: Arc::new(renderer),
            loaded_at: Utc::now(),
        }
    }
}
