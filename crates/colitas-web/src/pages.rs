//! Server-rendered HTML page handlers.
//!
//! Lookups go through the query service; the resulting records are handed
//! to the [`Renderer`](crate::render::Renderer). A missing shelter or
//! animal renders the not-found page with status 404. A malformed ID is a
//! client error and is answered by [`WebError`].

// Axum handlers are async even when they never await.
#![allow(clippy::unused_async)]

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::WebError;
use crate::state::AppState;

/// Directory landing page.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let html = state.renderer.render_index(state.query.shelters())?;
    Ok(Html(html))
}

/// Shelter detail page.
pub async fn shelter_page(
    State(state): State<Arc<AppState>>,
    Path(shelter_id): Path<String>,
) -> Result<Response, WebError> {
    match state.query.shelter(&shelter_id)? {
        Some(shelter) => Ok(Html(state.renderer.render_shelter(shelter)?).into_response()),
        None => not_found_page(&state, "Albergue no encontrado"),
    }
}

/// Animal detail page.
pub async fn animal_page(
    State(state): State<Arc<AppState>>,
    Path((shelter_id, animal_id)): Path<(String, String)>,
) -> Result<Response, WebError> {
    match state.query.animal(&shelter_id, &animal_id)? {
        Some(found) => {
            let html = state.renderer.render_animal(found.shelter, found.animal)?;
            Ok(Html(html).into_response())
        }
        None => not_found_page(&state, "Animal no encontrado"),
    }
}

/// Render the not-found page with a 404 status.
fn not_found_page(state: &AppState, message: &str) -> Result<Response, WebError> {
    let html = state.renderer.render_not_found(message)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
