//! JSON API endpoint handlers.
//!
//! All handlers read from the immutable directory through the
//! [`QueryService`](colitas_directory::QueryService) held in [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/shelters` | All shelters with their animals |
//! | `GET` | `/api/albergues` | Alias of `/api/shelters` |
//! | `GET` | `/api/shelters/{id}` | Single shelter |
//! | `GET` | `/api/shelters/{id}/animals/{animal_id}` | Single animal |
//! | `GET` | `/api/animals` | All animals with their shelter summary |
//! | `GET` | `/api/veterinarias` | All veterinary clinics |
//! | `GET` | `/health` | Load time and record counts |

// Axum handlers are async even when they never await.
#![allow(clippy::unused_async)]

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::WebError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// List every shelter, in load order, with its embedded animals.
pub async fn list_shelters(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, WebError> {
    Ok(Json(serde_json::to_value(state.query.shelters())?))
}

/// List every animal across all shelters.
///
/// Each entry carries the animal's fields plus an `albergue` object with the
/// owning shelter's `id`, `nombre` and `ubicacion`.
pub async fn list_animals(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, WebError> {
    Ok(Json(serde_json::to_value(state.query.animals())?))
}

/// List every veterinary clinic, in load order.
pub async fn list_veterinarias(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, WebError> {
    Ok(Json(serde_json::to_value(state.query.veterinarias())?))
}

// ---------------------------------------------------------------------------
// Single records
// ---------------------------------------------------------------------------

/// Return one shelter by ID.
pub async fn get_shelter(
    State(state): State<Arc<AppState>>,
    Path(shelter_id): Path<String>,
) -> Result<impl IntoResponse, WebError> {
    let shelter = state
        .query
        .shelter(&shelter_id)?
        .ok_or_else(|| WebError::NotFound(format!("shelter {shelter_id}")))?;

    Ok(Json(serde_json::to_value(shelter)?))
}

/// Return one animal of one shelter.
pub async fn get_animal(
    State(state): State<Arc<AppState>>,
    Path((shelter_id, animal_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, WebError> {
    let found = state
        .query
        .animal(&shelter_id, &animal_id)?
        .ok_or_else(|| WebError::NotFound(format!("animal {animal_id} in shelter {shelter_id}")))?;

    Ok(Json(serde_json::to_value(found.animal)?))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report that the directory is loaded, with record counts.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let directory = state.query.directory();
    Json(serde_json::json!({
        "status": "ok",
        "loaded_at": state.loaded_at,
        "shelters": directory.shelter_count(),
        "animals": directory.animal_count(),
        "veterinarias": directory.veterinaria_count(),
    }))
}
