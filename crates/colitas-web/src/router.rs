//! Axum router construction.
//!
//! Assembles the JSON API and the HTML pages into a single [`Router`] with
//! CORS and request tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::pages;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- directory landing page
/// - `GET /health` -- load status and record counts
/// - `GET /api/shelters` (alias `/api/albergues`) -- all shelters
/// - `GET /api/shelters/{shelter_id}` -- single shelter
/// - `GET /api/shelters/{shelter_id}/animals/{animal_id}` -- single animal
/// - `GET /api/animals` -- all animals with shelter summaries
/// - `GET /api/veterinarias` -- all veterinary clinics
/// - `GET /shelters/{shelter_id}` (alias `/albergues/{shelter_id}`) -- shelter page
/// - `GET /shelters/{shelter_id}/animals/{animal_id}` -- animal page
///
/// CORS allows any origin: the API is public and read-only.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/shelters/{shelter_id}", get(pages::shelter_page))
        .route("/albergues/{shelter_id}", get(pages::shelter_page))
        .route(
            "/shelters/{shelter_id}/animals/{animal_id}",
            get(pages::animal_page),
        )
        // JSON API
        .route("/health", get(handlers::health))
        .route("/api/shelters", get(handlers::list_shelters))
        .route("/api/albergues", get(handlers::list_shelters))
        .route("/api/shelters/{shelter_id}", get(handlers::get_shelter))
        .route(
            "/api/shelters/{shelter_id}/animals/{animal_id}",
            get(handlers::get_animal),
        )
        .route("/api/animals", get(handlers::list_animals))
        .route("/api/veterinarias", get(handlers::list_veterinarias))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
