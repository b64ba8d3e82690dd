//! Game status handlers: list all snapshots, get one by name.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::GameSnapshot;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /games` — Latest snapshot of every configured game.
#[utoipa::path(
    get,
    path = "/api/v1/games",
    tag = "Status",
    summary = "List game status",
    description = "Returns the latest normalized status snapshot of every configured game.",
    responses(
        (status = 200, description = "All game snapshots", body = Vec<GameSnapshot>),
    )
)]
pub async fn list_games(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list().await)
}

/// `GET /games/{name}` — Latest snapshot of one game.
///
/// The body is a one-element array so clients can share parsing with
/// [`list_games`].
///
/// # Errors
///
/// Returns [`GatewayError::GameNotFound`] with the valid names if `name`
/// is not configured.
#[utoipa::path(
    get,
    path = "/api/v1/games/{name}",
    tag = "Status",
    summary = "Get game status",
    description = "Returns the latest snapshot of a single game. Names are case-sensitive.",
    params(
        ("name" = String, Path, description = "Game name as configured"),
    ),
    responses(
        (status = 200, description = "Game snapshot", body = Vec<GameSnapshot>),
        (status = 404, description = "Unknown game; details list valid names", body = ErrorResponse),
    )
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let snapshot = state.store.get(&name).await?;
    Ok(Json(vec![snapshot]))
}

/// Game status routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/{name}", get(get_game))
}
