//! OpenAPI document for the REST API.

use utoipa::OpenApi;

use super::handlers::{status, system};
use crate::domain::{GameSnapshot, NormalizedEvent, NormalizedUpdate, RegionSnapshot};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "riot-status-gateway"),
    paths(status::list_games, status::get_game, system::health_handler),
    components(schemas(
        GameSnapshot,
        RegionSnapshot,
        NormalizedEvent,
        NormalizedUpdate,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Status", description = "Normalized game status snapshots"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;
