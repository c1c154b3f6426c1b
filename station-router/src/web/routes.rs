//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{ParkId, PathId, PointId};
use crate::graph::RouteError;
use crate::parks::{
    QueryError, parks_with_at_least_one_path, vertex_set_of_park, vertex_set_of_path,
};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(find_route))
        .route("/parks", get(list_parks))
        .route("/parks/filled", get(list_filled_parks))
        .route("/parks/:id/vertices", get(park_vertices))
        .route("/paths/free", get(list_free_paths))
        .route("/paths/:id/vertices", get(path_vertices))
        .route("/segments", get(list_segments))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Shortest route between two points.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = state
        .router
        .route(PointId(req.from), PointId(req.to))
        .await?;
    Ok(Json(RouteResponse::from_route(&state.station, &route)))
}

/// All parks, in station order.
async fn list_parks(State(state): State<AppState>) -> Json<ParksResponse> {
    let parks = state
        .station
        .parks()
        .iter()
        .map(ParkResult::from_park)
        .collect();
    Json(ParksResponse { parks })
}

/// Parks with at least one path.
async fn list_filled_parks(State(state): State<AppState>) -> Json<ParksResponse> {
    let parks = parks_with_at_least_one_path(&state.station)
        .into_iter()
        .map(ParkResult::from_park)
        .collect();
    Json(ParksResponse { parks })
}

/// Every point touched by the park's paths.
async fn park_vertices(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ParkVerticesResponse>, AppError> {
    let id = ParkId(id);
    let vertices = vertex_set_of_park(&state.station, id)?;
    let park = state.station.park(id).ok_or(QueryError::ParkNotFound(id))?;
    Ok(Json(ParkVerticesResponse::new(
        &state.station,
        park,
        &vertices,
    )))
}

/// Paths that belong to no park.
async fn list_free_paths(State(state): State<AppState>) -> Json<PathsResponse> {
    let paths = state
        .station
        .free_paths()
        .into_iter()
        .map(PathResult::from_path)
        .collect();
    Json(PathsResponse { paths })
}

/// Every point touched by the path's segments.
async fn path_vertices(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PathVerticesResponse>, AppError> {
    let id = PathId(id);
    let vertices = vertex_set_of_path(&state.station, id)?;
    let path = state.station.path(id).ok_or(QueryError::PathNotFound(id))?;
    Ok(Json(PathVerticesResponse::new(
        &state.station,
        path,
        &vertices,
    )))
}

/// All segments, in station order.
async fn list_segments(State(state): State<AppState>) -> Json<SegmentsResponse> {
    let segments = state
        .station
        .segments()
        .iter()
        .map(SegmentResult::from_segment)
        .collect();
    Json(SegmentsResponse { segments })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        let message = e.to_string();
        match e {
            RouteError::InvalidReference(_) => AppError::BadRequest { message },
            RouteError::NotFound { .. } => AppError::NotFound { message },
            RouteError::LengthOverflow { .. } => AppError::Unprocessable { message },
            RouteError::ReconstructionFault { .. } => AppError::Internal { message },
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
