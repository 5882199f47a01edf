//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::debug;

use crate::domain::{DomainError, StationCode};
use crate::service::{FareSortKey, SortOrder};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/journeys/shortest", get(shortest_journey))
        .route("/journeys/alternatives", get(alternative_journeys))
        .route("/stations/suggest", get(suggest_stations))
        .route("/reviews/search", get(search_reviews))
        .route("/fares", get(list_fares))
        .route("/fares/range", get(fares_in_range))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a user-supplied station code or reject the request.
fn parse_code(raw: &str, field: &str) -> Result<StationCode, AppError> {
    StationCode::parse_normalized(raw).map_err(|_| AppError::BadRequest {
        message: format!("invalid {field} station code: {raw}"),
    })
}

/// Reject an explicit result limit of zero. Omitting the limit means "use
/// the configured default"; asking for zero results is a caller mistake.
fn validate_limit(limit: Option<usize>) -> Result<(), AppError> {
    if limit == Some(0) {
        return Err(AppError::BadRequest {
            message: "limit must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Shortest path between two stations.
///
/// An unreachable pair is a 404 with an explanatory message, which callers
/// must treat as a normal outcome; only malformed input is a 400.
async fn shortest_journey(
    State(state): State<AppState>,
    Query(req): Query<ShortestPathQuery>,
) -> Result<Json<PathResult>, AppError> {
    let from = parse_code(&req.from, "origin")?;
    let to = parse_code(&req.to, "destination")?;
    if req.max_stops == Some(0) {
        return Err(AppError::BadRequest {
            message: "max_stops must be at least 1".to_string(),
        });
    }

    let service = state.service.snapshot().await;
    let path = service.shortest(from, to, req.max_stops)?;

    match path {
        Some(path) => Ok(Json(PathResult::from_path(&path, &service))),
        None => Err(AppError::NotFound {
            message: format!("no route from {from} to {to} within the stop bound"),
        }),
    }
}

/// Alternative routes between two stations, cheapest first.
async fn alternative_journeys(
    State(state): State<AppState>,
    Query(req): Query<AlternativesQuery>,
) -> Result<Json<AlternativesResponse>, AppError> {
    let from = parse_code(&req.from, "origin")?;
    let to = parse_code(&req.to, "destination")?;
    validate_limit(req.limit)?;

    let service = state.service.snapshot().await;
    let paths = service.alternatives(from, to, req.limit)?;

    debug!(from = %from, to = %to, routes = paths.len(), "alternatives request");

    let routes = paths
        .iter()
        .map(|p| PathResult::from_path(p, &service))
        .collect();
    Ok(Json(AlternativesResponse { routes }))
}

/// Autocomplete stations and keywords by prefix.
async fn suggest_stations(
    State(state): State<AppState>,
    Query(req): Query<SuggestQuery>,
) -> Result<Json<SuggestResponse>, AppError> {
    validate_limit(req.limit)?;

    let service = state.service.snapshot().await;
    let suggestions = service
        .suggest(req.q.trim(), req.limit)
        .iter()
        .map(SuggestionResult::from_suggestion)
        .collect();
    Ok(Json(SuggestResponse { suggestions }))
}

/// Keyword search over reviews.
async fn search_reviews(
    State(state): State<AppState>,
    Query(req): Query<ReviewSearchQuery>,
) -> Result<Json<ReviewSearchResponse>, AppError> {
    let query = req.q.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest {
            message: "query must not be empty".to_string(),
        });
    }

    let service = state.service.snapshot().await;
    let matches = service
        .reviews_matching(query)
        .iter()
        .map(ReviewMatchResult::from_match)
        .collect();
    Ok(Json(ReviewSearchResponse { matches }))
}

/// Fare listing with caller-chosen sort keys.
async fn list_fares(
    State(state): State<AppState>,
    Query(req): Query<FaresQuery>,
) -> Result<Json<FaresResponse>, AppError> {
    let keys: Vec<FareSortKey> = match &req.sort_by {
        Some(raw) => raw
            .split(',')
            .map(|k| k.trim().parse())
            .collect::<Result<_, _>>()
            .map_err(|message| AppError::BadRequest { message })?,
        None => vec![FareSortKey::Price],
    };
    let order: SortOrder = match &req.order {
        Some(raw) => raw
            .parse()
            .map_err(|message| AppError::BadRequest { message })?,
        None => SortOrder::Ascending,
    };
    validate_limit(req.limit)?;

    let service = state.service.snapshot().await;
    let fares = service.sorted_fares(&keys, order, req.limit);
    Ok(Json(FaresResponse { fares }))
}

/// Fares priced within an inclusive range.
async fn fares_in_range(
    State(state): State<AppState>,
    Query(req): Query<FareRangeQuery>,
) -> Result<Json<FareRangeResponse>, AppError> {
    if !req.min.is_finite() || !req.max.is_finite() || req.min > req.max {
        return Err(AppError::BadRequest {
            message: format!("invalid price range: {} to {}", req.min, req.max),
        });
    }

    let service = state.service.snapshot().await;
    let range = service.fares_in_range(req.min, req.max);
    Ok(Json(FareRangeResponse {
        fares: range.fares,
        skipped: range.skipped,
    }))
}

/// Application-level error, rendered as a JSON body with a matching status.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            // The request named a station the network doesn't know
            DomainError::UnknownStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        debug!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
