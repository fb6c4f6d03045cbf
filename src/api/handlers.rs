//! HTTP request handlers for the Paid Throne API.
//!
//! This module contains the handler functions for all API endpoints and the
//! router that mounts them.

use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate, assess_profile, rank, rank_all};
use crate::error::EngineError;
use crate::models::{
    CalculationResult, KingdomStatistics, Profile, RankingCriterion, RankingEntry, Rankings,
    StoredResult,
};
use crate::validation::validate_profile;

use super::request::{CalculationRequest, RankingQuery};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, HealthResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/calculate", post(calculate_handler))
        .route("/v1/statistic", get(statistic_handler))
        .route("/v1/ranking", get(ranking_handler))
        .route("/v1/rankings", get(rankings_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer())
        .with_state(state)
}

/// Builds the CORS layer: any origin, method and header, cached for an hour.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /v1/calculate endpoint.
///
/// Validates the profile, assesses it and returns the figures. The stored
/// row is queued for writing after the response is built; a failed write
/// never changes the response.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let profile: Profile = request.into();
    let config = state.config();

    if let Err(err) = validate_profile(&profile, config.limits()) {
        warn!(
            correlation_id = %correlation_id,
            username = %profile.username,
            error = %err,
            "Profile rejected"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let today = Utc::now().date_naive();
    let tax_table = match config.get_tax_table(today) {
        Ok(table) => Some(table),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Tax breakdown omitted"
            );
            None
        }
    };

    let start_time = Instant::now();
    let assessment = assess_profile(&profile, tax_table);
    let duration = start_time.elapsed();

    let calculation_id = Uuid::new_v4();
    let stored = StoredResult::with_id(calculation_id, assessment.result.clone());
    let response = CalculationResponse::new(calculation_id, assessment);

    info!(
        correlation_id = %correlation_id,
        calculation_id = %calculation_id,
        username = %profile.username,
        daily_minutes = response.result.daily_minutes_spent,
        daily_earnings = %response.result.daily_earnings,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    state.queue().submit(stored);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /v1/statistic endpoint.
async fn statistic_handler(
    State(state): State<AppState>,
) -> Result<Json<KingdomStatistics>, ApiErrorResponse> {
    let results = load_results(&state).await?;
    let stats = aggregate(&results);

    info!(
        total_submissions = stats.total_submissions,
        "Kingdom statistics computed"
    );
    Ok(Json(stats))
}

/// Handler for GET /v1/ranking endpoint.
///
/// The criterion is given as `?type=higher_earnings`, `higher_minutes` or
/// `lower_minutes`.
async fn ranking_handler(
    State(state): State<AppState>,
    query: Result<Query<RankingQuery>, QueryRejection>,
) -> Result<Json<Vec<RankingEntry>>, ApiErrorResponse> {
    let Query(query) = query.map_err(|rejection| {
        ApiErrorResponse::bad_request(ApiError::with_details(
            "INVALID_RANKING_TYPE",
            "Invalid ranking query",
            rejection.body_text(),
        ))
    })?;

    let name = query.ranking_type.unwrap_or_default();
    let Some(criterion) = RankingCriterion::from_name(&name) else {
        warn!(ranking_type = %name, "Unknown ranking type");
        return Err(ApiErrorResponse::bad_request(ApiError::invalid_ranking_type(
            &name,
        )));
    };

    let results = load_results(&state).await?;
    Ok(Json(rank(&results, criterion)))
}

/// Handler for GET /v1/rankings endpoint.
async fn rankings_handler(
    State(state): State<AppState>,
) -> Result<Json<Rankings>, ApiErrorResponse> {
    let results = load_results(&state).await?;
    Ok(Json(rank_all(&results)))
}

/// Reads every stored result on the blocking pool.
async fn load_results(state: &AppState) -> Result<Vec<CalculationResult>, ApiErrorResponse> {
    let store = state.store();
    let loaded = tokio::task::spawn_blocking(move || store.load_all())
        .await
        .map_err(|err| EngineError::StorageError {
            message: err.to_string(),
        })
        .and_then(|result| result);

    match loaded {
        Ok(rows) => Ok(rows.into_iter().map(|row| row.result).collect()),
        Err(err) => {
            warn!(error = %err, "Failed to read stored results");
            Err(err.into())
        }
    }
}
