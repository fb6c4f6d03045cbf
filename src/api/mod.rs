//! HTTP API module for the Paid Throne engine.
//!
//! This module provides the REST endpoints for calculating break-time
//! earnings and reading kingdom statistics and rankings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{build_cors_layer, create_router};
pub use request::{CalculationRequest, RankingQuery};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, HealthResponse};
pub use state::AppState;
