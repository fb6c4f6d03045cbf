//! Response types for the Paid Throne API.
//!
//! This module defines the calculation response body, the error response
//! structures and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::Assessment;
use crate::error::EngineError;
use crate::models::{AuditTrace, CalculationResult, HorizonTaxBreakdowns};

/// Response body for a successful calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// Identifier of the stored row.
    pub calculation_id: Uuid,
    /// Version of the engine that produced the figures.
    pub engine_version: String,
    /// The calculated figures.
    #[serde(flatten)]
    pub result: CalculationResult,
    /// Tax breakdown, or `null` when no tax table is in effect.
    pub tax_breakdown: Option<HorizonTaxBreakdowns>,
    /// How each figure was reached.
    pub audit_trace: AuditTrace,
}

impl CalculationResponse {
    /// Builds the response for an assessment stored under `calculation_id`.
    pub fn new(calculation_id: Uuid, assessment: Assessment) -> Self {
        Self {
            calculation_id,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result: assessment.result,
            tax_breakdown: assessment.tax_breakdown,
            audit_trace: assessment.audit_trace,
        }
    }
}

/// Response body for `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown ranking type error response.
    pub fn invalid_ranking_type(value: &str) -> Self {
        Self::with_details(
            "INVALID_RANKING_TYPE",
            format!("Unknown ranking type: {}", value),
            "Expected one of higher_earnings, higher_minutes, lower_minutes",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::TaxTableNotFound { date } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Tax table not found",
                    format!("No tax table in effect on {}", date),
                ),
            },
            EngineError::InvalidProfile { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid field '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::StorageError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage unavailable", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxBreakdown;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_profile_maps_to_validation_error() {
        let engine_error = EngineError::InvalidProfile {
            field: "visits_per_day".to_string(),
            message: "must be between 1 and 5".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert_eq!(api_error.error.details.as_deref(), Some("visits_per_day"));
    }

    #[test]
    fn test_storage_error_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::StorageError {
            message: "disk full".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORAGE_ERROR");
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let errors = [
            EngineError::ConfigNotFound {
                path: "engine.yaml".to_string(),
            },
            EngineError::ConfigParseError {
                path: "engine.yaml".to_string(),
                message: "bad indent".to_string(),
            },
            EngineError::TaxTableNotFound {
                date: chrono::NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            },
        ];

        for engine_error in errors {
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_error.error.code, "CONFIG_ERROR");
        }
    }

    #[test]
    fn test_calculation_response_flattens_result() {
        let zero = TaxBreakdown {
            gross: Decimal::ZERO,
            social_security: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            net: Decimal::ZERO,
        };
        let response = CalculationResponse {
            calculation_id: Uuid::nil(),
            engine_version: "0.1.0".to_string(),
            result: CalculationResult {
                username: "KingJohn123".to_string(),
                daily_minutes_spent: 30,
                monthly_minutes_spent: 600,
                yearly_minutes_spent: 7200,
                daily_earnings: Decimal::new(3000, 2),
                monthly_earnings: Decimal::new(60000, 2),
                yearly_earnings: Decimal::new(720000, 2),
                daily_percentage_of_shift: 6.25,
            },
            tax_breakdown: Some(HorizonTaxBreakdowns {
                daily: zero,
                monthly: zero,
                yearly: zero,
            }),
            audit_trace: AuditTrace::default(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["username"], "KingJohn123");
        assert_eq!(json["daily_earnings"], "30.00");
        assert_eq!(json["tax_breakdown"]["monthly"]["net"], "0");
        assert!(json["audit_trace"]["steps"].is_array());
    }
}
