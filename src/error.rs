//! Errors surfaced to API clients.
//!
//! Only request validation can fail a request: upstream weather problems are
//! absorbed by synthetic substitution before they reach this layer.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

// ---

#[derive(Debug, Error)]
pub enum ApiError {
    // ---
    #[error("latitude must be between -90 and 90, got {0}")]
    InvalidLatitude(f64),

    #[error("longitude must be between -180 and 180, got {0}")]
    InvalidLongitude(f64),

    #[error("days must be between 1 and {max}, got {got}")]
    InvalidHorizon { got: usize, max: usize },

    /// Query string or body that does not deserialize: missing or
    /// non-numeric coordinates, unsupported language tag, bad JSON.
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    pub code: &'static str,
}

impl ApiError {
    // ---
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidLatitude(_) => "INVALID_LATITUDE",
            ApiError::InvalidLongitude(_) => "INVALID_LONGITUDE",
            ApiError::InvalidHorizon { .. } => "INVALID_DAYS",
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        tracing::info!("Rejected request: {}", self);
        let body = ErrorResponse {
            error: "Validation error".to_string(),
            detail: self.to_string(),
            code: self.code(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Reject coordinates outside the valid ranges. NaN is rejected too.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ApiError> {
    // ---
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ApiError::InvalidLatitude(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ApiError::InvalidLongitude(longitude));
    }
    Ok(())
}

/// Reject forecast horizons outside `1..=max`.
pub fn validate_horizon(days: usize, max: usize) -> Result<(), ApiError> {
    // ---
    if days == 0 || days > max {
        return Err(ApiError::InvalidHorizon { got: days, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_coordinate_ranges() {
        // ---
        assert!(validate_coordinates(90.0, -180.0).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(matches!(
            validate_coordinates(90.5, 0.0),
            Err(ApiError::InvalidLatitude(_))
        ));
        assert!(matches!(
            validate_coordinates(0.0, -180.1),
            Err(ApiError::InvalidLongitude(_))
        ));
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_horizon_range() {
        // ---
        assert!(validate_horizon(1, 5).is_ok());
        assert!(validate_horizon(5, 5).is_ok());
        assert!(validate_horizon(0, 5).is_err());
        assert!(validate_horizon(6, 5).is_err());
    }

    #[test]
    fn test_error_status_and_code() {
        // ---
        let err = ApiError::InvalidLatitude(100.0);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "INVALID_LATITUDE");
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_undeserializable_query_is_invalid_request() {
        // ---
        use axum::extract::{FromRequestParts, Query};
        use axum::http::Request;

        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Params {
            lat: f64,
        }

        let request = Request::builder()
            .uri("/api/weather?lat=abc")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        let rejection = tokio_test::block_on(Query::<Params>::from_request_parts(&mut parts, &()))
            .unwrap_err();

        let err = ApiError::from(rejection);
        assert_eq!(err.code(), "INVALID_REQUEST");
        assert!(err.to_string().contains("lat"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
