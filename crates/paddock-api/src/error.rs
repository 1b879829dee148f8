use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paddock_core::PaddockError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<PaddockError> for ApiError {
    fn from(err: PaddockError) -> Self {
        match err {
            PaddockError::RaceNotFound { race_id } => {
                Self::not_found(format!("Race not found: {}", race_id))
            }
            PaddockError::InvalidRequest { reason } => Self::bad_request(reason),
            // Client errors from the prediction service are passed through
            PaddockError::Upstream { status, detail } if (400..500).contains(&status) => Self {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
                message: detail,
                details: None,
            },
            PaddockError::Upstream { status, detail } => Self::bad_gateway(detail)
                .with_details(format!("Prediction service returned {}", status)),
            PaddockError::ServiceUnavailable { reason, remediation } => {
                Self::bad_gateway("Prediction service unavailable")
                    .with_details(format!("{}. Try: {}", reason, remediation))
            }
            other => Self::internal("Internal error").with_details(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_client_error_passes_through() {
        let err: ApiError = PaddockError::Upstream {
            status: 422,
            detail: "race_date must be ISO".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "race_date must be ISO");
    }

    #[test]
    fn test_upstream_server_error_is_bad_gateway() {
        let err: ApiError = PaddockError::Upstream {
            status: 500,
            detail: "Failed to get prediction".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.message, "Failed to get prediction");
    }

    #[test]
    fn test_domain_errors() {
        let err: ApiError = PaddockError::RaceNotFound { race_id: 7 }.into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err: ApiError = PaddockError::InvalidRequest {
            reason: "Please enter a race name or select a race".to_string(),
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
