use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::utils::error::{LookupError, RequestError};

/// Successful response body: `{"http_code": 200, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub http_code: u16,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            http_code: StatusCode::OK.as_u16(),
            data,
        })
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    http_code: u16,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::InvalidFormat { .. } => ApiError::bad_request("Invalid zip code"),
            LookupError::NotFound { .. } => ApiError::not_found("Zip code not found"),
            // 資料本身有問題，不是使用者輸入錯誤
            LookupError::AmbiguousRecord { .. } => {
                ApiError::unprocessable("Multiple records found for zip code")
            }
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::BadRequest { message } => ApiError::bad_request(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("request failed with {}: {}", self.status, self.message);
        } else {
            tracing::debug!("request rejected with {}: {}", self.status, self.message);
        }

        let payload = Json(ErrorResponse {
            success: false,
            http_code: self.status.as_u16(),
            message: self.message,
        });
        (self.status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_map_to_distinct_statuses() {
        let invalid: ApiError = LookupError::InvalidFormat {
            code: "ABCDE".to_string(),
        }
        .into();
        let missing: ApiError = LookupError::NotFound {
            code: "99999".to_string(),
        }
        .into();
        let ambiguous: ApiError = LookupError::AmbiguousRecord {
            code: "78701".to_string(),
            matches: 2,
        }
        .into();

        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(ambiguous.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_request_error_is_bad_request() {
        let err: ApiError = RequestError::bad_request("too many numbers").into();
        assert_eq!(err, ApiError::bad_request("too many numbers"));
    }
}
