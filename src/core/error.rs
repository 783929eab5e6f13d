//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::users::store::StoreError;

/// 请求处理错误，每个变体对应一个 HTTP 状态码
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("请求体解析失败: {0}")]
    Decode(String),
    #[error("无效的用户 ID: {0:?}")]
    InvalidIdentifier(String),
    #[error("用户 {0} 不存在")]
    NotFound(i64),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
    pub request_id: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) | ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Decode(_) => "DECODE_ERROR",
            ApiError::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            ApiError::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_response = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            request_id: Uuid::new_v4().to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Decode("EOF".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidIdentifier("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound(7).status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_error_conversion() {
        let err: ApiError = StoreError::NotFound(3).into();
        assert!(matches!(err, ApiError::NotFound(3)));
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::NotFound(1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
