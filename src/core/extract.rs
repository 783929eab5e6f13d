//! 自定义提取器
//!
//! 把 axum 默认的提取失败统一转换为 [`ApiError`]，保证错误响应格式一致。

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON 请求体
///
/// 不检查 `Content-Type`，任何读取或解析失败都视为 [`ApiError::Decode`]。
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Decode(rejection.body_text()))?;

        let value =
            serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))?;

        Ok(JsonBody(value))
    }
}

/// 路径中的整数用户 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidIdentifier(rejection.body_text()))?;

        raw.parse::<i64>()
            .map(UserId)
            .map_err(|_| ApiError::InvalidIdentifier(raw))
    }
}
