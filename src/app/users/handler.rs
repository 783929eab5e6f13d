//! 用户处理器

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use super::model::{User, UserPayload};
use crate::app::AppState;
use crate::core::{
    error::ApiError,
    extract::{JsonBody, UserId},
};

/// 获取所有用户
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list())
}

/// 创建新用户
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Option<UserPayload>>,
) -> (StatusCode, Json<User>) {
    let user = state.store.create(payload.unwrap_or_default());
    info!("用户创建成功: {}", user.id);
    (StatusCode::CREATED, Json(user))
}

/// 获取特定用户
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = state.store.get(id)?;
    Ok(Json(user))
}

/// 更新用户
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(payload): JsonBody<Option<UserPayload>>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.update(id, payload.unwrap_or_default())?;
    info!("用户更新成功: {}", id);
    Ok(Json(user))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id)?;
    info!("用户删除成功: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
