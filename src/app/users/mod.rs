//! 用户资源：模型、存储与处理器

pub mod handler;
pub mod model;
pub mod store;

use axum::{routing::get, Router};

use super::AppState;

/// `/users` 与 `/users/:id` 路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users).post(handler::create_user))
        .route(
            "/users/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
}
