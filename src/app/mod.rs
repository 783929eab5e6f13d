//! 应用层

pub mod health;
pub mod users;

use axum::{routing::get, Router};

use users::store::UserStore;

/// 处理器共享状态
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: UserStore,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

/// 应用层全部路由，尚未绑定状态
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(users::routes())
}
