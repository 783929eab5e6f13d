//! # 用户 CRUD 服务
//!
//! 基于 Axum 的内存用户管理 API：
//! - `app`: 用户资源的模型、存储与处理器
//! - `core`: 统一错误响应、提取器、请求日志中间件
//! - `infrastructure`: 日志初始化
//! - `config`: TOML 配置加载与校验

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{users::store::UserStore, AppState};
pub use config::Config;

use axum::{middleware, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use config::HttpConfig;

/// 组装完整路由及中间件层
pub fn build_router(state: AppState, config: &HttpConfig) -> Router {
    app::routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(
                    crate::core::middleware::request_logging_middleware,
                ))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeout_seconds,
                ))),
        )
        .with_state(state)
}
