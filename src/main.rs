use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use users_api::{
    build_router,
    config::load_config,
    infrastructure::logger::Logger,
    AppState, UserStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    config.validate()?;

    // 初始化日志
    Logger::init(&config.logging);

    match source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let app = build_router(AppState::new(UserStore::new()), &config.http);

    let listener = TcpListener::bind((config.http.bind_address.as_str(), config.http.port))
        .await
        .with_context(|| {
            format!(
                "无法绑定到 {}:{}",
                config.http.bind_address, config.http.port
            )
        })?;

    info!("🚀 用户服务运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /users         - 获取所有用户");
    info!("   POST   /users         - 创建新用户");
    info!("   GET    /users/:id     - 获取特定用户");
    info!("   PUT    /users/:id     - 更新用户");
    info!("   DELETE /users/:id     - 删除用户");
    info!("   GET    /health        - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("监听 Ctrl-C 失败: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("监听 SIGTERM 失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到停止信号，正在优雅关闭...");
}
