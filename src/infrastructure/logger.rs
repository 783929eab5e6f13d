//! 日志基础设施

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

pub struct Logger;

impl Logger {
    /// 初始化全局日志订阅者，`RUST_LOG` 优先于配置中的级别
    pub fn init(config: &LoggingConfig) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.with_target);

        match config.format {
            LogFormat::Full => builder.init(),
            LogFormat::Compact => builder.compact().init(),
            LogFormat::Pretty => builder.pretty().init(),
        }
    }
}
