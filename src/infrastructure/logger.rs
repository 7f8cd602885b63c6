//! 日志基础设施

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub struct Logger;

impl Logger {
    /// 初始化全局日志，`RUST_LOG` 优先于配置中的级别
    pub fn init(level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}
