//! 产品目录服务入口

use std::time::Duration;

use product_catalog::{
    app::{router, AppState},
    infrastructure::{config::load_config, logger::Logger},
};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_path) = load_config()?;

    Logger::init(&config.logging.level);

    match config_path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let app = router(AppState::default()).layer(TimeoutLayer::new(Duration::from_secs(
        config.http.timeout_seconds,
    )));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 产品目录服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /products      - 获取所有产品");
    info!("   POST   /products      - 创建新产品");
    info!("   GET    /products/:id  - 获取特定产品");
    info!("   PUT    /products/:id  - 整体更新产品");
    info!("   DELETE /products/:id  - 删除产品");
    info!("   POST   /feedback      - 提交反馈");
    info!("   GET    /health        - 健康检查");

    axum::serve(listener, app).await?;

    Ok(())
}
