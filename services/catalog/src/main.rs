//! Supplyline Catalog Service

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use catalog::api::{AppState, api_routes};
use catalog::application::ServiceHandler;
use catalog::infrastructure::kpi::{KpiGenerator, ThreadRngJitter};
use catalog::infrastructure::persistence::{
    MemoryProductRepository, MemoryWarehouseRepository, seed,
};
use supplyline_config::AppConfig;
use supplyline_telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    init_tracing(&config.telemetry.log_level);

    info!("Initializing catalog service...");

    // 内存存储 + 种子数据
    let products = Arc::new(MemoryProductRepository::new(seed::products()));
    let warehouses = Arc::new(MemoryWarehouseRepository::new(seed::warehouses()));
    let handler = Arc::new(ServiceHandler::new(
        products,
        warehouses,
        KpiGenerator::new(Arc::new(ThreadRngJitter)),
    ));
    info!("In-memory store seeded");

    // 构建路由
    let app = api_routes(AppState { handler })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting catalog service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
