//! Dashboard 配置

use std::env;

use crate::table::PAGE_SIZES;

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub catalog_endpoint: String,
    pub range: String,
    pub page_size: usize,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        // 页大小只认固定档位，非法值回退默认
        let page_size = env::var("DASHBOARD_PAGE_SIZE")
            .ok()
            .and_then(|p| p.parse().ok())
            .filter(|p| PAGE_SIZES.contains(p))
            .unwrap_or(PAGE_SIZES[0]);

        Self {
            catalog_endpoint: env::var("CATALOG_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:4000/graphql".to_string()),
            range: env::var("DASHBOARD_KPI_RANGE").unwrap_or_else(|_| "7d".to_string()),
            page_size,
        }
    }
}
