//! KPI 聚合
//!
//! 全部基于客户端拿到的全量产品列表现算，与服务端过滤无关。

use supplyline_common::{KpiPoint, Product, StockStatus, Warehouse};

/// 汇总 KPI 卡片数据
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub total_stock: i64,
    pub total_demand: i64,
    /// 满足率（%）：逐品取 min(stock, demand) 再求和，封顶 100
    pub fill_rate: f64,
    pub healthy: usize,
    pub low: usize,
    pub critical: usize,
}

impl KpiSummary {
    pub fn from_products(products: &[Product]) -> Self {
        let total_stock: i64 = products.iter().map(|p| p.stock).sum();
        let total_demand: i64 = products.iter().map(|p| p.demand).sum();

        let fulfilled: i64 = products.iter().map(|p| p.stock.min(p.demand)).sum();
        let fill_rate = if total_demand > 0 {
            fulfilled as f64 / total_demand as f64 * 100.0
        } else {
            0.0
        };

        let mut healthy = 0;
        let mut low = 0;
        let mut critical = 0;
        for product in products {
            match product.status() {
                StockStatus::Healthy => healthy += 1,
                StockStatus::Low => low += 1,
                StockStatus::Critical => critical += 1,
            }
        }

        Self {
            total_stock,
            total_demand,
            fill_rate,
            healthy,
            low,
            critical,
        }
    }
}

/// 单仓概览
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseStats {
    pub warehouse: Warehouse,
    pub product_count: usize,
    pub total_stock: i64,
    pub total_demand: i64,
    pub critical_count: usize,
    /// 库存相对需求的覆盖率（%），不封顶；需求为 0 时为 0
    pub utilization_rate: f64,
}

pub fn warehouse_overview(warehouses: &[Warehouse], products: &[Product]) -> Vec<WarehouseStats> {
    warehouses
        .iter()
        .map(|warehouse| {
            let local: Vec<&Product> = products
                .iter()
                .filter(|p| p.warehouse == warehouse.code)
                .collect();

            let total_stock: i64 = local.iter().map(|p| p.stock).sum();
            let total_demand: i64 = local.iter().map(|p| p.demand).sum();
            let critical_count = local
                .iter()
                .filter(|p| p.status() == StockStatus::Critical)
                .count();
            let utilization_rate = if total_demand > 0 {
                total_stock as f64 / total_demand as f64 * 100.0
            } else {
                0.0
            };

            WarehouseStats {
                warehouse: warehouse.clone(),
                product_count: local.len(),
                total_stock,
                total_demand,
                critical_count,
                utilization_rate,
            }
        })
        .collect()
}

/// 时序点的绘图归一化：窗口内最大值记 100
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledPoint {
    pub point: KpiPoint,
    pub stock_percent: f64,
    pub demand_percent: f64,
}

pub fn scale_series(series: &[KpiPoint]) -> Vec<ScaledPoint> {
    let Some(max) = series.iter().map(|p| p.stock.max(p.demand)).max() else {
        return Vec::new();
    };
    let range = if max == 0 { 1 } else { max } as f64;

    series
        .iter()
        .map(|point| ScaledPoint {
            point: point.clone(),
            stock_percent: point.stock as f64 / range * 100.0,
            demand_percent: point.demand as f64 / range * 100.0,
        })
        .collect()
}
