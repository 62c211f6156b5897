//! Business logic handler

use std::sync::Arc;

use supplyline_common::{KpiPoint, KpiRange, Product, ProductFilter, Warehouse};
use supplyline_errors::{AppError, AppResult};
use tracing::info;

use crate::domain::repositories::{ProductRepository, WarehouseRepository};
use crate::infrastructure::kpi::KpiGenerator;

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    products: Arc<dyn ProductRepository>,
    warehouses: Arc<dyn WarehouseRepository>,
    kpi: KpiGenerator,
}

impl ServiceHandler {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        warehouses: Arc<dyn WarehouseRepository>,
        kpi: KpiGenerator,
    ) -> Self {
        Self {
            products,
            warehouses,
            kpi,
        }
    }

    // ========== 查询 ==========

    /// 过滤查询产品
    pub async fn list_products(&self, query: ListProductsQuery) -> AppResult<Vec<Product>> {
        self.products.list(&query.filter()).await
    }

    /// 仓库全量列表
    pub async fn list_warehouses(&self) -> AppResult<Vec<Warehouse>> {
        self.warehouses.list().await
    }

    /// 生成 KPI 时序
    ///
    /// 以当前全量库存/需求总量为基准逐日抖动。
    pub async fn list_kpis(&self, query: ListKpisQuery) -> AppResult<Vec<KpiPoint>> {
        let range = KpiRange::parse(&query.range);
        let products = self.products.list(&ProductFilter::new()).await?;

        let total_stock = products.iter().map(|p| p.stock).sum();
        let total_demand = products.iter().map(|p| p.demand).sum();

        Ok(self.kpi.series(range, total_stock, total_demand))
    }

    // ========== 变更 ==========

    /// 覆写需求预测
    pub async fn update_demand(&self, cmd: UpdateDemandCommand) -> AppResult<Product> {
        info!("Updating demand for product {} to {}", cmd.id, cmd.demand);

        let mut product = self
            .products
            .find_by_id(&cmd.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("product {} does not exist", cmd.id)))?;

        product.set_demand(cmd.demand);
        self.products.update(&product).await?;

        Ok(product)
    }

    /// 仓库间转移库存
    pub async fn transfer_stock(&self, cmd: TransferStockCommand) -> AppResult<Product> {
        info!(
            "Transferring {} units of product {} from {} to {}",
            cmd.qty, cmd.id, cmd.from, cmd.to
        );

        let mut product = self
            .products
            .find_by_id(&cmd.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("product {} does not exist", cmd.id)))?;

        product.transfer(&cmd.from, cmd.to, cmd.qty)?;
        self.products.update(&product).await?;

        Ok(product)
    }
}
