//! 命令定义

use supplyline_common::{ProductId, WarehouseCode};

/// 覆写需求预测
#[derive(Debug, Clone)]
pub struct UpdateDemandCommand {
    pub id: ProductId,
    pub demand: i64,
}

/// 仓库间转移库存
#[derive(Debug, Clone)]
pub struct TransferStockCommand {
    pub id: ProductId,
    pub from: WarehouseCode,
    pub to: WarehouseCode,
    pub qty: i64,
}
