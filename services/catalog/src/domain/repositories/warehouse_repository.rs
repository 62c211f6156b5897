//! 仓库仓储接口

use async_trait::async_trait;
use supplyline_common::Warehouse;
use supplyline_errors::AppResult;

/// 仓库仓储接口
///
/// 仓库是只读参考数据，没有生命周期操作。
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// 全量列表，保留插入顺序
    async fn list(&self) -> AppResult<Vec<Warehouse>>;
}
