//! 产品仓储接口

use async_trait::async_trait;
use supplyline_common::{Product, ProductFilter, ProductId};
use supplyline_errors::AppResult;

/// 产品仓储接口
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 过滤查询，结果保留插入顺序
    async fn list(&self, filter: &ProductFilter) -> AppResult<Vec<Product>>;

    /// 根据 ID 查找产品
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>>;

    /// 原位更新产品
    async fn update(&self, product: &Product) -> AppResult<()>;
}
