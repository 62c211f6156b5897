//! 查询定义

use supplyline_common::ProductFilter;

/// 产品列表查询
#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub warehouse: Option<String>,
}

impl ListProductsQuery {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            search: self.search.clone(),
            status: self.status.clone(),
            warehouse: self.warehouse.clone(),
        }
    }
}

/// KPI 时序查询
#[derive(Debug, Clone)]
pub struct ListKpisQuery {
    pub range: String,
}
