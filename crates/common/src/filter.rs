//! 产品过滤器
//!
//! 服务端查询解析器和客户端表格管线共用同一份过滤语义。

use serde::{Deserialize, Serialize};

use crate::types::{Product, StockStatus};

/// 组合过滤条件
///
/// 三个维度 AND 组合：search 对 name/sku/id 做大小写不敏感的子串
/// 匹配（任一字段命中即保留），status 和 warehouse 精确匹配，哨兵值
/// "all" 与缺省等价。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub warehouse: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有生效的过滤条件
    pub fn is_active(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || self.status.as_deref().is_some_and(|s| s != "all")
            || self.warehouse.as_deref().is_some_and(|w| w != "all")
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(warehouse) = &self.warehouse {
            if warehouse != "all" && product.warehouse.as_str() != warehouse {
                return false;
            }
        }

        if let Some(search) = &self.search {
            if !search.is_empty() {
                let needle = search.to_lowercase();
                let hit = product.name.to_lowercase().contains(&needle)
                    || product.sku.to_lowercase().contains(&needle)
                    || product.id.as_str().to_lowercase().contains(&needle);
                if !hit {
                    return false;
                }
            }
        }

        if let Some(status) = &self.status {
            if status != "all" {
                // 未识别的状态值保留行
                let matched = match status.as_str() {
                    "healthy" => product.status() == StockStatus::Healthy,
                    "low" => product.status() == StockStatus::Low,
                    "critical" => product.status() == StockStatus::Critical,
                    _ => true,
                };
                if !matched {
                    return false;
                }
            }
        }

        true
    }

    /// 过滤列表，保留插入顺序
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProductId, WarehouseCode};

    fn seed() -> Vec<Product> {
        vec![
            Product {
                id: ProductId::new("P-1001"),
                name: "12mm Hex Bolt".to_string(),
                sku: "HEX-12-100".to_string(),
                warehouse: WarehouseCode::new("BLR-A"),
                stock: 180,
                demand: 120,
            },
            Product {
                id: ProductId::new("P-1002"),
                name: "Steel Washer".to_string(),
                sku: "WSR-08-500".to_string(),
                warehouse: WarehouseCode::new("BLR-A"),
                stock: 50,
                demand: 80,
            },
            Product {
                id: ProductId::new("P-1003"),
                name: "M8 Nut".to_string(),
                sku: "NUT-08-200".to_string(),
                warehouse: WarehouseCode::new("PNQ-C"),
                stock: 80,
                demand: 80,
            },
            Product {
                id: ProductId::new("P-1004"),
                name: "Bearing 608ZZ".to_string(),
                sku: "BRG-608-50".to_string(),
                warehouse: WarehouseCode::new("DEL-B"),
                stock: 24,
                demand: 120,
            },
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = ProductFilter::new();
        assert_eq!(filter.apply(&seed()).len(), 4);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_critical_status_filter() {
        let filter = ProductFilter {
            status: Some("critical".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&seed())), vec!["P-1002", "P-1004"]);
    }

    #[test]
    fn test_search_matches_name_sku_and_id() {
        let by_name = ProductFilter {
            search: Some("bolt".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&by_name.apply(&seed())), vec!["P-1001"]);

        let by_sku = ProductFilter {
            search: Some("wsr".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&by_sku.apply(&seed())), vec!["P-1002"]);

        let by_id = ProductFilter {
            search: Some("p-1004".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&by_id.apply(&seed())), vec!["P-1004"]);
    }

    #[test]
    fn test_empty_search_is_inactive() {
        let filter = ProductFilter {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&seed()).len(), 4);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_filters_compose_with_and() {
        let filter = ProductFilter {
            search: Some("1".to_string()),
            status: Some("critical".to_string()),
            warehouse: Some("BLR-A".to_string()),
        };
        assert_eq!(ids(&filter.apply(&seed())), vec!["P-1002"]);
    }

    #[test]
    fn test_all_sentinel_disables_dimension() {
        let filter = ProductFilter {
            status: Some("all".to_string()),
            warehouse: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&seed()).len(), 4);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_unknown_status_keeps_rows() {
        let filter = ProductFilter {
            status: Some("exploded".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&seed()).len(), 4);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = ProductFilter {
            status: Some("critical".to_string()),
            warehouse: Some("BLR-A".to_string()),
            ..Default::default()
        };
        let once = filter.apply(&seed());
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }
}
