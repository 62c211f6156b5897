//! 内存存储实现
//!
//! 数据只活在进程内，重启即重置。所有读写经由 RwLock 串行化。

use async_trait::async_trait;
use supplyline_common::{Product, ProductFilter, ProductId, Warehouse};
use supplyline_errors::{AppError, AppResult};
use tokio::sync::RwLock;

use crate::domain::repositories::{ProductRepository, WarehouseRepository};

/// 内存产品仓储
pub struct MemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn list(&self, filter: &ProductFilter) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(filter.apply(&products))
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == *id).cloned())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| {
                AppError::not_found(format!("product {} does not exist", product.id))
            })?;
        *slot = product.clone();
        Ok(())
    }
}

/// 内存仓库仓储
pub struct MemoryWarehouseRepository {
    warehouses: Vec<Warehouse>,
}

impl MemoryWarehouseRepository {
    pub fn new(warehouses: Vec<Warehouse>) -> Self {
        Self { warehouses }
    }
}

#[async_trait]
impl WarehouseRepository for MemoryWarehouseRepository {
    async fn list(&self) -> AppResult<Vec<Warehouse>> {
        Ok(self.warehouses.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::seed;

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = MemoryProductRepository::new(seed::products());
        let products = repo.list(&ProductFilter::new()).await.unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P-1001", "P-1002", "P-1003", "P-1004"]);
    }

    #[tokio::test]
    async fn test_update_replaces_row_in_place() {
        let repo = MemoryProductRepository::new(seed::products());
        let mut product = repo
            .find_by_id(&ProductId::new("P-1002"))
            .await
            .unwrap()
            .unwrap();
        product.set_demand(999);
        repo.update(&product).await.unwrap();

        let products = repo.list(&ProductFilter::new()).await.unwrap();
        assert_eq!(products[1].demand, 999);
        assert_eq!(products[1].id.as_str(), "P-1002");
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let repo = MemoryProductRepository::new(seed::products());
        let ghost = Product {
            id: ProductId::new("P-9999"),
            ..seed::products()[0].clone()
        };
        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
