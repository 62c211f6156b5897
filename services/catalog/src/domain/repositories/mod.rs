mod product_repository;
mod warehouse_repository;

pub use product_repository::ProductRepository;
pub use warehouse_repository::WarehouseRepository;
