mod memory;
pub mod seed;

pub use memory::{MemoryProductRepository, MemoryWarehouseRepository};
