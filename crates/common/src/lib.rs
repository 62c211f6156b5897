//! supplyline-common - 通用类型和工具库

pub mod filter;
pub mod types;

pub use filter::*;
pub use types::*;
