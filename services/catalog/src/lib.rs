//! catalog Service - 库存目录

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
