//! 通用类型定义

use chrono::NaiveDate;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use supplyline_errors::{AppError, AppResult};

/// 产品 ID（业务主键，如 "P-1001"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 仓库编码（如 "BLR-A"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct WarehouseCode(pub String);

impl WarehouseCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 库存状态
///
/// 由 (stock, demand) 派生，不落存储。服务端过滤和客户端展示共用
/// 这一个实现。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// 库存大于需求
    Healthy,
    /// 库存等于需求
    Low,
    /// 库存小于需求
    Critical,
}

impl StockStatus {
    /// 从库存和需求派生状态
    pub fn from_levels(stock: i64, demand: i64) -> Self {
        if stock > demand {
            StockStatus::Healthy
        } else if stock == demand {
            StockStatus::Low
        } else {
            StockStatus::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Healthy => "Healthy",
            StockStatus::Low => "Low",
            StockStatus::Critical => "Critical",
        }
    }
}

/// 产品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub warehouse: WarehouseCode,
    pub stock: i64,
    pub demand: i64,
}

impl Product {
    /// 派生库存状态
    pub fn status(&self) -> StockStatus {
        StockStatus::from_levels(self.stock, self.demand)
    }

    /// 覆写需求预测
    ///
    /// 不做边界检查，负值照存。
    pub fn set_demand(&mut self, demand: i64) {
        self.demand = demand;
    }

    /// 在仓库间转移库存
    ///
    /// 单行迁移：仓库改写为目标仓库，库存扣减 qty，不在目标仓库
    /// 新建行。
    pub fn transfer(&mut self, from: &WarehouseCode, to: WarehouseCode, qty: i64) -> AppResult<()> {
        if self.warehouse != *from {
            return Err(AppError::invalid_state(format!(
                "product {} is not in warehouse {}",
                self.id, from
            )));
        }

        if qty > self.stock {
            return Err(AppError::insufficient_stock(format!(
                "cannot transfer {} units of product {}, only {} in stock",
                qty, self.id, self.stock
            )));
        }

        self.warehouse = to;
        self.stock -= qty;
        Ok(())
    }

    /// 单品满足率（%），需求为 0 时为 0
    pub fn fill_rate(&self) -> f64 {
        if self.demand > 0 {
            self.stock.min(self.demand) as f64 / self.demand as f64 * 100.0
        } else {
            0.0
        }
    }

    /// 盈余/缺口
    pub fn surplus(&self) -> i64 {
        self.stock - self.demand
    }

    /// 按当前需求可支撑的天数
    pub fn days_of_cover(&self) -> i64 {
        // Equivalent to `i64::div_ceil` (still unstable on stable toolchains).
        // Divisor is always >= 1, so this matches std's signed ceiling division.
        let divisor = self.demand.max(1);
        let quotient = self.stock / divisor;
        if self.stock % divisor > 0 {
            quotient + 1
        } else {
            quotient
        }
    }
}

/// 仓库（只读参考数据）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub code: WarehouseCode,
    pub name: String,
    pub city: String,
    pub country: String,
}

/// KPI 时序采样点（日粒度）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiPoint {
    pub date: NaiveDate,
    pub stock: i64,
    pub demand: i64,
}

/// KPI 查询窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiRange {
    Week,
    Fortnight,
    Month,
}

impl KpiRange {
    /// 解析窗口字符串；未识别的值回退到 30 天
    pub fn parse(s: &str) -> Self {
        match s {
            "7d" => KpiRange::Week,
            "14d" => KpiRange::Fortnight,
            _ => KpiRange::Month,
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            KpiRange::Week => 7,
            KpiRange::Fortnight => 14,
            KpiRange::Month => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KpiRange::Week => "7d",
            KpiRange::Fortnight => "14d",
            KpiRange::Month => "30d",
        }
    }
}

/// 分页参数（页码从 1 开始）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl Pagination {
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }
}

/// 分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: usize, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// 当前页第一条的序号（1 起）
    pub fn start_item(&self) -> usize {
        (self.page - 1) * self.page_size + 1
    }

    /// 当前页最后一条的序号
    pub fn end_item(&self) -> usize {
        (self.page * self.page_size).min(self.total)
    }
}

impl<T: Clone> PagedResult<T> {
    /// 对已过滤排序的列表切出一页
    pub fn paginate(items: &[T], pagination: &Pagination) -> Self {
        let total = items.len();
        let start = pagination.offset().min(total);
        let end = (start + pagination.page_size).min(total);
        Self::new(items[start..end].to_vec(), total, pagination)
    }
}
