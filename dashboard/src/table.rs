//! 产品表格管线：过滤 → 排序 → 分页 → 选择
//!
//! 过滤语义与服务端共用 ProductFilter，在已拉取的全量列表上再跑
//! 一遍，和服务端过滤互不依赖。

use std::cmp::Ordering;
use std::collections::HashSet;

use supplyline_common::{PagedResult, Pagination, Product, ProductFilter, ProductId};

/// 可选页大小档位
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// 可排序列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Warehouse,
    Stock,
    Demand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// 单一排序键 + 方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }
}

/// 表格视图状态
///
/// 选择集挂在当前过滤/分页状态上：换过滤条件、换页、换页大小都会
/// 清空选择。这是刻意保留的交互不变量，不是副作用。
#[derive(Debug)]
pub struct TableState {
    filters: ProductFilter,
    sort: SortConfig,
    page: usize,
    page_size: usize,
    selected: HashSet<ProductId>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    pub fn new() -> Self {
        Self {
            filters: ProductFilter::new(),
            sort: SortConfig::default(),
            page: 1,
            page_size: PAGE_SIZES[0],
            selected: HashSet::new(),
        }
    }

    pub fn filters(&self) -> &ProductFilter {
        &self.filters
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.selected.contains(id)
    }

    /// 换过滤条件：回到第 1 页并清空选择
    pub fn set_filters(&mut self, filters: ProductFilter) {
        self.filters = filters;
        self.page = 1;
        self.selected.clear();
    }

    /// 点击列头：同列翻转方向，新列重置为升序
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort.key == Some(key) {
            self.sort.direction = self.sort.direction.flip();
        } else {
            self.sort = SortConfig {
                key: Some(key),
                direction: SortDirection::Ascending,
            };
        }
    }

    /// 翻页清空选择
    pub fn set_page(&mut self, page: usize) {
        if page != self.page {
            self.page = page;
            self.selected.clear();
        }
    }

    /// 换页大小：只认 PAGE_SIZES 档位；回到第 1 页并清空选择
    pub fn set_page_size(&mut self, page_size: usize) {
        if !PAGE_SIZES.contains(&page_size) {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
        self.selected.clear();
    }

    /// 过滤 + 排序后的全量行
    ///
    /// sort_by 是稳定排序，相等键保持过滤后的相对顺序。
    pub fn rows(&self, products: &[Product]) -> Vec<Product> {
        let mut rows = self.filters.apply(products);
        if let Some(key) = self.sort.key {
            rows.sort_by(|a, b| {
                let ordering = compare(key, a, b);
                match self.sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }

    /// 当前页
    pub fn page_view(&self, products: &[Product]) -> PagedResult<Product> {
        let rows = self.rows(products);
        PagedResult::paginate(
            &rows,
            &Pagination {
                page: self.page,
                page_size: self.page_size,
            },
        )
    }

    pub fn toggle_select(&mut self, id: &ProductId) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// 全选开关：选择为空时选中当前页全部行（不是全部过滤结果），
    /// 否则清空
    pub fn toggle_select_all(&mut self, products: &[Product]) {
        if self.selected.is_empty() {
            for product in self.page_view(products).items {
                self.selected.insert(product.id);
            }
        } else {
            self.selected.clear();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// 选中的行，按过滤排序后的顺序
    pub fn selected_rows(&self, products: &[Product]) -> Vec<Product> {
        self.rows(products)
            .into_iter()
            .filter(|p| self.selected.contains(&p.id))
            .collect()
    }
}

fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Warehouse => a
            .warehouse
            .as_str()
            .to_lowercase()
            .cmp(&b.warehouse.as_str().to_lowercase()),
        SortKey::Stock => a.stock.cmp(&b.stock),
        SortKey::Demand => a.demand.cmp(&b.demand),
    }
}

/// 页码条元素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// 页码条：最多 5 个显式页码，多余的用省略号折叠
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    use PageItem::*;

    if total <= 5 {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}
