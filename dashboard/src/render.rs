//! 文本渲染
//!
//! 所有渲染函数只产出字符串，打印留给调用方。

use supplyline_common::{KpiPoint, PagedResult, Product};

use crate::kpi::{KpiSummary, WarehouseStats, scale_series};
use crate::table::{PageItem, page_numbers};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// KPI 卡片行
pub fn kpi_cards(summary: &KpiSummary, product_count: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  Total Stock   {:>8}   units in inventory\n",
        summary.total_stock
    ));
    out.push_str(&format!(
        "  Total Demand  {:>8}   units requested\n",
        summary.total_demand
    ));
    out.push_str(&format!(
        "  Fill Rate     {:>7.1}%   demand fulfillment\n",
        summary.fill_rate
    ));
    out.push_str(&format!(
        "  Status        {:>3}/{:<3}    critical products ({} healthy, {} low)",
        summary.critical, product_count, summary.healthy, summary.low
    ));
    out
}

/// 库存时序的走势条
pub fn sparkline(series: &[KpiPoint]) -> String {
    if series.is_empty() {
        return "  (no KPI data)".to_string();
    }

    let scaled = scale_series(series);
    let mut bars = String::new();
    for point in &scaled {
        let slot = (point.stock_percent / 100.0 * (SPARK_LEVELS.len() - 1) as f64).round();
        bars.push(SPARK_LEVELS[slot as usize]);
    }

    let first = &series[0];
    let last = &series[series.len() - 1];
    format!(
        "  Stock trend   {}   {} -> {}  ({} days)",
        bars,
        first.date,
        last.date,
        series.len()
    )
}

/// 仓库概览表
pub fn warehouse_table(stats: &[WarehouseStats]) -> String {
    let mut out = String::from(
        "  Warehouse            Location              Products   Stock  Critical  Coverage\n",
    );
    for s in stats {
        out.push_str(&format!(
            "  {:7} {:12} {:21} {:>8} {:>7} {:>9} {:>8.0}%\n",
            s.warehouse.code,
            s.warehouse.name,
            format!("{}, {}", s.warehouse.city, s.warehouse.country),
            s.product_count,
            s.total_stock,
            s.critical_count,
            s.utilization_rate
        ));
    }
    out.pop();
    out
}

/// 产品表格 + 分页脚注
pub fn product_table(page: &PagedResult<Product>) -> String {
    let mut out = String::from(
        "  ID      Product               SKU           Warehouse    Stock  Demand  Status\n",
    );

    if page.items.is_empty() {
        out.push_str("  (no products match the current filters)\n");
    } else {
        for product in &page.items {
            out.push_str(&format!(
                "  {:7} {:21} {:13} {:9} {:>8} {:>7}  {}\n",
                product.id,
                product.name,
                product.sku,
                product.warehouse,
                product.stock,
                product.demand,
                product.status().label()
            ));
        }
    }

    out.push_str(&format!(
        "  Showing {} to {} of {} products   pages: {}",
        page.start_item(),
        page.end_item(),
        page.total,
        page_strip(page.page, page.total_pages())
    ));
    out
}

fn page_strip(current: usize, total: usize) -> String {
    page_numbers(current, total)
        .into_iter()
        .map(|item| match item {
            PageItem::Page(n) if n == current => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplyline_common::{Pagination, ProductId, WarehouseCode};

    fn products(count: usize) -> Vec<Product> {
        (1..=count)
            .map(|i| Product {
                id: ProductId::new(format!("P-{:04}", i)),
                name: format!("Part {:02}", i),
                sku: format!("SKU-{:04}", i),
                warehouse: WarehouseCode::new("BLR-A"),
                stock: 10,
                demand: 5,
            })
            .collect()
    }

    #[test]
    fn test_product_table_footer() {
        let rows = products(60);
        let page = PagedResult::paginate(
            &rows,
            &Pagination {
                page: 3,
                page_size: 25,
            },
        );
        let rendered = product_table(&page);
        assert!(rendered.contains("Showing 51 to 60 of 60 products"));
        assert!(rendered.contains("[3]"));
    }

    #[test]
    fn test_empty_table_placeholder() {
        let page = PagedResult::paginate(
            &Vec::<Product>::new(),
            &Pagination {
                page: 1,
                page_size: 10,
            },
        );
        let rendered = product_table(&page);
        assert!(rendered.contains("no products match"));
    }

    #[test]
    fn test_sparkline_length_matches_series() {
        let series: Vec<KpiPoint> = (0..7)
            .map(|i| KpiPoint {
                date: chrono::NaiveDate::from_ymd_opt(2025, 8, 1 + i).unwrap(),
                stock: 300 + i as i64 * 10,
                demand: 400,
            })
            .collect();
        let rendered = sparkline(&series);
        assert!(rendered.contains("(7 days)"));
        let bars: String = rendered
            .chars()
            .filter(|c| SPARK_LEVELS.contains(c))
            .collect();
        assert_eq!(bars.chars().count(), 7);
    }
}
