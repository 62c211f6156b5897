//! 批量导出
//!
//! 导出的是当前选中的行，列与表格一致，状态列现算。

use serde::Serialize;
use supplyline_common::Product;

/// 导出行
#[derive(Debug, Serialize)]
pub struct ExportRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Warehouse")]
    pub warehouse: String,
    #[serde(rename = "Stock")]
    pub stock: i64,
    #[serde(rename = "Demand")]
    pub demand: i64,
    #[serde(rename = "Status")]
    pub status: String,
}

impl From<&Product> for ExportRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            warehouse: product.warehouse.to_string(),
            stock: product.stock,
            demand: product.demand,
            status: product.status().label().to_string(),
        }
    }
}

pub fn to_csv(products: &[Product]) -> String {
    let mut lines = vec!["ID,Name,SKU,Warehouse,Stock,Demand,Status".to_string()];
    for product in products {
        let row = ExportRow::from(product);
        lines.push(format!(
            "{},{},{},{},{},{},{}",
            row.id, row.name, row.sku, row.warehouse, row.stock, row.demand, row.status
        ));
    }
    lines.join("\n")
}

pub fn to_json(products: &[Product]) -> serde_json::Result<String> {
    let rows: Vec<ExportRow> = products.iter().map(ExportRow::from).collect();
    serde_json::to_string_pretty(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplyline_common::{ProductId, WarehouseCode};

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
                id: ProductId::new("P-1004"),
                name: "Bearing 608ZZ".to_string(),
                sku: "BRG-608-50".to_string(),
                warehouse: WarehouseCode::new("DEL-B"),
                stock: 24,
                demand: 120,
            },
        ]
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = to_csv(&seed());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,Name,SKU,Warehouse,Stock,Demand,Status");
        assert_eq!(lines[1], "P-1001,12mm Hex Bolt,HEX-12-100,BLR-A,180,120,Healthy");
        assert_eq!(lines[2], "P-1004,Bearing 608ZZ,BRG-608-50,DEL-B,24,120,Critical");
    }

    #[test]
    fn test_csv_of_empty_selection_is_header_only() {
        assert_eq!(to_csv(&[]), "ID,Name,SKU,Warehouse,Stock,Demand,Status");
    }

    #[test]
    fn test_json_column_shape() {
        let json = to_json(&seed()).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 2);
        assert_eq!(rows[0]["ID"], "P-1001");
        assert_eq!(rows[0]["Status"], "Healthy");
        assert_eq!(rows[1]["Stock"], 24);
    }
}
