//! 启动种子数据

use supplyline_common::{Product, ProductId, Warehouse, WarehouseCode};

pub fn warehouses() -> Vec<Warehouse> {
    vec![
        warehouse("BLR-A", "Bangalore A", "Bangalore", "India"),
        warehouse("PNQ-C", "Pune C", "Pune", "India"),
        warehouse("DEL-B", "Delhi B", "Delhi", "India"),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        product("P-1001", "12mm Hex Bolt", "HEX-12-100", "BLR-A", 180, 120),
        product("P-1002", "Steel Washer", "WSR-08-500", "BLR-A", 50, 80),
        product("P-1003", "M8 Nut", "NUT-08-200", "PNQ-C", 80, 80),
        product("P-1004", "Bearing 608ZZ", "BRG-608-50", "DEL-B", 24, 120),
    ]
}

fn warehouse(code: &str, name: &str, city: &str, country: &str) -> Warehouse {
    Warehouse {
        code: WarehouseCode::new(code),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    }
}

fn product(id: &str, name: &str, sku: &str, warehouse: &str, stock: i64, demand: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        sku: sku.to_string(),
        warehouse: WarehouseCode::new(warehouse),
        stock,
        demand,
    }
}
