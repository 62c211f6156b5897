//! Catalog GraphQL 客户端
//!
//! 单端点 POST `{query, variables}`。服务端 errors 数组的第一条消息
//! 原样抛出；传输/解析失败包住底层原因。不重试，不区分错误种类。

use serde::Deserialize;
use serde_json::{Value, json};
use supplyline_common::{KpiPoint, Product, ProductFilter, Warehouse};
use thiserror::Error;

pub const GET_PRODUCTS: &str = r#"
query GetProducts($search: String, $status: String, $warehouse: String) {
    products(search: $search, status: $status, warehouse: $warehouse) {
        id
        name
        sku
        warehouse
        stock
        demand
    }
}
"#;

pub const GET_WAREHOUSES: &str = r#"
query GetWarehouses {
    warehouses {
        code
        name
        city
        country
    }
}
"#;

pub const GET_KPIS: &str = r#"
query GetKPIs($range: String!) {
    kpis(range: $range) {
        date
        stock
        demand
    }
}
"#;

pub const UPDATE_DEMAND: &str = r#"
mutation UpdateDemand($id: ID!, $demand: Int!) {
    updateDemand(id: $id, demand: $demand) {
        id
        name
        sku
        warehouse
        stock
        demand
    }
}
"#;

pub const TRANSFER_STOCK: &str = r#"
mutation TransferStock($id: ID!, $from: String!, $to: String!, $qty: Int!) {
    transferStock(id: $id, from: $from, to: $to, qty: $qty) {
        id
        name
        sku
        warehouse
        stock
        demand
    }
}
"#;

/// 客户端错误
#[derive(Debug, Error)]
pub enum ClientError {
    /// 服务端 errors 数组的第一条消息
    #[error("GraphQL error: {0}")]
    Api(String),

    /// 传输失败或响应体不是合法 JSON
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// data 形状对不上预期类型
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    errors: Option<Vec<WireError>>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
}

fn unwrap_envelope(envelope: Envelope) -> Result<Value, ClientError> {
    if let Some(errors) = envelope.errors {
        if let Some(first) = errors.into_iter().next() {
            return Err(ClientError::Api(first.message));
        }
    }
    envelope
        .data
        .ok_or_else(|| ClientError::Api("response carried no data".to_string()))
}

pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn request(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        let envelope: Envelope = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .json()
            .await?;

        unwrap_envelope(envelope)
    }

    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ClientError> {
        let variables = json!({
            "search": filter.search,
            "status": filter.status,
            "warehouse": filter.warehouse,
        });
        let data = self.request(GET_PRODUCTS, variables).await?;
        Ok(serde_json::from_value(data["products"].clone())?)
    }

    pub async fn warehouses(&self) -> Result<Vec<Warehouse>, ClientError> {
        let data = self.request(GET_WAREHOUSES, json!({})).await?;
        Ok(serde_json::from_value(data["warehouses"].clone())?)
    }

    pub async fn kpis(&self, range: &str) -> Result<Vec<KpiPoint>, ClientError> {
        let data = self.request(GET_KPIS, json!({ "range": range })).await?;
        Ok(serde_json::from_value(data["kpis"].clone())?)
    }

    pub async fn update_demand(&self, id: &str, demand: i64) -> Result<Product, ClientError> {
        let data = self
            .request(UPDATE_DEMAND, json!({ "id": id, "demand": demand }))
            .await?;
        Ok(serde_json::from_value(data["updateDemand"].clone())?)
    }

    pub async fn transfer_stock(
        &self,
        id: &str,
        from: &str,
        to: &str,
        qty: i64,
    ) -> Result<Product, ClientError> {
        let data = self
            .request(
                TRANSFER_STOCK,
                json!({ "id": id, "from": from, "to": to, "qty": qty }),
            )
            .await?;
        Ok(serde_json::from_value(data["transferStock"].clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"data": {"warehouses": []}}"#).unwrap();
        let data = unwrap_envelope(envelope).unwrap();
        assert!(data["warehouses"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_envelope_surfaces_first_error_message() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"errors": [{"message": "Not found: product P-9999 does not exist"}, {"message": "second"}]}"#,
        )
        .unwrap();
        let err = unwrap_envelope(envelope).unwrap_err();
        match err {
            ClientError::Api(message) => {
                assert_eq!(message, "Not found: product P-9999 does not exist");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_without_data_or_errors() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            unwrap_envelope(envelope),
            Err(ClientError::Api(_))
        ));
    }

    #[test]
    fn test_product_payload_decodes() {
        let payload = serde_json::json!([{
            "id": "P-1001",
            "name": "12mm Hex Bolt",
            "sku": "HEX-12-100",
            "warehouse": "BLR-A",
            "stock": 180,
            "demand": 120
        }]);
        let products: Vec<Product> = serde_json::from_value(payload).unwrap();
        assert_eq!(products[0].id.as_str(), "P-1001");
        assert_eq!(products[0].warehouse.as_str(), "BLR-A");
    }
}
