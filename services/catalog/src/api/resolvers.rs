//! 解析器调度

use serde_json::{Value, json};
use supplyline_common::{ProductId, WarehouseCode};
use supplyline_errors::{AppError, AppResult};

use crate::application::ServiceHandler;
use crate::application::commands::{TransferStockCommand, UpdateDemandCommand};
use crate::application::queries::{ListKpisQuery, ListProductsQuery};

use super::graphql::{GraphQLRequest, GraphQLResponse, OperationKind, parse_operation};

/// 执行一个请求；解析器错误原样进入 errors 数组
pub async fn execute(handler: &ServiceHandler, request: GraphQLRequest) -> GraphQLResponse {
    match dispatch(handler, &request).await {
        Ok(data) => GraphQLResponse::data(data),
        Err(err) => GraphQLResponse::error(err.to_string()),
    }
}

async fn dispatch(handler: &ServiceHandler, request: &GraphQLRequest) -> AppResult<Value> {
    let op = parse_operation(&request.query, &request.variables)?;

    match (op.kind, op.field.as_str()) {
        (OperationKind::Query, "products") => {
            let query = ListProductsQuery {
                search: op.optional_string("search"),
                status: op.optional_string("status"),
                warehouse: op.optional_string("warehouse"),
            };
            let products = handler.list_products(query).await?;
            Ok(json!({ "products": products }))
        }

        (OperationKind::Query, "warehouses") => {
            let warehouses = handler.list_warehouses().await?;
            Ok(json!({ "warehouses": warehouses }))
        }

        (OperationKind::Query, "kpis") => {
            let query = ListKpisQuery {
                range: op.require_string("range")?,
            };
            let kpis = handler.list_kpis(query).await?;
            Ok(json!({ "kpis": kpis }))
        }

        (OperationKind::Mutation, "updateDemand") => {
            let cmd = UpdateDemandCommand {
                id: ProductId::new(op.require_string("id")?),
                demand: op.require_int("demand")?,
            };
            let product = handler.update_demand(cmd).await?;
            Ok(json!({ "updateDemand": product }))
        }

        (OperationKind::Mutation, "transferStock") => {
            let cmd = TransferStockCommand {
                id: ProductId::new(op.require_string("id")?),
                from: WarehouseCode::new(op.require_string("from")?),
                to: WarehouseCode::new(op.require_string("to")?),
                qty: op.require_int("qty")?,
            };
            let product = handler.transfer_stock(cmd).await?;
            Ok(json!({ "transferStock": product }))
        }

        (OperationKind::Query, field) => {
            Err(AppError::validation(format!("unknown query field: {}", field)))
        }
        (OperationKind::Mutation, field) => Err(AppError::validation(format!(
            "unknown mutation field: {}",
            field
        ))),
    }
}
