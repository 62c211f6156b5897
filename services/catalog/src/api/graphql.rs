//! GraphQL 风格的查询协议
//!
//! 单端点 POST `{query, variables}`，返回 `{data}` 或
//! `{errors:[{message}]}`。执行器只认文档里的操作类型和第一个顶层
//! 字段，参数支持内联字面量和 `$var` 引用；选择集照单全收但不做
//! 字段投影（mock 返回完整对象）。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use supplyline_errors::{AppError, AppResult};

/// 请求体
#[derive(Debug, Deserialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Map<String, Value>,
}

/// 响应体
#[derive(Debug, Serialize)]
pub struct GraphQLResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>,
}

impl GraphQLResponse {
    pub fn data(value: Value) -> Self {
        Self {
            data: Some(value),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: Some(vec![GraphQLError {
                message: message.into(),
            }]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// 解析出的操作：类型、首个顶层字段、已求值的参数
#[derive(Debug)]
pub struct Operation {
    pub kind: OperationKind,
    pub field: String,
    pub arguments: Map<String, Value>,
}

impl Operation {
    /// 可选字符串参数；null 与缺省等价
    pub fn optional_string(&self, name: &str) -> Option<String> {
        match self.arguments.get(name) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn require_string(&self, name: &str) -> AppResult<String> {
        match self.arguments.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Null) | None => Err(AppError::validation(format!(
                "argument {} is required",
                name
            ))),
            Some(_) => Err(AppError::validation(format!(
                "argument {} must be a string",
                name
            ))),
        }
    }

    pub fn require_int(&self, name: &str) -> AppResult<i64> {
        match self.arguments.get(name) {
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
                AppError::validation(format!("argument {} must be an integer", name))
            }),
            Some(Value::Null) | None => Err(AppError::validation(format!(
                "argument {} is required",
                name
            ))),
            Some(_) => Err(AppError::validation(format!(
                "argument {} must be an integer",
                name
            ))),
        }
    }
}

/// 从查询文档提取操作
///
/// `$var` 引用在这里就地求值；变量缺失按 null 处理。
pub fn parse_operation(query: &str, variables: &Map<String, Value>) -> AppResult<Operation> {
    let mut scanner = Scanner::new(query);
    scanner.skip_ws();

    let kind = match scanner.peek() {
        Some('{') => OperationKind::Query,
        _ => {
            let keyword = scanner
                .eat_ident()
                .ok_or_else(|| malformed("expected operation type"))?;
            match keyword.as_str() {
                "query" => OperationKind::Query,
                "mutation" => OperationKind::Mutation,
                other => {
                    return Err(AppError::validation(format!(
                        "unsupported operation type: {}",
                        other
                    )));
                }
            }
        }
    };

    // 跳过操作名与变量声明，直到选择集
    while let Some(c) = scanner.peek() {
        if c == '{' {
            break;
        }
        scanner.bump();
    }
    if scanner.bump() != Some('{') {
        return Err(malformed("missing selection set"));
    }

    scanner.skip_ws();
    let field = scanner
        .eat_ident()
        .ok_or_else(|| malformed("selection set has no field"))?;

    scanner.skip_ws();
    let mut arguments = Map::new();
    if scanner.peek() == Some('(') {
        scanner.bump();
        loop {
            scanner.skip_ws();
            match scanner.peek() {
                Some(')') => {
                    scanner.bump();
                    break;
                }
                None => return Err(malformed("unterminated argument list")),
                _ => {}
            }

            let name = scanner
                .eat_ident()
                .ok_or_else(|| malformed("expected argument name"))?;
            scanner.skip_ws();
            if scanner.bump() != Some(':') {
                return Err(malformed("expected ':' after argument name"));
            }
            scanner.skip_ws();
            let value = scanner.read_value(variables)?;
            arguments.insert(name, value);
        }
    }

    Ok(Operation {
        kind,
        field,
        arguments,
    })
}

fn malformed(detail: &str) -> AppError {
    AppError::validation(format!("malformed query document: {}", detail))
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(src: &str) -> Self {
        Self {
            chars: src.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// 空白和逗号都是分隔符
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == ',' {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn eat_ident(&mut self) -> Option<String> {
        let mut ident = String::new();
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return None,
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                ident.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Some(ident)
    }

    fn read_value(&mut self, variables: &Map<String, Value>) -> AppResult<Value> {
        match self.peek() {
            Some('$') => {
                self.bump();
                let name = self
                    .eat_ident()
                    .ok_or_else(|| malformed("expected variable name after '$'"))?;
                Ok(variables.get(&name).cloned().unwrap_or(Value::Null))
            }
            Some('"') => self.read_string().map(Value::String),
            Some(c) if c == '-' || c.is_ascii_digit() => self.read_number(),
            Some(c) if c.is_ascii_alphabetic() => {
                let word = self.eat_ident().unwrap_or_default();
                match word.as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    other => Err(AppError::validation(format!(
                        "unsupported argument value: {}",
                        other
                    ))),
                }
            }
            _ => Err(malformed("expected argument value")),
        }
    }

    fn read_string(&mut self) -> AppResult<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(malformed("unterminated string literal")),
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c) => out.push(c),
                    None => return Err(malformed("unterminated string literal")),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn read_number(&mut self) -> AppResult<Value> {
        let mut raw = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E') {
                raw.push(c);
                self.bump();
            } else {
                break;
            }
        }
        serde_json::from_str(&raw)
            .map_err(|_| AppError::validation(format!("invalid number literal: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_parse_named_query_with_variables() {
        let query = r#"
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
        let op = parse_operation(
            query,
            &vars(json!({"search": "bolt", "status": "critical"})),
        )
        .unwrap();

        assert_eq!(op.kind, OperationKind::Query);
        assert_eq!(op.field, "products");
        assert_eq!(op.optional_string("search").as_deref(), Some("bolt"));
        assert_eq!(op.optional_string("status").as_deref(), Some("critical"));
        // 未绑定的变量按 null 处理
        assert_eq!(op.optional_string("warehouse"), None);
    }

    #[test]
    fn test_parse_mutation_with_inline_arguments() {
        let query = r#"
            mutation {
                transferStock(id: "P-1001", from: "BLR-A", to: "DEL-B", qty: 50) {
                    id
                    warehouse
                    stock
                }
            }
        "#;
        let op = parse_operation(query, &Map::new()).unwrap();

        assert_eq!(op.kind, OperationKind::Mutation);
        assert_eq!(op.field, "transferStock");
        assert_eq!(op.require_string("id").unwrap(), "P-1001");
        assert_eq!(op.require_int("qty").unwrap(), 50);
    }

    #[test]
    fn test_parse_anonymous_query() {
        let op = parse_operation("{ warehouses { code name } }", &Map::new()).unwrap();
        assert_eq!(op.kind, OperationKind::Query);
        assert_eq!(op.field, "warehouses");
        assert!(op.arguments.is_empty());
    }

    #[test]
    fn test_negative_int_argument() {
        let op = parse_operation(
            r#"mutation { updateDemand(id: "P-1001", demand: -10) { id } }"#,
            &Map::new(),
        )
        .unwrap();
        assert_eq!(op.require_int("demand").unwrap(), -10);
    }

    #[test]
    fn test_unsupported_operation_type_is_rejected() {
        let err = parse_operation("subscription { products { id } }", &Map::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_missing_selection_set_is_rejected() {
        let err = parse_operation("query GetProducts", &Map::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_require_int_rejects_string() {
        let op = parse_operation(
            r#"mutation { updateDemand(id: "P-1001", demand: "lots") { id } }"#,
            &Map::new(),
        )
        .unwrap();
        assert!(op.require_int("demand").is_err());
    }
}
