//! MCP request dispatch
//!
//! Maps JSON-RPC methods and tool calls onto the measure-units operations.
//! Unit errors are client-input errors and come back as tool results with
//! `isError: true` and status 400; protocol errors use JSON-RPC error codes.

use measure_units::{self as units, MeasureError, Quantity, UNITS};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::config::ServerConfig;

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "measure";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const STATUS_OK: u16 = 200;
const STATUS_BAD_REQUEST: u16 = 400;

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: INVALID_PARAMS, message: message.into(), data: None }
    }
}

impl McpResponse {
    pub fn failure(id: Option<JsonValue>, error: McpError) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

/// The request id is unknown, so the response carries `"id": null`
pub fn parse_error(message: impl std::fmt::Display) -> McpResponse {
    McpResponse::failure(Some(JsonValue::Null), McpError {
        code: PARSE_ERROR,
        message: format!("Parse error: {}", message),
        data: None,
    })
}

pub fn handle_request(config: &ServerConfig, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(config, &request.params),

        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse::failure(request.id.clone(), e),
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    tracing::info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Quantity measurement conversions"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        }
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let type_names: Vec<&str> = UNITS.all_unit_types().iter().map(|t| t.name()).collect();

    Ok(json!({
        "tools": [
            {
                "name": "list_unit_types",
                "description": "Returns the valid unit types",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "Returns the valid units of the given type",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "unit_type": {
                            "type": "string",
                            "description": "Unit type, case-insensitive",
                            "examples": type_names
                        }
                    },
                    "required": ["unit_type"]
                }
            },
            {
                "name": "convert",
                "description": "Converts a value to the given unit. To convert 10 inch to feet: value=10, from=INCH, to=FEET",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": "number",
                            "description": "Value to convert"
                        },
                        "from": {
                            "type": "string",
                            "description": "Source unit, case-insensitive",
                            "examples": UNITS.unit_names()
                        },
                        "to": {
                            "type": "string",
                            "description": "Target unit, case-insensitive"
                        }
                    },
                    "required": ["value", "from", "to"]
                }
            }
        ]
    }))
}

fn handle_tool_call(config: &ServerConfig, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    tracing::debug!(tool = name, "tool call");

    match name {
        "list_unit_types" => Ok(tool_list_unit_types()),
        "list_units" => tool_list_units(args),
        "convert" => tool_convert(config, args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn tool_list_unit_types() -> JsonValue {
    let types = units::list_unit_types();
    let text = types.iter().map(|t| t.name()).collect::<Vec<_>>().join(", ");
    ok_result(text, json!(types))
}

fn tool_list_units(args: JsonValue) -> Result<JsonValue, McpError> {
    let unit_type = string_arg(&args, "unit_type")?;

    Ok(match units::parse_unit_type(unit_type) {
        Ok(unit_type) => {
            let list = UNITS.valid_units_of(unit_type);
            let names = list.iter().map(|u| u.name()).collect::<Vec<_>>().join(", ");
            let text = format!("{} (base {}): {}", unit_type, unit_type.base_unit(), names);
            ok_result(text, json!(list))
        }
        Err(e) => error_result(&e),
    })
}

fn tool_convert(config: &ServerConfig, args: JsonValue) -> Result<JsonValue, McpError> {
    let value = args.get("value")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| McpError::invalid_params("Missing value argument"))?;
    let from = string_arg(&args, "from")?;
    let to = string_arg(&args, "to")?;

    let converted = units::parse_unit(from)
        .and_then(|from| Ok((from, units::parse_unit(to)?)))
        .and_then(|(from, to)| Ok((from, units::convert(&Quantity::new(value, from), to)?)));

    Ok(match converted {
        Ok((from, converted)) => {
            let shown = Quantity::new(config.present(converted.value), converted.unit);
            ok_result(format!("{} {} = {}", value, from, shown), json!(shown))
        }
        Err(e) => error_result(&e),
    })
}

fn string_arg<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

fn ok_result(text: impl Into<String>, data: JsonValue) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text.into() }],
        "status": STATUS_OK,
        "data": data,
        "isError": false
    })
}

fn error_result(e: &MeasureError) -> JsonValue {
    tracing::debug!(code = e.code(), error = %e, "rejected input");
    json!({
        "content": [{ "type": "text", "text": e.to_string() }],
        "status": STATUS_BAD_REQUEST,
        "error": { "code": e.code(), "message": e.to_string() },
        "isError": true
    })
}
