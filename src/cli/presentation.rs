//! CLI presentation: text and JSON formatting of command results.

use crate::error::ReflError;
use crate::protocol::CommandKind;
use comfy_table::Table;
use serde_json::json;

/// Result of `refl emit`
pub struct EmitResult {
    pub kind: CommandKind,
    pub inner: String,
    pub iotcm: String,
}

pub fn format_emit_result(result: &EmitResult, format: &str) -> Result<String, ReflError> {
    match format {
        "json" => {
            let out = json!({
                "command": result.kind.name(),
                "scope": result.kind.scope().as_str(),
                "inner": result.inner,
                "iotcm": result.iotcm,
            });
            serde_json::to_string_pretty(&out).map_err(|e| ReflError::Serialization(e.to_string()))
        }
        _ => Ok(result.iotcm.clone()),
    }
}

pub fn format_command_list(format: &str) -> Result<String, ReflError> {
    match format {
        "json" => {
            let commands: Vec<_> = CommandKind::ALL
                .iter()
                .map(|kind| {
                    json!({
                        "name": kind.name(),
                        "scope": kind.scope().as_str(),
                        "arguments": kind.synopsis(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&commands)
                .map_err(|e| ReflError::Serialization(e.to_string()))
        }
        _ => {
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["Command", "Scope", "Arguments"]);
            for kind in CommandKind::ALL {
                table.add_row(vec![kind.name(), kind.scope().as_str(), kind.synopsis()]);
            }
            Ok(table.to_string())
        }
    }
}
