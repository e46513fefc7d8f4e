use anyhow::bail;
use jot_core::entities::{Item, Subtask};
use jot_core::responses::{
    BoardResponse, CompletionResponse, DeleteResponse, PresetApplyResponse, PresetClearResponse,
};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: &str = "item, subtask, board, completion, preset-apply, preset-clear, delete";

/// Handle `jot schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for_type(&args.type_name)?, flags.format)
}

fn schema_for_type(name: &str) -> anyhow::Result<Schema> {
    let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
    Ok(match normalized.as_str() {
        "item" => schema_for!(Item),
        "subtask" => schema_for!(Subtask),
        "board" => schema_for!(BoardResponse),
        "completion" => schema_for!(CompletionResponse),
        "preset-apply" => schema_for!(PresetApplyResponse),
        "preset-clear" => schema_for!(PresetClearResponse),
        "delete" => schema_for!(DeleteResponse),
        _ => bail!("unknown schema type '{name}' (expected one of: {TYPE_NAMES})"),
    })
}

#[cfg(test)]
mod tests {
    use super::schema_for_type;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in super::TYPE_NAMES.split(", ") {
            let schema = schema_for_type(name).expect("schema should exist");
            let value = serde_json::to_value(&schema).expect("schema serializes");
            assert!(value.get("properties").is_some(), "{name} schema has no properties");
        }
    }

    #[test]
    fn accepts_underscore_spelling() {
        assert!(schema_for_type("PRESET_APPLY").is_ok());
    }

    #[test]
    fn unknown_type_errors() {
        let err = schema_for_type("widget").expect_err("should fail");
        assert!(err.to_string().contains("unknown schema type 'widget'"));
    }
}
