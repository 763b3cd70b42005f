//! Tool catalog advertised through `tools/list`

use serde::Serialize;
use serde_json::{Value, json};
use txm_core::OperationFamily;

/// One MCP tool with its JSON input schema
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Build the definition for a tool family
    pub fn for_family(family: OperationFamily) -> Self {
        let (description, text_description, operation_description) = match family {
            OperationFamily::Case => (
                "Convert text between different case formats",
                "Text to convert",
                "Target case format",
            ),
            OperationFamily::Clean => (
                "Clean and format text",
                "Text to clean",
                "Cleaning operation",
            ),
            OperationFamily::Analyze => (
                "Analyze text statistics and readability",
                "Text to analyze",
                "Type of analysis",
            ),
            OperationFamily::Encode => (
                "Convert text between different encodings",
                "Text to convert",
                "Encoding conversion type",
            ),
            OperationFamily::Generate => (
                "Generate various types of text",
                "",
                "Type of text to generate",
            ),
        };

        let key = family.operation_key();
        let operation = json!({
            "type": "string",
            "enum": family.operation_names(),
            "description": operation_description,
        });

        let input_schema = if family.requires_text() {
            json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": text_description },
                    key: operation,
                },
                "required": ["text", key],
            })
        } else {
            json!({
                "type": "object",
                "properties": {
                    key: operation,
                    "options": {
                        "type": "object",
                        "description": "Generation options",
                        "properties": {
                            "length": { "type": "number", "description": "Password length" },
                            "paragraphs": { "type": "number", "description": "Number of paragraphs" },
                            "words_per_paragraph": {
                                "type": "number",
                                "description": "Words per Lorem Ipsum paragraph"
                            },
                        },
                    },
                },
                "required": [key],
            })
        };

        Self {
            name: family.tool_name(),
            description,
            input_schema,
        }
    }
}

/// All tools in catalog order
pub fn tool_catalog() -> Vec<ToolDefinition> {
    OperationFamily::all()
        .into_iter()
        .map(ToolDefinition::for_family)
        .collect()
}
