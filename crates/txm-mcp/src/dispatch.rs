//! Tool-call argument parsing and execution

use rand::Rng;
use serde_json::Value;
use tracing::debug;
use txm_core::{Error, GenerationOptions, Operation, OperationFamily, Result, TextRequest};
use txm_tools::TextEngine;

use crate::protocol::ToolResponse;
use crate::render::render_outcome;

/// Turn a tool name and its JSON arguments into a validated request
pub fn parse_tool_call(name: &str, arguments: &Value) -> Result<TextRequest> {
    let family =
        OperationFamily::from_tool_name(name).ok_or_else(|| Error::UnknownTool(name.to_string()))?;

    let operation_name = required_str(arguments, family.operation_key())?;
    let operation = Operation::parse(family, operation_name)?;

    if family.requires_text() {
        let text = required_str(arguments, "text")?;
        return Ok(TextRequest::with_text(operation, text));
    }

    Ok(TextRequest {
        operation,
        text: None,
        options: parse_options(arguments.get("options")),
    })
}

/// Execute a tool call, folding every failure into an error response
pub fn call_tool<R: Rng>(engine: &mut TextEngine<R>, name: &str, arguments: &Value) -> ToolResponse {
    let outcome = parse_tool_call(name, arguments).and_then(|request| engine.execute(&request));

    match outcome {
        Ok(outcome) => ToolResponse::text(render_outcome(&outcome)),
        Err(err) => {
            debug!(tool = name, error = %err, "Tool call failed");
            ToolResponse::error(err)
        }
    }
}

fn required_str<'a>(arguments: &'a Value, key: &str) -> Result<&'a str> {
    match arguments.get(key) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(Error::InvalidInput(format!(
            "Argument '{}' must be a string",
            key
        ))),
        None => Err(Error::InvalidInput(format!(
            "Missing required argument '{}'",
            key
        ))),
    }
}

/// Lenient option parsing: anything that is not a number is treated as absent
fn parse_options(options: Option<&Value>) -> GenerationOptions {
    let Some(options) = options else {
        return GenerationOptions::default();
    };

    GenerationOptions {
        length: options.get("length").and_then(as_integer),
        paragraphs: options.get("paragraphs").and_then(as_integer),
        words_per_paragraph: options.get("words_per_paragraph").and_then(as_integer),
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use txm_core::{CaseType, GenerationType};

    #[test]
    fn test_parse_case_call() {
        let request =
            parse_tool_call("convert_case", &json!({"text": "Hi there", "target_case": "kebab"}))
                .unwrap();
        assert_eq!(request.operation, Operation::Case(CaseType::Kebab));
        assert_eq!(request.text.as_deref(), Some("Hi there"));
    }

    #[test]
    fn test_unknown_tool_and_operation() {
        let err = parse_tool_call("shout", &json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: shout");

        let err = parse_tool_call("clean_text", &json!({"text": "x", "operation": "scrub"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown cleaning operation: scrub");
    }

    #[test]
    fn test_missing_arguments() {
        let err = parse_tool_call("analyze_text", &json!({"analysis_type": "basic_stats"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Missing required argument 'text'");

        let err = parse_tool_call("convert_encoding", &json!({"text": 5, "conversion_type": "url_encode"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Argument 'text' must be a string");
    }

    #[test]
    fn test_generation_options_are_lenient() {
        let request = parse_tool_call(
            "generate_text",
            &json!({
                "generation_type": "lorem_ipsum",
                "options": {"length": 16.9, "paragraphs": "3", "words_per_paragraph": "lots"}
            }),
        )
        .unwrap();
        assert_eq!(request.operation, Operation::Generate(GenerationType::LoremIpsum));
        assert_eq!(request.options.length, Some(16));
        assert_eq!(request.options.paragraphs, Some(3));
        assert_eq!(request.options.words_per_paragraph, None);
        assert_eq!(request.text, None);
    }

    #[test]
    fn test_call_tool_folds_errors() {
        let mut engine = TextEngine::from_seed(Some(3));
        let response = call_tool(
            &mut engine,
            "convert_encoding",
            &json!({"text": "%zz", "conversion_type": "url_decode"}),
        );
        assert!(response.is_error);
        assert!(response.content[0].text.starts_with("❌ Error: Malformed percent-escape"));

        let response = call_tool(&mut engine, "generate_text", &json!({"generation_type": "uuid"}));
        assert!(!response.is_error);
        assert!(response.content[0].text.starts_with("✨ Text Generation Result"));
    }
}
