//! UI utilities for the CLI

use colored::*;
use serde_json::Value;
use std::fmt::Display;
use txm_mcp::ToolDefinition;

/// Display the startup banner on stderr
pub fn display_banner(name: &str, version: &str) {
    let title = format!("Text Master MCP Server v{}", version);
    let subtitle = format!("{} on stdio", name);
    let width = title.chars().count().max(subtitle.chars().count()) + 4;

    let border = "─".repeat(width);
    let line = |text: &str| format!("│  {:<pad$}│", text, pad = width - 2);

    eprintln!();
    eprintln!("{}", format!("┌{}┐", border).blue());
    eprintln!("{}", line(&title).blue().bold());
    eprintln!("{}", line(&subtitle).blue());
    eprintln!("{}", format!("└{}┘", border).blue());
    eprintln!("{}", "💡 Send newline-delimited JSON-RPC on stdin; Ctrl-D to stop".dimmed());
    eprintln!();
}

/// Print an error line on stderr
pub fn print_error(error: impl Display) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

/// Print the tool catalog
pub fn print_tools(tools: &[ToolDefinition]) {
    println!("{}", "Available tools:".bold());
    for tool in tools {
        println!("  {} - {}", tool.name.green(), tool.description);
        for summary in operation_summaries(tool) {
            println!("      {}", summary.dimmed());
        }
    }
}

/// `key: a, b, c` for every enumerated argument of a tool
pub fn operation_summaries(tool: &ToolDefinition) -> Vec<String> {
    let Some(properties) = tool.input_schema["properties"].as_object() else {
        return Vec::new();
    };

    properties
        .iter()
        .filter_map(|(key, schema)| {
            let names: Vec<&str> = schema["enum"]
                .as_array()?
                .iter()
                .filter_map(Value::as_str)
                .collect();
            Some(format!("{}: {}", key, names.join(", ")))
        })
        .collect()
}
