use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use tracing::debug;

use txm_cli::{
    LoggingConfig, display_banner, init_logging, print_error, print_tools, read_text,
};
use txm_core::{GenerationOptions, Operation, OperationFamily, TextRequest};
use txm_mcp::{ServerConfig, render_outcome, run_stdio, tool_catalog};
use txm_tools::TextEngine;

#[derive(Parser)]
#[command(name = "txm", version)]
#[command(about = "Text transformation and analysis tools over MCP and the command line", long_about = None)]
struct Cli {
    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server on stdin and stdout
    Serve {
        /// Seed the text generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the available tools
    Tools,

    /// Convert text between case formats
    Case {
        /// upper, lower, title, camel, pascal, snake, kebab or constant
        target_case: String,
        /// Text to convert (read from stdin when omitted)
        text: Option<String>,
    },

    /// Clean whitespace and line structure
    Clean {
        /// remove_extra_spaces, trim_lines, remove_empty_lines or smart_clean
        operation: String,
        /// Text to clean (read from stdin when omitted)
        text: Option<String>,
    },

    /// Compute text statistics and readability
    Analyze {
        /// basic_stats or full_report
        analysis_type: String,
        /// Text to analyze (read from stdin when omitted)
        text: Option<String>,
    },

    /// Convert text to or from Base64 and URL encoding
    Encode {
        /// base64_encode, base64_decode, url_encode or url_decode
        conversion_type: String,
        /// Text to convert (read from stdin when omitted)
        text: Option<String>,
    },

    /// Generate lorem ipsum, passwords or UUIDs
    Generate {
        /// lorem_ipsum, password or uuid
        generation_type: String,

        /// Password length
        #[arg(long, allow_hyphen_values = true)]
        length: Option<i64>,

        /// Number of lorem ipsum paragraphs
        #[arg(long, allow_hyphen_values = true)]
        paragraphs: Option<i64>,

        /// Words per lorem ipsum paragraph
        #[arg(long, allow_hyphen_values = true)]
        words_per_paragraph: Option<i64>,

        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ServerConfig::from_env()?;

    let serving = matches!(cli.command, Commands::Serve { .. });
    init_logging(&LoggingConfig::for_command(
        serving,
        cli.verbose,
        config.log_filter.clone(),
    ))?;

    let (family, name, text) = match cli.command {
        Commands::Serve { seed } => {
            let config = config.with_seed(seed);
            if io::stderr().is_terminal() {
                display_banner(&config.name, &config.version);
            }
            run_stdio(config).await?;
            return Ok(());
        }
        Commands::Tools => {
            let tools = tool_catalog();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tools)?);
            } else {
                print_tools(&tools);
            }
            return Ok(());
        }
        Commands::Generate {
            generation_type,
            length,
            paragraphs,
            words_per_paragraph,
            seed,
        } => {
            let operation = Operation::parse(OperationFamily::Generate, &generation_type)?;
            let request = TextRequest {
                operation,
                text: None,
                options: GenerationOptions {
                    length,
                    paragraphs,
                    words_per_paragraph,
                },
            };
            let mut engine = TextEngine::from_seed(seed.or(config.seed));
            return execute(&mut engine, &request, cli.json);
        }
        Commands::Case { target_case, text } => (OperationFamily::Case, target_case, text),
        Commands::Clean { operation, text } => (OperationFamily::Clean, operation, text),
        Commands::Analyze {
            analysis_type,
            text,
        } => (OperationFamily::Analyze, analysis_type, text),
        Commands::Encode {
            conversion_type,
            text,
        } => (OperationFamily::Encode, conversion_type, text),
    };

    // Validate the operation before blocking on stdin
    let operation = Operation::parse(family, &name)?;
    let request = TextRequest::with_text(operation, read_text(text)?);
    let mut engine = TextEngine::from_seed(config.seed);
    execute(&mut engine, &request, cli.json)
}

fn execute(engine: &mut TextEngine, request: &TextRequest, json: bool) -> Result<()> {
    debug!(operation = %request.operation, "Running one-shot command");
    let outcome = engine.execute(request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", render_outcome(&outcome));
    }
    Ok(())
}
