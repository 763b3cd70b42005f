//! CLI support for Text Master

mod input;
mod logging;
mod ui;


pub use input::{read_text, read_text_from};
pub use logging::{LoggingConfig, init_logging};
pub use ui::{display_banner, operation_summaries, print_error, print_tools};

// Re-export core types
pub use txm_core::{Error, Result};
