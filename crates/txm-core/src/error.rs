//! Error types for Text Master

use thiserror::Error;

use crate::OperationFamily;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the Text Master system
#[derive(Error, Debug)]
pub enum Error {
    /// The requested operation name is not one of the family's variants
    #[error("Unknown {}: {name}", .family.noun())]
    UnknownOperation {
        family: OperationFamily,
        name: String,
    },

    /// Malformed input to a decoding operation
    #[error("{message}")]
    Decode {
        message: String,
        position: Option<usize>,
    },

    /// The MCP tool name is not in the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn unknown_operation(family: OperationFamily, name: impl Into<String>) -> Self {
        Error::UnknownOperation {
            family,
            name: name.into(),
        }
    }

    pub fn decode(message: impl Into<String>, position: Option<usize>) -> Self {
        Error::Decode {
            message: message.into(),
            position,
        }
    }
}
