//! Core types for Text Master
//!
//! This crate defines the operation enums, request and result value objects,
//! and the error type shared by the text tools, the MCP server and the CLI.

pub mod error;
pub mod operation;
pub mod types;


pub use error::{Error, Result};
pub use operation::{
    AnalysisType, CaseType, CleanOperation, EncodingType, GenerationType, Operation,
    OperationFamily,
};
pub use types::*;
