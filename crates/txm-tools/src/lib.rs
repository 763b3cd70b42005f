//! Text transformation and analysis tools for Text Master
//!
//! This crate implements the five tool families (case conversion, cleaning,
//! analysis, encoding and generation) and the engine that dispatches
//! validated requests to them.

mod case_converter;
mod encoding_converter;
mod engine;
mod text_analyzer;
mod text_cleaner;
mod text_generator;


pub use case_converter::{CaseConverter, split_words};
pub use encoding_converter::EncodingConverter;
pub use engine::TextEngine;
pub use text_analyzer::{TextAnalyzer, count_syllables, format_count, render_report};
pub use text_cleaner::TextCleaner;
pub use text_generator::TextGenerator;

// Re-export core types for convenience
pub use txm_core::{Error, Result};
