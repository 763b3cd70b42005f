//! Request and result value objects

use serde::{Deserialize, Serialize};

use crate::{
    CaseType, CleanOperation, EncodingType, Error, GenerationType, Operation,
    Result,
};

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 256;

pub const DEFAULT_PARAGRAPHS: usize = 1;
pub const MAX_PARAGRAPHS: usize = 100;

pub const DEFAULT_WORDS_PER_PARAGRAPH: usize = 50;
pub const MAX_WORDS_PER_PARAGRAPH: usize = 1000;

/// Result of a case conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseConversionResult {
    pub original: String,
    pub converted: String,
    #[serde(rename = "type")]
    pub kind: CaseType,
    pub description: String,
}

/// Result of a cleaning operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningResult {
    pub cleaned: String,
    pub operation: CleanOperation,
    /// Number of discrete edits applied; zero when nothing changed
    pub changes: usize,
    pub description: String,
}

/// Basic counts over a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    /// Minutes at 200 words per minute, rounded up
    pub reading_time: usize,
    pub average_words_per_sentence: f64,
}

/// A word and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Basic statistics plus readability and vocabulary metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullReport {
    pub stats: BasicStats,
    pub syllables: usize,
    pub average_syllables_per_word: f64,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub reading_level: String,
    pub unique_words: usize,
    pub lexical_diversity: f64,
    pub average_word_length: f64,
    pub longest_word: Option<String>,
    pub most_frequent_word: Option<WordFrequency>,
    pub top_words: Vec<WordFrequency>,
}

/// Result of an encoding conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingResult {
    pub original: String,
    pub converted: String,
    pub encoding: EncodingType,
    pub description: String,
}

/// Result of a generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub generated: String,
    #[serde(rename = "type")]
    pub kind: GenerationType,
    pub description: String,
}

/// Numeric options for text generation
///
/// Values are kept exactly as supplied; the accessor methods apply defaults
/// and clamp to the supported range, so generation never fails on options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: Option<i64>,
    pub paragraphs: Option<i64>,
    pub words_per_paragraph: Option<i64>,
}

impl GenerationOptions {
    /// Set the password length
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the paragraph count
    pub fn with_paragraphs(mut self, paragraphs: i64) -> Self {
        self.paragraphs = Some(paragraphs);
        self
    }

    /// Set the words per paragraph
    pub fn with_words_per_paragraph(mut self, words: i64) -> Self {
        self.words_per_paragraph = Some(words);
        self
    }

    pub fn password_length(&self) -> usize {
        clamp_option(
            self.length,
            DEFAULT_PASSWORD_LENGTH,
            MIN_PASSWORD_LENGTH,
            MAX_PASSWORD_LENGTH,
        )
    }

    pub fn paragraph_count(&self) -> usize {
        clamp_option(self.paragraphs, DEFAULT_PARAGRAPHS, 1, MAX_PARAGRAPHS)
    }

    pub fn words_per_paragraph_count(&self) -> usize {
        clamp_option(
            self.words_per_paragraph,
            DEFAULT_WORDS_PER_PARAGRAPH,
            1,
            MAX_WORDS_PER_PARAGRAPH,
        )
    }
}

fn clamp_option(value: Option<i64>, default: usize, min: usize, max: usize) -> usize {
    match value {
        None => default,
        Some(v) if v < min as i64 => min,
        Some(v) if v > max as i64 => max,
        Some(v) => v as usize,
    }
}

/// A validated `{operation, text, options}` triple
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub operation: Operation,
    pub text: Option<String>,
    pub options: GenerationOptions,
}

impl TextRequest {
    /// Create a request for an operation that consumes text
    pub fn with_text(operation: Operation, text: impl Into<String>) -> Self {
        Self {
            operation,
            text: Some(text.into()),
            options: GenerationOptions::default(),
        }
    }

    /// Create a generation request
    pub fn generate(kind: GenerationType, options: GenerationOptions) -> Self {
        Self {
            operation: Operation::Generate(kind),
            text: None,
            options,
        }
    }

    /// Get the text payload, failing if the operation needs one and none was given
    pub fn require_text(&self) -> Result<&str> {
        self.text.as_deref().ok_or_else(|| {
            Error::InvalidInput(format!(
                "'{}' requires a text payload",
                self.operation.family().tool_name()
            ))
        })
    }
}

/// Any result the engine can produce
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextOutcome {
    Case(CaseConversionResult),
    Cleaning(CleaningResult),
    Stats(BasicStats),
    Report(FullReport),
    Encoding(EncodingResult),
    Generation(GenerationResult),
}
