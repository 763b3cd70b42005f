//! Text blocks returned to MCP clients

use txm_core::{
    BasicStats, CaseConversionResult, CleaningResult, EncodingResult, GenerationResult,
    TextOutcome,
};
use txm_tools::{format_count, render_report};

/// Render any outcome as the text shown to the client
pub fn render_outcome(outcome: &TextOutcome) -> String {
    match outcome {
        TextOutcome::Case(result) => render_case(result),
        TextOutcome::Cleaning(result) => render_cleaning(result),
        TextOutcome::Stats(stats) => render_stats(stats),
        TextOutcome::Report(report) => render_report(report),
        TextOutcome::Encoding(result) => render_encoding(result),
        TextOutcome::Generation(result) => render_generation(result),
    }
}

fn render_case(result: &CaseConversionResult) -> String {
    format!(
        "🔄 Case Conversion Result\n\nOriginal: \"{}\"\nConverted: \"{}\"\nType: {}\nDescription: {}",
        result.original, result.converted, result.kind, result.description
    )
}

fn render_cleaning(result: &CleaningResult) -> String {
    format!(
        "🧹 Text Cleaning Result\n\nOperation: {}\nChanges: {}\nDescription: {}\n\nCleaned text:\n{}",
        result.operation, result.changes, result.description, result.cleaned
    )
}

fn render_stats(stats: &BasicStats) -> String {
    format!(
        "📊 Basic Text Statistics\n\n\
         Characters: {}\n\
         Characters (no spaces): {}\n\
         Words: {}\n\
         Sentences: {}\n\
         Paragraphs: {}\n\
         Lines: {}\n\n\
         Reading time: {} minutes\n\
         Average words per sentence: {}",
        format_count(stats.characters),
        format_count(stats.characters_no_spaces),
        format_count(stats.words),
        format_count(stats.sentences),
        format_count(stats.paragraphs),
        format_count(stats.lines),
        stats.reading_time,
        stats.average_words_per_sentence
    )
}

fn render_encoding(result: &EncodingResult) -> String {
    format!(
        "🔄 Encoding Conversion Result\n\nEncoding: {}\nDescription: {}\n\nOriginal:\n{}\n\nConverted:\n{}",
        result.encoding, result.description, result.original, result.converted
    )
}

fn render_generation(result: &GenerationResult) -> String {
    format!(
        "✨ Text Generation Result\n\nType: {}\nDescription: {}\n\nGenerated:\n{}",
        result.kind, result.description, result.generated
    )
}
