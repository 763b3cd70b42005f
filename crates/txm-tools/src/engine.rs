//! Request execution across the five tool families

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use txm_core::{AnalysisType, Operation, Result, TextOutcome, TextRequest};

use crate::{CaseConverter, EncodingConverter, TextAnalyzer, TextCleaner, TextGenerator};

/// Executes validated text requests
///
/// Every family except generation is a pure function of the request; the
/// engine only holds the generator's randomness source.
pub struct TextEngine<R: Rng = StdRng> {
    generator: TextGenerator<R>,
}

impl TextEngine<StdRng> {
    /// Create an engine with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_generator(TextGenerator::new())
    }

    /// Create an engine with an optional fixed seed
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_generator(TextGenerator::seeded(seed)),
            None => Self::new(),
        }
    }
}

impl Default for TextEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TextEngine<R> {
    pub fn with_generator(generator: TextGenerator<R>) -> Self {
        Self { generator }
    }

    /// Execute one request
    pub fn execute(&mut self, request: &TextRequest) -> Result<TextOutcome> {
        debug!(operation = %request.operation, "Executing text operation");

        let outcome = match request.operation {
            Operation::Case(case) => {
                TextOutcome::Case(CaseConverter::convert(request.require_text()?, case))
            }
            Operation::Clean(operation) => {
                TextOutcome::Cleaning(TextCleaner::clean(request.require_text()?, operation))
            }
            Operation::Analyze(AnalysisType::BasicStats) => {
                TextOutcome::Stats(TextAnalyzer::basic_stats(request.require_text()?))
            }
            Operation::Analyze(AnalysisType::FullReport) => {
                TextOutcome::Report(TextAnalyzer::full_report(request.require_text()?))
            }
            Operation::Encode(encoding) => TextOutcome::Encoding(EncodingConverter::convert(
                request.require_text()?,
                encoding,
            )?),
            Operation::Generate(kind) => {
                TextOutcome::Generation(self.generator.generate(kind, &request.options))
            }
        };

        Ok(outcome)
    }
}
