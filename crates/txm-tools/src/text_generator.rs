//! Synthetic text generation: lorem ipsum, passwords and UUIDs
//!
//! The generator owns its randomness source so callers can seed it. Passwords
//! come from a uniform but non-cryptographic source: this is a utility
//! generator, not a security primitive.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use txm_core::{
    GenerationOptions, GenerationResult, GenerationType, MAX_PARAGRAPHS, MAX_PASSWORD_LENGTH,
    MAX_WORDS_PER_PARAGRAPH, MIN_PASSWORD_LENGTH,
};

const LOREM_OPENING: [&str; 5] = ["lorem", "ipsum", "dolor", "sit", "amet"];

const LOREM_WORDS: [&str; 64] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "eu", "fugiat", "nulla",
    "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt",
    "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "integer",
];

const MIN_SENTENCE_WORDS: usize = 5;
const MAX_SENTENCE_WORDS: usize = 15;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// Generates synthetic text from an injected randomness source
pub struct TextGenerator<R: Rng = StdRng> {
    rng: R,
}

impl TextGenerator<StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a generator with reproducible output
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for TextGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TextGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate text of the requested kind
    pub fn generate(&mut self, kind: GenerationType, options: &GenerationOptions) -> GenerationResult {
        Self::generator(kind)(self, options)
    }

    /// Get the generation function for a kind
    pub fn generator(kind: GenerationType) -> fn(&mut Self, &GenerationOptions) -> GenerationResult {
        match kind {
            GenerationType::LoremIpsum => |generator, options| {
                generator.lorem_ipsum(
                    options.paragraph_count(),
                    options.words_per_paragraph_count(),
                )
            },
            GenerationType::Password => {
                |generator, options| generator.password(options.password_length())
            }
            GenerationType::Uuid => |generator, _| generator.uuid(),
        }
    }

    /// Paragraphs of pseudo-Latin, separated by blank lines
    pub fn lorem_ipsum(&mut self, paragraphs: usize, words_per_paragraph: usize) -> GenerationResult {
        let paragraphs = paragraphs.clamp(1, MAX_PARAGRAPHS);
        let words_per_paragraph = words_per_paragraph.clamp(1, MAX_WORDS_PER_PARAGRAPH);

        let generated = (0..paragraphs)
            .map(|i| self.paragraph(words_per_paragraph, i == 0))
            .collect::<Vec<_>>()
            .join("\n\n");

        GenerationResult {
            generated,
            kind: GenerationType::LoremIpsum,
            description: format!(
                "Generated {} paragraph(s) of Lorem Ipsum text with {} words each",
                paragraphs, words_per_paragraph
            ),
        }
    }

    /// A password with at least one character from each class
    pub fn password(&mut self, length: usize) -> GenerationResult {
        let length = length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
        let alphabet = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();

        let mut bytes: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS]
            .iter()
            .map(|class| self.pick(class))
            .collect();
        while bytes.len() < length {
            bytes.push(self.pick(&alphabet));
        }
        bytes.shuffle(&mut self.rng);

        GenerationResult {
            generated: bytes.into_iter().map(char::from).collect(),
            kind: GenerationType::Password,
            description: format!(
                "Generated a {}-character password with upper/lowercase letters, digits and symbols (utility generator, not for security-critical use)",
                length
            ),
        }
    }

    /// A version 4 UUID built from this generator's random bytes
    pub fn uuid(&mut self) -> GenerationResult {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes[..]);
        let id = uuid::Builder::from_random_bytes(bytes).into_uuid();

        GenerationResult {
            generated: id.hyphenated().to_string(),
            kind: GenerationType::Uuid,
            description: "Generated a random version 4 UUID".to_string(),
        }
    }

    fn paragraph(&mut self, word_count: usize, opening: bool) -> String {
        let mut words: Vec<&'static str> = Vec::with_capacity(word_count);
        if opening {
            words.extend(LOREM_OPENING.iter().take(word_count));
        }
        while words.len() < word_count {
            words.push(LOREM_WORDS[self.rng.gen_range(0..LOREM_WORDS.len())]);
        }

        let mut sentences = Vec::new();
        let mut rest = words.as_slice();
        while !rest.is_empty() {
            let len = self
                .rng
                .gen_range(MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS)
                .min(rest.len());
            let (sentence, tail) = rest.split_at(len);
            sentences.push(to_sentence(sentence));
            rest = tail;
        }

        sentences.join(" ")
    }

    fn pick(&mut self, set: &[u8]) -> u8 {
        set[self.rng.gen_range(0..set.len())]
    }
}

fn to_sentence(words: &[&str]) -> String {
    let joined = words.join(" ");
    let mut chars = joined.chars();
    let mut sentence: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    sentence.push('.');
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_password_exact_length() {
        let mut generator = TextGenerator::seeded(7);
        for _ in 0..200 {
            assert_eq!(generator.password(12).generated.chars().count(), 12);
        }
        assert_eq!(generator.password(64).generated.len(), 64);
    }

    #[test]
    fn test_password_contains_every_class() {
        let mut generator = TextGenerator::seeded(11);
        for _ in 0..100 {
            let password = generator.password(4).generated;
            assert!(password.bytes().any(|b| UPPERCASE.contains(&b)));
            assert!(password.bytes().any(|b| LOWERCASE.contains(&b)));
            assert!(password.bytes().any(|b| DIGITS.contains(&b)));
            assert!(password.bytes().any(|b| SYMBOLS.contains(&b)));
        }
    }

    #[test]
    fn test_password_length_is_clamped() {
        let mut generator = TextGenerator::seeded(3);
        assert_eq!(generator.password(0).generated.len(), MIN_PASSWORD_LENGTH);
        assert_eq!(generator.password(10_000).generated.len(), MAX_PASSWORD_LENGTH);

        let options = GenerationOptions::default().with_length(-20);
        let result = generator.generate(GenerationType::Password, &options);
        assert_eq!(result.generated.len(), MIN_PASSWORD_LENGTH);
    }

    #[test]
    fn test_uuid_v4_format() {
        let pattern =
            Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
                .unwrap();
        let mut generator = TextGenerator::new();
        for _ in 0..1000 {
            let id = generator.uuid().generated;
            assert!(pattern.is_match(&id), "not a v4 UUID: {}", id);
        }
    }

    #[test]
    fn test_lorem_ipsum_shape() {
        let mut generator = TextGenerator::seeded(42);
        let result = generator.lorem_ipsum(3, 40);

        let paragraphs: Vec<&str> = result.generated.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3);
        for paragraph in &paragraphs {
            assert_eq!(paragraph.split_whitespace().count(), 40);
            assert!(paragraph.ends_with('.'));
            assert!(paragraph.chars().next().unwrap().is_uppercase());
        }
        assert!(paragraphs[0].starts_with("Lorem ipsum dolor sit amet"));
    }

    #[test]
    fn test_lorem_ipsum_defaults_and_clamping() {
        let mut generator = TextGenerator::seeded(5);
        let result = generator.generate(GenerationType::LoremIpsum, &GenerationOptions::default());
        assert_eq!(result.generated.split_whitespace().count(), 50);
        assert!(!result.generated.contains("\n\n"));

        let options = GenerationOptions::default()
            .with_paragraphs(-3)
            .with_words_per_paragraph(0);
        let result = generator.generate(GenerationType::LoremIpsum, &options);
        assert_eq!(result.generated, "Lorem.");
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = TextGenerator::seeded(99);
        let mut b = TextGenerator::seeded(99);
        assert_eq!(a.password(16), b.password(16));
        assert_eq!(a.uuid(), b.uuid());
        assert_eq!(a.lorem_ipsum(2, 20), b.lorem_ipsum(2, 20));
    }
}
