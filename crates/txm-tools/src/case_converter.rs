//! Case conversion between eight case formats

use txm_core::{CaseConversionResult, CaseType};

/// Converts text between case formats
pub struct CaseConverter;

impl CaseConverter {
    /// Convert text to the requested case
    pub fn convert(text: &str, case: CaseType) -> CaseConversionResult {
        let converted = Self::converter(case)(text);
        CaseConversionResult {
            original: text.to_string(),
            converted,
            kind: case,
            description: Self::describe(case).to_string(),
        }
    }

    /// Get the conversion function for a case
    pub fn converter(case: CaseType) -> fn(&str) -> String {
        match case {
            CaseType::Upper => to_upper_case,
            CaseType::Lower => to_lower_case,
            CaseType::Title => to_title_case,
            CaseType::Camel => to_camel_case,
            CaseType::Pascal => to_pascal_case,
            CaseType::Snake => to_snake_case,
            CaseType::Kebab => to_kebab_case,
            CaseType::Constant => to_constant_case,
        }
    }

    fn describe(case: CaseType) -> &'static str {
        match case {
            CaseType::Upper => "Converted to UPPER CASE",
            CaseType::Lower => "Converted to lower case",
            CaseType::Title => "Converted to Title Case",
            CaseType::Camel => "Converted to camelCase",
            CaseType::Pascal => "Converted to PascalCase",
            CaseType::Snake => "Converted to snake_case",
            CaseType::Kebab => "Converted to kebab-case",
            CaseType::Constant => "Converted to CONSTANT_CASE",
        }
    }
}

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Capitalize each whitespace-delimited word, keeping the whitespace as is
pub fn to_title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

pub fn to_camel_case(text: &str) -> String {
    split_words(text)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

pub fn to_pascal_case(text: &str) -> String {
    split_words(text).iter().map(|word| capitalize(word)).collect()
}

pub fn to_snake_case(text: &str) -> String {
    join_lowercase(text, "_")
}

pub fn to_kebab_case(text: &str) -> String {
    join_lowercase(text, "-")
}

pub fn to_constant_case(text: &str) -> String {
    split_words(text)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn join_lowercase(text: &str, separator: &str) -> String {
    split_words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Split text into word tokens for case reconstruction.
///
/// Any non-alphanumeric character separates tokens. Inside an alphanumeric
/// run a token also ends before an uppercase letter that follows a lowercase
/// letter or a digit, and before the last capital of an acronym that is
/// followed by a lowercase letter (`HTTPServer` gives `HTTP`, `Server`).
/// Digits stay attached to the token before them.
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // `current` is non-empty only when chars[i - 1] was pushed into it
        if !current.is_empty() && is_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn is_boundary(prev: char, current: char, next: Option<char>) -> bool {
    if !current.is_uppercase() {
        return false;
    }

    prev.is_lowercase()
        || prev.is_numeric()
        || (prev.is_uppercase() && next.is_some_and(char::is_lowercase))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
