//! Text statistics and readability analysis
//!
//! Counting rules:
//! - words are maximal runs of non-whitespace characters;
//! - a sentence ends at a run of `.`, `!` or `?` that is followed by
//!   whitespace or the end of the text, and a run counts once (`?!`, `...`);
//! - paragraphs are groups of non-blank lines separated by blank lines;
//! - lines follow `str::lines`, so a trailing line break adds no empty line.
//!
//! Readability uses the Flesch reading-ease and Flesch–Kincaid grade formulas
//! over a vowel-group syllable estimate. Both formula terms count words after
//! edge punctuation is stripped, so a lone `-` is not a word there. Ties for
//! longest and most frequent word go to the word that appears first.

use std::collections::HashMap;

use txm_core::{BasicStats, FullReport, WordFrequency};

pub const WORDS_PER_MINUTE: usize = 200;
const TOP_WORDS: usize = 5;

/// Computes statistics over text without modifying it
pub struct TextAnalyzer;

impl TextAnalyzer {
    /// Count characters, words, sentences, paragraphs and lines
    pub fn basic_stats(text: &str) -> BasicStats {
        let words = text.split_whitespace().count();
        let sentences = count_sentences(text);

        let average_words_per_sentence = if sentences == 0 {
            0.0
        } else {
            round_to(words as f64 / sentences as f64, 1)
        };

        BasicStats {
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            words,
            sentences,
            paragraphs: count_paragraphs(text),
            lines: text.lines().count(),
            reading_time: reading_time(text, words),
            average_words_per_sentence,
        }
    }

    /// Basic statistics plus readability and vocabulary metrics
    pub fn full_report(text: &str) -> FullReport {
        let stats = Self::basic_stats(text);
        let vocabulary = normalized_words(text);

        let syllables: usize = vocabulary.iter().map(|w| count_syllables(w)).sum();
        let (flesch_reading_ease, flesch_kincaid_grade, average_syllables_per_word) =
            if vocabulary.is_empty() {
                (0.0, 0.0, 0.0)
            } else {
                let words_per_sentence =
                    vocabulary.len() as f64 / stats.sentences.max(1) as f64;
                let syllables_per_word = syllables as f64 / vocabulary.len() as f64;
                (
                    round_to(
                        206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
                        1,
                    ),
                    round_to(
                        0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
                        1,
                    ),
                    round_to(syllables_per_word, 2),
                )
            };

        let frequencies = rank_frequencies(&vocabulary);
        let unique_words = frequencies.len();

        let (lexical_diversity, average_word_length) = if vocabulary.is_empty() {
            (0.0, 0.0)
        } else {
            let letters: usize = vocabulary.iter().map(|w| w.chars().count()).sum();
            (
                round_to(unique_words as f64 / vocabulary.len() as f64, 2),
                round_to(letters as f64 / vocabulary.len() as f64, 1),
            )
        };

        let reading_level = if vocabulary.is_empty() {
            "Not applicable".to_string()
        } else {
            reading_level(flesch_reading_ease).to_string()
        };

        FullReport {
            stats,
            syllables,
            average_syllables_per_word,
            flesch_reading_ease,
            flesch_kincaid_grade,
            reading_level,
            unique_words,
            lexical_diversity,
            average_word_length,
            longest_word: longest_word(&vocabulary),
            most_frequent_word: frequencies.first().cloned(),
            top_words: frequencies.into_iter().take(TOP_WORDS).collect(),
        }
    }
}

fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn count_sentences(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut count = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_sentence_terminator(chars[i]) {
            i += 1;
            continue;
        }

        let mut end = i;
        while end < chars.len() && is_sentence_terminator(chars[end]) {
            end += 1;
        }
        if end == chars.len() || chars[end].is_whitespace() {
            count += 1;
        }
        i = end;
    }

    count
}

fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;

    for line in text.lines() {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            count += 1;
        }
        in_paragraph = !blank;
    }

    count
}

fn reading_time(text: &str, words: usize) -> usize {
    if text.is_empty() {
        return 0;
    }
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Lowercased words with leading and trailing punctuation removed
fn normalized_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate syllables by counting vowel groups, dropping a silent final `e`
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    if count > 1 && n > 2 && letters[n - 1] == 'e' && !is_vowel(letters[n - 2]) {
        let consonant_le = letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
        if !consonant_le {
            count -= 1;
        }
    }

    count.max(1)
}

fn reading_level(reading_ease: f64) -> &'static str {
    match reading_ease {
        s if s >= 90.0 => "Very easy",
        s if s >= 80.0 => "Easy",
        s if s >= 70.0 => "Fairly easy",
        s if s >= 60.0 => "Standard",
        s if s >= 50.0 => "Fairly difficult",
        s if s >= 30.0 => "Difficult",
        _ => "Very difficult",
    }
}

fn longest_word(words: &[String]) -> Option<String> {
    let mut longest: Option<&String> = None;
    for word in words {
        if longest.is_none_or(|current| word.chars().count() > current.chars().count()) {
            longest = Some(word);
        }
    }
    longest.cloned()
}

/// Word counts sorted by count, then by first appearance
fn rank_frequencies(words: &[String]) -> Vec<WordFrequency> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, word) in words.iter().enumerate() {
        counts.entry(word.as_str()).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(word, count, _)| WordFrequency {
            word: word.to_string(),
            count,
        })
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Format a count with comma thousands separators
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Render a full report as a multi-section text block
pub fn render_report(report: &FullReport) -> String {
    let stats = &report.stats;

    let longest = match &report.longest_word {
        Some(word) => format!("\"{}\"", word),
        None => "n/a".to_string(),
    };
    let most_frequent = match &report.most_frequent_word {
        Some(top) => format!("\"{}\" ({} times)", top.word, top.count),
        None => "n/a".to_string(),
    };
    let top_words = if report.top_words.is_empty() {
        "n/a".to_string()
    } else {
        report
            .top_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect::<Vec<_>>()
            .join(", ")
    };

    [
        "📋 Full Text Analysis Report".to_string(),
        String::new(),
        "📊 Basic Statistics".to_string(),
        format!("Characters: {}", format_count(stats.characters)),
        format!(
            "Characters (no spaces): {}",
            format_count(stats.characters_no_spaces)
        ),
        format!("Words: {}", format_count(stats.words)),
        format!("Sentences: {}", format_count(stats.sentences)),
        format!("Paragraphs: {}", format_count(stats.paragraphs)),
        format!("Lines: {}", format_count(stats.lines)),
        String::new(),
        "⏱️ Reading".to_string(),
        format!("Reading time: {} minutes", stats.reading_time),
        format!(
            "Average words per sentence: {}",
            stats.average_words_per_sentence
        ),
        String::new(),
        "📖 Readability".to_string(),
        format!("Syllables: {}", format_count(report.syllables)),
        format!(
            "Average syllables per word: {}",
            report.average_syllables_per_word
        ),
        format!(
            "Flesch reading ease: {} ({})",
            report.flesch_reading_ease, report.reading_level
        ),
        format!("Flesch-Kincaid grade level: {}", report.flesch_kincaid_grade),
        String::new(),
        "🔤 Vocabulary".to_string(),
        format!("Unique words: {}", format_count(report.unique_words)),
        format!("Lexical diversity: {}", report.lexical_diversity),
        format!(
            "Average word length: {} characters",
            report.average_word_length
        ),
        format!("Longest word: {}", longest),
        format!("Most frequent word: {}", most_frequent),
        format!("Top words: {}", top_words),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats_sample() {
        let stats = TextAnalyzer::basic_stats("Hello world. Goodbye!");
        assert_eq!(stats.characters, 21);
        assert_eq!(stats.characters_no_spaces, 19);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.reading_time, 1);
        assert_eq!(stats.average_words_per_sentence, 1.5);
    }

    #[test]
    fn test_empty_text() {
        let stats = TextAnalyzer::basic_stats("");
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.reading_time, 0);
        assert_eq!(stats.average_words_per_sentence, 0.0);
    }

    #[test]
    fn test_sentence_terminator_runs() {
        assert_eq!(count_sentences("Wait... What?! Really."), 3);
        assert_eq!(count_sentences("Version 1.5 is out"), 0);
        assert_eq!(count_sentences("e.g. this"), 1);
        assert_eq!(count_sentences("no terminator"), 0);
    }

    #[test]
    fn test_paragraphs_and_lines() {
        let text = "First line\nstill first\n\n\n  \nSecond para\n";
        let stats = TextAnalyzer::basic_stats(text);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.lines, 6);

        assert_eq!(TextAnalyzer::basic_stats("   \n  ").paragraphs, 0);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        assert_eq!(TextAnalyzer::basic_stats(&text).reading_time, 2);
        assert_eq!(TextAnalyzer::basic_stats("   ").reading_time, 1);
    }

    #[test]
    fn test_average_words_per_sentence_rounding() {
        let stats = TextAnalyzer::basic_stats("One two. Three four five. Six!");
        assert_eq!(stats.words, 6);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.average_words_per_sentence, 2.0);

        let stats = TextAnalyzer::basic_stats("a b. c d. e f g.");
        assert_eq!(stats.average_words_per_sentence, 2.3);
    }

    #[test]
    fn test_syllable_estimates() {
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("42"), 1);
    }

    #[test]
    fn test_full_report_matches_basic_stats() {
        let text = "The cat sat. The dog ran!\n\nA bird flew away.";
        let report = TextAnalyzer::full_report(text);
        assert_eq!(report.stats, TextAnalyzer::basic_stats(text));
    }

    #[test]
    fn test_full_report_readability() {
        let report = TextAnalyzer::full_report("The cat sat.");
        assert_eq!(report.syllables, 3);
        assert_eq!(report.average_syllables_per_word, 1.0);
        assert_eq!(report.flesch_reading_ease, 119.2);
        assert_eq!(report.flesch_kincaid_grade, -2.6);
        assert_eq!(report.reading_level, "Very easy");
    }

    #[test]
    fn test_readability_ignores_punctuation_tokens() {
        let report = TextAnalyzer::full_report("Hello - world.");
        assert_eq!(report.stats.words, 3);
        assert_eq!(report.syllables, 3);
        assert_eq!(report.flesch_reading_ease, 77.9);
        assert_eq!(report.flesch_kincaid_grade, 2.9);
    }

    #[test]
    fn test_frequency_tie_breaks_by_first_occurrence() {
        let report = TextAnalyzer::full_report("beta alpha Beta alpha gamma");
        let top = report.most_frequent_word.unwrap();
        assert_eq!(top.word, "beta");
        assert_eq!(top.count, 2);
        assert_eq!(report.unique_words, 3);
        assert_eq!(report.top_words[1].word, "alpha");
        assert_eq!(report.top_words[2].word, "gamma");
    }

    #[test]
    fn test_longest_word_first_occurrence() {
        let report = TextAnalyzer::full_report("abc, xyz! hi");
        assert_eq!(report.longest_word.as_deref(), Some("abc"));
    }

    #[test]
    fn test_full_report_empty_text() {
        let report = TextAnalyzer::full_report("");
        assert_eq!(report.syllables, 0);
        assert_eq!(report.flesch_reading_ease, 0.0);
        assert_eq!(report.reading_level, "Not applicable");
        assert!(report.longest_word.is_none());
        assert!(report.most_frequent_word.is_none());
        assert!(render_report(&report).ends_with("Top words: n/a"));
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
