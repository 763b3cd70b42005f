//! Whitespace and line structure cleaning

use regex::Regex;
use std::sync::LazyLock;

use txm_core::{CleanOperation, CleaningResult};

/// Runs of two or more whitespace characters that are not line breaks
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\r\n]{2,}").expect("space run pattern is valid"));

/// Blank-line runs at least this long collapse to a single blank line
const BLANK_RUN_THRESHOLD: usize = 3;

/// Normalizes whitespace and line structure
pub struct TextCleaner;

impl TextCleaner {
    /// Apply a cleaning operation
    pub fn clean(text: &str, operation: CleanOperation) -> CleaningResult {
        Self::cleaner(operation)(text)
    }

    /// Get the cleaning function for an operation
    pub fn cleaner(operation: CleanOperation) -> fn(&str) -> CleaningResult {
        match operation {
            CleanOperation::RemoveExtraSpaces => remove_extra_spaces,
            CleanOperation::TrimLines => trim_lines,
            CleanOperation::RemoveEmptyLines => remove_empty_lines,
            CleanOperation::SmartClean => smart_clean,
        }
    }
}

/// Collapse every run of 2+ horizontal whitespace characters into one space
pub fn remove_extra_spaces(text: &str) -> CleaningResult {
    let (cleaned, runs) = collapse_spaces(text);
    CleaningResult {
        cleaned,
        operation: CleanOperation::RemoveExtraSpaces,
        changes: runs,
        description: format!(
            "Collapsed {} run(s) of repeated whitespace into single spaces",
            runs
        ),
    }
}

/// Strip leading and trailing horizontal whitespace from every line
pub fn trim_lines(text: &str) -> CleaningResult {
    let mut lines = Line::split(text);
    let trimmed = trim_each(&mut lines);
    CleaningResult {
        cleaned: Line::join(&lines),
        operation: CleanOperation::TrimLines,
        changes: trimmed,
        description: format!(
            "Trimmed leading and trailing whitespace from {} line(s)",
            trimmed
        ),
    }
}

/// Drop lines that are empty or whitespace-only
pub fn remove_empty_lines(text: &str) -> CleaningResult {
    let lines = Line::split(text);
    let total = lines.len();
    let kept: Vec<Line> = lines
        .into_iter()
        .filter(|line| !line.is_blank())
        .collect();
    let removed = total - kept.len();

    CleaningResult {
        cleaned: Line::join(&kept),
        operation: CleanOperation::RemoveEmptyLines,
        changes: removed,
        description: format!("Removed {} empty line(s)", removed),
    }
}

/// Trim lines, collapse inner whitespace, then reduce long blank-line runs
/// to a single blank line
pub fn smart_clean(text: &str) -> CleaningResult {
    let mut lines = Line::split(text);
    let trimmed = trim_each(&mut lines);

    let mut collapsed = 0;
    for line in lines.iter_mut() {
        let (content, runs) = collapse_spaces(&line.content);
        if runs > 0 {
            line.content = content;
            collapsed += runs;
        }
    }

    let (lines, removed) = collapse_blank_runs(lines);

    CleaningResult {
        cleaned: Line::join(&lines),
        operation: CleanOperation::SmartClean,
        changes: trimmed + collapsed + removed,
        description: format!(
            "Smart clean: trimmed {} line(s), collapsed {} whitespace run(s), removed {} excess blank line(s)",
            trimmed, collapsed, removed
        ),
    }
}

fn collapse_spaces(text: &str) -> (String, usize) {
    let runs = SPACE_RUNS.find_iter(text).count();
    if runs == 0 {
        return (text.to_string(), 0);
    }
    (SPACE_RUNS.replace_all(text, " ").into_owned(), runs)
}

fn trim_each(lines: &mut [Line]) -> usize {
    let mut modified = 0;
    for line in lines.iter_mut() {
        let trimmed = line.content.trim_matches(is_horizontal_whitespace);
        if trimmed.len() != line.content.len() {
            line.content = trimmed.to_string();
            modified += 1;
        }
    }
    modified
}

fn collapse_blank_runs(lines: Vec<Line>) -> (Vec<Line>, usize) {
    let mut kept = Vec::with_capacity(lines.len());
    let mut removed = 0;
    let mut iter = lines.into_iter().peekable();

    while let Some(line) = iter.next() {
        if !line.is_blank() {
            kept.push(line);
            continue;
        }

        let mut run = vec![line];
        while let Some(next) = iter.next_if(Line::is_blank) {
            run.push(next);
        }

        if run.len() >= BLANK_RUN_THRESHOLD {
            removed += run.len() - 1;
            run.truncate(1);
        }
        kept.extend(run);
    }

    (kept, removed)
}

fn is_horizontal_whitespace(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

/// One line of text plus whether its terminator was `\r\n`
#[derive(Debug, Clone)]
struct Line {
    content: String,
    crlf: bool,
}

impl Line {
    fn split(text: &str) -> Vec<Line> {
        if text.is_empty() {
            return Vec::new();
        }

        let segments: Vec<&str> = text.split('\n').collect();
        let last = segments.len() - 1;

        segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| match segment.strip_suffix('\r') {
                Some(content) if i < last => Line {
                    content: content.to_string(),
                    crlf: true,
                },
                _ => Line {
                    content: segment.to_string(),
                    crlf: false,
                },
            })
            .collect()
    }

    fn join(lines: &[Line]) -> String {
        let mut result = String::new();
        for (i, line) in lines.iter().enumerate() {
            result.push_str(&line.content);
            if i + 1 < lines.len() {
                result.push_str(if line.crlf { "\r\n" } else { "\n" });
            }
        }
        result
    }

    fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_extra_spaces_counts_runs() {
        let result = remove_extra_spaces("a    b");
        assert_eq!(result.cleaned, "a b");
        assert_eq!(result.changes, 1);

        let again = remove_extra_spaces(&result.cleaned);
        assert_eq!(again.cleaned, "a b");
        assert_eq!(again.changes, 0);
    }

    #[test]
    fn test_remove_extra_spaces_keeps_line_breaks() {
        let result = remove_extra_spaces("a  b\n\nc \t d");
        assert_eq!(result.cleaned, "a b\n\nc d");
        assert_eq!(result.changes, 2);
    }

    #[test]
    fn test_trim_lines_counts_modified_lines() {
        let result = trim_lines("  a\nb\t\n c ");
        assert_eq!(result.cleaned, "a\nb\nc");
        assert_eq!(result.changes, 3);

        let result = trim_lines("a\n  b");
        assert_eq!(result.changes, 1);
    }

    #[test]
    fn test_trim_lines_preserves_crlf() {
        let result = trim_lines(" a \r\n b \r\nc");
        assert_eq!(result.cleaned, "a\r\nb\r\nc");
        assert_eq!(result.changes, 2);
    }

    #[test]
    fn test_remove_empty_lines() {
        let result = remove_empty_lines("a\n\n   \nb\n\t\nc");
        assert_eq!(result.cleaned, "a\nb\nc");
        assert_eq!(result.changes, 3);

        let again = remove_empty_lines(&result.cleaned);
        assert_eq!(again.changes, 0);
    }

    #[test]
    fn test_smart_clean_collapses_long_blank_runs() {
        let result = smart_clean("  first   line \n\n\n\n\nsecond\n\nthird");
        assert_eq!(result.cleaned, "first line\n\nsecond\n\nthird");
        // 1 trimmed line, 1 collapsed run, 3 removed blank lines
        assert_eq!(result.changes, 5);
    }

    #[test]
    fn test_smart_clean_keeps_short_blank_runs() {
        let result = smart_clean("a\n\n\nb");
        assert_eq!(result.cleaned, "a\n\n\nb");
        assert_eq!(result.changes, 0);
    }

    #[test]
    fn test_empty_text_has_no_changes() {
        for operation in CleanOperation::ALL {
            let result = TextCleaner::clean("", *operation);
            assert_eq!(result.cleaned, "");
            assert_eq!(result.changes, 0);
        }
    }

    #[test]
    fn test_each_operation_is_idempotent() {
        let samples = [
            "",
            "plain",
            "  messy \t text  \n\n\n\n\n  with   gaps \r\n\r\n  end  ",
            "\n\n\n\n",
        ];

        for operation in CleanOperation::ALL {
            for sample in samples {
                let first = TextCleaner::clean(sample, *operation);
                let second = TextCleaner::clean(&first.cleaned, *operation);
                assert_eq!(second.cleaned, first.cleaned, "{} on {:?}", operation, sample);
                assert_eq!(second.changes, 0, "{} on {:?}", operation, sample);
            }
        }
    }

    #[test]
    fn test_no_changes_when_output_equals_input() {
        for operation in CleanOperation::ALL {
            let result = TextCleaner::clean("tidy line\nanother one", *operation);
            assert_eq!(result.cleaned, "tidy line\nanother one");
            assert_eq!(result.changes, 0);
        }
    }
}
