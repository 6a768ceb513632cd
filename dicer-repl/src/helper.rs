use colored::Colorize;
use dicer_lib::meta;
use dicer_lib::notation::RollSpec;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::hint::HistoryHinter;
use rustyline::validate::ValidationContext;
use rustyline::validate::ValidationResult;
use rustyline::validate::Validator;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;
use std::ops::Range;

#[derive(Helper)]
pub(crate) struct ReplHelper {
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
}

/// Byte ranges of the terms that are not dice notations, none for `?` and `!N` lines
fn invalid_terms(line: &str) -> Vec<Range<usize>> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('!') || trimmed.trim_end() == "?" {
        return Vec::new();
    }
    let mut ranges = Vec::new();
    let mut start = None;
    for (index, c) in line.char_indices().chain(std::iter::once((line.len(), ' '))) {
        match (start, c.is_whitespace()) {
            (None, false) => start = Some(index),
            (Some(from), true) => {
                if line[from..index].parse::<RollSpec>().is_err() {
                    ranges.push(from..index);
                }
                start = None;
            }
            _ => (),
        }
    }
    ranges
}

/// Offer the quick roll sizes for a term typed up to its `d`, e.g. `3d1` -> `3d10`, `3d12`
fn complete_sides(word: &str) -> Vec<Pair> {
    let (count, sides) = match word.split_once(|c| c == 'd' || c == 'D') {
        Some(split) => split,
        None => return Vec::new(),
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if count.is_empty() || !digits(count) || !digits(sides) {
        return Vec::new();
    }
    let prefix = &word[..count.len() + 1];
    meta::QUICK_ROLLS
        .iter()
        .map(|(size, _)| size.to_string())
        .filter(|size| size.starts_with(sides))
        .map(|size| Pair {
            display: format!("{count}d{size}"),
            replacement: format!("{prefix}{size}"),
        })
        .collect()
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |index| index + 1);
        Ok((start, complete_sides(&line[start..pos])))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let invalid = invalid_terms(line);
        if invalid.is_empty() {
            return Borrowed(line);
        }
        let mut highlighted = String::with_capacity(line.len());
        let mut done = 0;
        for range in invalid {
            highlighted.push_str(&line[done..range.start]);
            highlighted.push_str(&line[range.clone()].red().to_string());
            done = range.end;
        }
        highlighted.push_str(&line[done..]);
        Owned(highlighted)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
        true
    }
}

impl Validator for ReplHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }

    fn validate_while_typing(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(word: &str) -> Vec<String> {
        complete_sides(word)
            .into_iter()
            .map(|pair| pair.replacement)
            .collect()
    }

    #[test]
    fn marks_terms_that_do_not_parse() {
        let line = "2d6 junk  1d20-3 d6";
        let marked = invalid_terms(line)
            .into_iter()
            .map(|range| &line[range])
            .collect::<Vec<_>>();
        assert_eq!(vec!["junk", "d6"], marked);
    }

    #[test]
    fn leaves_valid_lines_and_commands_alone() {
        assert!(invalid_terms("").is_empty());
        assert!(invalid_terms("  2d6 1D20+4 ").is_empty());
        assert!(invalid_terms("!3").is_empty());
        assert!(invalid_terms(" ? ").is_empty());
        assert_eq!(vec![0..4], invalid_terms("2d6+"));
    }

    #[test]
    fn completes_after_separator() {
        assert_eq!(
            vec!["2d4", "2d6", "2d8", "2d10", "2d12", "2d20", "2d100"],
            replacements("2d")
        );
    }

    #[test]
    fn completes_partial_sides() {
        assert_eq!(vec!["3D10", "3D12", "3D100"], replacements("3D1"));
        assert_eq!(vec!["1d20"], replacements("1d2"));
    }

    #[test]
    fn ignores_other_words() {
        assert!(replacements("").is_empty());
        assert!(replacements("d6").is_empty());
        assert!(replacements("hello").is_empty());
        assert!(replacements("2d6+").is_empty());
    }
}
