// marquee-core/src/domain/parser.rs
//
// Record parser: one raw line -> one Movie (or a ParseFailure).
// Line shape: `title,year,[lang1;lang2;...],rating`

use serde::Serialize;
use std::fmt;

use crate::domain::configuration::YearBounds;
use crate::domain::error::{Field, ParseFailure};
use crate::domain::movie::{MAX_LANGUAGES, Movie};

pub const FIELD_DELIMITER: char = ',';
pub const LANGUAGE_DELIMITER: char = ';';

/// Non-fatal findings: the record is still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseWarning {
    /// Rating field absent or blank, stored as 0.0.
    MissingRating,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRating => write!(f, "Missing rating, defaulting to 0.0"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub movie: Movie,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser {
    bounds: YearBounds,
}

impl RecordParser {
    pub fn new(bounds: YearBounds) -> Self {
        Self { bounds }
    }

    pub fn parse(&self, line: &str) -> Result<ParsedRecord, ParseFailure> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields = split_fields(line);

        let title = field_at(&fields, Field::Title)
            .ok_or(ParseFailure::MissingField(Field::Title))?;
        let year = field_at(&fields, Field::Year)
            .ok_or(ParseFailure::MissingField(Field::Year))
            .and_then(|raw| self.parse_year(raw))?;
        let languages = field_at(&fields, Field::Languages)
            .map(split_languages)
            .ok_or(ParseFailure::MissingField(Field::Languages))?;

        let mut warnings = Vec::new();
        let rating = match field_at(&fields, Field::Rating) {
            Some(raw) => parse_rating(raw),
            None => {
                warnings.push(ParseWarning::MissingRating);
                0.0
            }
        };

        let movie = Movie::new(title, year, languages, rating)?;
        Ok(ParsedRecord { movie, warnings })
    }

    fn parse_year(&self, raw: &str) -> Result<i32, ParseFailure> {
        let trimmed = raw.trim();
        let year: i32 = trimmed
            .parse()
            .map_err(|_| ParseFailure::InvalidYear(trimmed.to_string()))?;

        if !self.bounds.contains(year) {
            return Err(ParseFailure::ImplausibleYear {
                year,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        Ok(year)
    }
}

/// Splits a line into its positional fields. Pure: no cursor state is kept
/// between calls, so nested splits (languages inside a field) are safe.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}

/// `[English;French]` -> `["English", "French"]`. Both brackets are optional.
/// Empty tokens are skipped and at most `MAX_LANGUAGES` are returned.
pub fn split_languages(field: &str) -> Vec<&str> {
    let inner = field.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(LANGUAGE_DELIMITER)
        .filter(|token| !token.is_empty())
        .take(MAX_LANGUAGES)
        .collect()
}

/// A blank field counts as absent.
fn field_at<'a>(fields: &[&'a str], field: Field) -> Option<&'a str> {
    let index = match field {
        Field::Title => 0,
        Field::Year => 1,
        Field::Languages => 2,
        Field::Rating => 3,
    };
    fields
        .get(index)
        .copied()
        .filter(|raw| !raw.trim().is_empty())
}

/// Parses the leading decimal number, like C's `strtof`. Text with no
/// numeric prefix, and NaN or infinite values, silently yield 0.0.
fn parse_rating(raw: &str) -> f32 {
    let text = raw.trim_start();
    let prefix = &text[..float_prefix_len(text)];

    match prefix.parse::<f32>() {
        Ok(rating) if rating.is_finite() => rating,
        _ => {
            tracing::debug!(raw = %raw, "Non-numeric rating coerced to 0.0");
            0.0
        }
    }
}

/// Byte length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run.
/// Single forward scan; the run is ASCII so the result is a char boundary.
fn float_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    end
}
