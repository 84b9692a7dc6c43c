// marquee-core/src/domain/error.rs

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Positional fields of a movie record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Year,
    Languages,
    Rating,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Year => "year",
            Self::Languages => "languages",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a single line was refused. The line is skipped, ingestion goes on.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("Missing field: {0}")]
    #[diagnostic(
        code(marquee::domain::missing_field),
        help("Expected a line shaped like `title,year,[lang1;lang2],rating`.")
    )]
    MissingField(Field),

    #[error("Invalid year: '{0}' is not an integer")]
    #[diagnostic(code(marquee::domain::invalid_year))]
    InvalidYear(String),

    #[error("Implausible year: {year} is outside {min}..={max}")]
    #[diagnostic(
        code(marquee::domain::implausible_year),
        help("Adjust `year_bounds` in marquee.yaml if this year is legitimate.")
    )]
    ImplausibleYear { year: i32, min: i32, max: i32 },
}

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(marquee::domain::config),
        help("Check the values in marquee.yaml and the MARQUEE_* environment variables.")
    )]
    InvalidConfig(String),
}
