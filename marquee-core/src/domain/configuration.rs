// src/domain/configuration.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::domain::error::DomainError;

/// How query results are rendered by the CLI.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Inclusive range of years accepted by the record parser.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_bounds_order"))]
pub struct YearBounds {
    #[serde(default = "default_min_year")]
    pub min: i32,
    #[serde(default = "default_max_year")]
    pub max: i32,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: default_min_year(),
            max: default_max_year(),
        }
    }
}

impl YearBounds {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct MarqueeConfig {
    #[serde(rename = "year-bounds", alias = "year_bounds", default)]
    #[validate(nested)]
    pub year_bounds: YearBounds,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(rename = "skip-header", alias = "skip_header", default = "default_skip_header")]
    pub skip_header: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            year_bounds: YearBounds::default(),
            format: OutputFormat::default(),
            skip_header: default_skip_header(),
        }
    }
}

impl MarqueeConfig {
    /// Runs the declarative checks and maps them into a domain error.
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidConfig(e.to_string()))
    }
}

fn validate_bounds_order(bounds: &YearBounds) -> Result<(), ValidationError> {
    if bounds.min > bounds.max {
        let mut err = ValidationError::new("year_bounds_order");
        err.message = Some(format!("min {} is greater than max {}", bounds.min, bounds.max).into());
        return Err(err);
    }
    Ok(())
}

fn default_min_year() -> i32 {
    1
}
fn default_max_year() -> i32 {
    9999
}
fn default_skip_header() -> bool {
    true
}
