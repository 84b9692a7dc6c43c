use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::domain::catalog::{BuildReport, LineWarning, RejectedLine};
use crate::domain::movie::Movie;
use crate::domain::query::{self, TopRated};
use crate::error::MarqueeError;
use crate::infrastructure::fs::atomic_write;

// --- DTOs ---
// Exactly what ends up in the exported JSON file.

#[derive(Serialize)]
pub struct CatalogArtifact<'a> {
    pub generated_at: String,
    pub source: String,
    pub stats: CatalogStats,
    pub movies: &'a [Movie],
    pub highest_rated_per_year: BTreeMap<i32, TopRated<'a>>,
    pub rejected: &'a [RejectedLine],
    pub warnings: &'a [LineWarning],
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct CatalogStats {
    pub movies: usize,
    pub rejected_lines: usize,
    pub missing_ratings: usize,
    pub distinct_years: usize,
    pub distinct_languages: usize,
}

impl CatalogStats {
    fn from_report(report: &BuildReport, distinct_years: usize) -> Self {
        let mut languages: Vec<&str> = report
            .catalog
            .iter()
            .flat_map(|movie| movie.languages().iter().map(String::as_str))
            .collect();
        languages.sort_unstable();
        languages.dedup();

        Self {
            movies: report.success_count,
            rejected_lines: report.rejected.len(),
            missing_ratings: report.warnings.len(),
            distinct_years,
            distinct_languages: languages.len(),
        }
    }
}

// --- EXPORT SERVICE ---

pub struct CatalogExporter;

impl CatalogExporter {
    /// Snapshot of a build as JSON. This is a rendering for other tools; it
    /// is never read back by marquee.
    pub fn render(source: &Path, report: &BuildReport) -> Result<String, MarqueeError> {
        let highest_rated_per_year = query::highest_rated_per_year(&report.catalog);

        let artifact = CatalogArtifact {
            generated_at: Utc::now().to_rfc3339(),
            source: source.display().to_string(),
            stats: CatalogStats::from_report(report, highest_rated_per_year.len()),
            movies: report.catalog.movies(),
            highest_rated_per_year,
            rejected: &report.rejected,
            warnings: &report.warnings,
        };

        serde_json::to_string_pretty(&artifact)
            .map_err(|e| MarqueeError::Infrastructure(e.into()))
    }

    pub fn export(source: &Path, report: &BuildReport, out: &Path) -> Result<(), MarqueeError> {
        let json = Self::render(source, report)?;
        atomic_write(out, json)?;

        info!(path = %out.display(), movies = report.success_count, "Catalog exported");
        Ok(())
    }
}
