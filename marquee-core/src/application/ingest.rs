// marquee-core/src/application/ingest.rs

use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument};

use crate::domain::catalog::{BuildReport, CatalogBuilder};
use crate::domain::configuration::MarqueeConfig;
use crate::domain::parser::RecordParser;
use crate::error::MarqueeError;
use crate::infrastructure::source::ingest_file;

/// USE CASE: turn a movie file into a Catalog, honouring the configuration
/// (year bounds, header handling).
#[instrument(skip(path, config), fields(path = %path.display()))]
pub fn load_catalog(path: &Path, config: &MarqueeConfig) -> Result<BuildReport, MarqueeError> {
    let start = Instant::now();
    config.ensure_valid()?;

    let mut builder = CatalogBuilder::new(RecordParser::new(config.year_bounds));
    if !config.skip_header {
        builder = builder.without_header();
    }

    let report = ingest_file(path, builder)?;

    info!(
        movies = report.success_count,
        rejected = report.rejected.len(),
        warnings = report.warnings.len(),
        "Catalog built in {:.2?}",
        start.elapsed()
    );

    Ok(report)
}
