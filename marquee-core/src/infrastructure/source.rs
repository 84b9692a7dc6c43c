// marquee-core/src/infrastructure/source.rs
//
// Line source adapter: feeds a file into the CatalogBuilder, one line at a time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument};

use crate::domain::catalog::{BuildReport, CatalogBuilder};
use crate::infrastructure::error::InfrastructureError;

/// Reads every line of `path` into `builder`. The file handle lives only for
/// the duration of this call.
///
/// A file with no lines at all is reported as `EmptySource`, which is a
/// different outcome from a file whose records all failed to parse.
#[instrument(skip(path, builder), fields(path = %path.display()))]
pub fn ingest_file(
    path: &Path,
    builder: CatalogBuilder,
) -> Result<BuildReport, InfrastructureError> {
    let file = File::open(path).map_err(|source| InfrastructureError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let report = ingest_reader(BufReader::new(file), builder)?;

    if report.lines_read == 0 {
        return Err(InfrastructureError::EmptySource(path.to_path_buf()));
    }

    debug!(lines = report.lines_read, "Source fully read");
    Ok(report)
}

/// Same as `ingest_file` over any buffered reader. Invalid UTF-8 is replaced
/// rather than aborting the whole ingestion.
pub fn ingest_reader<R: BufRead>(
    mut reader: R,
    mut builder: CatalogBuilder,
) -> Result<BuildReport, InfrastructureError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        builder.push_line(&String::from_utf8_lossy(&buf));
    }
    Ok(builder.finish())
}
