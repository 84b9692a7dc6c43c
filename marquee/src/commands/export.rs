// marquee/src/commands/export.rs
//
// USE CASE: Write the catalog and per-year ranking to a JSON file.

use anyhow::Context;
use std::path::Path;

use marquee_core::application::CatalogExporter;

use super::Session;

pub fn execute(session: &Session, out: &Path) -> anyhow::Result<()> {
    CatalogExporter::export(&session.file, &session.report, out)
        .with_context(|| format!("Failed to export catalog to {}", out.display()))?;

    println!(
        "📦 Exported {} movies to {}",
        session.report.success_count,
        out.display()
    );
    Ok(())
}
