// marquee/src/commands/load.rs
//
// USE CASE: Ingest a movie file and report what was accepted.

use marquee_core::domain::OutputFormat;
use serde_json::json;

use super::Session;

pub fn execute(session: &Session) -> anyhow::Result<()> {
    let report = &session.report;

    match session.config.format {
        OutputFormat::Json => {
            let summary = json!({
                "file": session.file.display().to_string(),
                "movies": report.success_count,
                "rejected": report.rejected,
                "warnings": report.warnings,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!(
                "Processed file {} and parsed data for {} movies",
                session.file.display(),
                report.success_count
            );

            if report.data_lines() == 0 {
                println!("⚠️  The file has a header but no movie lines.");
            }

            if !report.rejected.is_empty() {
                println!("⚠️  {} line(s) skipped:", report.rejected.len());
                for rejected in &report.rejected {
                    println!("   ❌ line {}: {}", rejected.line_number, rejected.failure);
                }
            }

            for warning in &report.warnings {
                println!(
                    "   ⚠️  line {} ({}): {}",
                    warning.line_number, warning.title, warning.warning
                );
            }
        }
    }

    Ok(())
}
