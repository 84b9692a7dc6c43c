// marquee/src/commands/query.rs
//
// USE CASE: Answer one query over the loaded catalog.

use marquee_core::application::{Request, dispatch};
use marquee_core::domain::OutputFormat;

use super::Session;
use crate::render;

pub fn execute(session: &Session, request: Request) -> anyhow::Result<()> {
    let response = dispatch(&session.report.catalog, &request);

    match session.config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => println!("{}", render::response(&response)),
    }

    Ok(())
}
