// marquee/src/commands/mod.rs

pub mod export;
pub mod load;
pub mod query;

use anyhow::Context;
use std::path::{Path, PathBuf};

use marquee_core::MarqueeError;
use marquee_core::application::load_catalog;
use marquee_core::domain::{BuildReport, MarqueeConfig, OutputFormat};
use marquee_core::infrastructure::config::load_config;

/// Global flags shared by every subcommand.
pub struct SessionOptions {
    pub config: Option<PathBuf>,
    pub format: Option<String>,
}

/// A loaded movie file plus the configuration used to load it.
pub struct Session {
    pub file: PathBuf,
    pub config: MarqueeConfig,
    pub report: BuildReport,
}

impl Session {
    pub fn open(file: &Path, options: &SessionOptions) -> anyhow::Result<Self> {
        let mut config = load_config(options.config.as_deref(), Path::new("."))
            .context("Failed to load configuration")?;

        if let Some(format) = &options.format {
            config.format = format
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        tracing::debug!(
            format = %config.format,
            min_year = config.year_bounds.min,
            max_year = config.year_bounds.max,
            "Configuration ready"
        );

        let report = match load_catalog(file, &config) {
            Ok(report) => report,
            Err(e) => fail(e),
        };

        Ok(Self {
            file: file.to_path_buf(),
            config,
            report,
        })
    }
}

/// IO failures on the movie file end the run with exit code 1, rendered with
/// their diagnostic code and help.
fn fail(err: MarqueeError) -> ! {
    if err.is_empty_source() {
        eprintln!("⚠️  Nothing to load: the movie file has no lines, not even a header.");
    }
    match err {
        MarqueeError::Infrastructure(infra) => {
            eprintln!("{:?}", miette::Report::new(infra));
        }
        MarqueeError::Domain(domain) => {
            eprintln!("{:?}", miette::Report::new(domain));
        }
    }
    std::process::exit(1);
}
