pub mod settings;

pub use crate::domain::configuration::{MarqueeConfig, OutputFormat, YearBounds};
pub use settings::{apply_env_overrides, load_config};
