// marquee-core/src/infrastructure/config/settings.rs

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::domain::configuration::{MarqueeConfig, OutputFormat};
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["marquee.yaml", "marquee.yml"];

/// Loads the configuration in layers: defaults, then the YAML file (the
/// explicit path, else the first candidate found in `dir`), then `MARQUEE_*`
/// environment variables.
#[instrument(skip(dir))]
pub fn load_config(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<MarqueeConfig, InfrastructureError> {
    let mut config = match resolve_config_path(explicit, dir)? {
        Some(path) => {
            info!(path = ?path, "Loading configuration");
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {:?}", path))?;
            serde_yaml::from_str::<MarqueeConfig>(&content)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            MarqueeConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config.ensure_valid()?;

    Ok(config)
}

fn resolve_config_path(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<Option<PathBuf>, InfrastructureError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(InfrastructureError::ConfigNotFound(
                path.display().to_string(),
            ));
        }
        return Ok(Some(path.to_path_buf()));
    }

    Ok(CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.exists()))
}

/// Layers `MARQUEE_FORMAT` and `MARQUEE_SKIP_HEADER` over the file values.
/// `lookup` is the environment reader, injected so tests stay hermetic.
pub fn apply_env_overrides<F>(config: &mut MarqueeConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("MARQUEE_FORMAT") {
        match val.parse::<OutputFormat>() {
            Ok(format) => {
                info!(old = %config.format, new = %format, "Overriding format via ENV");
                config.format = format;
            }
            Err(e) => warn!("Ignoring MARQUEE_FORMAT: {}", e),
        }
    }

    if let Some(val) = lookup("MARQUEE_SKIP_HEADER") {
        match val.to_lowercase().as_str() {
            "1" | "true" | "yes" => config.skip_header = true,
            "0" | "false" | "no" => config.skip_header = false,
            other => warn!("Ignoring MARQUEE_SKIP_HEADER: '{}' is not a boolean", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = resolve_config_path(None, dir.path())?;
        assert!(path.is_none());
        Ok(())
    }

    #[test]
    fn test_candidate_file_is_discovered() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("marquee.yml"), "format: json\n")?;
        let path = resolve_config_path(None, dir.path())?;
        assert_eq!(path, Some(dir.path().join("marquee.yml")));
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("nope.yaml");
        let res = resolve_config_path(Some(&missing), dir.path());
        assert!(matches!(res, Err(InfrastructureError::ConfigNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_load_explicit_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("custom.yaml");
        fs::write(
            &path,
            "year-bounds:\n  min: 1888\n  max: 2100\nskip-header: false\n",
        )?;
        let config = load_config(Some(&path), dir.path())?;
        assert_eq!(config.year_bounds.min, 1888);
        assert_eq!(config.year_bounds.max, 2100);
        Ok(())
    }

    #[test]
    fn test_invalid_bounds_fail_loading() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("marquee.yaml");
        fs::write(&path, "year-bounds:\n  min: 2000\n  max: 1000\n")?;
        let res = load_config(None, dir.path());
        assert!(matches!(res, Err(InfrastructureError::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    fn test_broken_yaml_is_reported() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("marquee.yaml"), "format: [unclosed\n")?;
        let res = load_config(None, dir.path());
        assert!(matches!(res, Err(InfrastructureError::YamlError(_))));
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let mut config = MarqueeConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[("MARQUEE_FORMAT", "json"), ("MARQUEE_SKIP_HEADER", "false")]),
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.skip_header);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = MarqueeConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[("MARQUEE_FORMAT", "xml"), ("MARQUEE_SKIP_HEADER", "maybe")]),
        );
        assert_eq!(config, MarqueeConfig::default());
    }
}
