use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level weektray configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WeektrayConfig {
    /// Conversion settings.
    #[serde(default)]
    pub convert: ConvertToml,

    /// Watch-loop settings.
    #[serde(default)]
    pub watch: WatchToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConvertToml {
    /// Reference year for week-to-date conversion when neither the CLI
    /// flag nor the current year should be used.
    pub reference_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchToml {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for WatchToml {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    3600
}

/// Loads the configuration from `path`, or returns the defaults when no
/// path was given.
pub fn load(path: Option<&Path>) -> Result<WeektrayConfig> {
    let Some(path) = path else {
        return Ok(WeektrayConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).with_context(|| format!("failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_when_no_path() {
        let config = load(None).unwrap();
        assert_eq!(config.convert.reference_year, None);
        assert_eq!(config.watch.interval_secs, 3600);
    }

    #[test]
    fn parses_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convert]\nreference_year = 2024\n").unwrap();
        writeln!(file, "[watch]\ninterval_secs = 60\n").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.convert.reference_year, Some(2024));
        assert_eq!(config.watch.interval_secs, 60);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convert]\nreference_year = 2030").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.convert.reference_year, Some(2030));
        assert_eq!(config.watch.interval_secs, 3600);
    }

    #[test]
    fn unknown_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[watch]\ninterval = 60").unwrap();

        assert!(load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/weektray.toml"))).is_err());
    }
}
