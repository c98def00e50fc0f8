use anyhow::{Context, Result};
use sa_core::Config as CoreConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
  pub client_config: CoreConfig,
  pub export_dir: PathBuf,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let client_config =
      CoreConfig::from_env().context("Failed to load Seeking Alpha configuration")?;

    let export_dir = PathBuf::from(&client_config.export_dir);

    Ok(Self { client_config, export_dir })
  }

  /// Directory for exported files, a command line value taking precedence
  pub fn export_dir(&self, overridden: Option<PathBuf>) -> PathBuf {
    overridden.unwrap_or_else(|| self.export_dir.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_export_dir_override() {
    let config = Config { client_config: CoreConfig::default(), export_dir: PathBuf::from("exports") };
    assert_eq!(config.export_dir(None), PathBuf::from("exports"));
    assert_eq!(config.export_dir(Some(PathBuf::from("/tmp/out"))), PathBuf::from("/tmp/out"));
  }
}
