use std::{fs, path::PathBuf, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Result, fs::config_dir};

const FILE_NAME: &str = "core.toml";

/// Handle to the core configuration
pub type Cfg = Arc<RwLock<CoreConfig>>;

/// The library's core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Symbol printed after money amounts
    pub currency: String,
    /// Overrides the location of the database file
    pub database: Option<PathBuf>,
}

impl CoreConfig {
    /// Load the configuration from disk, writing the defaults out on first run. A file that
    /// can't be parsed is ignored in favour of the defaults.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents).unwrap_or_else(|err| {
                warn!("Ignoring malformed {}: {err}", path.display());
                Self::default()
            }))
        } else {
            let cfg = Self::default();
            cfg.save()?;
            Ok(cfg)
        }
    }

    pub fn save(&self) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_dir()?.join(FILE_NAME), contents)?;

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn mock() -> Self {
        Self::default()
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            currency: "€".into(),
            database: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::CoreConfig;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: CoreConfig = toml::from_str(r#"currency = "$""#).unwrap();

        assert_eq!(cfg.currency, "$");
        assert_eq!(cfg.database, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(toml::from_str::<CoreConfig>("").unwrap(), CoreConfig::default());
    }
}
