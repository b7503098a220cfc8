use std::{fs, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;
use vidaextra_lib::fs::config_dir;

use crate::config::theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

/// Handle to the shell's configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// The shell's configuration, serialized to TOML.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub theme: Theme,
}

impl GuiConfig {
    /// Load the configuration, falling back to the defaults when it can't be read
    pub fn load() -> Self {
        let path = match config_dir() {
            Ok(dir) => dir.join(FILE_NAME),
            Err(err) => {
                warn!("No configuration directory, using defaults: {err}");
                return Self::default();
            }
        };

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                    warn!("Ignoring malformed {}: {err}", path.display());
                    Self::default()
                }),
                Err(err) => {
                    warn!("Failed to read {}: {err}", path.display());
                    Self::default()
                }
            }
        } else {
            let cfg = Self::default();
            if let Err(err) = cfg.save() {
                warn!("Failed to write default {FILE_NAME}: {err}");
            }
            cfg
        }
    }

    pub fn save(&self) -> vidaextra_lib::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_dir()?.join(FILE_NAME), contents)?;

        Ok(())
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

#[cfg(test)]
mod test {
    use super::{GuiConfig, theme::Theme};

    #[test]
    fn test_theme_from_file() {
        let cfg: GuiConfig = toml::from_str(r#"theme = "light""#).unwrap();

        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.theme(), iced::Theme::Light);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(toml::from_str::<GuiConfig>(r#"theme = "solarized""#).is_err());
        assert_eq!(toml::from_str::<GuiConfig>("").unwrap().theme, Theme::Dark);
    }
}
