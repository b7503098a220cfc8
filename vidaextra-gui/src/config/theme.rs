use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Nord,
    TokyoNight,
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
            Theme::Nord => iced::Theme::Nord,
            Theme::TokyoNight => iced::Theme::TokyoNight,
        }
    }
}
