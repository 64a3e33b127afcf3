// Configuration: persisted theme preference, fallback policy, UI theme list

pub mod error;
pub mod settings;
pub mod theme;
pub mod ui_themes;

pub use error::ConfigError;
pub use settings::Settings;
pub use theme::ThemeSelection;
pub use ui_themes::{CustomUiTheme, UiTheme, UiThemeConfig};
