// Configuration module
// Public interface for configuration loading

mod colors;
pub mod constants;
mod loader;
mod settings;

pub use colors::{ColorScheme, ColorSpec, ColorTheme, PanelColors, StatusColors};
pub use loader::{apply_env_overrides, default_config_path, load_config, load_from_path};
pub use settings::{ClientConfig, Config, ConfigError};
