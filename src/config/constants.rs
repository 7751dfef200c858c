// Project-wide constants
//
// Import via `use crate::config::constants::*;`.

/// Default dictionary server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default dictionary server port (the port the reference server listens on).
pub const DEFAULT_PORT: u16 = 8080;

/// How long shutdown waits for an in-flight query before aborting it.
pub const DEFAULT_SHUTDOWN_GRACE_MS: u64 = 2000;

/// Directory under $HOME holding config.toml and the log file.
pub const APP_DIR_NAME: &str = ".madslang";

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const LOG_FILE_NAME: &str = "madslang.log";

/// Environment overrides, applied after the config file.
pub const ENV_HOST: &str = "MADSLANG_HOST";
pub const ENV_PORT: &str = "MADSLANG_PORT";
