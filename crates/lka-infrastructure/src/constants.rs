//! Infrastructure layer constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "LKA";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "lka.toml";

/// Default configuration directory searched below the working directory
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable consulted for the log filter before the config file
pub const LOG_ENV_VAR: &str = "LKA_LOG";
