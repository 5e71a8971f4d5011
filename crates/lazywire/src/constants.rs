//! Container-level constants

/// Default configuration file name searched for in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "lazywire.toml";

/// Directory checked for the configuration file after the working directory
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
///
/// Nested keys use double underscores, e.g. `LAZYWIRE__CONTEXT__NAME`.
pub const CONFIG_ENV_PREFIX: &str = "LAZYWIRE";

/// Environment variable consulted for the log filter before config
pub const LOG_FILTER_ENV: &str = "LAZYWIRE_LOG";
