use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    ///
    /// Unset variables fall back to defaults; only malformed values are rejected.
    #[error("Invalid value for environment variable {name}: '{value}'")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Raw value as read from the environment
        value: String,
    },
}
