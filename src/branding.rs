//! Branding and application identity configuration.
//!
//! This module centralizes the names and paths that identify the application so
//! the config directory, log file, and window titles stay consistent.

/// The human-readable display name of the application.
///
/// Used in:
/// - Terminal title bar
/// - Log messages
pub const APP_DISPLAY_NAME: &str = "Consolefolio";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "consolefolio";

/// The directory name for application data (config, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Consolefolio";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "CONSOLEFOLIO_CONFIG_DIR";

/// Name of the log file written inside the config directory.
pub const LOG_FILE_NAME: &str = "consolefolio.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        // Ensure binary name is lowercase
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());

        // Ensure no spaces in binary name or data dir
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));

        assert!(LOG_FILE_NAME.starts_with(APP_BINARY_NAME));
        assert!(CONFIG_DIR_ENV.starts_with(&APP_BINARY_NAME.to_uppercase()));
    }
}
