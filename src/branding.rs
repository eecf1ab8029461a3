//! Branding and application identity configuration.
//!
//! This module centralizes the names and paths that identify the application,
//! so renaming it only touches this file.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Folio";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in command examples and in the generated HTML `<meta name="generator">`.
pub const APP_BINARY_NAME: &str = "folio";

/// The directory name for application data (config, logs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Folio";

/// File name of the log written when logging is enabled.
pub const LOG_FILE_NAME: &str = "folio.log";

/// Environment variable consulted for the log filter before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "FOLIO_LOG";
