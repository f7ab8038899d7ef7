//! Error types for page mounting and configuration.
//!
//! Run-time interaction never fails: a missing element only disables the
//! feature that needed it. These errors cover the structural failures of the
//! browser binding and of the embedded configuration block.

/// Error returned when the embedded page configuration cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration block is not valid JSON for [`crate::config::PageConfig`].
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The image cycler needs at least one preset to rotate through.
    #[error("image style preset list is empty")]
    EmptyPresets,
    /// The typewriter tick interval must be positive.
    #[error("typewriter speed must be greater than zero")]
    ZeroTypewriterSpeed,
}

/// Error returned while mounting the page in a browser.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// `window` is not available (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// A JavaScript call failed; carries the debug rendering of the thrown value.
    #[error("javascript error: {0}")]
    Js(String),
    /// The console logger could not be installed.
    #[error("logger init failed: {0}")]
    Logger(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
