//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The API base URL is resolved at compile time and carried at runtime by
//! [`ApiConfig`], which is injected into the HTTP data source.

// =============================================================================
// Network Configuration
// =============================================================================

/// Backend base URL used when no override is given at build time.
///
/// Set `DIRTABLE_API_BASE_URL` while compiling to point the client at a
/// different backend.
pub const DEFAULT_API_BASE_URL: &str = match option_env!("DIRTABLE_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Backend endpoint prefixes (relative to the base URL).
pub mod endpoints {
    /// Directory listing endpoint, followed by the directory path.
    pub const DIR_LIST: &str = "/api/dir/list";
    /// CSV table endpoint, followed by the file path.
    pub const CSV_TABLE: &str = "/api/csv-table";
}

// =============================================================================
// Routing
// =============================================================================

/// Browser-visible routes.
pub mod routes {
    /// Directory browser.
    pub const BROWSER: &str = "/";
    /// Table viewer.
    pub const TABLE: &str = "/table";
    /// Query parameter carrying the file path for the table viewer.
    pub const PATH_PARAM: &str = "path";
}

/// Directory the browser lists when it mounts.
pub const ROOT_DIR: &str = "/";

// =============================================================================
// Grid Configuration
// =============================================================================

/// Data grid sizing.
pub mod grid {
    /// Initial width of every column, in pixels.
    pub const DEFAULT_COLUMN_WIDTH: f64 = 160.0;
    /// Columns cannot be resized below this width, in pixels.
    pub const MIN_COLUMN_WIDTH: f64 = 48.0;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// API Configuration
// =============================================================================

/// Runtime configuration for the backend HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// Trailing slashes are dropped so endpoint prefixes can be appended
    /// directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
