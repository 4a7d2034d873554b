// Version information for the Humanize AI detector node

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-detector-only-2026-08-08";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Major version number
pub const VERSION_MAJOR: u32 = 1;

/// Minor version number
pub const VERSION_MINOR: u32 = 0;

/// Patch version number
pub const VERSION_PATCH: u32 = 0;

/// Build date
pub const BUILD_DATE: &str = "2026-08-08";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "ai-detection",
    "ensemble-detection",
    "all-models",
    "top-n-models",
    "model-selection",
    "sentence-detection",
    "ai-highlighting",
    "markdown-output",
    "html-output",
    "plain-output",
    "cors",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Humanize Detector Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
