//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Register the printable text exporter behind "Save as PDF"
    #[serde(default = "default_true")]
    pub enable_pdf_export: bool,

    /// Persist after every interaction, not only on page hide/unload
    #[serde(default = "default_true")]
    pub autosave: bool,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_pdf_export: true,
            autosave: true,
            json_logs: false,
        }
    }
}

fn default_true() -> bool {
    true
}
