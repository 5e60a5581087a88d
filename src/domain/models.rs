use crate::domain::constants::{
    DEFAULT_EDITOR_BIN, DEFAULT_EXTENSION_MARKER, DEFAULT_LABEL_PREFIX, DEFAULT_MANIFEST_FILE,
    DEFAULT_REMOVED_PATHS, DEFAULT_SNIPPETS_DIR, DEFAULT_THEMES_DIR,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Result-with-diagnostics produced by every check.
///
/// Checks never propagate errors; anything that goes wrong inside a check
/// lands here as a message plus `passed: false`.
#[derive(Debug, Serialize, Clone)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub messages: Vec<String>,
}

impl CheckOutcome {
    pub fn pass(name: &str, messages: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            messages,
        }
    }

    pub fn fail(name: &str, messages: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            messages,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub checks: Vec<CheckOutcome>,
    pub passed: usize,
    pub total: usize,
    pub success_rate: f64,
    pub verdict: String,
}

/// Optional `vsxcheck.toml` profile in the extension root.
///
/// Every field has a default matching the original release checklist, so an
/// absent or empty profile behaves identically to no profile at all.
#[derive(Debug, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub layout: LayoutSection,
    #[serde(default)]
    pub branding: BrandingSection,
    #[serde(default)]
    pub thresholds: ThresholdSection,
    #[serde(default)]
    pub packaging: PackagingSection,
    #[serde(default)]
    pub editor: EditorSection,
}

#[derive(Debug, Deserialize)]
pub struct LayoutSection {
    #[serde(default = "default_themes_dir")]
    pub themes_dir: String,
    #[serde(default = "default_snippets_dir")]
    pub snippets_dir: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

#[derive(Debug, Deserialize)]
pub struct BrandingSection {
    #[serde(default = "default_extension_marker")]
    pub extension_marker: String,
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
}

#[derive(Debug, Deserialize)]
pub struct ThresholdSection {
    /// Minimum percentage of valid theme/snippet files.
    #[serde(default = "default_min_valid_pct")]
    pub min_valid_pct: u32,
    #[serde(default = "default_min_themes")]
    pub min_themes: usize,
    #[serde(default = "default_min_snippets")]
    pub min_snippets: usize,
    #[serde(default = "default_min_commands")]
    pub min_commands: usize,
    /// Minimum percentage of legacy paths removed when no artifact exists.
    #[serde(default = "default_min_removed_pct")]
    pub min_removed_pct: u32,
    /// Strict upper bound on the packaged artifact size.
    #[serde(default = "default_max_artifact_mb")]
    pub max_artifact_mb: f64,
}

#[derive(Debug, Deserialize)]
pub struct PackagingSection {
    /// Explicit artifact path; when absent the name is derived from the
    /// manifest as `{name}-{version}.vsix`.
    pub artifact: Option<String>,
    #[serde(default = "default_removed_paths")]
    pub removed_paths: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditorSection {
    #[serde(default = "default_editor_bin")]
    pub bin: String,
}

fn default_themes_dir() -> String {
    DEFAULT_THEMES_DIR.to_string()
}

fn default_snippets_dir() -> String {
    DEFAULT_SNIPPETS_DIR.to_string()
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST_FILE.to_string()
}

fn default_extension_marker() -> String {
    DEFAULT_EXTENSION_MARKER.to_string()
}

fn default_label_prefix() -> String {
    DEFAULT_LABEL_PREFIX.to_string()
}

fn default_min_valid_pct() -> u32 {
    90
}

fn default_min_themes() -> usize {
    30
}

fn default_min_snippets() -> usize {
    2
}

fn default_min_commands() -> usize {
    3
}

fn default_min_removed_pct() -> u32 {
    80
}

fn default_max_artifact_mb() -> f64 {
    5.0
}

fn default_removed_paths() -> Vec<String> {
    DEFAULT_REMOVED_PATHS.iter().map(|p| p.to_string()).collect()
}

fn default_editor_bin() -> String {
    DEFAULT_EDITOR_BIN.to_string()
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            themes_dir: default_themes_dir(),
            snippets_dir: default_snippets_dir(),
            manifest: default_manifest(),
        }
    }
}

impl Default for BrandingSection {
    fn default() -> Self {
        Self {
            extension_marker: default_extension_marker(),
            label_prefix: default_label_prefix(),
        }
    }
}

impl Default for ThresholdSection {
    fn default() -> Self {
        Self {
            min_valid_pct: default_min_valid_pct(),
            min_themes: default_min_themes(),
            min_snippets: default_min_snippets(),
            min_commands: default_min_commands(),
            min_removed_pct: default_min_removed_pct(),
            max_artifact_mb: default_max_artifact_mb(),
        }
    }
}

impl Default for PackagingSection {
    fn default() -> Self {
        Self {
            artifact: None,
            removed_paths: default_removed_paths(),
        }
    }
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            bin: default_editor_bin(),
        }
    }
}
