use crate::domain::constants::{BRACKET_HIGHLIGHT_MARKER, CURSOR_COLOR_KEY};
use crate::domain::models::Profile;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Resolved filesystem layout of the extension working tree.
#[derive(Debug, Clone)]
pub struct ExtensionLayout {
    pub root: PathBuf,
    pub themes_dir: PathBuf,
    pub snippets_dir: PathBuf,
    pub manifest_path: PathBuf,
}

impl ExtensionLayout {
    pub fn resolve(root: &Path, profile: &Profile) -> Self {
        Self {
            root: root.to_path_buf(),
            themes_dir: root.join(&profile.layout.themes_dir),
            snippets_dir: root.join(&profile.layout.snippets_dir),
            manifest_path: root.join(&profile.layout.manifest),
        }
    }
}

/// Declarative extension metadata (`package.json`).
///
/// Top-level fields are optional so that a parsed-but-incomplete manifest can
/// report exactly which required keys are missing instead of failing the
/// whole deserialization.
#[derive(Debug, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub version: Option<String>,
    pub contributes: Option<Contributes>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Contributes {
    #[serde(default)]
    pub themes: Vec<ThemeContribution>,
    #[serde(default)]
    pub snippets: Vec<Value>,
    #[serde(default)]
    pub commands: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ThemeContribution {
    #[serde(default)]
    pub label: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ExtensionError {
    #[error("directory not found: {0}")]
    MissingDirectory(PathBuf),
    #[error("manifest not found: {0}")]
    MissingManifest(PathBuf),
}

impl PackageManifest {
    /// Names of required top-level keys absent from the manifest.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.display_name.is_none() {
            missing.push("displayName");
        }
        if self.version.is_none() {
            missing.push("version");
        }
        if self.contributes.is_none() {
            missing.push("contributes");
        }
        missing
    }

    /// Packaged artifact name the release script produces.
    pub fn artifact_name(&self) -> Option<String> {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => Some(format!("{}-{}.vsix", name, version)),
            _ => None,
        }
    }
}

pub fn load_manifest(path: &Path) -> anyhow::Result<PackageManifest> {
    if !path.exists() {
        return Err(ExtensionError::MissingManifest(path.to_path_buf()).into());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Why a parsed theme file was accepted or rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ThemeStatus {
    Valid,
    /// `name` or `colors` key absent.
    MissingFields,
    /// Present `colors` map lacks bracket-highlight or cursor keys.
    MissingColorKeys,
}

pub fn classify_theme(theme: &Value) -> ThemeStatus {
    let Some(obj) = theme.as_object() else {
        return ThemeStatus::MissingFields;
    };
    if !obj.contains_key("name") || !obj.contains_key("colors") {
        return ThemeStatus::MissingFields;
    }
    let Some(colors) = obj.get("colors").and_then(|c| c.as_object()) else {
        return ThemeStatus::MissingColorKeys;
    };
    let has_brackets = colors.keys().any(|k| k.contains(BRACKET_HIGHLIGHT_MARKER));
    let has_cursor = colors.contains_key(CURSOR_COLOR_KEY);
    if has_brackets && has_cursor {
        ThemeStatus::Valid
    } else {
        ThemeStatus::MissingColorKeys
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SnippetStatus {
    Valid,
    /// First entry lacks `prefix` or `body`.
    BadStructure,
    /// Not an object, or an object with no entries.
    EmptyOrNotObject,
}

/// Validity of a snippet file: non-empty mapping whose first entry (insertion
/// order) carries both `prefix` and `body`.
pub fn classify_snippet_file(snippets: &Value) -> SnippetStatus {
    let Some(obj) = snippets.as_object() else {
        return SnippetStatus::EmptyOrNotObject;
    };
    let Some(first) = obj.values().next() else {
        return SnippetStatus::EmptyOrNotObject;
    };
    match first.as_object() {
        Some(entry) if entry.contains_key("prefix") && entry.contains_key("body") => {
            SnippetStatus::Valid
        }
        _ => SnippetStatus::BadStructure,
    }
}

pub fn read_json(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// `*.json` entries of `dir`, sorted by file name for stable diagnostics.
pub fn list_json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtensionError::MissingDirectory(dir.to_path_buf()).into());
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map(|e| e == "json").unwrap_or(false) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_theme() -> Value {
        json!({
            "name": "TCT Midnight",
            "colors": {
                "editorBracketHighlight.foreground1": "#ffd700",
                "editorCursor.foreground": "#ff00ff",
                "editor.background": "#1e1e2e"
            }
        })
    }

    #[test]
    fn complete_theme_is_valid() {
        assert_eq!(classify_theme(&full_theme()), ThemeStatus::Valid);
    }

    #[test]
    fn removing_any_required_element_invalidates_theme() {
        let mut no_name = full_theme();
        no_name.as_object_mut().unwrap().remove("name");
        assert_eq!(classify_theme(&no_name), ThemeStatus::MissingFields);

        let mut no_colors = full_theme();
        no_colors.as_object_mut().unwrap().remove("colors");
        assert_eq!(classify_theme(&no_colors), ThemeStatus::MissingFields);

        let mut no_brackets = full_theme();
        no_brackets["colors"]
            .as_object_mut()
            .unwrap()
            .remove("editorBracketHighlight.foreground1");
        assert_eq!(classify_theme(&no_brackets), ThemeStatus::MissingColorKeys);

        let mut no_cursor = full_theme();
        no_cursor["colors"]
            .as_object_mut()
            .unwrap()
            .remove("editorCursor.foreground");
        assert_eq!(classify_theme(&no_cursor), ThemeStatus::MissingColorKeys);
    }

    #[test]
    fn bracket_marker_matches_as_substring() {
        let theme = json!({
            "name": "t",
            "colors": {
                "editorBracketHighlight.foreground3": "#abc",
                "editorCursor.foreground": "#def"
            }
        });
        assert_eq!(classify_theme(&theme), ThemeStatus::Valid);
    }

    #[test]
    fn snippet_file_first_entry_decides_validity() {
        let ok = json!({
            "Print Statement": {"prefix": "log", "body": ["console.log($1)"]},
            "Broken": {"nope": true}
        });
        assert_eq!(classify_snippet_file(&ok), SnippetStatus::Valid);

        let bad_first = json!({
            "Broken": {"nope": true},
            "Print Statement": {"prefix": "log", "body": ["console.log($1)"]}
        });
        assert_eq!(classify_snippet_file(&bad_first), SnippetStatus::BadStructure);
    }

    #[test]
    fn empty_or_non_object_snippet_files_are_invalid() {
        assert_eq!(
            classify_snippet_file(&json!({})),
            SnippetStatus::EmptyOrNotObject
        );
        assert_eq!(
            classify_snippet_file(&json!([1, 2])),
            SnippetStatus::EmptyOrNotObject
        );
    }

    #[test]
    fn manifest_reports_missing_fields() {
        let m: PackageManifest =
            serde_json::from_value(json!({"name": "x", "version": "1.0.0"})).unwrap();
        assert_eq!(m.missing_fields(), vec!["displayName", "contributes"]);

        let complete: PackageManifest = serde_json::from_value(json!({
            "name": "x",
            "displayName": "X",
            "version": "1.0.0",
            "contributes": {}
        }))
        .unwrap();
        assert!(complete.missing_fields().is_empty());
    }

    #[test]
    fn artifact_name_derived_from_manifest() {
        let m: PackageManifest = serde_json::from_value(json!({
            "name": "compiled-thought-themes",
            "displayName": "Compiled Thought Themes",
            "version": "2.0.0",
            "contributes": {}
        }))
        .unwrap();
        assert_eq!(
            m.artifact_name().as_deref(),
            Some("compiled-thought-themes-2.0.0.vsix")
        );

        let bare: PackageManifest = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert_eq!(bare.artifact_name(), None);
    }
}
