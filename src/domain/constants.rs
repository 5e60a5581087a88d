//! Stable defaults shared across checks and profile loading.

/// Substring expected inside an installed extension identifier.
pub const DEFAULT_EXTENSION_MARKER: &str = "compiled-thought-themes";

/// Brand prefix expected on contributed theme labels.
pub const DEFAULT_LABEL_PREFIX: &str = "TCT";

/// Color key family that indicates bracket-pair colorization support.
pub const BRACKET_HIGHLIGHT_MARKER: &str = "editorBracketHighlight";

/// Color key required for cursor visibility tuning.
pub const CURSOR_COLOR_KEY: &str = "editorCursor.foreground";

/// Editor CLI queried for installed extension identifiers.
pub const DEFAULT_EDITOR_BIN: &str = "code";

pub const DEFAULT_THEMES_DIR: &str = "themes";
pub const DEFAULT_SNIPPETS_DIR: &str = "snippet";
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

/// Profile file looked up in the extension root.
pub const PROFILE_FILE: &str = "vsxcheck.toml";

/// Paths that packaging should have stripped from the working tree.
pub const DEFAULT_REMOVED_PATHS: &[&str] = &[
    "themes/dark_plus.json",
    "themes/light_plus.json",
    "fileicons/",
    "build.bat",
    "vsc-extension-quickstart.md",
];

pub const VERDICT_READY: &str = "ready_for_release";
pub const VERDICT_MINOR: &str = "needs_minor_fixes";
pub const VERDICT_MAJOR: &str = "needs_major_fixes";
