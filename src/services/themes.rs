use crate::domain::models::CheckOutcome;
use crate::extension::{classify_theme, list_json_files, read_json, ExtensionLayout, ThemeStatus};
use crate::services::suite::{meets_threshold, percent};

const CHECK_NAME: &str = "themes";

/// Scan the themes directory and validate every `*.json` file.
///
/// A file that fails to parse counts as invalid and the scan continues.
/// Zero theme files is 0% and fails the threshold.
pub fn themes_check(layout: &ExtensionLayout, min_valid_pct: u32) -> CheckOutcome {
    let files = match list_json_files(&layout.themes_dir) {
        Ok(files) => files,
        Err(e) => return CheckOutcome::fail(CHECK_NAME, vec![e.to_string()]),
    };

    let mut messages = Vec::new();
    let mut valid = 0usize;
    for path in &files {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match read_json(path) {
            Ok(theme) => match classify_theme(&theme) {
                ThemeStatus::Valid => {
                    valid += 1;
                    messages.push(format!("{}: valid (brackets & cursor)", file));
                }
                ThemeStatus::MissingFields => {
                    messages.push(format!("{}: missing name or colors", file));
                }
                ThemeStatus::MissingColorKeys => {
                    messages.push(format!("{}: missing bracket-highlight or cursor color", file));
                }
            },
            Err(e) => messages.push(format!("{}: invalid JSON: {}", file, e)),
        }
    }

    let total = files.len();
    messages.push(format!(
        "themes: {}/{} valid ({:.1}%)",
        valid,
        total,
        percent(valid, total)
    ));
    if meets_threshold(valid, total, min_valid_pct) {
        CheckOutcome::pass(CHECK_NAME, messages)
    } else {
        CheckOutcome::fail(CHECK_NAME, messages)
    }
}
