use crate::domain::models::CheckOutcome;
use crate::extension::{
    classify_snippet_file, list_json_files, read_json, ExtensionLayout, SnippetStatus,
};
use crate::services::suite::{meets_threshold, percent};

const CHECK_NAME: &str = "snippets";

/// Scan the snippet directory; same shape as the theme scan.
pub fn snippets_check(layout: &ExtensionLayout, min_valid_pct: u32) -> CheckOutcome {
    let files = match list_json_files(&layout.snippets_dir) {
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
            Ok(snippets) => match classify_snippet_file(&snippets) {
                SnippetStatus::Valid => {
                    valid += 1;
                    messages.push(format!("{}: valid snippet file", file));
                }
                SnippetStatus::BadStructure => {
                    messages.push(format!("{}: first snippet lacks prefix or body", file));
                }
                SnippetStatus::EmptyOrNotObject => {
                    messages.push(format!("{}: empty or not a snippet mapping", file));
                }
            },
            Err(e) => messages.push(format!("{}: invalid JSON: {}", file, e)),
        }
    }

    let total = files.len();
    messages.push(format!(
        "snippets: {}/{} valid ({:.1}%)",
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
