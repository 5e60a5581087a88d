use crate::domain::models::{CheckOutcome, ThresholdSection};
use crate::extension::{load_manifest, ExtensionLayout};
use crate::services::suite::percent;

const CHECK_NAME: &str = "manifest";

/// Validate the package manifest: required keys, contribution counts, and
/// (reported only) the branded-label fraction.
pub fn manifest_check(
    layout: &ExtensionLayout,
    thresholds: &ThresholdSection,
    label_prefix: &str,
) -> CheckOutcome {
    let manifest = match load_manifest(&layout.manifest_path) {
        Ok(m) => m,
        Err(e) => return CheckOutcome::fail(CHECK_NAME, vec![format!("manifest unusable: {}", e)]),
    };

    let missing = manifest.missing_fields();
    if !missing.is_empty() {
        return CheckOutcome::fail(
            CHECK_NAME,
            vec![format!("manifest missing fields: {}", missing.join(", "))],
        );
    }

    let contributes = manifest.contributes.unwrap_or_default();
    let themes = contributes.themes.len();
    let snippets = contributes.snippets.len();
    let commands = contributes.commands.len();

    let mut messages = vec![format!(
        "contributes: {} themes, {} snippets, {} commands",
        themes, snippets, commands
    )];

    let branded = contributes
        .themes
        .iter()
        .filter(|t| t.label.starts_with(label_prefix))
        .count();
    messages.push(format!(
        "branding: {}/{} theme labels start with '{}' ({:.1}%)",
        branded,
        themes,
        label_prefix,
        percent(branded, themes)
    ));

    let mut passed = true;
    if themes < thresholds.min_themes {
        passed = false;
        messages.push(format!(
            "themes below threshold: {} < {}",
            themes, thresholds.min_themes
        ));
    }
    if snippets < thresholds.min_snippets {
        passed = false;
        messages.push(format!(
            "snippets below threshold: {} < {}",
            snippets, thresholds.min_snippets
        ));
    }
    if commands < thresholds.min_commands {
        passed = false;
        messages.push(format!(
            "commands below threshold: {} < {}",
            commands, thresholds.min_commands
        ));
    }

    if passed {
        CheckOutcome::pass(CHECK_NAME, messages)
    } else {
        CheckOutcome::fail(CHECK_NAME, messages)
    }
}
