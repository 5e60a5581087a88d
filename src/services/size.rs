use crate::domain::models::{CheckOutcome, PackagingSection, ThresholdSection};
use crate::extension::{load_manifest, ExtensionLayout};
use crate::services::suite::{meets_threshold, percent};

const CHECK_NAME: &str = "size";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Packaging hygiene: legacy-path removal rate, overridden by the packaged
/// artifact's size when one exists.
///
/// Artifact resolution order: explicit override, profile setting, then
/// `{name}-{version}.vsix` derived from the manifest (the name the release
/// script gives the package).
pub fn size_check(
    layout: &ExtensionLayout,
    packaging: &PackagingSection,
    thresholds: &ThresholdSection,
    artifact_override: Option<&str>,
) -> CheckOutcome {
    let mut messages = Vec::new();

    let total = packaging.removed_paths.len();
    let removed = packaging
        .removed_paths
        .iter()
        .filter(|p| !layout.root.join(p).exists())
        .count();
    messages.push(format!(
        "removed {}/{} legacy paths ({:.1}%)",
        removed,
        total,
        percent(removed, total)
    ));

    let artifact = artifact_override
        .map(|a| a.to_string())
        .or_else(|| packaging.artifact.clone())
        .or_else(|| {
            load_manifest(&layout.manifest_path)
                .ok()
                .and_then(|m| m.artifact_name())
        });

    if let Some(rel) = artifact {
        let path = layout.root.join(&rel);
        if path.exists() {
            let bytes = match std::fs::metadata(&path) {
                Ok(meta) => meta.len(),
                Err(e) => {
                    messages.push(format!("artifact {}: unreadable: {}", rel, e));
                    return CheckOutcome::fail(CHECK_NAME, messages);
                }
            };
            let size_mb = bytes as f64 / BYTES_PER_MB;
            messages.push(format!("artifact {}: {:.2} MB", rel, size_mb));
            return if size_mb < thresholds.max_artifact_mb {
                CheckOutcome::pass(CHECK_NAME, messages)
            } else {
                messages.push(format!(
                    "artifact at or above {:.1} MB limit",
                    thresholds.max_artifact_mb
                ));
                CheckOutcome::fail(CHECK_NAME, messages)
            };
        }
        messages.push(format!("artifact {} not packaged yet", rel));
    }

    if meets_threshold(removed, total, thresholds.min_removed_pct) {
        CheckOutcome::pass(CHECK_NAME, messages)
    } else {
        CheckOutcome::fail(CHECK_NAME, messages)
    }
}
