use crate::domain::constants::{VERDICT_MAJOR, VERDICT_MINOR, VERDICT_READY};
use crate::domain::models::{Profile, SuiteReport};
use crate::extension::ExtensionLayout;
use crate::services::installation::{installation_check, ExtensionLister};
use crate::services::manifest::manifest_check;
use crate::services::size::size_check;
use crate::services::snippets::snippets_check;
use crate::services::themes::themes_check;

pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Exact integer form of `part/total >= pct%`. Zero totals never meet the
/// threshold.
pub fn meets_threshold(part: usize, total: usize, pct: u32) -> bool {
    total > 0 && part * 100 >= pct as usize * total
}

pub fn classify(passed: usize, total: usize) -> &'static str {
    if meets_threshold(passed, total, 90) {
        VERDICT_READY
    } else if meets_threshold(passed, total, 70) {
        VERDICT_MINOR
    } else {
        VERDICT_MAJOR
    }
}

/// Run the five checks in fixed order and assemble the release report.
pub fn run_suite(
    layout: &ExtensionLayout,
    profile: &Profile,
    lister: &dyn ExtensionLister,
    artifact_override: Option<&str>,
) -> SuiteReport {
    let checks = vec![
        installation_check(lister, &profile.branding.extension_marker),
        themes_check(layout, profile.thresholds.min_valid_pct),
        snippets_check(layout, profile.thresholds.min_valid_pct),
        manifest_check(layout, &profile.thresholds, &profile.branding.label_prefix),
        size_check(
            layout,
            &profile.packaging,
            &profile.thresholds,
            artifact_override,
        ),
    ];

    let total = checks.len();
    let passed = checks.iter().filter(|c| c.passed).count();
    SuiteReport {
        passed,
        total,
        success_rate: percent(passed, total),
        verdict: classify(passed, total).to_string(),
        checks,
    }
}
