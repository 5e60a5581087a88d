use crate::domain::constants::PROFILE_FILE;
use crate::domain::models::{Profile, SuiteReport};
use std::path::{Path, PathBuf};

/// Load `vsxcheck.toml` from the root; absence means defaults.
pub fn load_profile(root: &Path) -> anyhow::Result<Profile> {
    let path = root.join(PROFILE_FILE);
    if !path.exists() {
        return Ok(Profile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

fn history_path(root: &Path) -> PathBuf {
    root.join(".vsxcheck").join("history.jsonl")
}

/// Append one line per suite run. Best effort: a failure to write never
/// disturbs the check results.
pub fn record_run(root: &Path, report: &SuiteReport) {
    let path = history_path(root);
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "passed": report.passed,
        "total": report.total,
        "success_rate": report.success_rate,
        "verdict": report.verdict,
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

pub fn recent_runs(root: &Path, limit: usize) -> anyhow::Result<Vec<serde_json::Value>> {
    let path = history_path(root);
    if !path.exists() {
        return Ok(vec![]);
    }
    let raw = std::fs::read_to_string(path)?;
    let mut rows: Vec<serde_json::Value> = raw
        .lines()
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect();
    let keep_from = rows.len().saturating_sub(limit);
    Ok(rows.split_off(keep_from))
}

fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
