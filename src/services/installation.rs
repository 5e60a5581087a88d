use crate::domain::models::CheckOutcome;
use std::process::Command;

const CHECK_NAME: &str = "installation";

/// Capability seam around the editor's extension-listing command so the
/// check can run against a stub in tests.
pub trait ExtensionLister {
    fn list_extensions(&self) -> anyhow::Result<Vec<String>>;
}

/// Real lister spawning `<bin> --list-extensions` and splitting stdout.
pub struct EditorCli {
    pub bin: String,
}

impl ExtensionLister for EditorCli {
    fn list_extensions(&self) -> anyhow::Result<Vec<String>> {
        let output = Command::new(&self.bin).arg("--list-extensions").output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect())
    }
}

/// Pass iff any listed extension identifier contains `marker`
/// case-insensitively. Spawn failures degrade to a failed outcome.
pub fn installation_check(lister: &dyn ExtensionLister, marker: &str) -> CheckOutcome {
    match lister.list_extensions() {
        Ok(ids) => {
            let needle = marker.to_ascii_lowercase();
            match ids
                .iter()
                .find(|id| id.to_ascii_lowercase().contains(&needle))
            {
                Some(id) => CheckOutcome::pass(CHECK_NAME, vec![format!("installed as {}", id)]),
                None => CheckOutcome::fail(
                    CHECK_NAME,
                    vec![format!(
                        "no installed extension id contains '{}' ({} listed)",
                        marker,
                        ids.len()
                    )],
                ),
            }
        }
        Err(e) => CheckOutcome::fail(CHECK_NAME, vec![format!("extension listing failed: {}", e)]),
    }
}
