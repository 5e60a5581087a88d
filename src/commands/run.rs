use crate::cli::{Cli, Commands};
use crate::domain::constants::VERDICT_READY;
use crate::domain::models::{JsonOut, Profile};
use crate::extension::ExtensionLayout;
use crate::services::installation::{installation_check, EditorCli};
use crate::services::manifest::manifest_check;
use crate::services::output::{print_out, print_outcome};
use crate::services::size::size_check;
use crate::services::snippets::snippets_check;
use crate::services::storage::{recent_runs, record_run};
use crate::services::suite::run_suite;
use crate::services::themes::themes_check;

/// Dispatch one CLI invocation. The returned bool is the process outcome:
/// only a `check` run below the release bar reports failure.
pub fn handle_commands(cli: &Cli, profile: &Profile) -> anyhow::Result<bool> {
    let layout = ExtensionLayout::resolve(&cli.root, profile);
    let artifact = cli.artifact.as_deref();

    match &cli.command {
        Commands::Check => {
            let lister = EditorCli {
                bin: editor_bin(cli, profile),
            };
            let report = run_suite(&layout, profile, &lister, artifact);
            record_run(&layout.root, &report);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &report
                    })?
                );
            } else {
                for check in &report.checks {
                    println!(
                        "[{}] {}",
                        check.name,
                        if check.passed { "PASS" } else { "FAIL" }
                    );
                    for m in &check.messages {
                        println!("  {}", m);
                    }
                }
                println!(
                    "overall: {}/{} ({:.1}%)",
                    report.passed, report.total, report.success_rate
                );
                println!("verdict: {}", report.verdict);
            }
            Ok(report.verdict == VERDICT_READY)
        }
        Commands::Installation => {
            let lister = EditorCli {
                bin: editor_bin(cli, profile),
            };
            let outcome = installation_check(&lister, &profile.branding.extension_marker);
            print_outcome(cli.json, &outcome)?;
            Ok(true)
        }
        Commands::Themes => {
            let outcome = themes_check(&layout, profile.thresholds.min_valid_pct);
            print_outcome(cli.json, &outcome)?;
            Ok(true)
        }
        Commands::Snippets => {
            let outcome = snippets_check(&layout, profile.thresholds.min_valid_pct);
            print_outcome(cli.json, &outcome)?;
            Ok(true)
        }
        Commands::Manifest => {
            let outcome = manifest_check(&layout, &profile.thresholds, &profile.branding.label_prefix);
            print_outcome(cli.json, &outcome)?;
            Ok(true)
        }
        Commands::Size => {
            let outcome = size_check(&layout, &profile.packaging, &profile.thresholds, artifact);
            print_outcome(cli.json, &outcome)?;
            Ok(true)
        }
        Commands::History { limit } => {
            let rows = recent_runs(&layout.root, *limit)?;
            print_out(cli.json, &rows, |r| {
                format!(
                    "{}\t{}\t{}/{}",
                    r["ts"], r["verdict"], r["passed"], r["total"]
                )
            })?;
            Ok(true)
        }
    }
}

fn editor_bin(cli: &Cli, profile: &Profile) -> String {
    cli.editor_bin
        .clone()
        .unwrap_or_else(|| profile.editor.bin.clone())
}
