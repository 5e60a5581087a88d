use crate::domain::models::{CheckOutcome, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Human rendering: diagnostics first, verdict line last.
pub fn print_outcome(json: bool, outcome: &CheckOutcome) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: outcome
            })?
        );
    } else {
        for m in &outcome.messages {
            println!("{}", m);
        }
        println!(
            "{}: {}",
            outcome.name,
            if outcome.passed { "PASS" } else { "FAIL" }
        );
    }
    Ok(())
}
