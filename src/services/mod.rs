//! Service layer containing check logic and side-effect helpers.
//!
//! ## Service map
//! - `installation.rs` — editor CLI probe behind the `ExtensionLister` trait.
//! - `themes.rs` — theme directory scan + validity percentage.
//! - `snippets.rs` — snippet directory scan + validity percentage.
//! - `manifest.rs` — `package.json` structure and contribution counts.
//! - `size.rs` — legacy-path removal rate and packaged artifact size.
//! - `suite.rs` — fixed-order suite run, scoring, verdict classification.
//! - `storage.rs` — profile loading + run history persistence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Checks return `CheckOutcome`; they never propagate errors.
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.

pub mod installation;
pub mod manifest;
pub mod output;
pub mod size;
pub mod snippets;
pub mod storage;
pub mod suite;
pub mod themes;
