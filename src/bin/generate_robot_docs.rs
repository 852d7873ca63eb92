//! Regenerates the robot implementation overview page.
//!
//! Takes no arguments: the repository root is discovered, the registry at
//! `schema/robot_registry.json` is scanned, and the rendered Markdown replaces
//! `docs/_pages/usage/implementation-overview.md`.

use anyhow::Result;
use chrono::Utc;
use robotdoc::runtime::{exit_code, init_tracing, is_address_in_use};
use robotdoc::{GeneratorConfig, find_repo_root, run_generator};
use tracing::debug;

fn main() {
    init_tracing();
    let outcome = run();
    if let Err(err) = &outcome {
        if is_address_in_use(err) {
            debug!("ignoring address-in-use error: {err:#}");
        } else {
            eprintln!("generate-robot-docs: {err:#}");
        }
    }
    std::process::exit(exit_code(&outcome));
}

fn run() -> Result<()> {
    let repo_root = find_repo_root()?;
    let config = GeneratorConfig::for_repo(&repo_root);
    run_generator(&config, Utc::now())?;
    Ok(())
}
