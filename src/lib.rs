//! Shared library for the robot implementation overview generator.
//!
//! The pipeline runs once per build: `scan` constructs every visible robot
//! implementation from a `RobotRegistry`, `hierarchy` folds the results into
//! manufacturer/model/capability groups plus a support matrix, and `render`
//! turns that into the Markdown page. Repository discovery and the file
//! writer live here so the binary stays a thin wrapper.

use anyhow::{Context, Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod config;
pub mod generate;
pub mod hierarchy;
pub mod registry;
pub mod render;
pub mod runtime;
pub mod scan;

pub use config::GeneratorConfig;
pub use generate::{GeneratedOverview, generate_overview, run_generator};
pub use hierarchy::{
    EXCLUDED_MANUFACTURER, Hierarchy, ManufacturerGroup, MatrixColumn, ModelEntry, SupportMatrix,
    anchor, model_anchor,
};
pub use registry::{
    CapabilityName, ImplementationName, InstantiationConfig, InstantiationError,
    ManifestRegistry, RobotImplementation, RobotRegistry, StaticRobot,
};
pub use render::{DEFAULT_PAGE_HEADER, capability_link, render_document};
pub use scan::{HiddenImplementations, ImplementationDescriptor, ScanFailure, ScanReport, scan};

pub const REGISTRY_PATH: &str = "schema/robot_registry.json";
pub const OUTPUT_PATH: &str = "docs/_pages/usage/implementation-overview.md";
const MANIFEST: &str = "Cargo.toml";

/// Returns true when `candidate` looks like the repository root.
fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(REGISTRY_PATH).is_file() && candidate.join(MANIFEST).is_file()
}

fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the repository root.
///
/// Honors `ROBOTDOC_ROOT` when it points at a real checkout, then climbs up
/// from the working directory and the executable, and finally falls back to
/// the crate's own manifest directory.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("ROBOTDOC_ROOT") {
        if let Some(root) = repo_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(root) = exe_path.parent().and_then(search_upwards) {
            return Ok(root);
        }
    }

    if let Some(root) = repo_root_from_hint(env!("CARGO_MANIFEST_DIR")) {
        return Ok(root);
    }

    bail!(
        "Unable to locate the repository root (no {REGISTRY_PATH} found). Set ROBOTDOC_ROOT to the checkout."
    );
}

/// Write the rendered page, replacing any previous contents.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}
