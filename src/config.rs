//! Generator configuration resolved from the repository layout.
//!
//! The binary takes no flags; every path is fixed relative to the repository
//! root. Tests build a `GeneratorConfig` directly to point at scratch trees or
//! swap the hidden set.

use crate::render::DEFAULT_PAGE_HEADER;
use crate::registry::InstantiationConfig;
use crate::scan::HiddenImplementations;
use crate::{OUTPUT_PATH, REGISTRY_PATH};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub registry_path: PathBuf,
    pub output_path: PathBuf,
    pub hidden: HiddenImplementations,
    pub instantiation: InstantiationConfig,
    pub header: String,
}

impl GeneratorConfig {
    /// Standard layout under `repo_root` with the default hidden list.
    pub fn for_repo(repo_root: &Path) -> Self {
        Self {
            registry_path: repo_root.join(REGISTRY_PATH),
            output_path: repo_root.join(OUTPUT_PATH),
            hidden: HiddenImplementations::default(),
            instantiation: InstantiationConfig::documentation(),
            header: DEFAULT_PAGE_HEADER.to_string(),
        }
    }

    pub fn with_hidden(mut self, hidden: HiddenImplementations) -> Self {
        self.hidden = hidden;
        self
    }
}
