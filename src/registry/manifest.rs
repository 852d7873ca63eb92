//! Manifest-backed robot registry (`schema/robot_registry.json`).
//!
//! The manifest lists every robot implementation the backend ships with the
//! metadata the documentation needs. Loading is strict: the file must satisfy
//! `schema/robot_registry.schema.json`, carry the expected `schema_version`,
//! and name each implementation once. Construction of an individual entry is
//! lenient and reported through `InstantiationError` instead.

use crate::registry::identity::{CapabilityName, ImplementationName};
use crate::registry::robot::{
    InstantiationConfig, InstantiationError, RobotImplementation, RobotRegistry, StaticRobot,
};
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const REGISTRY_SCHEMA_VERSION: &str = "robot_registry_v1";
const REGISTRY_SCHEMA_FILE: &str = "schema/robot_registry.schema.json";

#[derive(Clone, Debug, Deserialize)]
/// Registry manifest as stored on disk.
pub struct RegistryManifest {
    pub schema_version: String,
    pub implementations: Vec<ImplementationEntry>,
}

#[derive(Clone, Debug, Deserialize)]
/// One robot implementation declared in the manifest.
pub struct ImplementationEntry {
    pub name: ImplementationName,
    pub manufacturer: String,
    pub model_name: String,
    #[serde(default)]
    pub capabilities: Vec<CapabilityName>,
    /// Entries that need the real robot environment refuse to construct
    /// under the documentation configuration.
    #[serde(default)]
    pub embedded_only: bool,
}

/// `RobotRegistry` over a validated manifest, keyed by implementation name.
#[derive(Debug, Default)]
pub struct ManifestRegistry {
    entries: BTreeMap<ImplementationName, ImplementationEntry>,
}

impl ManifestRegistry {
    /// Load, validate, and index a manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;

        let file =
            File::open(path).with_context(|| format!("opening registry {}", path.display()))?;
        let manifest: RegistryManifest = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing registry {}", path.display()))?;
        Self::from_manifest(manifest).with_context(|| format!("loading {}", path.display()))
    }

    /// Index an already-parsed manifest.
    pub fn from_manifest(manifest: RegistryManifest) -> Result<Self> {
        if manifest.schema_version != REGISTRY_SCHEMA_VERSION {
            bail!(
                "schema_version '{}' does not match expected '{}'",
                manifest.schema_version,
                REGISTRY_SCHEMA_VERSION
            );
        }

        let mut entries = BTreeMap::new();
        for entry in manifest.implementations {
            if entry.name.0.trim().is_empty() {
                bail!("encountered implementation with no name");
            }
            if let Some(cap) = first_repeated_capability(&entry.capabilities) {
                bail!(
                    "implementation {} lists capability {} more than once",
                    entry.name,
                    cap
                );
            }
            if entries.contains_key(&entry.name) {
                bail!("duplicate implementation name {}", entry.name);
            }
            entries.insert(entry.name.clone(), entry);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, name: &ImplementationName) -> Option<&ImplementationEntry> {
        self.entries.get(name)
    }
}

impl RobotRegistry for ManifestRegistry {
    fn implementation_names(&self) -> Vec<ImplementationName> {
        self.entries.keys().cloned().collect()
    }

    fn instantiate(
        &self,
        name: &ImplementationName,
        config: &InstantiationConfig,
    ) -> Result<Box<dyn RobotImplementation>, InstantiationError> {
        let entry =
            self.entries
                .get(name)
                .ok_or_else(|| InstantiationError::UnknownImplementation {
                    name: name.clone(),
                })?;
        if entry.embedded_only && !config.embedded {
            return Err(InstantiationError::RequiresEmbedded { name: name.clone() });
        }
        if entry.manufacturer.trim().is_empty() {
            return Err(InstantiationError::MissingMetadata {
                name: name.clone(),
                field: "manufacturer",
            });
        }
        if entry.model_name.trim().is_empty() {
            return Err(InstantiationError::MissingMetadata {
                name: name.clone(),
                field: "model name",
            });
        }

        Ok(Box::new(StaticRobot {
            manufacturer: entry.manufacturer.clone(),
            model_name: entry.model_name.clone(),
            capabilities: entry.capabilities.iter().cloned().collect(),
        }))
    }
}

fn first_repeated_capability(capabilities: &[CapabilityName]) -> Option<&CapabilityName> {
    let mut seen = BTreeSet::new();
    capabilities.iter().find(|cap| !seen.insert(*cap))
}

fn validate_against_schema(registry_path: &Path) -> Result<()> {
    let registry_file = File::open(registry_path)
        .with_context(|| format!("opening registry {}", registry_path.display()))?;
    let registry_value: Value = serde_json::from_reader(BufReader::new(registry_file))
        .with_context(|| format!("parsing registry {}", registry_path.display()))?;

    let schema_path = resolve_registry_schema_path(registry_path);
    let schema_file = File::open(&schema_path)
        .with_context(|| format!("opening registry schema {}", schema_path.display()))?;
    let schema_value: Value = serde_json::from_reader(BufReader::new(schema_file))
        .with_context(|| format!("parsing registry schema {}", schema_path.display()))?;

    let compiled = JSONSchema::compile(&schema_value).map_err(|err| {
        anyhow!(
            "compiling registry schema {}: {err}",
            schema_path.display()
        )
    })?;

    if let Err(errors) = compiled.validate(&registry_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "robot registry {} failed schema validation:\n{}",
            registry_path.display(),
            details
        );
    }
    Ok(())
}

/// Prefer a schema next to the manifest's repository, then the crate's copy.
fn resolve_registry_schema_path(registry_path: &Path) -> PathBuf {
    if let Some(base) = registry_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join(REGISTRY_SCHEMA_FILE);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(REGISTRY_SCHEMA_FILE)
}
