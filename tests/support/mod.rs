use anyhow::{Context, Result, bail};
use robotdoc::{
    CapabilityName, ImplementationName, InstantiationConfig, InstantiationError,
    RobotImplementation, RobotRegistry, StaticRobot, find_repo_root,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn repo_root() -> PathBuf {
    find_repo_root().expect("tests require repository root")
}

pub fn generator_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_generate-robot-docs"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Scratch checkout containing a `Cargo.toml` and the given registry manifest.
pub fn scratch_repo(manifest: &Value) -> Result<TempDir> {
    let dir = TempDir::new().context("failed to allocate scratch repo")?;
    fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"scratch\"\n")?;
    write_manifest(dir.path(), manifest)?;
    Ok(dir)
}

pub fn write_manifest(root: &Path, manifest: &Value) -> Result<()> {
    let schema_dir = root.join("schema");
    fs::create_dir_all(&schema_dir)?;
    fs::write(
        schema_dir.join("robot_registry.json"),
        serde_json::to_vec_pretty(manifest)?,
    )?;
    Ok(())
}

/// In-memory registry; entries registered as `None` fail to construct.
#[derive(Default)]
pub struct FakeRegistry {
    robots: BTreeMap<ImplementationName, Option<StaticRobot>>,
}

impl FakeRegistry {
    pub fn robot(mut self, name: &str, manufacturer: &str, model: &str, caps: &[&str]) -> Self {
        self.robots.insert(
            ImplementationName::from(name),
            Some(StaticRobot {
                manufacturer: manufacturer.to_string(),
                model_name: model.to_string(),
                capabilities: caps.iter().map(|c| CapabilityName::from(*c)).collect(),
            }),
        );
        self
    }

    pub fn broken(mut self, name: &str) -> Self {
        self.robots.insert(ImplementationName::from(name), None);
        self
    }
}

impl RobotRegistry for FakeRegistry {
    fn implementation_names(&self) -> Vec<ImplementationName> {
        self.robots.keys().cloned().collect()
    }

    fn instantiate(
        &self,
        name: &ImplementationName,
        _config: &InstantiationConfig,
    ) -> Result<Box<dyn RobotImplementation>, InstantiationError> {
        match self.robots.get(name) {
            Some(Some(robot)) => Ok(Box::new(robot.clone())),
            Some(None) => Err(InstantiationError::RequiresEmbedded { name: name.clone() }),
            None => Err(InstantiationError::UnknownImplementation { name: name.clone() }),
        }
    }
}
