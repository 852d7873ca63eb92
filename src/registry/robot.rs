//! The seam between the generator and concrete robot implementations.
//!
//! The scanner only ever sees `RobotRegistry` and `RobotImplementation`, so a
//! manifest-backed registry and an in-memory test double are interchangeable.

use crate::registry::identity::{CapabilityName, ImplementationName};
use std::collections::BTreeSet;
use thiserror::Error;

/// Environment handed to every implementation at construction time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstantiationConfig {
    /// True when running on the robot itself. The generator always builds
    /// with `false`, so implementations that need real hardware refuse.
    pub embedded: bool,
}

impl InstantiationConfig {
    /// The generic, off-device configuration used for documentation runs.
    pub fn documentation() -> Self {
        Self { embedded: false }
    }
}

/// Why an implementation could not be constructed.
///
/// Every variant is recoverable: the scanner records it and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstantiationError {
    #[error("unknown implementation {name}")]
    UnknownImplementation { name: ImplementationName },

    #[error("{name} can only be constructed in an embedded environment")]
    RequiresEmbedded { name: ImplementationName },

    #[error("{name} does not declare a {field}")]
    MissingMetadata {
        name: ImplementationName,
        field: &'static str,
    },
}

/// Uniform capability-query view of one constructed robot implementation.
pub trait RobotImplementation {
    fn manufacturer(&self) -> &str;

    fn model_name(&self) -> &str;

    /// Names of every capability the implementation registers.
    fn capabilities(&self) -> &BTreeSet<CapabilityName>;
}

/// Source of robot implementations: names plus a constructor per name.
pub trait RobotRegistry {
    /// Every known implementation name, in a stable order.
    fn implementation_names(&self) -> Vec<ImplementationName>;

    fn instantiate(
        &self,
        name: &ImplementationName,
        config: &InstantiationConfig,
    ) -> Result<Box<dyn RobotImplementation>, InstantiationError>;
}

/// Plain-data implementation used by the manifest registry and by tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticRobot {
    pub manufacturer: String,
    pub model_name: String,
    pub capabilities: BTreeSet<CapabilityName>,
}

impl RobotImplementation for StaticRobot {
    fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn capabilities(&self) -> &BTreeSet<CapabilityName> {
        &self.capabilities
    }
}
