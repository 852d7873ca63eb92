//! Robot registry wiring.
//!
//! `robot` defines the traits the scanner consumes; `manifest` provides the
//! JSON-backed registry the binary uses. Identifiers live in `identity` so
//! both sides agree on naming and ordering.

pub mod identity;
pub mod manifest;
pub mod robot;

pub use identity::{CapabilityName, ImplementationName};
pub use manifest::{ImplementationEntry, ManifestRegistry, REGISTRY_SCHEMA_VERSION, RegistryManifest};
pub use robot::{
    InstantiationConfig, InstantiationError, RobotImplementation, RobotRegistry, StaticRobot,
};
