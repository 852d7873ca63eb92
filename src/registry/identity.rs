use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique key of a robot implementation (e.g., `RoborockS5ValetudoRobot`).
///
/// Distinct from the user-facing model name: two implementations may share a
/// model name but never an implementation name.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementationName(pub String);

/// Opaque capability identifier (e.g., `BatteryStateCapability`).
///
/// Ordering is plain byte-wise string ordering, which is what every rendered
/// list and matrix row uses.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityName(pub String);

impl ImplementationName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CapabilityName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImplementationName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for CapabilityName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ImplementationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
