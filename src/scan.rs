//! Registry scanning: construct every visible implementation and capture the
//! metadata the overview needs.
//!
//! Construction failures are expected (some implementations only build on
//! real hardware), so each one is logged and recorded while the scan keeps
//! going.

use crate::registry::{
    CapabilityName, ImplementationName, InstantiationConfig, InstantiationError, RobotRegistry,
};
use std::collections::BTreeSet;
use tracing::{debug, warn};

// Implementations that aren't ready for people casually browsing the docs.
// Some of them may never be; they exist as tests or experiments.
const HIDDEN_IMPLEMENTATIONS: &[&str] = &[
    "ViomiV7ValetudoRobot",
    "RoborockM1SValetudoRobot",
    "RoborockS6MaxVValetudoRobot",
    "RoborockS7ValetudoRobot",
    "DreameP2149ValetudoRobot",
    "DreameL10SUltraValetudoRobot",
    "DreameL10SProValetudoRobot",
    "DreameX10PlusValetudoRobot",
    "DreameD9ProPlusValetudoRobot",
    "DreameD10SProValetudoRobot",
    "DreameD10SPlusValetudoRobot",
];

/// Implementation names excluded from every part of the generated page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenImplementations(BTreeSet<ImplementationName>);

impl HiddenImplementations {
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, name: &ImplementationName) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImplementationName> {
        self.0.iter()
    }
}

impl Default for HiddenImplementations {
    fn default() -> Self {
        HIDDEN_IMPLEMENTATIONS.iter().copied().collect()
    }
}

impl<'a> FromIterator<&'a str> for HiddenImplementations {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(ImplementationName::from).collect())
    }
}

/// Metadata extracted from one successfully constructed implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImplementationDescriptor {
    pub implementation_name: ImplementationName,
    pub manufacturer: String,
    pub model_name: String,
    pub capabilities: BTreeSet<CapabilityName>,
}

/// An implementation that was skipped because it failed to construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanFailure {
    pub implementation_name: ImplementationName,
    pub error: InstantiationError,
}

#[derive(Clone, Debug, Default)]
pub struct ScanReport {
    pub descriptors: Vec<ImplementationDescriptor>,
    pub failures: Vec<ScanFailure>,
}

/// Construct every non-hidden implementation in `registry`.
///
/// Hidden names are never instantiated. A failed construction is logged at
/// `warn` and recorded in `failures`; it never aborts the scan.
pub fn scan(
    registry: &dyn RobotRegistry,
    config: &InstantiationConfig,
    hidden: &HiddenImplementations,
) -> ScanReport {
    let mut report = ScanReport::default();

    for name in registry.implementation_names() {
        if hidden.contains(&name) {
            debug!(implementation = %name, "skipping hidden implementation");
            continue;
        }

        match registry.instantiate(&name, config) {
            Ok(robot) => report.descriptors.push(ImplementationDescriptor {
                implementation_name: name,
                manufacturer: robot.manufacturer().to_string(),
                model_name: robot.model_name().to_string(),
                capabilities: robot.capabilities().clone(),
            }),
            Err(error) => {
                warn!(implementation = %name, %error, "failed to instantiate robot implementation");
                report.failures.push(ScanFailure {
                    implementation_name: name,
                    error,
                });
            }
        }
    }

    debug!(
        constructed = report.descriptors.len(),
        failed = report.failures.len(),
        "registry scan finished"
    );
    report
}
