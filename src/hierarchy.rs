//! Folding scanned descriptors into the manufacturer → model → capability
//! hierarchy plus the capability → model support matrix.
//!
//! All maps are `BTreeMap`s so every traversal the renderer performs is
//! lexicographic without extra sorting at render time.

use crate::registry::{CapabilityName, ImplementationName};
use crate::scan::ImplementationDescriptor;
use std::collections::BTreeMap;

/// Manufacturer of the backend's own base and mock implementations. These are
/// not real hardware and never show up on the page.
pub const EXCLUDED_MANUFACTURER: &str = "Valetudo";

/// Reduce `value` to its ASCII letters and digits, lowercased.
///
/// Distinct inputs can collapse to the same anchor (`"Roborock"` and
/// `"Robo-Rock"`); collisions are not detected.
pub fn anchor(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Anchor of a model section: `anchor(manufacturer)_anchor(model)`.
pub fn model_anchor(manufacturer: &str, model_name: &str) -> String {
    format!("{}_{}", anchor(manufacturer), anchor(model_name))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelEntry {
    pub model_name: String,
    pub implementation_name: ImplementationName,
    pub anchor: String,
    /// Sorted lexicographically.
    pub capabilities: Vec<CapabilityName>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManufacturerGroup {
    pub name: String,
    pub anchor: String,
    /// Ordered by model name, then implementation name.
    pub models: Vec<ModelEntry>,
}

/// Column of the support matrix: one per model entry, in traversal order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixColumn {
    pub model_name: String,
    pub anchor: String,
}

/// Capability → model names that declare it.
///
/// Keys are model *names*, so two implementations sharing a model name are
/// indistinguishable here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportMatrix(BTreeMap<CapabilityName, Vec<String>>);

impl SupportMatrix {
    fn record(&mut self, capability: &CapabilityName, model_name: &str) {
        self.0
            .entry(capability.clone())
            .or_default()
            .push(model_name.to_string());
    }

    /// Whether `model_name` declares `capability`.
    pub fn supports(&self, capability: &CapabilityName, model_name: &str) -> bool {
        self.0
            .get(capability)
            .is_some_and(|models| models.iter().any(|m| m == model_name))
    }

    pub fn models_for(&self, capability: &CapabilityName) -> &[String] {
        self.0.get(capability).map(Vec::as_slice).unwrap_or_default()
    }

    /// Capabilities in lexicographic order.
    pub fn capabilities(&self) -> impl Iterator<Item = &CapabilityName> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hierarchy {
    pub manufacturers: Vec<ManufacturerGroup>,
    pub matrix: SupportMatrix,
    pub columns: Vec<MatrixColumn>,
}

impl Hierarchy {
    pub fn model_count(&self) -> usize {
        self.columns.len()
    }
}

/// Fold descriptors into the render-ready hierarchy.
///
/// Descriptors are grouped by manufacturer and keyed by implementation name,
/// so entries sharing a model name are all kept. The matrix and the column
/// list are filled during a manufacturer-then-model lexicographic traversal.
pub fn build(descriptors: &[ImplementationDescriptor]) -> Hierarchy {
    let mut grouped: BTreeMap<&str, BTreeMap<&ImplementationName, &ImplementationDescriptor>> =
        BTreeMap::new();
    for descriptor in descriptors {
        if descriptor.manufacturer == EXCLUDED_MANUFACTURER {
            continue;
        }
        grouped
            .entry(descriptor.manufacturer.as_str())
            .or_default()
            .insert(&descriptor.implementation_name, descriptor);
    }

    let mut hierarchy = Hierarchy::default();
    for (manufacturer, implementations) in grouped {
        let mut ordered: Vec<&ImplementationDescriptor> = implementations.into_values().collect();
        ordered.sort_by(|a, b| {
            a.model_name
                .cmp(&b.model_name)
                .then_with(|| a.implementation_name.cmp(&b.implementation_name))
        });

        let mut models = Vec::with_capacity(ordered.len());
        for descriptor in ordered {
            let section_anchor = model_anchor(manufacturer, &descriptor.model_name);
            for capability in &descriptor.capabilities {
                hierarchy.matrix.record(capability, &descriptor.model_name);
            }
            hierarchy.columns.push(MatrixColumn {
                model_name: descriptor.model_name.clone(),
                anchor: section_anchor.clone(),
            });
            models.push(ModelEntry {
                model_name: descriptor.model_name.clone(),
                implementation_name: descriptor.implementation_name.clone(),
                anchor: section_anchor,
                capabilities: descriptor.capabilities.iter().cloned().collect(),
            });
        }

        hierarchy.manufacturers.push(ManufacturerGroup {
            name: manufacturer.to_string(),
            anchor: anchor(manufacturer),
            models,
        });
    }
    hierarchy
}
