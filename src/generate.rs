//! One pass of the documentation pipeline: scan, fold, render.

use crate::config::GeneratorConfig;
use crate::hierarchy::{self, Hierarchy};
use crate::registry::{ManifestRegistry, RobotRegistry};
use crate::render::render_document;
use crate::scan::{ScanFailure, scan};
use crate::write_document;
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Clone, Debug)]
pub struct GeneratedOverview {
    pub markdown: String,
    pub hierarchy: Hierarchy,
    pub failures: Vec<ScanFailure>,
}

/// Run the three stages against `registry`.
pub fn generate_overview(
    registry: &dyn RobotRegistry,
    config: &GeneratorConfig,
    generated_at: DateTime<Utc>,
) -> GeneratedOverview {
    let report = scan(registry, &config.instantiation, &config.hidden);
    let hierarchy = hierarchy::build(&report.descriptors);
    let markdown = render_document(&config.header, &hierarchy, generated_at);

    GeneratedOverview {
        markdown,
        hierarchy,
        failures: report.failures,
    }
}

/// Load the manifest, generate the page, and write it to `output_path`.
pub fn run_generator(config: &GeneratorConfig, generated_at: DateTime<Utc>) -> Result<GeneratedOverview> {
    let registry = ManifestRegistry::load(&config.registry_path)?;
    info!(
        implementations = registry.len(),
        registry = %config.registry_path.display(),
        "loaded robot registry"
    );

    let overview = generate_overview(&registry, config, generated_at);
    write_document(&config.output_path, &overview.markdown)?;
    info!(
        manufacturers = overview.hierarchy.manufacturers.len(),
        models = overview.hierarchy.model_count(),
        capabilities = overview.hierarchy.matrix.len(),
        skipped = overview.failures.len(),
        output = %config.output_path.display(),
        "wrote implementation overview"
    );
    Ok(overview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{
        CapabilityName, ImplementationEntry, ImplementationName, REGISTRY_SCHEMA_VERSION,
        RegistryManifest,
    };
    use crate::scan::HiddenImplementations;
    use chrono::TimeZone;
    use std::path::Path;

    fn registry() -> ManifestRegistry {
        let entry = |name: &str, manufacturer: &str, model: &str, caps: &[&str]| ImplementationEntry {
            name: ImplementationName::from(name),
            manufacturer: manufacturer.to_string(),
            model_name: model.to_string(),
            capabilities: caps.iter().map(|c| CapabilityName::from(*c)).collect(),
            embedded_only: false,
        };
        ManifestRegistry::from_manifest(RegistryManifest {
            schema_version: REGISTRY_SCHEMA_VERSION.to_string(),
            implementations: vec![
                entry("AcmeA", "Acme", "X1", &["Battery", "Map"]),
                entry("AcmeB", "Acme", "X2", &["Battery"]),
                entry("AcmeHidden", "Acme", "Secret9", &["Teleport"]),
            ],
        })
        .unwrap()
    }

    #[test]
    fn generate_overview_excludes_hidden_everywhere() {
        let config = GeneratorConfig::for_repo(Path::new("/unused"))
            .with_hidden(["AcmeHidden"].into_iter().collect());
        let generated_at = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();

        let overview = generate_overview(&registry(), &config, generated_at);

        assert!(!overview.markdown.contains("Secret9"));
        assert!(!overview.markdown.contains("Teleport"));
        assert!(overview.markdown.contains("    1. [X1](#acme_x1)\n    2. [X2](#acme_x2)"));
        assert!(overview.failures.is_empty());
    }

    #[test]
    fn generate_overview_is_stable_apart_from_timestamp() {
        let config = GeneratorConfig::for_repo(Path::new("/unused"))
            .with_hidden(HiddenImplementations::none());
        let first = generate_overview(
            &registry(),
            &config,
            Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap(),
        );
        let second = generate_overview(
            &registry(),
            &config,
            Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap(),
        );

        let strip = |page: &str| {
            page.lines()
                .filter(|line| !line.starts_with("Autogeneration timestamp:"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_ne!(first.markdown, second.markdown);
        assert_eq!(strip(&first.markdown), strip(&second.markdown));
    }
}
