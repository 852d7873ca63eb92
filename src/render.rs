//! Markdown rendering of the implementation overview page.
//!
//! Output is a pure function of the header, the hierarchy, and the injected
//! generation timestamp; running twice on the same registry differs only in
//! the final timestamp line.

use crate::hierarchy::{Hierarchy, ManufacturerGroup, MatrixColumn, SupportMatrix};
use crate::registry::CapabilityName;
use chrono::{DateTime, SecondsFormat, Utc};

pub const CAPABILITY_DOCS_URL: &str =
    "https://valetudo.cloud/pages/usage/capabilities-overview.html";

const OVERVIEW_ANCHOR: &str = "Overview";
const SUPPORTED: &str = "<span style=\"color:green;\">Yes</span>";
const UNSUPPORTED: &str = "<span style=\"color:red;\">No</span>";

pub const DEFAULT_PAGE_HEADER: &str = r#"---
title: Implementation Overview
category: Usage
order: 10
---

# Implementation Overview

This page features an autogenerated overview of all ValetudoRobot implementations including their supported capabilities.<br/>
To find out what those do, check out the [capabilities overview](https://valetudo.cloud/pages/usage/capabilities-overview.html) section of the docs.

You might want to take a look at the [Buying supported robots](https://valetudo.cloud/pages/general/buying-supported-robots.html) and
[Supported robots](https://valetudo.cloud/pages/general/supported-robots.html) page instead.

This is just the autogenerated overview. Keep in mind that rooting instructions will differ for each of these **or might not even be available at all**.<br/>
Just because the code would - in theory - support a Robot doesn't necessarily mean that you can simply buy it and put Valetudo on it.<br/>

Again:<br/>
This is just an autogenerated overview based on the codebase at the time of generation.<br/>
Don't take this as "Everything listed here will be 100% available and work all the time".<br/>

"#;

/// Markdown link to the capability's entry in the capabilities overview.
pub fn capability_link(capability: &CapabilityName) -> String {
    format!("[{capability}]({CAPABILITY_DOCS_URL}#{capability})")
}

/// Numbered table of contents. Entry 1 is always the overview matrix.
pub fn render_toc(manufacturers: &[ManufacturerGroup]) -> String {
    let mut lines = vec![
        "## Table of Contents".to_string(),
        format!("1. [Overview](#{OVERVIEW_ANCHOR})"),
    ];
    for (i, manufacturer) in manufacturers.iter().enumerate() {
        lines.push(format!(
            "{}. [{}](#{})",
            i + 2,
            manufacturer.name,
            manufacturer.anchor
        ));
        for (j, model) in manufacturer.models.iter().enumerate() {
            lines.push(format!(
                "    {}. [{}](#{})",
                j + 1,
                model.model_name,
                model.anchor
            ));
        }
    }
    lines.join("\n")
}

/// Capability × model table; one row per capability, one column per model.
pub fn render_matrix(columns: &[MatrixColumn], matrix: &SupportMatrix) -> String {
    let mut out = format!("## Overview<a id='{OVERVIEW_ANCHOR}'></a>\n\nCapability | ");
    let header = columns
        .iter()
        .map(|column| format!("<a href='#{}'>{}</a>", column.anchor, column.model_name))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&header);
    out.push_str("\n----");
    for _ in columns {
        out.push_str(" | ----");
    }
    out.push('\n');

    for capability in matrix.capabilities() {
        out.push_str(&capability_link(capability));
        for column in columns {
            out.push_str(" | ");
            if matrix.supports(capability, &column.model_name) {
                out.push_str(SUPPORTED);
            } else {
                out.push_str(UNSUPPORTED);
            }
        }
        out.push('\n');
    }
    out
}

/// Heading for the manufacturer followed by one subsection per model.
pub fn render_manufacturer_section(manufacturer: &ManufacturerGroup) -> String {
    let mut lines = vec![
        format!("## {}<a id=\"{}\"></a>", manufacturer.name, manufacturer.anchor),
        String::new(),
    ];
    for model in &manufacturer.models {
        lines.push(format!("### {}<a id=\"{}\"></a>", model.model_name, model.anchor));
        lines.push(String::new());
        lines.push("#### This model supports the following capabilities:".to_string());
        lines.extend(
            model
                .capabilities
                .iter()
                .map(|capability| format!("  - {}", capability_link(capability))),
        );
        lines.push(String::new());
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Assemble the full page: header, ToC, matrix, manufacturer sections, footer.
pub fn render_document(header: &str, hierarchy: &Hierarchy, generated_at: DateTime<Utc>) -> String {
    let sections = hierarchy
        .manufacturers
        .iter()
        .map(render_manufacturer_section)
        .collect::<Vec<_>>()
        .join("\n");

    let page = [
        header.to_string(),
        render_toc(&hierarchy.manufacturers),
        "\n<br/>\n".to_string(),
        render_matrix(&hierarchy.columns, &hierarchy.matrix),
        "\n<br/>\n".to_string(),
        sections,
        "<br/><br/><br/><br/><br/>".to_string(),
        "This page has been autogenerated.<br/>".to_string(),
        format!(
            "Autogeneration timestamp: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
    ];
    let mut out = page.join("\n");
    out.push('\n');
    out
}
