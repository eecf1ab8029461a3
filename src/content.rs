//! Loading and validating portfolio content.
//!
//! Content is TOML. The default content is embedded in the binary from
//! `assets/portfolio.toml`; a user file can replace it entirely.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_embed::Embed;
use tracing::{debug, info};

use crate::models::{PortfolioContent, SectionId};

/// Files embedded from the `assets/` directory at compile time.
#[derive(Embed)]
#[folder = "assets/"]
pub struct Assets;

/// Name of the embedded default content file.
pub const DEFAULT_CONTENT_FILE: &str = "portfolio.toml";

/// Name of the embedded stylesheet used by the HTML export.
pub const STYLESHEET_FILE: &str = "page.css";

/// Name of the embedded script that drives the exported page controls.
pub const SCRIPT_FILE: &str = "page.js";

/// Reads an embedded asset as UTF-8 text.
pub fn embedded_text(name: &str) -> Result<String> {
    let file = Assets::get(name).with_context(|| format!("Embedded asset missing: {name}"))?;
    String::from_utf8(file.data.into_owned())
        .with_context(|| format!("Embedded asset is not valid UTF-8: {name}"))
}

/// Parses content from a TOML string and validates it.
pub fn parse_content(source: &str) -> Result<PortfolioContent> {
    let content: PortfolioContent =
        toml::from_str(source).context("Failed to parse portfolio content")?;
    validate(&content)?;
    Ok(content)
}

/// Loads the content embedded in the binary.
pub fn load_default() -> Result<PortfolioContent> {
    let source = embedded_text(DEFAULT_CONTENT_FILE)?;
    parse_content(&source).context("Embedded default content is invalid")
}

/// Loads content from a TOML file on disk.
pub fn load_file(path: &Path) -> Result<PortfolioContent> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    let content = parse_content(&source)
        .with_context(|| format!("Invalid content file: {}", path.display()))?;
    info!(path = %path.display(), "Loaded portfolio content");
    Ok(content)
}

/// Loads content from `path` when given, otherwise the embedded default.
pub fn load(path: Option<&Path>) -> Result<PortfolioContent> {
    match path {
        Some(path) => load_file(path),
        None => {
            debug!("Using embedded default content");
            load_default()
        }
    }
}

/// Checks the content beyond what deserialization enforces.
///
/// Slide decks are non-empty by construction. This rejects blank titles and
/// contact details that could not produce a working link.
pub fn validate(content: &PortfolioContent) -> Result<()> {
    for id in SectionId::ALL {
        let section = content.section(id);
        if section.title.trim().is_empty() {
            anyhow::bail!("Section '{id}' has an empty title");
        }
        for (index, slide) in section.slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                anyhow::bail!("Slide {} in section '{id}' has an empty title", index + 1);
            }
            if let Some(link) = &slide.link {
                if link.url.trim().is_empty() || link.url == "#" {
                    anyhow::bail!(
                        "Slide '{}' in section '{id}' has a link without a target",
                        slide.title
                    );
                }
            }
        }
    }

    let contact = &content.contact;
    if !contact.profile_url.starts_with("http://") && !contact.profile_url.starts_with("https://")
    {
        anyhow::bail!(
            "Contact profile URL must be an http(s) URL: {}",
            contact.profile_url
        );
    }
    if !contact.email.contains('@') {
        anyhow::bail!("Contact email is not an address: {}", contact.email);
    }

    Ok(())
}

/// One-line-per-section summary used by `folio check`.
#[must_use]
pub fn summary(content: &PortfolioContent) -> Vec<String> {
    let mut lines: Vec<String> = SectionId::ALL
        .into_iter()
        .map(|id| {
            let section = content.section(id);
            let links = section.slides.iter().filter(|s| s.link.is_some()).count();
            format!(
                "#{:<12} {:<24} {} slide(s), {} link(s)",
                id.anchor(),
                section.title,
                section.slides.len(),
                links
            )
        })
        .collect();
    let extra = content.extra_anchors();
    if !extra.is_empty() {
        lines.push(format!("Extra anchors: {}", extra.join(", ")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_content_loads() {
        let content = load_default().unwrap();
        assert_eq!(content.work.title, "My Work");
        assert_eq!(content.work.slides.len(), 3);
        assert_eq!(content.education.slides.len(), 3);
        assert_eq!(content.cool_things.slides.len(), 3);
        assert_eq!(content.work.slides.first().title, "Entrepreneurship");
        assert!(content.education.slides.iter().all(|s| s.link.is_none()));
    }

    #[test]
    fn test_default_extra_anchors() {
        let content = load_default().unwrap();
        assert_eq!(content.extra_anchors(), vec!["projects", "military", "led"]);
    }

    #[test]
    fn test_empty_section_rejected() {
        let source = embedded_text(DEFAULT_CONTENT_FILE).unwrap();
        let broken = source.replace(
            "[education]\ntitle = \"Education\"",
            "[education]\ntitle = \"Education\"\nslides = []",
        );
        // Array-of-tables entries later in the file conflict with the inline empty
        // array, either way the file must not load.
        assert!(parse_content(&broken).is_err());
    }

    #[test]
    fn test_bad_contact_rejected() {
        let mut content = load_default().unwrap();
        content.contact.email = "nobody".to_string();
        assert!(validate(&content).is_err());

        let mut content = load_default().unwrap();
        content.contact.profile_url = "linkedin".to_string();
        assert!(validate(&content).is_err());
    }

    #[test]
    fn test_load_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_file(&temp_dir.path().join("missing.toml"));
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Failed to read content file"));
    }

    #[test]
    fn test_load_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("portfolio.toml");
        let mut content = load_default().unwrap();
        content.brand = "Someone".to_string();
        fs::write(&path, toml::to_string_pretty(&content).unwrap()).unwrap();

        let loaded = load(Some(&path)).unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn test_summary_lists_sections() {
        let content = load_default().unwrap();
        let lines = summary(&content);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("#work"));
        assert!(lines[0].contains("3 link(s)"));
        assert!(lines[3].contains("projects"));
    }
}
