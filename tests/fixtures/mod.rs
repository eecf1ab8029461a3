//! Shared test fixtures for page and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use folio::config::{Config, ThemeMode};
use folio::content;
use folio::models::{
    CallToAction, ContactLinks, Hero, PortfolioContent, SectionContent, Slide, SlideDeck,
};
use folio::page::PortfolioPage;
use folio::tui::AppState;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builds a section from `(title, link)` pairs.
pub fn section(title: &str, slides: &[(&str, Option<(&str, &str)>)]) -> SectionContent {
    let slides = slides
        .iter()
        .map(|(slide_title, link)| {
            let slide = Slide::new(*slide_title, format!("About {slide_title}"));
            match link {
                Some((text, url)) => slide.with_link(*text, *url),
                None => slide,
            }
        })
        .collect();
    SectionContent {
        title: title.to_string(),
        slides: SlideDeck::new(slides).expect("fixture sections are non-empty"),
    }
}

/// Small deterministic content: 3 work slides, 2 education slides, 1 cool thing.
pub fn test_content() -> PortfolioContent {
    PortfolioContent {
        brand: "Tester".to_string(),
        footer: "Footer text".to_string(),
        hero: Hero {
            greeting: "Hello,".to_string(),
            name: "I test things".to_string(),
            tagline: "Tagline <with> markup & ampersand".to_string(),
        },
        work: section(
            "Work Stuff",
            &[
                ("Alpha", Some(("Alpha link", "#alpha"))),
                ("Beta", Some(("Go to education", "#education"))),
                ("Gamma", Some(("External", "https://example.com/gamma"))),
            ],
        ),
        education: section("Schooling", &[("School A", None), ("School B", None)]),
        cool_things: section("Fun", &[("Only One", None)]),
        call_to_action: CallToAction {
            heading: "Let's talk".to_string(),
            body: "Reach out any time.".to_string(),
            button_label: "Contact me".to_string(),
        },
        contact: ContactLinks {
            heading: "Say hi".to_string(),
            profile_label: "Profile".to_string(),
            profile_url: "https://example.com/profile".to_string(),
            email_label: "Email".to_string(),
            email: "tester@example.com".to_string(),
        },
    }
}

/// Page built from [`test_content`].
pub fn test_page() -> PortfolioPage {
    PortfolioPage::new(test_content()).expect("fixture page builds")
}

/// Page built from the embedded default content.
pub fn default_page() -> PortfolioPage {
    PortfolioPage::new(content::load_default().expect("default content loads"))
        .expect("default page builds")
}

/// TUI state with help hidden and a fixed theme.
pub fn test_app_state(page: PortfolioPage) -> AppState {
    let mut config = Config::new();
    config.ui.show_help_on_startup = false;
    config.ui.theme_mode = ThemeMode::Dark;
    AppState::new(page, config)
}

/// Writes [`test_content`] to a temp TOML file.
///
/// Returns the path and the TempDir guard (keep it alive).
pub fn create_temp_content_file() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("portfolio.toml");
    let source = toml::to_string_pretty(&test_content()).expect("fixture serializes");
    fs::write(&path, source).expect("Failed to write content file");
    (path, temp_dir)
}
