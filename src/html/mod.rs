//! Static HTML rendering of the page.
//!
//! Rendering is a pure function of [`PortfolioPage`]: the same state always
//! yields the same document. The menu and the contact modal are always
//! emitted and carry `hidden` while closed, exactly one contact modal exists
//! per document, and every section and in-page link target carries an `id`
//! so anchor navigation resolves. Every slide is emitted; only the current
//! one is visible. The inlined script toggles overlays and slides in the
//! browser.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::branding::APP_BINARY_NAME;
use crate::content::{embedded_text, SCRIPT_FILE, STYLESHEET_FILE};
use crate::models::SectionId;
use crate::page::{MenuItem, PortfolioPage};

/// Escapes text for use in HTML element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the complete document, stylesheet and script inlined.
pub fn render_document(page: &PortfolioPage) -> Result<String> {
    let css = embedded_text(STYLESHEET_FILE)?;
    let script = embedded_text(SCRIPT_FILE)?;
    let content = page.content();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<meta name=\"generator\" content=\"{APP_BINARY_NAME}\">");
    let _ = writeln!(html, "<title>{}</title>", escape(&content.brand));
    let _ = writeln!(html, "<style>\n{css}</style>");
    html.push_str("</head>\n<body>\n");
    html.push_str(&render_page(page));
    let _ = writeln!(html, "<script>\n{script}</script>");
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

/// Renders the body markup of the page for its current state.
#[must_use]
pub fn render_page(page: &PortfolioPage) -> String {
    let mut html = String::new();
    render_header(&mut html, page);
    render_menu(&mut html, page.is_menu_open());
    html.push_str("<main>\n");
    render_hero(&mut html, page);
    for id in SectionId::ALL {
        render_section(&mut html, page, id);
    }
    render_call_to_action(&mut html, page);
    render_extra_anchors(&mut html, page);
    html.push_str("</main>\n");
    let _ = writeln!(html, "<footer>{}</footer>", escape(&page.content().footer));
    render_contact(&mut html, page);
    html
}

fn render_header(html: &mut String, page: &PortfolioPage) {
    html.push_str("<header>\n<div class=\"brand\">\n");
    html.push_str(
        "<svg class=\"mark\" viewBox=\"0 0 24 24\" width=\"32\" height=\"32\" fill=\"#0f3460\" \
         aria-hidden=\"true\"><path d=\"M12 2L2 19.5h20L12 2zm0 4l6.5 11h-13L12 6z\"/></svg>\n",
    );
    let _ = writeln!(
        html,
        "<button class=\"menu-toggle\" aria-expanded=\"{}\">MENU</button>",
        page.is_menu_open()
    );
    html.push_str("</div>\n");
    html.push_str("<button class=\"button\" data-action=\"contact\">GET IN TOUCH</button>\n");
    html.push_str("</header>\n");
}

fn render_menu(html: &mut String, open: bool) {
    let _ = writeln!(html, "<nav class=\"menu\"{}>", hidden_unless(open));
    html.push_str("<button class=\"close\" aria-label=\"Close menu\">&times;</button>\n");
    for item in MenuItem::ALL {
        match item {
            MenuItem::Section(id) => {
                let _ = writeln!(html, "<a href=\"#{}\">{}</a>", id.anchor(), item.label());
            }
            MenuItem::Contact => {
                let _ = writeln!(
                    html,
                    "<button class=\"button\" data-action=\"contact-from-menu\">{}</button>",
                    item.label()
                );
            }
        }
    }
    html.push_str("</nav>\n");
}

fn render_hero(html: &mut String, page: &PortfolioPage) {
    let hero = &page.content().hero;
    html.push_str("<section class=\"hero\">\n");
    let _ = writeln!(
        html,
        "<h1>{}<br>{}<span class=\"dot\">.</span></h1>",
        escape(&hero.greeting),
        escape(&hero.name)
    );
    let _ = writeln!(html, "<p>{}</p>", escape(&hero.tagline));
    html.push_str("</section>\n");
}

const fn hidden_unless(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

fn render_section(html: &mut String, page: &PortfolioPage, id: SectionId) {
    let section = page.section(id);
    let carousel = page.carousel(id);

    let _ = writeln!(html, "<section id=\"{}\">", id.anchor());
    let _ = writeln!(
        html,
        "<h2>{}<span class=\"dot\">.</span></h2>",
        escape(&section.title)
    );
    let _ = writeln!(html, "<div class=\"carousel\" data-carousel=\"{}\">", id.anchor());
    for (index, slide) in section.slides.iter().enumerate() {
        let _ = writeln!(
            html,
            "<div class=\"slide\"{}>",
            hidden_unless(carousel.is_current(index))
        );
        let _ = writeln!(html, "<h3>{}</h3>", escape(&slide.title));
        let _ = writeln!(html, "<p>{}</p>", escape(&slide.description));
        if let Some(link) = &slide.link {
            let _ = writeln!(
                html,
                "<a class=\"button\" href=\"{}\">{}</a>",
                escape(&link.url),
                escape(&link.text)
            );
        }
        html.push_str("</div>\n");
    }
    html.push_str("<button class=\"prev\" aria-label=\"Previous slide\">&lsaquo;</button>\n");
    html.push_str("<button class=\"next\" aria-label=\"Next slide\">&rsaquo;</button>\n");
    html.push_str("<div class=\"indicators\">\n");
    for index in 0..carousel.len() {
        let _ = writeln!(
            html,
            "<button class=\"indicator\" aria-label=\"Go to slide {}\" aria-current=\"{}\"></button>",
            index + 1,
            carousel.is_current(index)
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");
}

fn render_call_to_action(html: &mut String, page: &PortfolioPage) {
    let cta = &page.content().call_to_action;
    html.push_str("<section class=\"call-to-action\">\n");
    let _ = writeln!(
        html,
        "<h2>{}<span class=\"dot\">.</span></h2>",
        escape(&cta.heading)
    );
    let _ = writeln!(html, "<p>{}</p>", escape(&cta.body));
    let _ = writeln!(
        html,
        "<button class=\"button\" data-action=\"contact\">{}</button>",
        escape(&cta.button_label)
    );
    html.push_str("</section>\n");
}

fn render_extra_anchors(html: &mut String, page: &PortfolioPage) {
    for anchor in page.content().extra_anchors() {
        let _ = writeln!(html, "<div id=\"{}\"></div>", escape(&anchor));
    }
}

fn render_contact(html: &mut String, page: &PortfolioPage) {
    let contact = &page.content().contact;
    let _ = writeln!(
        html,
        "<div class=\"modal\" role=\"dialog\" aria-modal=\"true\"{}>",
        hidden_unless(page.is_contact_open())
    );
    html.push_str("<div class=\"modal-card\">\n");
    html.push_str("<button class=\"close\" aria-label=\"Close\">&times;</button>\n");
    let _ = writeln!(html, "<h2>{}</h2>", escape(&contact.heading));
    let _ = writeln!(
        html,
        "<a class=\"profile\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(&contact.profile_url),
        escape(&contact.profile_label)
    );
    let _ = writeln!(
        html,
        "<a class=\"email\" href=\"{}\">{}</a>",
        escape(&contact.mailto()),
        escape(&contact.email_label)
    );
    html.push_str("</div>\n</div>\n");
}

/// Writes the rendered document to `path`.
///
/// Uses temp file + rename so a failed export never leaves a truncated file.
pub fn export(page: &PortfolioPage, path: &Path) -> Result<()> {
    let document = render_document(page)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("html.tmp");
    fs::write(&temp_path, &document)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    info!(path = %path.display(), bytes = document.len(), "Exported page");
    Ok(())
}
