//! Slides and the non-empty slide decks a carousel cycles through.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Navigational link attached to a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideLink {
    /// Label shown on the link button (e.g., "View Projects")
    pub text: String,
    /// Target URL; `#name` targets an anchor inside the page
    pub url: String,
}

impl SlideLink {
    /// Creates a new link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Returns the anchor name when the link points inside the page.
    ///
    /// `"#projects"` yields `Some("projects")`, external URLs yield `None`.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.url
            .strip_prefix('#')
            .filter(|anchor| !anchor.is_empty())
    }
}

/// One static content item shown by a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide heading
    pub title: String,
    /// Body text
    pub description: String,
    /// Optional call to action, rendered only when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<SlideLink>,
}

impl Slide {
    /// Creates a slide without a link.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: None,
        }
    }

    /// Attaches a link to the slide.
    pub fn with_link(mut self, text: impl Into<String>, url: impl Into<String>) -> Self {
        self.link = Some(SlideLink::new(text, url));
        self
    }
}

/// Ordered, non-empty, immutable sequence of slides.
///
/// The only way to obtain a deck is through [`SlideDeck::new`] (or
/// deserialization, which goes through it), so every carousel built from a
/// deck has at least one slide to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Slide>", into = "Vec<Slide>")]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Builds a deck from the given slides.
    ///
    /// # Errors
    ///
    /// Returns an error if `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            anyhow::bail!("A slide deck needs at least one slide");
        }
        Ok(Self { slides })
    }

    /// Number of slides (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the slide at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Returns the first slide.
    #[must_use]
    pub fn first(&self) -> &Slide {
        &self.slides[0]
    }

    /// Iterates over the slides in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}

impl TryFrom<Vec<Slide>> for SlideDeck {
    type Error = anyhow::Error;

    fn try_from(slides: Vec<Slide>) -> Result<Self> {
        Self::new(slides)
    }
}

impl From<SlideDeck> for Vec<Slide> {
    fn from(deck: SlideDeck) -> Self {
        deck.slides
    }
}

impl<'a> IntoIterator for &'a SlideDeck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_rejects_empty() {
        let result = SlideDeck::new(Vec::new());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least one slide"));
    }

    #[test]
    fn test_deck_preserves_order() {
        let deck = SlideDeck::new(vec![Slide::new("A", "a"), Slide::new("B", "b")]).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.first().title, "A");
        assert_eq!(deck.get(1).unwrap().title, "B");
        assert!(deck.get(2).is_none());
        let titles: Vec<_> = deck.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_link_anchor() {
        assert_eq!(SlideLink::new("x", "#projects").anchor(), Some("projects"));
        assert_eq!(SlideLink::new("x", "#").anchor(), None);
        assert_eq!(SlideLink::new("x", "https://example.com").anchor(), None);
    }

    #[test]
    fn test_deck_deserialize_empty_fails() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            slides: SlideDeck,
        }

        let result: Result<Wrapper, _> = toml::from_str("slides = []");
        assert!(result.is_err());
    }
}
