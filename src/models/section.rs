//! Identifiers for the carousel sections of the page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three carousel sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// "My Work"
    Work,
    /// "Education"
    Education,
    /// "Cool Things About Me"
    CoolThings,
}

impl SectionId {
    /// All sections in the order they appear on the page.
    pub const ALL: [Self; 3] = [Self::Work, Self::Education, Self::CoolThings];

    /// Anchor name used for in-page navigation (`#work`, ...).
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
            Self::CoolThings => "cool-things",
        }
    }

    /// Label used by the navigation menu.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Education => "Education",
            Self::CoolThings => "Cool Things",
        }
    }

    /// Position of the section on the page.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Work => 0,
            Self::Education => 1,
            Self::CoolThings => 2,
        }
    }

    /// Section below this one, wrapping to the top.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Section above this one, wrapping to the bottom.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Looks a section up by its anchor name.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_roundtrip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("projects"), None);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(SectionId::Work.next(), SectionId::Education);
        assert_eq!(SectionId::CoolThings.next(), SectionId::Work);
        assert_eq!(SectionId::Work.previous(), SectionId::CoolThings);
    }
}
