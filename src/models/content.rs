//! Static page content supplied at construction time.

use serde::{Deserialize, Serialize};

use super::{SectionId, Slide, SlideDeck};

/// Opening section of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// First heading line (e.g., "Hi, my")
    pub greeting: String,
    /// Second heading line, followed by the accent dot
    pub name: String,
    /// Paragraph under the heading
    pub tagline: String,
}

/// A titled carousel section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    /// Section heading
    pub title: String,
    /// Slides shown by the section's carousel
    pub slides: SlideDeck,
}

/// Closing "let's build something" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Section heading
    pub heading: String,
    /// Paragraph under the heading
    pub body: String,
    /// Label of the button that opens the contact modal
    pub button_label: String,
}

/// The two outbound actions offered by the contact modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    /// Modal heading
    pub heading: String,
    /// Label of the social profile link
    pub profile_label: String,
    /// Social profile URL, opened in a new browsing context
    pub profile_url: String,
    /// Label of the email action
    pub email_label: String,
    /// Email address used for the `mailto:` action
    pub email: String,
}

impl ContactLinks {
    /// The `mailto:` URL for the email action.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Brand text shown next to the header mark
    pub brand: String,
    /// Footer line
    pub footer: String,
    /// Opening section
    pub hero: Hero,
    /// Work carousel
    pub work: SectionContent,
    /// Education carousel
    pub education: SectionContent,
    /// Cool things carousel
    pub cool_things: SectionContent,
    /// Closing call to action
    pub call_to_action: CallToAction,
    /// Contact modal content
    pub contact: ContactLinks,
}

impl PortfolioContent {
    /// Returns the content of a carousel section.
    #[must_use]
    pub const fn section(&self, id: SectionId) -> &SectionContent {
        match id {
            SectionId::Work => &self.work,
            SectionId::Education => &self.education,
            SectionId::CoolThings => &self.cool_things,
        }
    }

    /// All slides across the three sections, tagged with their section.
    pub fn all_slides(&self) -> impl Iterator<Item = (SectionId, &Slide)> {
        SectionId::ALL
            .into_iter()
            .flat_map(move |id| self.section(id).slides.iter().map(move |slide| (id, slide)))
    }

    /// In-page anchors referenced by slide links that are not section anchors.
    ///
    /// Returned in first-reference order without duplicates.
    #[must_use]
    pub fn extra_anchors(&self) -> Vec<String> {
        let mut anchors: Vec<String> = Vec::new();
        for (_, slide) in self.all_slides() {
            let Some(anchor) = slide.link.as_ref().and_then(|link| link.anchor()) else {
                continue;
            };
            if SectionId::from_anchor(anchor).is_some() {
                continue;
            }
            if !anchors.iter().any(|existing| existing == anchor) {
                anchors.push(anchor.to_string());
            }
        }
        anchors
    }
}
