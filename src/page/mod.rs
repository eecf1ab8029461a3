//! Page state machine.
//!
//! [`PortfolioPage`] owns the content, the menu and contact flags, and one
//! [`Carousel`] per section. Every mutation goes through [`PortfolioPage::apply`],
//! so each user action is exactly one state update and front-ends never
//! observe half-applied transitions (e.g., menu and contact both visible).

pub mod carousel;

pub use carousel::Carousel;

use anyhow::Result;
use tracing::debug;

use crate::models::{PortfolioContent, SectionContent, SectionId, Slide};

/// A user action on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Header menu button: flip the navigation overlay
    ToggleMenu,
    /// Show the navigation overlay
    OpenMenu,
    /// Hide the navigation overlay
    CloseMenu,
    /// Header "get in touch" or call-to-action button
    OpenContact,
    /// Contact modal close control
    CloseContact,
    /// Navigation link to a section; also closes the menu
    Navigate(SectionId),
    /// "Contact" entry inside the menu: closes the menu and opens the modal together
    ContactFromMenu,
    /// Carousel "next" control
    NextSlide(SectionId),
    /// Carousel "previous" control
    PreviousSlide(SectionId),
    /// Carousel dot indicator
    GoToSlide(SectionId, usize),
    /// Move keyboard focus to a section without scrolling or closing anything
    Focus(SectionId),
}

/// What the front-end should do after an action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Nothing beyond re-rendering
    None,
    /// Scroll the named anchor into view
    ScrollTo(&'static str),
}

/// Entries of the navigation overlay, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Link to a carousel section
    Section(SectionId),
    /// Opens the contact modal
    Contact,
}

impl MenuItem {
    /// All entries in display order.
    pub const ALL: [Self; 4] = [
        Self::Section(SectionId::Work),
        Self::Section(SectionId::Education),
        Self::Section(SectionId::CoolThings),
        Self::Contact,
    ];

    /// Text shown for the entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Section(id) => id.menu_label(),
            Self::Contact => "Contact",
        }
    }

    /// Action dispatched when the entry is activated.
    #[must_use]
    pub const fn action(self) -> PageAction {
        match self {
            Self::Section(id) => PageAction::Navigate(id),
            Self::Contact => PageAction::ContactFromMenu,
        }
    }
}

/// State of the whole page for one session.
#[derive(Debug, Clone)]
pub struct PortfolioPage {
    content: PortfolioContent,
    menu_open: bool,
    contact_open: bool,
    carousels: [Carousel; 3],
    focused: SectionId,
}

impl PortfolioPage {
    /// Creates the page with both overlays hidden and every carousel on its first slide.
    ///
    /// # Errors
    ///
    /// Propagates carousel construction errors; decks are non-empty by
    /// construction so this only fails on a broken invariant.
    pub fn new(content: PortfolioContent) -> Result<Self> {
        let carousels = [
            Carousel::new(content.work.slides.len())?,
            Carousel::new(content.education.slides.len())?,
            Carousel::new(content.cool_things.slides.len())?,
        ];
        Ok(Self {
            content,
            menu_open: false,
            contact_open: false,
            carousels,
            focused: SectionId::Work,
        })
    }

    /// Static content the page was built from.
    #[must_use]
    pub const fn content(&self) -> &PortfolioContent {
        &self.content
    }

    /// Whether the navigation overlay is visible.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the contact modal is visible.
    #[must_use]
    pub const fn is_contact_open(&self) -> bool {
        self.contact_open
    }

    /// Section most recently navigated to.
    #[must_use]
    pub const fn focused(&self) -> SectionId {
        self.focused
    }

    /// Carousel state of a section.
    #[must_use]
    pub const fn carousel(&self, id: SectionId) -> &Carousel {
        &self.carousels[id.index()]
    }

    /// Content of a section.
    #[must_use]
    pub const fn section(&self, id: SectionId) -> &SectionContent {
        self.content.section(id)
    }

    /// The slide a section currently shows.
    #[must_use]
    pub fn current_slide(&self, id: SectionId) -> &Slide {
        let section = self.content.section(id);
        // Carousel length equals deck length, so the index is always in range.
        section
            .slides
            .get(self.carousel(id).current())
            .unwrap_or_else(|| section.slides.first())
    }

    /// Applies one user action as a single state update.
    ///
    /// # Errors
    ///
    /// Returns an error for [`PageAction::GoToSlide`] with an out-of-range
    /// index; the page is left unchanged in that case.
    pub fn apply(&mut self, action: PageAction) -> Result<PageEvent> {
        debug!(?action, "Applying page action");
        let event = match action {
            PageAction::ToggleMenu => {
                self.menu_open = !self.menu_open;
                PageEvent::None
            }
            PageAction::OpenMenu => {
                self.menu_open = true;
                PageEvent::None
            }
            PageAction::CloseMenu => {
                self.menu_open = false;
                PageEvent::None
            }
            PageAction::OpenContact => {
                self.contact_open = true;
                PageEvent::None
            }
            PageAction::CloseContact => {
                self.contact_open = false;
                PageEvent::None
            }
            PageAction::Navigate(id) => {
                self.menu_open = false;
                self.focused = id;
                PageEvent::ScrollTo(id.anchor())
            }
            PageAction::ContactFromMenu => {
                self.menu_open = false;
                self.contact_open = true;
                PageEvent::None
            }
            PageAction::NextSlide(id) => {
                self.carousels[id.index()].next();
                PageEvent::None
            }
            PageAction::PreviousSlide(id) => {
                self.carousels[id.index()].previous();
                PageEvent::None
            }
            PageAction::GoToSlide(id, index) => {
                self.carousels[id.index()].go_to(index)?;
                PageEvent::None
            }
            PageAction::Focus(id) => {
                self.focused = id;
                PageEvent::None
            }
        };
        Ok(event)
    }
}
