//! Data models for the portfolio page content.
//!
//! Models are plain immutable data, independent of the page state machine
//! and of any front-end.

pub mod content;
pub mod section;
pub mod slide;

// Re-export all model types
pub use content::{CallToAction, ContactLinks, Hero, PortfolioContent, SectionContent};
pub use section::SectionId;
pub use slide::{Slide, SlideDeck, SlideLink};
