//! Folio library
//!
//! This library provides the portfolio page: its content model, the page
//! state machine (carousels, navigation menu, contact modal), a static HTML
//! renderer and the terminal front-end.

// Module declarations
pub mod branding;
pub mod config;
pub mod content;
pub mod html;
pub mod logging;
pub mod models;
pub mod page;
pub mod tui;
