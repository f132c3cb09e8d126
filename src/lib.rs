//! Consolefolio library
//!
//! This library provides the pieces of a game-console styled portfolio
//! browser: the item catalog, localized interface text, the presentation
//! controller with its view state, and the terminal user interface.

// Module declarations
pub mod branding;
pub mod config;
pub mod controller;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;
