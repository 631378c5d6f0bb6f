//! External service interactions
//!
//! This module contains services for working with the host document:
//! - Document loading and parsing
//! - Level collection (category query + subtype filter)

pub mod collector;
pub mod document;

pub use collector::collect_levels;
pub use document::load_document;
