//! tscat - Qt Linguist translation catalog loader and checker
//!
//! tscat reads Qt Linguist `.ts` catalogs, resolves strings at runtime the way
//! a Qt application does (locale negotiation, plural forms, source fallback for
//! unfinished entries) and checks catalogs for common translation mistakes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, `.ts` reader/writer, plural rules and lookup
//! - `issues`: Issue type definitions and reporting
//! - `logging`: Diagnostic logging setup
//! - `rules`: Catalog checks
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod rules;
pub mod utils;
