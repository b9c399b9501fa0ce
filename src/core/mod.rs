//! Catalog engine: data model, parsing, writing and runtime lookup.
//!
//! ## Module Structure
//!
//! - `data`: Catalog, Context and Message types
//! - `parsers`: `.ts` catalog reader
//! - `writer`: `.ts` catalog writer
//! - `plural`: numerus rules per language
//! - `locale`: locale identifiers and environment preferences
//! - `translator`: catalog negotiation and translation with source fallback
//! - `scan`: catalog discovery and parallel loading
//! - `context`: loaded state shared by the CLI commands

pub mod context;
pub mod data;
pub mod error;
pub mod locale;
pub mod parsers;
pub mod plural;
pub mod scan;
pub mod translator;
pub mod writer;

pub use context::CheckContext;
pub use data::*;
pub use error::CatalogError;
pub use locale::Locale;
pub use plural::PluralRule;
pub use translator::{CatalogSet, Translator, load_catalog};
