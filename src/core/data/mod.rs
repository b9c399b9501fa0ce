//! Core data types describing a translation catalog.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog and Context containers, progress statistics
//! - `message`: Message, Translation, status and diagnostic locations

pub mod catalog;
pub mod message;

pub use catalog::{Catalog, CatalogStats, Context, TS_VERSION};
pub use message::{
    Message, MessageContext, MessageKey, MessageLocation, SourceReference, Translation,
    TranslationStatus,
};
