//! File parsers for translation catalogs.
//!
//! - `ts`: Qt Linguist `.ts` (XML) catalog parser

pub mod ts;
