//! HTML parsers for letterboxd.com
//!
//! Contains modules for parsing different page types.

pub mod listing;
pub mod watch;

pub use listing::{listing_ready_selector, parse_listing};
pub use watch::{WATCH_READY_SELECTOR, WATCH_SECTION_SELECTOR, parse_streaming_services};
