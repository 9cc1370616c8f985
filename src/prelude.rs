//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use useragent::prelude::*;
//!
//! let ua = UserAgent::parse("Dillo/3.0.5").unwrap();
//! assert_eq!(ua.agent_type(), AgentType::Browser);
//! ```
//!
//! The OS name constants are left out to keep the glob small.

pub use crate::{
    // Core types
    AgentType, Family, Security, UserAgent, Version,
    // Errors
    ParseError, ParseErrorKind, VersionError,
    // Lookups
    browser_url, crawler_url, is_known_browser, is_known_crawler,
    // Entry point
    parse,
};
