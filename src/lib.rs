//! Heuristic parser for HTTP `User-Agent` strings.
//!
//! User-Agent strings follow no grammar. Every vendor invents its own layout
//! and copies pieces of its competitors' along the way. This crate recognises
//! the common families with a fixed cascade of small matchers and extracts
//! the agent type, product name and version, OS and OS version, the legacy
//! security token and the mobile/tablet flags.
//!
//! # Quick Start
//!
//! ```rust
//! use useragent::{AgentType, Version};
//!
//! let ua = useragent::parse(
//!     "Mozilla/5.0 (Linux; Android 4.4.3; KFTHWI Build/KTU84M) AppleWebKit/537.36 \
//!      (KHTML, like Gecko) Silk/44.1.54 like Chrome/44.0.2403.63 Safari/537.36",
//! )
//! .unwrap();
//!
//! assert_eq!(ua.agent_type(), AgentType::Browser);
//! assert_eq!(ua.name(), "Silk");
//! assert_eq!(ua.version(), &Version::new(44, 1, 54));
//! assert_eq!(ua.os(), "Android");
//! assert_eq!(ua.os_version(), &Version::new(4, 4, 3));
//! assert!(ua.is_tablet());
//! assert!(!ua.is_mobile());
//!
//! assert!(useragent::parse("not a user agent").is_none());
//! ```
//!
//! # Cascade
//!
//! | Order | Family | Recognises |
//! |-------|--------|------------|
//! | 1 | [`Family::Googlebot`] | `Googlebot*`, `Mediapartners-Google`, `AdsBot-Google` |
//! | 2 | [`Family::GooglebotSmartphone`] | Googlebot posing as Chrome on Android |
//! | 3 | [`Family::Gecko`] | `Mozilla/5.0 (...) Gecko/... Name/Version` |
//! | 4 | [`Family::ChromeSafari`] | `Mozilla/5.0 (...) AppleWebKit/... (KHTML, like Gecko) Name/Version` |
//! | 5 | [`Family::LegacyIe`] | `Mozilla/x (compatible; MSIE x; Windows NT ...)` |
//! | 6 | [`Family::ModernIe`] | `Mozilla/5.0 (Windows NT ...; Trident/...; rv:x)` |
//! | 7 | [`Family::OperaClassic`] | `Opera/x (...) Presto/...` |
//! | 8 | [`Family::Generic`] | `Name/Version` of a product with a known homepage |
//!
//! The first family that recognises the input wins. A family either matches
//! completely or not at all; there is no partial result.
//!
//! # Logging
//!
//! Matches are reported through [`tracing`] at `trace` level, exhausted
//! cascades at `debug` level. Nothing is logged unless a subscriber is
//! installed.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod agent;
mod browser;
mod cascade;
mod constants;
mod crawler;
mod error;
#[cfg(kani)]
mod kani_impls;
mod lexer;
mod os_version;
pub mod prelude;
mod tables;
mod version;

pub use agent::{AgentType, Security, UserAgent};
pub use cascade::Family;
pub use constants::{
    OS_ANDROID, OS_CROS, OS_FIREFOX_OS, OS_FREEBSD, OS_GNU_LINUX, OS_IOS, OS_MAC_OS_X, OS_MAEMO,
    OS_NETBSD, OS_OPENBSD, OS_WINDOWS, UNKNOWN,
};
pub use error::{ParseError, ParseErrorKind, VersionError};
pub use tables::{browser_url, crawler_url, is_known_browser, is_known_crawler};
pub use version::Version;

/// Parses a User-Agent string, returning `None` when no family recognises it.
///
/// Use [`UserAgent::parse`] to get a [`ParseError`] instead.
///
/// # Examples
///
/// ```
/// let ua = useragent::parse("Googlebot/2.1 (+http://www.google.com/bot.html)").unwrap();
/// assert!(ua.is_bot());
/// assert_eq!(ua.name(), "Googlebot");
/// assert_eq!(ua.version().to_string(), "2.1.0");
///
/// assert!(useragent::parse("").is_none());
/// ```
#[must_use]
pub fn parse(input: &str) -> Option<UserAgent> {
    UserAgent::parse(input).ok()
}
