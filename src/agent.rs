//! The parsed user agent record and its classification enums.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::cascade;
use crate::constants::UNKNOWN;
use crate::error::{ParseError, ParseErrorKind};
use crate::version::Version;

/// What kind of software sent the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentType {
    /// Not determined
    #[default]
    Unknown,
    /// Interactive web browser
    Browser,
    /// Search engine or other crawler
    Crawler,
    /// Link checking tool
    LinkChecker,
    /// Markup or feed validator
    Validator,
    /// Feed aggregator
    FeedReader,
    /// HTTP library or embedded web view
    Library,
}

impl AgentType {
    /// Returns the display name of this agent type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown agent type",
            Self::Browser => "Browser",
            Self::Crawler => "Crawler",
            Self::LinkChecker => "Link Checker",
            Self::Validator => "Validator",
            Self::FeedReader => "Feed Reader",
            Self::Library => "Library",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Encryption strength advertised by some older browsers.
///
/// Netscape era agents embedded a single letter in the platform group:
/// `U` for strong, `I` for weak and `N` for no encryption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Security {
    /// No security token present
    #[default]
    Unknown,
    /// `N` token
    None,
    /// `I` token
    Weak,
    /// `U` token
    Strong,
}

impl Security {
    /// Returns the display name of this security level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown security",
            Self::None => "No security",
            Self::Weak => "Weak security",
            Self::Strong => "Strong security",
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured information extracted from a User-Agent string.
///
/// User-Agent strings follow no standard, so every field is best effort.
/// Names and OS default to `"unknown"`, versions to `0.0.0`.
///
/// # Examples
///
/// ```
/// use useragent::{AgentType, Security, UserAgent, Version};
///
/// let ua = UserAgent::parse(
///     "Mozilla/5.0 (X11; U; Linux i686; rv:38.0) Gecko/20100101 Firefox/38.0",
/// ).unwrap();
/// assert_eq!(ua.agent_type(), AgentType::Browser);
/// assert_eq!(ua.name(), "Firefox");
/// assert_eq!(ua.version(), &Version::new(38, 0, 0));
/// assert_eq!(ua.os(), "GNU/Linux");
/// assert_eq!(ua.security(), Security::Strong);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UserAgent {
    pub(crate) original: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub(crate) agent_type: AgentType,
    pub(crate) name: String,
    pub(crate) version: Version,
    pub(crate) os: String,
    pub(crate) os_version: Version,
    pub(crate) security: Security,
    pub(crate) url: Option<Url>,
    pub(crate) mobile: bool,
    pub(crate) tablet: bool,
}

impl UserAgent {
    /// Parses a User-Agent string.
    ///
    /// Matchers for crawlers, browser families and finally a generic
    /// `Name/Version` form are tried in a fixed order; the first one that
    /// recognises the input wins.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is empty or no matcher recognises it.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError {
                input: String::new(),
                kind: ParseErrorKind::Empty,
            });
        }
        cascade::run(input).ok_or_else(|| ParseError {
            input: input.to_string(),
            kind: ParseErrorKind::Unrecognized,
        })
    }

    /// Fresh record with every field at its "not determined" value.
    pub(crate) fn blank() -> Self {
        Self {
            original: String::new(),
            agent_type: AgentType::Unknown,
            name: UNKNOWN.to_string(),
            version: Version::default(),
            os: UNKNOWN.to_string(),
            os_version: Version::default(),
            security: Security::Unknown,
            url: None,
            mobile: false,
            tablet: false,
        }
    }

    /// Returns the string this record was parsed from.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the agent type.
    #[must_use]
    pub const fn agent_type(&self) -> AgentType {
        self.agent_type
    }

    /// Returns the product name, e.g. `Firefox`, `Googlebot`, or `unknown`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product version.
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// Returns the OS name, e.g. `GNU/Linux`, `Windows`, `iOS`, or `unknown`.
    #[must_use]
    pub fn os(&self) -> &str {
        &self.os
    }

    /// Returns the OS version, `0.0.0` when not advertised.
    #[must_use]
    pub const fn os_version(&self) -> &Version {
        &self.os_version
    }

    /// Returns the advertised encryption strength.
    #[must_use]
    pub const fn security(&self) -> Security {
        self.security
    }

    /// Returns the product homepage, if the product is a known one.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Returns true for phones.
    #[must_use]
    pub const fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Returns true for tablets.
    #[must_use]
    pub const fn is_tablet(&self) -> bool {
        self.tablet
    }

    /// Returns true if the agent is a crawler.
    #[must_use]
    pub const fn is_bot(&self) -> bool {
        matches!(self.agent_type, AgentType::Crawler)
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type: {}", self.agent_type)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "OS: {}", self.os)?;
        writeln!(f, "OS Version: {}", self.os_version)?;
        writeln!(f, "Security: {}", self.security)?;
        writeln!(f, "Mobile: {}", self.mobile)?;
        write!(f, "Tablet: {}", self.tablet)
    }
}

impl FromStr for UserAgent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UserAgent {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_record_uses_sentinels() {
        let ua = UserAgent::blank();
        assert_eq!(ua.name(), "unknown");
        assert_eq!(ua.os(), "unknown");
        assert!(ua.version().is_zero());
        assert!(ua.os_version().is_zero());
        assert_eq!(ua.agent_type(), AgentType::Unknown);
        assert_eq!(ua.security(), Security::Unknown);
        assert!(ua.url().is_none());
    }

    #[test]
    fn parse_empty_returns_error() {
        let result = UserAgent::parse("");
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::Empty,
                ..
            })
        ));
    }

    #[test]
    fn parse_garbage_returns_unrecognized() {
        let result = "definitely not a user agent".parse::<UserAgent>();
        assert!(matches!(
            result,
            Err(ParseError {
                kind: ParseErrorKind::Unrecognized,
                ..
            })
        ));
    }

    #[test]
    fn display_report() {
        let ua = UserAgent::try_from(
            "Mozilla/5.0 (X11; Linux i686; rv:38.0) Gecko/20100101 Firefox/38.0",
        )
        .unwrap();
        assert_eq!(
            ua.to_string(),
            "Type: Browser\n\
             Name: Firefox\n\
             Version: 38.0.0\n\
             OS: GNU/Linux\n\
             OS Version: 0.0.0\n\
             Security: Unknown security\n\
             Mobile: false\n\
             Tablet: false"
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(AgentType::FeedReader.to_string(), "Feed Reader");
        assert_eq!(AgentType::LinkChecker.to_string(), "Link Checker");
        assert_eq!(Security::None.to_string(), "No security");
        assert_eq!(Security::Strong.as_str(), "Strong security");
    }
}
