//! The ordered list of family matchers.

use std::fmt;

use crate::agent::{AgentType, UserAgent};
use crate::browser;
use crate::crawler;
use crate::lexer::Lexer;
use crate::tables;
use crate::version::scan_name_version;

type Matcher = fn(&mut Lexer<'_>) -> Option<UserAgent>;

/// A user agent family with its own recognizer.
///
/// [`Family::CASCADE`] lists every family in the order [`crate::parse`] tries
/// them. Crawlers come first since some of them imitate browsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `Googlebot`, its `-News`/`-Image`/`-Video` siblings, `AdSense` and `AdsBot`
    Googlebot,
    /// Googlebot dressed up as Chrome on Android
    GooglebotSmartphone,
    /// Firefox and other Gecko browsers
    Gecko,
    /// Chrome, Safari and other `WebKit` browsers
    ChromeSafari,
    /// Internet Explorer up to 10
    LegacyIe,
    /// Internet Explorer 11
    ModernIe,
    /// Presto based Opera
    OperaClassic,
    /// Bare `Name/Version` of a known product
    Generic,
}

impl Family {
    /// All families, in cascade order.
    pub const CASCADE: [Self; 8] = [
        Self::Googlebot,
        Self::GooglebotSmartphone,
        Self::Gecko,
        Self::ChromeSafari,
        Self::LegacyIe,
        Self::ModernIe,
        Self::OperaClassic,
        Self::Generic,
    ];

    /// Returns the name of this family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Googlebot => "googlebot",
            Self::GooglebotSmartphone => "googlebot-smartphone",
            Self::Gecko => "gecko",
            Self::ChromeSafari => "chrome-safari",
            Self::LegacyIe => "legacy-ie",
            Self::ModernIe => "modern-ie",
            Self::OperaClassic => "opera-classic",
            Self::Generic => "generic",
        }
    }

    const fn matcher(self) -> Matcher {
        match self {
            Self::Googlebot => crawler::googlebot,
            Self::GooglebotSmartphone => crawler::googlebot_smartphone,
            Self::Gecko => browser::gecko,
            Self::ChromeSafari => browser::chrome_safari,
            Self::LegacyIe => browser::legacy_ie,
            Self::ModernIe => browser::modern_ie,
            Self::OperaClassic => browser::opera_classic,
            Self::Generic => generic,
        }
    }

    /// Runs only this family's recognizer on `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use useragent::Family;
    ///
    /// let ua = "Dillo/3.0.5";
    /// assert!(Family::Gecko.recognize(ua).is_none());
    /// assert_eq!(Family::Generic.recognize(ua).unwrap().name(), "Dillo");
    /// ```
    #[must_use]
    pub fn recognize(self, input: &str) -> Option<UserAgent> {
        let mut lx = Lexer::new(input);
        let mut ua = (self.matcher())(&mut lx)?;
        tracing::trace!(
            family = self.as_str(),
            name = %ua.name,
            consumed = lx.position(),
            "user agent matched"
        );
        ua.original = input.to_string();
        if ua.url.is_none() {
            ua.url = tables::homepage(&ua.name);
        }
        Some(ua)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `Name/Version` pair naming a product from the homepage tables.
fn generic(lx: &mut Lexer<'_>) -> Option<UserAgent> {
    let mut ua = UserAgent::blank();
    let (name, version) = scan_name_version(lx)?;

    if let Some(url) = tables::browser_url(name) {
        ua.agent_type = AgentType::Browser;
        ua.url = Some(url.clone());
    } else if let Some(url) = tables::crawler_url(name) {
        ua.agent_type = AgentType::Crawler;
        ua.url = Some(url.clone());
    } else {
        return None;
    }
    ua.name = name.to_string();
    ua.version = version;
    Some(ua)
}

/// Tries every family in cascade order and returns the first match.
pub(crate) fn run(input: &str) -> Option<UserAgent> {
    let found = Family::CASCADE
        .iter()
        .find_map(|family| family.recognize(input));
    if found.is_none() {
        tracing::debug!(input, "no family recognized user agent");
    }
    found
}
