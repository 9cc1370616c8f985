//! Homepages of well-known products.
//!
//! The tables are keyed by the canonical product name the matchers assign
//! (case-sensitive). They are built on first use and only read afterwards.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use url::Url;

// keep them sorted
static BROWSERS: Lazy<BTreeMap<&'static str, Url>> = Lazy::new(|| {
    table(&[
        ("Chrome", "http://www.chromium.org/"),
        ("Dillo", "http://www.dillo.org/"),
        ("Edge", "https://www.microsoft.com/edge"),
        ("Firefox", "https://www.mozilla.org/en-US/firefox"),
        ("IceCat", "https://www.gnu.org/software/gnuzilla/"),
        ("Iceweasel", "https://wiki.debian.org/Iceweasel"),
        ("MSIE", "https://www.microsoft.com/ie"),
        ("NetSurf", "http://www.netsurf-browser.org/"),
        ("Opera", "http://www.opera.com/"),
        ("PhantomJS", "http://phantomjs.org/"),
        ("Safari", "http://www.apple.com/safari/"),
        ("Silk", "http://aws.amazon.com/documentation/silk/"),
        ("WebView", "http://developer.android.com/guide/webapps/webview.html"),
    ])
});

// keep them sorted
static CRAWLERS: Lazy<BTreeMap<&'static str, Url>> = Lazy::new(|| {
    table(&[
        ("Google AdSense", "https://support.google.com/webmasters/answer/1061943"),
        ("Google AdsBot", "https://support.google.com/webmasters/answer/1061943"),
        ("Googlebot", "http://www.google.com/bot.html"),
        ("Googlebot Images", "https://support.google.com/webmasters/answer/1061943"),
        ("Googlebot News", "https://support.google.com/news/publisher/answer/93977"),
        ("Googlebot Video", "https://support.google.com/webmasters/answer/1061943"),
    ])
});

fn table(entries: &[(&'static str, &str)]) -> BTreeMap<&'static str, Url> {
    entries
        .iter()
        .map(|&(name, raw)| {
            let url = Url::parse(raw)
                .unwrap_or_else(|e| panic!("useragent: invalid homepage for {name} '{raw}': {e}"));
            (name, url)
        })
        .collect()
}

/// Returns the homepage of a known browser.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     useragent::browser_url("Dillo").map(url::Url::as_str),
///     Some("http://www.dillo.org/")
/// );
/// assert!(useragent::browser_url("dillo").is_none());
/// ```
#[must_use]
pub fn browser_url(name: &str) -> Option<&'static Url> {
    BROWSERS.get(name)
}

/// Returns the homepage of a known crawler.
#[must_use]
pub fn crawler_url(name: &str) -> Option<&'static Url> {
    CRAWLERS.get(name)
}

/// Returns true if `name` is a known browser.
#[must_use]
pub fn is_known_browser(name: &str) -> bool {
    BROWSERS.contains_key(name)
}

/// Returns true if `name` is a known crawler.
#[must_use]
pub fn is_known_crawler(name: &str) -> bool {
    CRAWLERS.contains_key(name)
}

/// Homepage of any known product, browsers first.
pub(crate) fn homepage(name: &str) -> Option<Url> {
    browser_url(name).or_else(|| crawler_url(name)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_build() {
        assert_eq!(BROWSERS.len(), 13);
        assert_eq!(CRAWLERS.len(), 6);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert!(is_known_browser("Firefox"));
        assert!(!is_known_browser("firefox"));
        assert!(is_known_crawler("Googlebot News"));
        assert!(!is_known_crawler("Firefox"));
    }

    #[test]
    fn homepage_prefers_browsers() {
        assert_eq!(
            homepage("Googlebot").map(|u| u.to_string()),
            Some("http://www.google.com/bot.html".to_string())
        );
        assert_eq!(
            homepage("Chrome").map(|u| u.host_str().map(str::to_string)),
            Some(Some("www.chromium.org".to_string()))
        );
        assert!(homepage("Mozilla").is_none());
    }

    #[test]
    #[should_panic(expected = "invalid homepage")]
    fn bad_url_fails_fast() {
        let _ = table(&[("Broken", "not a url")]);
    }
}
