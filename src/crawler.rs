//! Crawler matchers.
//!
//! Crawlers run before any browser matcher because several of them wrap
//! their identity in a browser-looking `Mozilla/5.0 (...)` prefix.

use crate::agent::{AgentType, UserAgent};
use crate::browser::parse_os_version_lenient;
use crate::constants::OS_ANDROID;
use crate::lexer::Lexer;
use crate::version::{Version, scan_name_version, scan_version};

const GOOGLEBOT_HOMEPAGE_TAIL: &str = " +http://www.google.com/bot.html)";

/// Reads an optional `/<version>` right after a bare product token. The
/// version ends at a space, `;` or `)`, or at the end of input.
fn parse_optional_version(lx: &mut Lexer<'_>, ua: &mut UserAgent) {
    let mut probe = *lx;
    if !probe.match_literal("/") {
        return;
    }
    let raw = probe
        .span_any_of(" ;)")
        .unwrap_or_else(|| probe.take_rest());
    if let Ok(version) = Version::parse_tolerant(raw) {
        ua.version = version;
        *lx = probe;
    }
}

/// Googlebot and its specialised siblings.
///
/// ```text
/// Googlebot/2.1 (+http://www.google.com/bot.html)
/// Googlebot-Image/1.0
/// Googlebot-News
/// Mediapartners-Google
/// AdsBot-Google (+http://www.google.com/adsbot.html)
/// Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)
/// Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko; compatible; Googlebot/2.1; +http://www.google.com/bot.html) Chrome/W.X.Y.Z Safari/537.36
/// ```
pub(crate) fn googlebot(lx: &mut Lexer<'_>) -> Option<UserAgent> {
    let mut ua = UserAgent::blank();
    ua.agent_type = AgentType::Crawler;

    if lx.match_literal("Googlebot") {
        if lx.match_literal("-News") {
            ua.name = "Googlebot News".to_string();
            return Some(ua);
        }
        let (suffix, version) = scan_name_version(lx)?;
        ua.version = version;
        ua.name = match suffix {
            "" => "Googlebot".to_string(),
            "-Image" => "Googlebot Images".to_string(),
            other => format!("Googlebot {}", other.strip_prefix('-')?),
        };
        return Some(ua);
    }
    if lx.match_literal("Mediapartners-Google") {
        ua.name = "Google AdSense".to_string();
        parse_optional_version(lx, &mut ua);
        return Some(ua);
    }
    if lx.match_literal("AdsBot-Google") {
        ua.name = "Google AdsBot".to_string();
        parse_optional_version(lx, &mut ua);
        return Some(ua);
    }

    if lx.match_literal("Mozilla/5.0 AppleWebKit/") {
        lx.span_before("compatible; Googlebot/", ")")?;
    } else {
        lx.require("Mozilla/5.0 (compatible; Googlebot/")?;
    }
    ua.name = "Googlebot".to_string();
    ua.version = scan_version(lx, ";")?;
    lx.require(GOOGLEBOT_HOMEPAGE_TAIL)?;

    Some(ua)
}

/// The smartphone Googlebot, which mimics Chrome on Android before naming
/// itself at the very end.
pub(crate) fn googlebot_smartphone(lx: &mut Lexer<'_>) -> Option<UserAgent> {
    let mut ua = UserAgent::blank();

    lx.span("Mozilla")?;
    lx.span("Linux")?;
    lx.span("Android")?;
    ua.os = OS_ANDROID.to_string();
    parse_os_version_lenient(lx, &mut ua);
    lx.span("AppleWebKit")?;
    lx.span("Chrome")?;
    lx.span("Mobile Safari")?;
    lx.span("Googlebot/")?;
    ua.version = scan_version(lx, ";")?;

    ua.agent_type = AgentType::Crawler;
    ua.name = "Googlebot".to_string();
    ua.mobile = true;
    Some(ua)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(matcher: fn(&mut Lexer<'_>) -> Option<UserAgent>, input: &str) -> Option<UserAgent> {
        matcher(&mut Lexer::new(input))
    }

    #[test]
    fn googlebot_bare() {
        let ua = run(googlebot, "Googlebot/2.1 (+http://www.google.com/bot.html)").unwrap();
        assert_eq!(ua.agent_type, AgentType::Crawler);
        assert_eq!(ua.name, "Googlebot");
        assert_eq!(ua.version, Version::new(2, 1, 0));
    }

    #[test]
    fn googlebot_suffixes() {
        let cases = [
            ("Googlebot-Image/1.0", "Googlebot Images", Version::new(1, 0, 0)),
            ("Googlebot-Video/1.0", "Googlebot Video", Version::new(1, 0, 0)),
            ("Googlebot-News", "Googlebot News", Version::default()),
        ];
        for (input, name, version) in cases {
            let ua = run(googlebot, input).unwrap();
            assert_eq!(ua.name, name, "{input}");
            assert_eq!(ua.version, version, "{input}");
        }
    }

    #[test]
    fn googlebot_suffix_needs_hyphen() {
        assert!(run(googlebot, "GooglebotX/1.0").is_none());
        assert!(run(googlebot, "Googlebot").is_none());
    }

    #[test]
    fn google_ad_crawlers() {
        let ua = run(googlebot, "Mediapartners-Google").unwrap();
        assert_eq!(ua.name, "Google AdSense");
        assert!(ua.version.is_zero());

        let ua = run(googlebot, "Mediapartners-Google/2.1").unwrap();
        assert_eq!(ua.version, Version::new(2, 1, 0));

        let ua = run(googlebot, "AdsBot-Google (+http://www.google.com/adsbot.html)").unwrap();
        assert_eq!(ua.name, "Google AdsBot");
        assert!(ua.version.is_zero());

        let ua = run(googlebot, "AdsBot-Google/1.0; (+http://www.google.com/adsbot.html)").unwrap();
        assert_eq!(ua.version, Version::new(1, 0, 0));

        let ua = run(googlebot, "Mediapartners-Google/beta").unwrap();
        assert!(ua.version.is_zero());
    }

    #[test]
    fn googlebot_compatible() {
        let ua = run(
            googlebot,
            "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
        )
        .unwrap();
        assert_eq!(ua.name, "Googlebot");
        assert_eq!(ua.version, Version::new(2, 1, 0));
        assert!(!ua.mobile);
    }

    #[test]
    fn googlebot_evergreen() {
        let ua = run(
            googlebot,
            "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko; compatible; Googlebot/2.1; \
             +http://www.google.com/bot.html) Chrome/79.0.3945.120 Safari/537.36",
        )
        .unwrap();
        assert_eq!(ua.name, "Googlebot");
        assert_eq!(ua.version, Version::new(2, 1, 0));
    }

    #[test]
    fn googlebot_requires_homepage_tail() {
        assert!(run(googlebot, "Mozilla/5.0 (compatible; Googlebot/2.1)").is_none());
        assert!(
            run(
                googlebot,
                "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)"
            )
            .is_none()
        );
    }

    #[test]
    fn smartphone() {
        let ua = run(
            googlebot_smartphone,
            "Mozilla/5.0 (Linux; Android 6.0.1; Nexus 5X Build/MMB29P) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/41.0.2272.96 Mobile Safari/537.36 \
             (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
        )
        .unwrap();
        assert_eq!(ua.agent_type, AgentType::Crawler);
        assert_eq!(ua.name, "Googlebot");
        assert_eq!(ua.version, Version::new(2, 1, 0));
        assert_eq!(ua.os, OS_ANDROID);
        assert_eq!(ua.os_version, Version::new(6, 0, 1));
        assert!(ua.mobile);
        assert!(!ua.tablet);
    }

    #[test]
    fn smartphone_swallows_bad_os_version() {
        let ua = run(
            googlebot_smartphone,
            "Mozilla/5.0 (Linux; Android 99999999999999999999.1; Nexus 5X Build/MMB29P) \
             AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2272.96 Mobile Safari/537.36 \
             (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
        )
        .unwrap();
        assert_eq!(ua.name, "Googlebot");
        assert_eq!(ua.os, OS_ANDROID);
        assert!(ua.os_version.is_zero());
    }

    #[test]
    fn smartphone_rejects_plain_chrome() {
        assert!(
            run(
                googlebot_smartphone,
                "Mozilla/5.0 (Linux; Android 6.0.1; Nexus 5X Build/MMB29P) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/41.0.2272.96 Mobile Safari/537.36",
            )
            .is_none()
        );
    }
}
