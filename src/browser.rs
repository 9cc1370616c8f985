//! Browser family matchers.
//!
//! - [`gecko`]: Firefox and friends
//! - [`chrome_safari`]: everything `AppleWebKit` based, including Firefox for iOS
//! - [`legacy_ie`]: Internet Explorer up to 10
//! - [`modern_ie`]: Internet Explorer 11, which dropped the `MSIE` token
//! - [`opera_classic`]: Presto era Opera
//!
//! Each matcher consumes its own [`Lexer`] and gives up on the first
//! required token that is missing.

use crate::agent::{AgentType, Security, UserAgent};
use crate::constants::{
    MOZILLA_5_PREFIX, OS_ANDROID, OS_CROS, OS_FIREFOX_OS, OS_FREEBSD, OS_GNU_LINUX, OS_IOS,
    OS_MAC_OS_X, OS_MAEMO, OS_NETBSD, OS_OPENBSD, OS_WINDOWS,
};
use crate::lexer::Lexer;
use crate::os_version::scan_os_version;
use crate::version::{scan_name_version, scan_version};

const SECURITY_TOKENS: [(&str, Security); 3] = [
    ("U", Security::Strong),
    ("I", Security::Weak),
    ("N", Security::None),
];

/// Security tokens as they appear anywhere inside a platform group.
const GROUP_SECURITY_TOKENS: [(&str, Security); 6] = [
    ("; U;", Security::Strong),
    ("; U)", Security::Strong),
    ("; I;", Security::Weak),
    ("; I)", Security::Weak),
    ("; N;", Security::None),
    ("; N)", Security::None),
];

const UNIX_FAMILIES: [(&[&str], &str); 6] = [
    (&["Linux", "Ubuntu"], OS_GNU_LINUX),
    (&["FreeBSD"], OS_FREEBSD),
    (&["OpenBSD"], OS_OPENBSD),
    (&["NetBSD"], OS_NETBSD),
    (&["Maemo"], OS_MAEMO),
    (&["CrOS"], OS_CROS),
];

/// Tokens Chromium derivatives append after the regular Chrome tokens.
const CHROMIUM_REBRANDS: [(&str, &str); 2] = [("OPR/", "Opera"), ("Edge/", "Edge")];

const OPERA_PLATFORMS: [(&str, &str); 3] = [
    ("Windows", OS_WINDOWS),
    ("Macintosh", OS_MAC_OS_X),
    ("Android", OS_ANDROID),
];

/// Reads a security token at the cursor.
///
/// The token only counts when followed by `"; "` or by the closing `)`, so
/// `Windows NT` is never mistaken for `N`. It may be preceded by `"; "` when
/// the platform token before it had no separator of its own.
fn parse_security(lx: &mut Lexer<'_>) -> Security {
    for (token, security) in SECURITY_TOKENS {
        for lead in ["", "; "] {
            let mut probe = *lx;
            if !(probe.match_literal(lead) && probe.match_literal(token)) {
                continue;
            }
            if probe.match_literal("; ") || probe.match_no_consume(")") {
                *lx = probe;
                return security;
            }
        }
    }
    Security::Unknown
}

/// True if `needle` occurs before the end of the current group. Never advances.
fn group_contains(lx: &Lexer<'_>, needle: &str) -> bool {
    let mut probe = *lx;
    probe.span_before(needle, ")").is_some()
}

fn scan_group_security(lx: &Lexer<'_>) -> Security {
    GROUP_SECURITY_TOKENS
        .iter()
        .find(|(needle, _)| group_contains(lx, needle))
        .map_or(Security::Unknown, |&(_, security)| security)
}

/// Parses *nix variants inside a platform group.
fn parse_unix_like(lx: &mut Lexer<'_>, ua: &mut UserAgent) -> bool {
    for (tokens, os) in UNIX_FAMILIES {
        if lx.match_first_of(tokens) {
            ua.os = os.to_string();
            return true;
        }
    }
    false
}

/// OS version for the OS already set on `ua`; a malformed one fails the match.
fn parse_os_version(lx: &mut Lexer<'_>, ua: &mut UserAgent) -> Option<()> {
    let version = scan_os_version(lx, &ua.os).ok()?;
    ua.os_version = version.unwrap_or_default();
    Some(())
}

/// OS version for the IE family and the smartphone Googlebot, which never
/// failed on a bad one.
pub(crate) fn parse_os_version_lenient(lx: &mut Lexer<'_>, ua: &mut UserAgent) {
    match scan_os_version(lx, &ua.os) {
        Ok(version) => ua.os_version = version.unwrap_or_default(),
        Err(err) => tracing::trace!(%err, os = %ua.os, "ignoring malformed OS version"),
    }
}

/// Reclassifies as Opera when an `Opera <version>` token follows.
fn sniff_trailing_opera(lx: &mut Lexer<'_>, ua: &mut UserAgent) {
    let mut probe = *lx;
    if probe.span("Opera ").is_none() {
        return;
    }
    if let Some(version) = scan_version(&mut probe, " ") {
        ua.name = "Opera".to_string();
        ua.version = version;
        *lx = probe;
    }
}

/// Parses the `Mozilla/5.0 (<platform>) ` prefix shared by Gecko and `WebKit`.
pub(crate) fn parse_mozilla_like(lx: &mut Lexer<'_>, ua: &mut UserAgent) -> Option<()> {
    ua.agent_type = AgentType::Browser;
    lx.require(MOZILLA_5_PREFIX)?;

    if lx.match_literal("X11; ") {
        ua.security = parse_security(lx);
        parse_unix_like(lx, ua);
    } else if lx.match_literal("Android") {
        ua.security = parse_security(lx);
        ua.os = OS_ANDROID.to_string();
        parse_os_version(lx, ua)?;
        if lx.match_literal("; Mobile") {
            ua.mobile = true;
        } else if lx.match_literal("; Tablet") {
            ua.tablet = true;
        }
    } else if lx.match_literal("Linux; ") {
        ua.security = parse_security(lx);
        lx.require("Android")?;
        ua.os = OS_ANDROID.to_string();
        parse_os_version(lx, ua)?;
    } else if lx.match_literal("Windows") {
        ua.security = parse_security(lx);
        ua.os = OS_WINDOWS.to_string();
        parse_os_version(lx, ua)?;
    } else if lx.match_literal("Macintosh") {
        ua.security = parse_security(lx);
        ua.os = OS_MAC_OS_X.to_string();
        parse_os_version(lx, ua)?;
    } else if lx.match_literal("Mobile; ") {
        ua.security = parse_security(lx);
        ua.os = OS_FIREFOX_OS.to_string();
        ua.mobile = true;
    } else if lx.match_literal("Tablet; ") {
        ua.security = parse_security(lx);
        ua.os = OS_FIREFOX_OS.to_string();
        ua.tablet = true;
    } else if lx.match_literal("iPad; ") {
        ua.security = parse_security(lx);
        ua.os = OS_IOS.to_string();
        ua.tablet = true;
        parse_os_version(lx, ua)?;
    } else if lx.match_first_of(&["iPhone; ", "iPod; ", "iPod touch; "]) {
        ua.security = parse_security(lx);
        ua.os = OS_IOS.to_string();
        ua.mobile = true;
        parse_os_version(lx, ua)?;
    } else if lx.match_literal("Unknown; ") {
        ua.security = parse_security(lx);
        parse_unix_like(lx, ua);
    } else {
        return None;
    }

    lx.span(") ")?;
    Some(())
}

/// <https://developer.mozilla.org/en-US/docs/Web/HTTP/Gecko_user_agent_string_reference>
pub(crate) fn gecko(lx: &mut Lexer<'_>) -> Option<UserAgent> {
    let mut ua = UserAgent::blank();

    parse_mozilla_like(lx, &mut ua)?;
    lx.require("Gecko/")?;
    lx.span(" ")?;
    let (name, version) = scan_name_version(lx)?;
    ua.name = name.to_string();
    ua.version = version;
    sniff_trailing_opera(lx, &mut ua);

    Some(ua)
}

/// Chrome, Safari and the browsers built on their engines.
pub(crate) fn chrome_safari(lx: &mut Lexer<'_>) -> Option<UserAgent> {
    let mut ua = UserAgent::blank();

    parse_mozilla_like(lx, &mut ua)?;
    lx.require("AppleWebKit/")?;
    lx.span(" ")?;
    lx.require("(KHTML, like Gecko) ")?;
    let (name, version) = scan_name_version(lx)?;
    ua.version = version;

    let mut mobile_token = false;
    ua.name = match name {
        "CriOS" => "Chrome".to_string(),
        "FxiOS" => "Firefox".to_string(),
        "Version" => {
            if lx.match_literal("Chrome/") {
                ua.version = scan_version(lx, " ")?;
                ua.agent_type = AgentType::Library;
                "WebView".to_string()
            } else {
                if lx.match_literal("Mobile/") {
                    lx.span(" ")?;
                } else if lx.match_literal("Mobile ") {
                    mobile_token = true;
                }
                lx.require("Safari/")?;
                "Safari".to_string()
            }
        }
        "Silk" => {
            lx.require("like Chrome/")?;
            lx.span(" ")?;
            name.to_string()
        }
        "PhantomJS" => {
            ua.agent_type = AgentType::Library;
            name.to_string()
        }
        _ => name.to_string(),
    };

    if ua.os == OS_ANDROID {
        let mobile = mobile_token || lx.match_literal("Mobile");
        ua.mobile = mobile;
        ua.tablet = !mobile;
    }

    for (token, rebrand) in CHROMIUM_REBRANDS {
        let mut probe = *lx;
        if probe.span(token).is_some() {
            if let Some(version) = scan_version(&mut probe, " ") {
                ua.version = version;
                ua.name = rebrand.to_string();
                *lx = probe;
            }
            break;
        }
    }

    Some(ua)
}

/// pre IE11 user agents
pub(crate) fn legacy_ie(lx: &mut Lexer<'_>) -> Option<UserAgent> {
    let mut ua = UserAgent::blank();
    ua.agent_type = AgentType::Browser;

    lx.require("Mozilla")?;
    lx.span(" (")?;
    lx.match_first_of(&["compatible; ", "Compatible; "]);
    lx.require("MSIE ")?;
    ua.name = "MSIE".to_string();
    ua.os = OS_WINDOWS.to_string();
    ua.version = scan_version(lx, ";")?;
    lx.require(" Windows NT")?;
    parse_os_version_lenient(lx, &mut ua);
    sniff_trailing_opera(lx, &mut ua);

    Some(ua)
}

/// IE11 changed its user agent string to look like Gecko:
/// <http://blogs.msdn.com/b/ieinternals/archive/2013/09/21/internet-explorer-11-user-agent-string-ua-string-sniffing-compatibility-with-gecko-webkit.aspx>
pub(crate) fn modern_ie(lx: &mut Lexer<'_>) -> Option<UserAgent> {
    let mut ua = UserAgent::blank();
    ua.agent_type = AgentType::Browser;

    lx.require("Mozilla")?;
    lx.span(" (")?;
    lx.require("Windows NT")?;
    ua.os = OS_WINDOWS.to_string();
    parse_os_version_lenient(lx, &mut ua);
    lx.span("Trident/")?;
    lx.span("rv:")?;
    ua.name = "MSIE".to_string();
    ua.version = scan_version(lx, ")")?;

    Some(ua)
}

/// Opera up to 12, before the switch to Chromium.
pub(crate) fn opera_classic(lx: &mut Lexer<'_>) -> Option<UserAgent> {
    let mut ua = UserAgent::blank();
    ua.agent_type = AgentType::Browser;

    lx.require("Opera/")?;
    ua.name = "Opera".to_string();
    ua.version = scan_version(lx, " (")?;

    ua.security = scan_group_security(lx);
    if group_contains(lx, "Opera Tablet") {
        ua.tablet = true;
    } else if group_contains(lx, "Opera Mobi") || group_contains(lx, "Opera Mini") {
        ua.mobile = true;
    }

    lx.match_literal("X11; ");
    if !parse_unix_like(lx, &mut ua) {
        let platform = OPERA_PLATFORMS
            .iter()
            .find(|(token, _)| lx.match_literal(token));
        if let Some(&(_, os)) = platform {
            ua.os = os.to_string();
            parse_os_version(lx, &mut ua)?;
        }
    }

    // Opera Mini nests a device group and leaves the outer one open
    lx.span_before("(", ")");
    lx.span(")")?;

    if lx.match_literal(" Presto/") && lx.span(" ").is_none() {
        return Some(ua);
    }
    lx.match_literal(" ");
    if lx.match_literal("Version/") {
        ua.version = scan_version(lx, " ")?;
    }

    Some(ua)
}
