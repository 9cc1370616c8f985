//! OS version extraction from the platform group of a user agent.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{OS_ANDROID, OS_IOS, OS_MAC_OS_X, OS_WINDOWS};
use crate::error::VersionError;
use crate::lexer::Lexer;
use crate::version::Version;

/// `Intel Mac OS X 10_6_8`, `CPU iPhone OS 5_1_1 like Mac OS X`
static APPLE_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^)]*?)([0-9]+_[0-9]+(?:_[0-9]+)?)").expect("apple version pattern")
});

/// `Android 4.4.3`, `Windows NT 6.1`
static DOTTED_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^)]*?) ([0-9]+\.[0-9]+(?:\.[0-9]+)?)").expect("dotted version pattern")
});

/// Looks for the version of `os` before the end of the current group.
///
/// Returns `Ok(None)` when the OS never carries a version or none is present.
/// Only a token that matched the pattern but does not parse is an error. The
/// lexer moves only when a version is returned.
pub(crate) fn scan_os_version(
    lx: &mut Lexer<'_>,
    os: &str,
) -> Result<Option<Version>, VersionError> {
    let (pattern, apple) = match os {
        OS_MAC_OS_X | OS_IOS => (&*APPLE_VERSION, true),
        OS_ANDROID | OS_WINDOWS => (&*DOTTED_VERSION, false),
        _ => return Ok(None),
    };

    let mut probe = *lx;
    let Some((_, raw)) = probe.span_by_pattern(pattern) else {
        return Ok(None);
    };
    let version = if apple {
        Version::parse_tolerant(&raw.replace('_', "."))?
    } else {
        Version::parse_tolerant(raw)?
    };
    *lx = probe;
    Ok(Some(version))
}
