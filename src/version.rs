//! Semantic versions as found in user agent strings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;
use crate::lexer::Lexer;

/// A semantic version `major.minor.patch[-pre][+build]`.
///
/// User agents rarely ship well-formed semantic versions, so the matchers go
/// through [`Version::parse_tolerant`], which pads, truncates and trims the raw
/// token before handing it to the strict [`Version::parse`].
///
/// The default value `0.0.0` doubles as the "not determined" sentinel.
///
/// # Examples
///
/// ```
/// use useragent::Version;
///
/// let v = Version::parse_tolerant("41.0.2227.0").unwrap();
/// assert_eq!(v, Version::new(41, 0, 2227));
///
/// let v = Version::parse_tolerant("0.8.6-i18n-misc").unwrap();
/// assert_eq!(v.pre.as_deref(), Some("i18n-misc"));
/// assert_eq!(v.to_string(), "0.8.6-i18n-misc");
///
/// let v = Version::parse_tolerant("3.0.5+dev").unwrap();
/// assert_eq!(v.build.as_deref(), Some("dev"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major version
    pub major: u64,
    /// Minor version
    pub minor: u64,
    /// Patch version
    pub patch: u64,
    /// Prerelease tag, without the leading hyphen
    pub pre: Option<String>,
    /// Build metadata, without the leading plus; ignored for precedence
    pub build: Option<String>,
}

impl Version {
    /// Creates a release version.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
            build: None,
        }
    }

    /// Parses a version with either 3 numeric fields or a single one
    /// (`"38"` reads as `38.0.0`), followed by an optional `-pre` suffix and
    /// optional `+build` metadata.
    ///
    /// # Errors
    ///
    /// Returns `VersionError` if:
    /// - The input is empty
    /// - There are 2 or more than 3 numeric fields
    /// - A numeric field is empty, not a number, too large, or has a leading zero
    /// - The prerelease suffix is empty or contains invalid characters
    /// - The build metadata is empty or contains invalid characters
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        if input.is_empty() {
            return Err(VersionError::Empty);
        }

        let (input, build) = match input.split_once('+') {
            Some((input, build)) => (input, Some(Self::parse_build(build)?)),
            None => (input, None),
        };
        let (numeric, pre) = match input.split_once('-') {
            Some((numeric, pre)) => (numeric, Some(Self::parse_prerelease(pre)?)),
            None => (input, None),
        };

        let fields: Vec<&str> = numeric.split('.').collect();
        let mut parts = [0u64; 3];
        match fields.len() {
            1 | 3 => {
                for (i, field) in fields.iter().enumerate() {
                    parts[i] = Self::parse_field(i, field)?;
                }
            }
            actual => return Err(VersionError::WrongFieldCount { actual }),
        }

        Ok(Self {
            major: parts[0],
            minor: parts[1],
            patch: parts[2],
            pre,
            build,
        })
    }

    /// Normalizes a raw user agent version token and parses it.
    ///
    /// - extra dotted fields are dropped: `X.Y.Z.Q.W-beta` → `X.Y.Z-beta`
    /// - a missing patch field is added: `X.Y` → `X.Y.0`
    /// - a single field is kept as is
    /// - leading zeros are stripped: `008.1.2` → `8.1.2`
    /// - `-pre` and `+build` suffixes are kept verbatim
    ///
    /// # Errors
    ///
    /// Returns `VersionError` if the normalized token still is not a version,
    /// e.g. a field holds letters or is empty.
    pub fn parse_tolerant(raw: &str) -> Result<Self, VersionError> {
        Self::parse(&Self::normalize(raw))
    }

    /// Returns true for the `0.0.0` "not determined" sentinel.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.major == 0
            && self.minor == 0
            && self.patch == 0
            && self.pre.is_none()
            && self.build.is_none()
    }

    fn normalize(raw: &str) -> String {
        let (raw, build) = match raw.split_once('+') {
            Some((raw, build)) => (raw, Some(build)),
            None => (raw, None),
        };
        let (numeric, pre) = match raw.split_once('-') {
            Some((numeric, pre)) => (numeric, Some(pre)),
            None => (raw, None),
        };

        let mut fields: Vec<&str> = numeric.split('.').collect();
        if fields.len() == 2 {
            fields.push("0");
        }
        fields.truncate(3);

        let mut normalized = fields
            .iter()
            .map(|field| match field.trim_start_matches('0') {
                "" if !field.is_empty() => "0",
                trimmed => trimmed,
            })
            .collect::<Vec<_>>()
            .join(".");

        if let Some(pre) = pre {
            normalized.push('-');
            normalized.push_str(pre);
        }
        if let Some(build) = build {
            normalized.push('+');
            normalized.push_str(build);
        }
        normalized
    }

    fn parse_field(index: usize, field: &str) -> Result<u64, VersionError> {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::InvalidNumber {
                field: index,
                value: field.to_string(),
            });
        }
        if field.len() > 1 && field.starts_with('0') {
            return Err(VersionError::LeadingZero { field: index });
        }
        field.parse().map_err(|_| VersionError::InvalidNumber {
            field: index,
            value: field.to_string(),
        })
    }

    fn parse_prerelease(pre: &str) -> Result<String, VersionError> {
        if valid_identifiers(pre) {
            Ok(pre.to_string())
        } else {
            Err(VersionError::InvalidPrerelease {
                value: pre.to_string(),
            })
        }
    }

    fn parse_build(build: &str) -> Result<String, VersionError> {
        if valid_identifiers(build) {
            Ok(build.to_string())
        } else {
            Err(VersionError::InvalidBuild {
                value: build.to_string(),
            })
        }
    }
}

/// Dot separated, non-empty identifiers over `[0-9A-Za-z-]`.
fn valid_identifiers(s: &str) -> bool {
    s.split('.').all(|ident| {
        !ident.is_empty() && ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Reads a version token up to `sep`, or up to the end of input when `sep`
/// never occurs, and parses it tolerantly.
pub(crate) fn scan_version(lx: &mut Lexer<'_>, sep: &str) -> Option<Version> {
    let mut probe = *lx;
    let raw = probe.span(sep).unwrap_or_else(|| probe.take_rest());
    let version = Version::parse_tolerant(raw).ok()?;
    *lx = probe;
    Some(version)
}

/// Reads a `Name/Version` pair; the version runs up to the next space.
pub(crate) fn scan_name_version<'a>(lx: &mut Lexer<'a>) -> Option<(&'a str, Version)> {
    let mut probe = *lx;
    let name = probe.span("/")?;
    let version = scan_version(&mut probe, " ")?;
    *lx = probe;
    Some((name, version))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{pre}")?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                // a prerelease sorts before its release
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => cmp_prerelease(a, b),
            })
            // build metadata has no precedence; it only separates versions Eq tells apart
            .then_with(|| self.build.cmp(&other.build))
    }
}

fn cmp_prerelease(a: &str, b: &str) -> Ordering {
    let mut lhs = a.split('.');
    let mut rhs = b.split('.');
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(n), Ok(m)) => n.cmp(&m).then_with(|| x.cmp(y)),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
