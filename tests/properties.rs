//! Property-based tests for the cascade and the version normalizer.

use proptest::prelude::*;

use useragent::{AgentType, Family, UserAgent, Version};

mod strategies {
    use super::*;

    /// Names from the browser homepage table.
    const KNOWN_BROWSERS: &[&str] = &[
        "Chrome",
        "Dillo",
        "Edge",
        "Firefox",
        "IceCat",
        "Iceweasel",
        "MSIE",
        "NetSurf",
        "Opera",
        "PhantomJS",
        "Safari",
        "Silk",
        "WebView",
    ];

    pub fn known_browser() -> impl Strategy<Value = &'static str> {
        prop::sample::select(KNOWN_BROWSERS)
    }

    /// Version fields without leading zeros.
    pub fn field() -> impl Strategy<Value = u64> {
        0u64..100_000
    }

    /// A prerelease tag made of non-empty alphanumeric identifiers.
    pub fn prerelease() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,5}(\\.[a-z0-9]{1,4}){0,2}"
    }

    /// Build metadata identifiers.
    pub fn build_metadata() -> impl Strategy<Value = String> {
        "[0-9a-z][0-9a-z\\-]{0,5}(\\.[0-9a-z]{1,4}){0,2}"
    }

    /// Strings that start like a browser but go off the rails.
    pub fn mozilla_noise() -> impl Strategy<Value = String> {
        "Mozilla/5\\.0 \\((X11|Windows|Linux|Android|Macintosh|iPhone|compatible)[ ;a-zA-Z0-9_.:/]{0,30}\\)? ?[ -~]{0,60}"
    }
}

mod cascade_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn arbitrary_text_never_panics(s in "\\PC{0,200}") {
            let first = useragent::parse(&s);
            let second = useragent::parse(&s);
            prop_assert_eq!(&first, &second);
            if let Some(ua) = first {
                prop_assert_eq!(ua.original(), s.as_str());
                prop_assert!(!(ua.is_mobile() && ua.is_tablet()));
            }
        }

        #[test]
        fn mozilla_noise_is_deterministic(s in mozilla_noise()) {
            let first = UserAgent::parse(&s);
            prop_assert_eq!(&first, &UserAgent::parse(&s));
            if let Ok(ua) = first {
                prop_assert!(!(ua.is_mobile() && ua.is_tablet()), "mobile and tablet: {}", s);
            }
        }

        #[test]
        fn known_name_version_is_recognized(
            name in known_browser(),
            (major, minor, patch) in (field(), field(), field()),
        ) {
            let input = format!("{name}/{major}.{minor}.{patch}");
            let ua = useragent::parse(&input);
            prop_assert!(ua.is_some(), "not recognised: {}", input);
            let ua = ua.unwrap();
            prop_assert_eq!(ua.agent_type(), AgentType::Browser);
            prop_assert_eq!(ua.name(), name);
            prop_assert_eq!(ua.version(), &Version::new(major, minor, patch));
            prop_assert!(ua.url().is_some());
        }

        #[test]
        fn parse_is_the_first_recognizing_family(s in mozilla_noise()) {
            let first = Family::CASCADE.iter().find_map(|family| family.recognize(&s));
            prop_assert_eq!(first, useragent::parse(&s));
        }
    }
}

mod version_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn two_fields_get_a_zero_patch(major in field(), minor in field()) {
            let v = Version::parse_tolerant(&format!("{major}.{minor}")).unwrap();
            prop_assert_eq!(v, Version::new(major, minor, 0));
        }

        #[test]
        fn extra_fields_are_dropped(
            (major, minor, patch) in (field(), field(), field()),
            extra in prop::collection::vec(field(), 1..4),
            pre in prerelease(),
        ) {
            let tail: Vec<String> = extra.iter().map(u64::to_string).collect();
            let raw = format!("{major}.{minor}.{patch}.{}-{pre}", tail.join("."));
            let v = Version::parse_tolerant(&raw).unwrap();
            prop_assert_eq!(v.major, major);
            prop_assert_eq!(v.minor, minor);
            prop_assert_eq!(v.patch, patch);
            prop_assert_eq!(v.pre.as_deref(), Some(pre.as_str()));
        }

        #[test]
        fn leading_zeros_are_stripped(
            (major, minor, patch) in (field(), field(), field()),
            zeros in 1usize..4,
        ) {
            let pad = "0".repeat(zeros);
            let raw = format!("{pad}{major}.{pad}{minor}.{pad}{patch}");
            let v = Version::parse_tolerant(&raw).unwrap();
            prop_assert_eq!(v, Version::new(major, minor, patch));
        }

        #[test]
        fn single_field_is_a_major_version(major in field()) {
            let v = Version::parse_tolerant(&major.to_string()).unwrap();
            prop_assert_eq!(v, Version::new(major, 0, 0));
        }

        #[test]
        fn display_roundtrips(
            (major, minor, patch) in (field(), field(), field()),
            pre in prop::option::of(prerelease()),
            build in prop::option::of(build_metadata()),
        ) {
            let v = Version { major, minor, patch, pre, build };
            prop_assert_eq!(Version::parse(&v.to_string()), Ok(v));
        }

        #[test]
        fn prerelease_sorts_before_release(
            (major, minor, patch) in (field(), field(), field()),
            pre in prerelease(),
        ) {
            let release = Version::new(major, minor, patch);
            let candidate = Version { pre: Some(pre), ..release.clone() };
            prop_assert!(candidate < release);
        }

        #[test]
        fn build_metadata_has_no_precedence(
            (major, minor, patch) in (field(), field(), field()),
            build in build_metadata(),
        ) {
            let release = Version::new(major, minor, patch);
            let built = Version { build: Some(build), ..release.clone() };
            prop_assert!(built < Version::new(major, minor, patch + 1));
            let alpha = Version { pre: Some("alpha".to_string()), ..release };
            prop_assert!(built > alpha);
        }

        #[test]
        fn tolerant_parse_never_panics(s in "[0-9.\\-+a-z]{0,24}") {
            let _ = Version::parse_tolerant(&s);
        }
    }
}
