//! Kani `Arbitrary` implementations and proof harnesses.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::lexer::Lexer;
use crate::version::Version;

/// Characters that drive the lexer and the version normalizer into their
/// interesting branches.
const UA_CHARS: &[u8] = b"0123456789.-_/;() MU";

fn arbitrary_ua_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % UA_CHARS.len();
    UA_CHARS[idx] as char
}

/// Short strings over [`UA_CHARS`], for tractability.
fn arbitrary_ua_string(max_len: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max_len + 1);
    (0..len).map(|_| arbitrary_ua_char()).collect()
}

impl kani::Arbitrary for Version {
    fn any() -> Self {
        let major: u8 = kani::any();
        let minor: u8 = kani::any();
        let patch: u8 = kani::any();
        Self::new(major.into(), minor.into(), patch.into())
    }
}

/// Proof: A failed span leaves the cursor where it was
#[kani::proof]
#[kani::unwind(8)]
fn proof_failed_span_does_not_move() {
    let input = arbitrary_ua_string(6);
    let before = Lexer::new(&input);
    let mut probe = before;
    if probe.span(";").is_none() {
        assert_eq!(probe, before);
    }
    let mut probe = before;
    if probe.span_before("/", ")").is_none() {
        assert_eq!(probe, before);
    }
}

/// Proof: A failed literal match leaves the cursor where it was
#[kani::proof]
#[kani::unwind(8)]
fn proof_failed_match_does_not_move() {
    let input = arbitrary_ua_string(6);
    let mut lx = Lexer::new(&input);
    let before = lx;
    if !lx.match_literal("M/") {
        assert_eq!(lx, before);
    }
}

/// Proof: The tolerant version parser never panics
#[kani::proof]
#[kani::unwind(8)]
fn proof_parse_tolerant_total() {
    let raw = arbitrary_ua_string(6);
    let _ = Version::parse_tolerant(&raw);
}

/// Proof: Display output parses back to the same release version
#[kani::proof]
#[kani::unwind(12)]
fn proof_display_roundtrip() {
    let v: Version = kani::any();
    let reparsed = Version::parse(&v.to_string()).expect("display output should parse");
    assert_eq!(reparsed, v);
}
