// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    strings::*,
    structs::{AddressLiteral, Capability, IpFam},
    AddressError,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv6Addr;
use tracing::error;

/// One dotted-decimal octet: `0-199` (with optional leading zeros), `200-249`, `250-255`.
const V4_OCTET: &str = "([01]?[0-9][0-9]?|2[0-4][0-9]|25[0-5])";

lazy_static! {
    static ref V4_PATTERN: Option<Regex> = compile_v4_pattern();
}

fn compile_v4_pattern() -> Option<Regex> {
    let pattern: String = format!(r"^{V4_OCTET}\.{V4_OCTET}\.{V4_OCTET}\.{V4_OCTET}$");
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            error!(error = %e, "{ERR_PATTERN}");
            None
        }
    }
}

/// Whether the dotted-decimal fallback grammar compiled.
pub(crate) fn v4_pattern_available() -> bool {
    V4_PATTERN.is_some()
}

/**
Match `text` against the dotted-decimal fallback grammar.

Classification only, this never yields bytes. `None` if the grammar itself
is unavailable.
*/
pub(crate) fn matches_v4_pattern(text: &str) -> Option<bool> {
    V4_PATTERN.as_ref().map(|re| re.is_match(text))
}

/// Strip one pair of enclosing brackets, as in `[::1]`.
#[inline]
pub(crate) fn strip_brackets(text: &str) -> &str {
    text.strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text)
}

/* -------------------------------------------------------------------------- */

/**
A strict textual-to-binary address parser.

Implementations must never resolve names. A parser that cannot handle a
family at all says so through [LiteralParser::supports]; returning `None`
from a parse method means "does not match", nothing else.
*/
pub trait LiteralParser: Send + Sync {
    fn supports(&self, _fam: IpFam) -> bool {
        true
    }

    fn parse_v4(&self, text: &str) -> Option<[u8; 4]>;

    /// `text` comes without enclosing brackets.
    fn parse_v6(&self, text: &str) -> Option<[u8; 16]>;
}

/**
The production parser.

- **v4**: exactly four `.`-separated groups of 1..=3 ASCII digits, each <= 255.
  Leading zeros are tolerated and read as decimal (`010` is 10).
- **v6**: standard colon-hex forms, `::` compression and a dotted IPv4 tail.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictParser;

impl LiteralParser for StrictParser {
    fn parse_v4(&self, text: &str) -> Option<[u8; 4]> {
        let mut out: [u8; 4] = [0; 4];
        let mut parts = text.split('.');
        for octet in out.iter_mut() {
            *octet = parse_octet(parts.next()?)?;
        }
        match parts.next() {
            Some(_) => None,
            None => Some(out),
        }
    }

    fn parse_v6(&self, text: &str) -> Option<[u8; 16]> {
        text.parse::<Ipv6Addr>().ok().map(|a| a.octets())
    }
}

#[inline]
fn parse_octet(s: &str) -> Option<u8> {
    if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u8>().ok()
}

/* -------------------------------------------------------------------------- */

/// Wraps a [LiteralParser] and turns a missing family into an error instead of a "no".
pub struct AddressParser {
    inner: Box<dyn LiteralParser>,
}

impl AddressParser {
    pub fn new(inner: impl LiteralParser + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn capability(&self) -> Capability {
        Capability {
            v4: self.inner.supports(IpFam::V4),
            v6: self.inner.supports(IpFam::V6),
            v4_pattern: v4_pattern_available(),
        }
    }

    pub fn parse_v4(&self, text: &str) -> Result<Option<[u8; 4]>, AddressError> {
        if !self.inner.supports(IpFam::V4) {
            return Err(unavailable(IpFam::V4, text));
        }
        Ok(self.inner.parse_v4(text))
    }

    /// `text` must already be stripped of enclosing brackets.
    pub fn parse_v6(&self, text: &str) -> Result<Option<[u8; 16]>, AddressError> {
        if !self.inner.supports(IpFam::V6) {
            return Err(unavailable(IpFam::V6, text));
        }
        Ok(self.inner.parse_v6(text))
    }

    /**
    Parse a trimmed `text` as IPv4, then as IPv6 (brackets stripped).

    IPv6 is only attempted if `text` contains a colon. Returns `Ok(None)` if
    nothing matched and every family that was tried could be decided.
    */
    pub fn parse(&self, text: &str) -> Result<Option<AddressLiteral>, AddressError> {
        let text: &str = text.trim();

        let v4 = self.parse_v4(text);
        if let Ok(Some(b)) = v4 {
            return Ok(Some(AddressLiteral::V4(b)));
        }

        let v6 = match text.contains(COLON) {
            true => self.parse_v6(strip_brackets(text)),
            false => Ok(None),
        };
        if let Ok(Some(b)) = v6 {
            return Ok(Some(AddressLiteral::V6(b)));
        }

        v4.and(v6).map(|_| None)
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new(StrictParser)
    }
}

#[inline]
fn unavailable(fam: IpFam, text: &str) -> AddressError {
    AddressError::ParserUnavailable {
        fam,
        input: text.into(),
    }
}

/* -------------------------------------------------------------------------- */


/* -------------------------------------------------------------------------- */
