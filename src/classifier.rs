// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    parser::{matches_v4_pattern, strip_brackets},
    strings::*,
    structs::{AddressLiteral, IpFam},
    tools::AddressTools,
    AddressError,
};
use tracing::debug;

impl AddressTools {
    /// True if `text` is a literal IPv4 or IPv6 address.
    pub fn is_ip_literal(&self, text: &str) -> bool {
        self.is_v4_literal(text) || self.is_v6_literal(text)
    }

    /// `false` also when the answer cannot be determined; see [AddressTools::try_is_v4_literal].
    pub fn is_v4_literal(&self, text: &str) -> bool {
        self.try_is_v4_literal(text).unwrap_or(false)
    }

    /// `false` also when the answer cannot be determined; see [AddressTools::try_is_v6_literal].
    pub fn is_v6_literal(&self, text: &str) -> bool {
        self.try_is_v6_literal(text).unwrap_or(false)
    }

    /**
    Whether the trimmed `text` is dotted-decimal IPv4.

    Without a strict IPv4 parser this falls back to the dotted-decimal grammar
    (if [ToolsConfig::v4_pattern_fallback](crate::ToolsConfig) allows it),
    otherwise [AddressError::ParserUnavailable].
    */
    pub fn try_is_v4_literal(&self, text: &str) -> Result<bool, AddressError> {
        let text: &str = text.trim();
        if text.is_empty() {
            return Ok(false);
        }

        match self.parser.parse_v4(text) {
            Ok(bytes) => Ok(bytes.is_some()),
            Err(e) if self.config.v4_pattern_fallback => match matches_v4_pattern(text) {
                Some(matched) => {
                    debug!(input = text, matched, "{DBG_PATTERN}");
                    Ok(matched)
                }
                None => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    /**
    Whether `text` is an IPv6 literal, optionally in brackets.

    Text without a colon is rejected before the parser is consulted.
    */
    pub fn try_is_v6_literal(&self, text: &str) -> Result<bool, AddressError> {
        if !text.contains(COLON) {
            return Ok(false);
        }
        let text: &str = strip_brackets(text.trim());
        Ok(self.parser.parse_v6(text)?.is_some())
    }

    /**
    Address family of a literal. IPv4 is checked first, a literal never
    matches both.

    ### Errors
    - [AddressError::NotLiteral] if neither family matches
    - [AddressError::ParserUnavailable] if nothing matched and a family could not be checked
    */
    pub fn classify(&self, text: &str) -> Result<IpFam, AddressError> {
        let v4 = self.try_is_v4_literal(text);
        if let Ok(true) = v4 {
            return Ok(IpFam::V4);
        }
        let v6 = self.try_is_v6_literal(text);
        if let Ok(true) = v6 {
            return Ok(IpFam::V6);
        }
        v4.and(v6)?;
        Err(AddressError::NotLiteral(text.into()))
    }

    /// Raw bytes of a literal address, IPv4-mapped IPv6 as its 4 IPv4 bytes.
    /// Never uses the fallback grammar.
    pub fn address_bytes(&self, text: &str) -> Result<AddressLiteral, AddressError> {
        self.parser
            .parse(text)?
            .map(AddressLiteral::unmapped)
            .ok_or_else(|| AddressError::NotLiteral(text.into()))
    }
}

/* -------------------------------------------------------------------------- */
