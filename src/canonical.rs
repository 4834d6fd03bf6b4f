// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{parser::strip_brackets, strings::*, structs::AddressLiteral, tools::AddressTools};
use tracing::warn;

impl AddressTools {
    /**
    Canonical form of a literal address, so that differently written literals
    of the same address compare equal as strings. IPv4-mapped IPv6 literals
    canonicalize to their IPv4 form.

    `localhost` and `127.0.0.1` are returned as-is without parsing. Anything
    that is not a literal comes back trimmed and without enclosing brackets;
    names are never resolved.

    Results are cached under the verbatim input.
    */
    pub fn canonicalize(&self, text: &str) -> String {
        if text == LOCALHOST || text == LOOPBACK_V4 {
            return text.to_string();
        }

        if self.config.cache {
            if let Some(hit) = self.cache.get(text) {
                return hit;
            }
        }

        let trimmed: &str = text.trim();
        match self.parser.parse(trimmed) {
            Ok(Some(literal)) => {
                let canonical: String = render(literal);
                match self.config.cache {
                    true => self.cache.insert(text, canonical),
                    false => canonical,
                }
            }
            Ok(None) => strip_brackets(trimmed).to_string(),
            Err(e) => {
                warn!(input = text, error = %e, "{WARN_UNDECIDED}");
                strip_brackets(trimmed).to_string()
            }
        }
    }
}

#[inline]
fn render(literal: AddressLiteral) -> String {
    literal.unmapped().to_string()
}

/* -------------------------------------------------------------------------- */
