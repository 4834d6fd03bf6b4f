// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    cache::CanonicalCache,
    parser::{AddressParser, LiteralParser, StrictParser},
    strings::*,
    structs::{AddressLiteral, Capability, IpFam},
    AddressError,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Behaviour switches for an [AddressTools] instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// memoize canonical forms in the instance's [CanonicalCache]
    pub cache: bool,
    /// classify IPv4 by the dotted-decimal grammar if the strict IPv4 parser is missing
    pub v4_pattern_fallback: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            cache: true,
            v4_pattern_fallback: true,
        }
    }
}

/**
Parser, canonical-form cache and configuration in one place.

Most callers want the process-wide instance behind the free functions of this
crate ([canonicalize], [same_address], ...). Build your own to plug in a
different [LiteralParser] or to keep a private cache.
*/
pub struct AddressTools {
    pub(crate) parser: AddressParser,
    pub(crate) cache: CanonicalCache,
    pub(crate) config: ToolsConfig,
}

impl AddressTools {
    pub fn new() -> Self {
        Self::with_parser(StrictParser, ToolsConfig::default())
    }

    pub fn with_config(config: ToolsConfig) -> Self {
        Self::with_parser(StrictParser, config)
    }

    /// Build an instance around `parser`. A parser missing a family is logged once, here.
    pub fn with_parser(parser: impl LiteralParser + 'static, config: ToolsConfig) -> Self {
        let parser: AddressParser = AddressParser::new(parser);
        let cap: Capability = parser.capability();
        if !cap.is_full() {
            error!(v4 = cap.v4, v6 = cap.v6, v4_pattern = cap.v4_pattern, "{ERR_DEGRADED}");
        }
        Self {
            parser,
            cache: CanonicalCache::new(),
            config,
        }
    }

    /// Which parsers this instance can rely on.
    pub fn capability(&self) -> Capability {
        self.parser.capability()
    }

    pub fn cache(&self) -> &CanonicalCache {
        &self.cache
    }

    pub fn config(&self) -> &ToolsConfig {
        &self.config
    }
}

impl Default for AddressTools {
    fn default() -> Self {
        Self::new()
    }
}

/* -------------------------------------------------------------------------- */

// The parser is chosen once per process, on first use.
lazy_static! {
    static ref TOOLS: AddressTools = AddressTools::new();
}

/// The process-wide instance used by the free functions.
pub fn tools() -> &'static AddressTools {
    &TOOLS
}

/// Parser availability of the process-wide instance.
pub fn capability() -> Capability {
    TOOLS.capability()
}

/// True if `text` is a literal IPv4 or IPv6 address.
pub fn is_ip_literal(text: &str) -> bool {
    TOOLS.is_ip_literal(text)
}

pub fn is_v4_literal(text: &str) -> bool {
    TOOLS.is_v4_literal(text)
}

pub fn is_v6_literal(text: &str) -> bool {
    TOOLS.is_v6_literal(text)
}

/// Address family of a literal, see [AddressTools::classify].
pub fn ip_version(text: &str) -> Result<IpFam, AddressError> {
    TOOLS.classify(text)
}

pub fn address_bytes(text: &str) -> Result<AddressLiteral, AddressError> {
    TOOLS.address_bytes(text)
}

/// Canonical form of a literal address, or the (trimmed) input itself.
pub fn canonicalize(text: &str) -> String {
    TOOLS.canonicalize(text)
}

pub fn same_address(a: Option<&str>, b: Option<&str>) -> bool {
    TOOLS.same_address(a, b)
}

pub fn netmask_for_cidr(cidr: &str) -> Result<String, AddressError> {
    TOOLS.netmask_for_cidr(cidr)
}

pub fn prefix_length_for_netmask(netmask: &str) -> Result<u32, AddressError> {
    TOOLS.prefix_length_for_netmask(netmask)
}

pub fn format_cidr(address: &str, netmask: &str) -> Result<String, AddressError> {
    TOOLS.format_cidr(address, netmask)
}

pub fn is_contiguous_netmask(netmask: &str) -> Result<bool, AddressError> {
    TOOLS.is_contiguous_netmask(netmask)
}

/* -------------------------------------------------------------------------- */
