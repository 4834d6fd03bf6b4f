// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Literal IP address detection, canonicalization and CIDR helpers.
//!
//! Nothing in here ever resolves a name: a host string is either an IPv4 or
//! IPv6 literal, or it is handed back untouched.

mod cache;
mod canonical;
mod cidr;
mod classifier;
mod compare;
mod parser;
mod strings;
mod structs;
mod tools;

use std::{error, fmt, num::ParseIntError};
use strings::*;

pub use cache::CanonicalCache;
pub use cidr::{cidr_address, cidr_prefix, netmask, CidrAddress};
pub use parser::{AddressParser, LiteralParser, StrictParser};
pub use structs::{AddressLiteral, Capability, IpFam};
pub use tools::*;

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// neither the IPv4 nor the IPv6 grammar matched
    NotLiteral(String),
    /// CIDR text without a '/'
    MissingPrefix(String),
    /// CIDR prefix is not a non-negative integer
    NumericFormat     { val: String,  source: ParseIntError },
    /// prefix wider than the address family allows
    PrefixRange       { cidr: String, prefix: u32, max: u8 },
    /// the strict parser for `fam` is not available, so `input` could not be decided
    ParserUnavailable { fam: IpFam,   input: String },
}

impl AddressError {
    /// The input that caused the failure, for diagnostics.
    pub fn input(&self) -> &str {
        match self {
            AddressError::NotLiteral(input) | AddressError::MissingPrefix(input) => input,
            AddressError::NumericFormat { val, .. } => val,
            AddressError::PrefixRange { cidr, .. } => cidr,
            AddressError::ParserUnavailable { input, .. } => input,
        }
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::NotLiteral(input) => {
                write!(f, "{ERR_NOT_LITERAL}: '{input}'")
            }
            AddressError::MissingPrefix(cidr) => {
                write!(f, "{ERR_MISSING_PREFIX}: '{cidr}'")
            }
            AddressError::NumericFormat { val, source } => {
                write!(f, "{ERR_PREFIX_FMT}: '{val}': {source}")
            }
            AddressError::PrefixRange { cidr, prefix, max } => {
                write!(f, "{ERR_PREFIX_RANGE}: '{cidr}' ({prefix} > {max})")
            }
            AddressError::ParserUnavailable { fam, input } => {
                write!(f, "{ERR_UNAVAILABLE} {fam}: '{input}'")
            }
        }
    }
}

impl error::Error for AddressError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AddressError::NumericFormat { source, .. } => Some(source),
            _ => None,
        }
    }
}

/* -------------------------------------------------------------------------- */
