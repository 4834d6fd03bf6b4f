// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{IPV4_BITS, IPV6_BITS};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

/// IP address family
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum IpFam {
    V4,
    V6,
}

impl IpFam {
    /// Address width in bits: 32 or 128.
    pub fn bits(&self) -> u8 {
        match self {
            IpFam::V4 => IPV4_BITS,
            IpFam::V6 => IPV6_BITS,
        }
    }
}

impl fmt::Display for IpFam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFam::V4 => write!(f, "IPv4"),
            IpFam::V6 => write!(f, "IPv6"),
        }
    }
}

/* ---------------------------------- */

/**
Raw bytes of a parsed literal address, in network order.

The [Display] impl is the canonical rendering and depends on nothing but the
bytes:
- **v4**: dotted decimal without leading zeros, `10.0.0.1`
- **v6**: all eight groups in lowercase hex without leading zeros and without
  `::` compression, `0:0:0:0:0:0:0:1`
*/
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AddressLiteral {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl AddressLiteral {
    pub fn fam(&self) -> IpFam {
        match self {
            AddressLiteral::V4(_) => IpFam::V4,
            AddressLiteral::V6(_) => IpFam::V6,
        }
    }

    pub fn octets(&self) -> &[u8] {
        match self {
            AddressLiteral::V4(b) => b,
            AddressLiteral::V6(b) => b,
        }
    }

    /// Number of set bits across all bytes.
    pub fn count_ones(&self) -> u32 {
        self.octets().iter().map(|b| b.count_ones()).sum()
    }

    /// An IPv4-mapped IPv6 address (`::ffff:a.b.c.d`) as its IPv4 form,
    /// anything else unchanged.
    pub fn unmapped(self) -> Self {
        match self {
            AddressLiteral::V6(b) => match Ipv6Addr::from(b).to_ipv4_mapped() {
                Some(v4) => AddressLiteral::V4(v4.octets()),
                None => self,
            },
            AddressLiteral::V4(_) => self,
        }
    }
}

impl fmt::Display for AddressLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressLiteral::V4([a, b, c, d]) => write!(f, "{a}.{b}.{c}.{d}"),
            AddressLiteral::V6(b) => {
                for (i, pair) in b.chunks_exact(2).enumerate() {
                    if i > 0 {
                        f.write_str(":")?;
                    }
                    write!(f, "{:x}", u16::from_be_bytes([pair[0], pair[1]]))?;
                }
                Ok(())
            }
        }
    }
}

impl From<AddressLiteral> for IpAddr {
    fn from(lit: AddressLiteral) -> Self {
        match lit {
            AddressLiteral::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            AddressLiteral::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

impl From<IpAddr> for AddressLiteral {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(a) => AddressLiteral::V4(a.octets()),
            IpAddr::V6(a) => AddressLiteral::V6(a.octets()),
        }
    }
}

/* -------------------------------------------------------------------------- */

/// Which parsers an [AddressTools](crate::AddressTools) instance can rely on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    /// strict IPv4 parser (yields bytes)
    pub v4: bool,
    /// strict IPv6 parser (yields bytes)
    pub v6: bool,
    /// dotted-decimal fallback grammar, classification only
    pub v4_pattern: bool,
}

impl Capability {
    /// True if both strict parsers are present.
    pub fn is_full(&self) -> bool {
        self.v4 && self.v6
    }

    pub fn supports(&self, fam: IpFam) -> bool {
        match fam {
            IpFam::V4 => self.v4,
            IpFam::V6 => self.v6,
        }
    }
}

/* -------------------------------------------------------------------------- */
