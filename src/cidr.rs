// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    strings::*,
    structs::{AddressLiteral, IpFam},
    tools::{tools, AddressTools},
    AddressError,
};
use ipnet::{Ipv4Net, Ipv6Net};
use serde::{Deserialize, Serialize};
use std::{
    array, fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};
use tracing::debug;

/// Address part of CIDR text: everything before the first `/`, or all of it.
pub fn cidr_address(cidr: &str) -> &str {
    cidr.split_once(SLASH).map_or(cidr, |(addr, _)| addr)
}

/// Prefix part of CIDR text, everything after the first `/`. Not checked to be numeric.
pub fn cidr_prefix(cidr: &str) -> Result<&str, AddressError> {
    cidr.split_once(SLASH)
        .map(|(_, prefix)| prefix)
        .ok_or_else(|| AddressError::MissingPrefix(cidr.into()))
}

/**
Netmask with the leading `prefix` bits set, for the given family.

Byte `i` carries `min(8, prefix - 8*i)` leading ones, bytes past the prefix
are `0x00`. `prefix` is capped at the family width.
*/
pub fn netmask(fam: IpFam, prefix: u8) -> AddressLiteral {
    let prefix: u8 = prefix.min(fam.bits());
    match fam {
        IpFam::V4 => AddressLiteral::V4(mask_bytes(prefix)),
        IpFam::V6 => AddressLiteral::V6(mask_bytes(prefix)),
    }
}

#[inline]
fn mask_bytes<const N: usize>(prefix: u8) -> [u8; N] {
    array::from_fn(|i| match (prefix as usize).saturating_sub(i * 8).min(8) {
        0 => 0x00,
        ones => 0xffu8 << (8 - ones),
    })
}

/* -------------------------------------------------------------------------- */

/// A validated `address/prefix` pair. The address is kept as written.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct CidrAddress {
    pub addr: String,
    pub fam: IpFam,
    /// **v4**: `0..=32`, **v6**: `0..=128`
    pub prefix: u8,
}

impl CidrAddress {
    pub fn netmask(&self) -> AddressLiteral {
        netmask(self.fam, self.prefix)
    }
}

impl fmt::Display for CidrAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", self.addr, self.prefix)
    }
}

impl FromStr for CidrAddress {
    type Err = AddressError;

    /// Parse with the process-wide [AddressTools].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tools().parse_cidr(s)
    }
}

/* -------------------------------------------------------------------------- */

impl AddressTools {
    /**
    Split and validate `address/prefix`.

    ### Errors
    - [AddressError::MissingPrefix] without a `/`
    - [AddressError::NumericFormat] if the prefix is not a non-negative integer
    - [AddressError::NotLiteral] / [AddressError::ParserUnavailable] for the address part
    - [AddressError::PrefixRange] if the prefix is wider than the address
    */
    pub fn parse_cidr(&self, cidr: &str) -> Result<CidrAddress, AddressError> {
        let addr: &str = cidr_address(cidr);
        let prefix_str: &str = cidr_prefix(cidr)?;

        let prefix: u32 = prefix_str
            .parse::<u32>()
            .map_err(|source| AddressError::NumericFormat {
                val: prefix_str.into(),
                source,
            })?;

        let fam: IpFam = self.classify(addr)?;
        if prefix > fam.bits() as u32 {
            return Err(AddressError::PrefixRange {
                cidr: cidr.into(),
                prefix,
                max: fam.bits(),
            });
        }

        Ok(CidrAddress {
            addr: addr.into(),
            fam,
            prefix: prefix as u8,
        })
    }

    /// Netmask of `address/prefix` in the address's own textual form,
    /// f.ex. `10.0.0.0/24` -> `255.255.255.0`.
    pub fn netmask_for_cidr(&self, cidr: &str) -> Result<String, AddressError> {
        match self.parse_cidr(cidr) {
            Ok(parsed) => Ok(parsed.netmask().to_string()),
            Err(e) => {
                debug!(input = cidr, error = %e, "{DBG_CIDR}");
                Err(e)
            }
        }
    }

    /**
    Prefix length of a netmask, counted as the number of set bits.

    NOTE: a non-contiguous mask such as `255.0.255.0` is accepted and yields a
    "prefix" (16) that no real CIDR has. Use [AddressTools::is_contiguous_netmask]
    to reject those.
    */
    pub fn prefix_length_for_netmask(&self, netmask: &str) -> Result<u32, AddressError> {
        Ok(self.address_bytes(netmask)?.count_ones())
    }

    /// Whether `netmask` is a run of leading ones followed only by zeros.
    pub fn is_contiguous_netmask(&self, netmask: &str) -> Result<bool, AddressError> {
        let mask: AddressLiteral = self.address_bytes(netmask)?;
        let ones: u8 = mask.count_ones() as u8;
        let expected: Option<IpAddr> = match mask.fam() {
            IpFam::V4 => Ipv4Net::new(Ipv4Addr::UNSPECIFIED, ones)
                .ok()
                .map(|net| IpAddr::V4(net.netmask())),
            IpFam::V6 => Ipv6Net::new(Ipv6Addr::UNSPECIFIED, ones)
                .ok()
                .map(|net| IpAddr::V6(net.netmask())),
        };
        Ok(expected == Some(IpAddr::from(mask)))
    }

    /// `address/prefix` from an address and a netmask, f.ex.
    /// `10.0.0.0` + `255.255.0.0` -> `10.0.0.0/16`. The address is not checked.
    pub fn format_cidr(&self, address: &str, netmask: &str) -> Result<String, AddressError> {
        let prefix: u32 = self.prefix_length_for_netmask(netmask)?;
        Ok(format!("{address}{SLASH}{prefix}"))
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser::testing::LimitedParser, ToolsConfig};

    const CIDR_V4: &str = "10.0.0.0/24";
    const CIDR_V6: &str = "[2001:db8::]/64";

    #[test]
    fn test_split() {
        assert_eq!(cidr_address(CIDR_V4), "10.0.0.0");
        assert_eq!(cidr_address("10.0.0.0"), "10.0.0.0");
        assert_eq!(cidr_address("10.0.0.0/24/8"), "10.0.0.0");
        assert_eq!(cidr_prefix(CIDR_V4), Ok("24"));
        assert_eq!(cidr_prefix("10.0.0.0/24/8"), Ok("24/8"));
        assert_eq!(cidr_prefix("10.0.0.0/"), Ok(""));
        assert_eq!(
            cidr_prefix("10.0.0.0"),
            Err(AddressError::MissingPrefix("10.0.0.0".into()))
        );
    }

    #[rustfmt::skip]
    #[test]
    fn test_netmask_for_cidr() {
        let tests: Vec<&str> = vec![
            "10.0.0.0/24",              "255.255.255.0",
            "10.0.0.0/0",               "0.0.0.0",
            "10.0.0.0/32",              "255.255.255.255",
            "10.0.0.0/8",               "255.0.0.0",
            "172.16.0.0/12",            "255.240.0.0",
            "192.168.1.0/30",           "255.255.255.252",
            "10.0.0.0/017",             "255.255.128.0",
            "::/0",                     "0:0:0:0:0:0:0:0",
            CIDR_V6,                    "ffff:ffff:ffff:ffff:0:0:0:0",
            "2001:db8::/36",            "ffff:ffff:f000:0:0:0:0:0",
            "::1/128",                  "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
        ];

        let tools = AddressTools::new();
        for i in (0..tests.len()).step_by(2) {
            let input: &str = tests[i];
            let expected: &str = tests[i + 1];
            assert_eq!(tools.netmask_for_cidr(input).as_deref(), Ok(expected), "Failed: '{input}'");
        }
    }

    #[test]
    fn test_netmask_matches_ipnet() {
        for prefix in 0..=32u8 {
            let net = Ipv4Net::new(Ipv4Addr::UNSPECIFIED, prefix).unwrap();
            let expected: AddressLiteral = IpAddr::V4(net.netmask()).into();
            assert_eq!(netmask(IpFam::V4, prefix), expected, "Failed: /{prefix}");
        }
        for prefix in 0..=128u8 {
            let net = Ipv6Net::new(Ipv6Addr::UNSPECIFIED, prefix).unwrap();
            let expected: AddressLiteral = IpAddr::V6(net.netmask()).into();
            assert_eq!(netmask(IpFam::V6, prefix), expected, "Failed: /{prefix}");
        }
        // capped at the family width
        assert_eq!(netmask(IpFam::V4, 200), AddressLiteral::V4([0xff; 4]));
    }

    #[test]
    fn test_roundtrip() {
        let tools = AddressTools::new();
        for prefix in 0..=32u32 {
            let mask: String = tools.netmask_for_cidr(&format!("192.0.2.1/{prefix}")).unwrap();
            assert_eq!(tools.prefix_length_for_netmask(&mask), Ok(prefix));
            assert_eq!(tools.is_contiguous_netmask(&mask), Ok(true));
        }
        for prefix in 0..=128u32 {
            let mask: String = tools.netmask_for_cidr(&format!("2001:db8::1/{prefix}")).unwrap();
            assert_eq!(tools.prefix_length_for_netmask(&mask), Ok(prefix));
            assert_eq!(tools.is_contiguous_netmask(&mask), Ok(true));
        }
    }

    #[test]
    fn test_cidr_errors() {
        let tools = AddressTools::new();
        assert_eq!(
            tools.netmask_for_cidr("10.0.0.0"),
            Err(AddressError::MissingPrefix("10.0.0.0".into()))
        );
        assert!(matches!(
            tools.netmask_for_cidr("10.0.0.0/x24"),
            Err(AddressError::NumericFormat { ref val, .. }) if val == "x24"
        ));
        assert!(matches!(
            tools.netmask_for_cidr("10.0.0.0/-1"),
            Err(AddressError::NumericFormat { .. })
        ));
        assert!(matches!(
            tools.netmask_for_cidr("10.0.0.0/"),
            Err(AddressError::NumericFormat { .. })
        ));
        assert_eq!(
            tools.netmask_for_cidr("example.com/24"),
            Err(AddressError::NotLiteral("example.com".into()))
        );
        assert_eq!(
            tools.netmask_for_cidr("10.0.0.0/33"),
            Err(AddressError::PrefixRange {
                cidr: "10.0.0.0/33".into(),
                prefix: 33,
                max: 32,
            })
        );
        assert!(matches!(
            tools.netmask_for_cidr("::/129"),
            Err(AddressError::PrefixRange { prefix: 129, max: 128, .. })
        ));
    }

    #[test]
    fn test_cidr_v6_unavailable() {
        let (limited, _) = LimitedParser::new(true, false);
        let tools = AddressTools::with_parser(limited, ToolsConfig::default());
        assert!(matches!(
            tools.netmask_for_cidr("::/64"),
            Err(AddressError::ParserUnavailable { fam: IpFam::V6, .. })
        ));
        assert_eq!(tools.netmask_for_cidr(CIDR_V4).as_deref(), Ok("255.255.255.0"));
    }

    #[rustfmt::skip]
    #[test]
    fn test_prefix_length_for_netmask() {
        let tests: Vec<(&str, u32, bool)> = vec![
            ("255.255.255.0",               24,     true),
            ("255.255.0.0",                 16,     true),
            ("0.0.0.0",                     0,      true),
            ("255.255.255.255",             32,     true),
            ("255.0.255.0",                 16,     false),
            ("0.0.0.255",                   8,      false),
            ("ffff:ffff:ffff:ffff::",       64,     true),
            ("ffff::ffff",                  32,     false),
            ("::ffff:255.255.255.0",        24,     true),
            ("[::ffff:255.255.0.0]",        16,     true),
        ];

        let tools = AddressTools::new();
        for (input, prefix, contiguous) in tests {
            assert_eq!(tools.prefix_length_for_netmask(input), Ok(prefix), "Failed: '{input}'");
            assert_eq!(tools.is_contiguous_netmask(input), Ok(contiguous), "Failed: '{input}'");
        }
        assert_eq!(
            tools.prefix_length_for_netmask("netmask.example.com"),
            Err(AddressError::NotLiteral("netmask.example.com".into()))
        );
    }

    #[test]
    fn test_format_cidr() {
        let tools = AddressTools::new();
        assert_eq!(tools.format_cidr("10.0.0.0", "255.255.255.0").as_deref(), Ok("10.0.0.0/24"));
        assert_eq!(tools.format_cidr("2001:db8::", "ffff:ffff::").as_deref(), Ok("2001:db8::/32"));
        // permissive: the popcount of a broken mask
        assert_eq!(tools.format_cidr("10.0.0.0", "255.0.255.0").as_deref(), Ok("10.0.0.0/16"));
        // IPv4-mapped masks count their IPv4 bits only
        assert_eq!(
            tools.format_cidr("10.0.0.0", "::ffff:255.255.255.0").as_deref(),
            Ok("10.0.0.0/24")
        );
        assert!(tools.format_cidr("10.0.0.0", "bogus").is_err());
    }

    #[test]
    fn test_cidr_address_struct() {
        let cidr: CidrAddress = CIDR_V6.parse().unwrap();
        assert_eq!(cidr.addr, "[2001:db8::]");
        assert_eq!(cidr.fam, IpFam::V6);
        assert_eq!(cidr.prefix, 64);
        assert_eq!(cidr.to_string(), CIDR_V6);

        let cidr: CidrAddress = CIDR_V4.parse().unwrap();
        assert_eq!(cidr.netmask(), AddressLiteral::V4([255, 255, 255, 0]));
        assert_eq!(cidr.to_string(), CIDR_V4);

        assert!("10.0.0.0".parse::<CidrAddress>().is_err());
    }
}
