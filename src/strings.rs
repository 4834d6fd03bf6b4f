// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static SLASH: &str = "/";
pub(crate) static COLON: char = ':';

// canonical.rs
pub(crate) static LOCALHOST: &str = "localhost";
pub(crate) static LOOPBACK_V4: &str = "127.0.0.1";
pub(crate) static WARN_UNDECIDED: &str = "cannot canonicalize, passing input through";

// lib.rs
pub(crate) static ERR_NOT_LITERAL: &str = "not a literal IPv4 or IPv6 address";
pub(crate) static ERR_MISSING_PREFIX: &str = "invalid CIDR notation: '/' not found";
pub(crate) static ERR_PREFIX_FMT: &str = "invalid prefix length in CIDR";
pub(crate) static ERR_PREFIX_RANGE: &str = "prefix length out of range in CIDR";
pub(crate) static ERR_UNAVAILABLE: &str = "no strict parser available for";

// parser.rs
pub(crate) static ERR_PATTERN: &str = "couldn't compile IPv4 fallback pattern";
pub(crate) static DBG_PATTERN: &str = "strict IPv4 parser unavailable, classified by pattern";

// tools.rs
pub(crate) static ERR_DEGRADED: &str = "address parser is degraded, some literals cannot be decided";

// cidr.rs
pub(crate) static DBG_CIDR: &str = "rejected CIDR";
