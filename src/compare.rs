// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::tools::AddressTools;

impl AddressTools {
    /**
    Whether two hosts denote the same address. Literals are compared by their
    canonical forms, names by plain string equality.

    Two absent hosts are the same, one absent host is never the same as a
    present one. `b` is only canonicalized if canonical `a` doesn't already
    equal it verbatim.
    */
    pub fn same_address(&self, a: Option<&str>, b: Option<&str>) -> bool {
        let (a, b) = match (a, b) {
            (Some(a), Some(b)) => (a, b),
            (None, None) => return true,
            _ => return false,
        };

        if a == b {
            return true;
        }

        let canon_a: String = self.canonicalize(a);
        if canon_a == b {
            return true;
        }
        canon_a == self.canonicalize(b)
    }
}

/* -------------------------------------------------------------------------- */
