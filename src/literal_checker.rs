// Copyright (c) 2026 Mikko Tanner. All rights reserved.

use ipliteral::{capability, canonicalize, ip_version, is_ip_literal, Capability};
use std::env;

const DEFAULT_INPUTS: [&str; 4] = ["11111111", "10.218.25.25", "[2001:DB8::1]", "Hello, World"];

fn main() {
    let mut inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = DEFAULT_INPUTS.iter().map(|s| s.to_string()).collect();
    }

    let cap: Capability = capability();
    eprintln!("parsers: v4: {} v6: {} v4 pattern: {}", cap.v4, cap.v6, cap.v4_pattern);

    for input in &inputs {
        let version: String = match ip_version(input) {
            Ok(fam) => fam.to_string(),
            Err(e) => e.to_string(),
        };
        eprintln!(
            "input: [{input}] literal: {} version: {version} canonical: [{}]",
            is_ip_literal(input),
            canonicalize(input)
        );
    }
}
