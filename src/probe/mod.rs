// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Diagnostic snapshot of what the facade resolves to on this build.

pub mod formatters;

use crate::config::ProbeConfig;
use crate::error::{CompatError, Result};
use crate::platform::{
    self, ByteOrder, PlatformTag, RecordLayout, SwapStrategy, WidthCapability,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ByteOrderSample {
    pub input: u32,
    pub little_endian: u32,
    /// `little_endian` as laid out in memory
    pub bytes: [u8; 4],
}

impl ByteOrderSample {
    pub fn new(input: u32) -> Self {
        let little_endian = platform::to_little_endian32(input);
        Self {
            input,
            little_endian,
            bytes: little_endian.to_ne_bytes(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CodepointSample {
    pub codepoint: u32,
    pub escaped: String,
    pub width: i32,
}

impl CodepointSample {
    pub fn new(c: char) -> Self {
        Self {
            codepoint: c as u32,
            escaped: c.escape_default().to_string(),
            width: platform::char_width(c),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StringSample {
    pub text: String,
    /// Number of `wchar_t` elements
    pub units: usize,
    pub width: i32,
}

impl StringSample {
    pub fn new(text: &str) -> Self {
        let wide = platform::encode_wide(text);
        Self {
            text: text.to_string(),
            units: wide.len(),
            width: platform::string_display_width(&wide, wide.len()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub platform: PlatformTag,
    pub description: String,
    pub host_byte_order: ByteOrder,
    pub swap_strategy: SwapStrategy,
    pub width_capability: WidthCapability,
    pub wide_char_bits: usize,
    pub byte_order: Vec<ByteOrderSample>,
    pub codepoints: Vec<CodepointSample>,
    pub strings: Vec<StringSample>,
    pub regex_record: RecordLayout,
}

impl ProbeReport {
    pub fn is_degraded(&self) -> bool {
        !self.width_capability.is_precise()
    }
}

/// Parse a 32-bit value given in decimal or `0x`-prefixed hex.
pub fn parse_value(input: &str) -> Result<u32> {
    let trimmed = input.trim().replace('_', "");
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };
    parsed.map_err(|_| CompatError::InvalidValue(input.to_string()))
}

pub fn run_probe(config: &ProbeConfig) -> ProbeReport {
    let tag = platform::current_platform();
    log::debug!("Probing platform facade for {tag}");

    let capability = platform::width_capability();
    if !capability.is_precise() {
        log::warn!(
            "{} has no reliable width facility; every character is reported as one column",
            tag.description()
        );
    }

    let codepoints = config
        .probe
        .codepoints
        .iter()
        .filter_map(|&cp| match char::from_u32(cp) {
            Some(c) => Some(CodepointSample::new(c)),
            None => {
                log::warn!("Skipping {cp:#x}: not a Unicode scalar value");
                None
            }
        })
        .collect();

    ProbeReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        platform: tag,
        description: tag.description().to_string(),
        host_byte_order: ByteOrder::NATIVE,
        swap_strategy: SwapStrategy::for_tag(tag),
        width_capability: capability,
        wide_char_bits: size_of::<platform::WideChar>() * 8,
        byte_order: config
            .probe
            .values
            .iter()
            .map(|&value| ByteOrderSample::new(value))
            .collect(),
        codepoints,
        strings: config
            .probe
            .strings
            .iter()
            .map(|text| StringSample::new(text))
            .collect(),
        regex_record: RecordLayout::REGEX,
    }
}
