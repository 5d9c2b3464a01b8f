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

//! Host to little-endian conversion strategies.
//!
//! Every function here is a pure model parameterized by the host byte order,
//! so the big-endian paths can be exercised on little-endian machines.

use super::detection::PlatformTag;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;

    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Little => write!(f, "little-endian"),
            ByteOrder::Big => write!(f, "big-endian"),
        }
    }
}

/// How a platform produces its little-endian form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapStrategy {
    /// `htonl` followed by an unconditional 32-bit byte reversal.
    NetworkThenSwap,
    /// Input returned unchanged; only valid on little-endian hosts.
    Identity,
}

impl SwapStrategy {
    pub const fn for_tag(tag: PlatformTag) -> Self {
        match tag {
            PlatformTag::Linux | PlatformTag::Apple | PlatformTag::Hurd | PlatformTag::Bsd => {
                SwapStrategy::NetworkThenSwap
            }
            PlatformTag::Windows => SwapStrategy::Identity,
        }
    }
}

/// `htonl` as it behaves on a host of the given byte order.
pub const fn host_to_network32(host: ByteOrder, x: u32) -> u32 {
    match host {
        ByteOrder::Little => x.swap_bytes(),
        ByteOrder::Big => x,
    }
}

/// Network order followed by a byte reversal.
///
/// Little-endian hosts end up swapping twice, which is the identity. On
/// big-endian hosts the network step is a no-op and the single reversal
/// produces the little-endian form; the extra swap on little-endian hosts is
/// an accepted cost of keeping one code path.
pub const fn network_then_swap(host: ByteOrder, x: u32) -> u32 {
    host_to_network32(host, x).swap_bytes()
}

/// Little-endian form of `x` as produced by `tag`'s strategy on `host`.
pub const fn to_little_endian32_on(tag: PlatformTag, host: ByteOrder, x: u32) -> u32 {
    match SwapStrategy::for_tag(tag) {
        SwapStrategy::NetworkThenSwap => network_then_swap(host, x),
        SwapStrategy::Identity => x,
    }
}

/// Inverse of [`to_little_endian32_on`] for the same tag and host.
pub const fn from_little_endian32_on(tag: PlatformTag, host: ByteOrder, x: u32) -> u32 {
    // Both strategies are involutions.
    to_little_endian32_on(tag, host, x)
}

/// Inverse of [`super::to_little_endian32`] on this host.
pub fn from_little_endian32(x: u32) -> u32 {
    from_little_endian32_on(PlatformTag::CURRENT, ByteOrder::NATIVE, x)
}
