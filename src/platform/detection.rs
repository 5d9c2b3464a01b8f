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

//! Compile-time platform identity.
//!
//! Exactly one [`PlatformTag`] is active per build. The tag is derived from
//! the target triple through `#[cfg]` attributes and is never recomputed at
//! runtime. Targets outside the five supported families fail to compile.

use serde::Serialize;
use std::fmt;

#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "hurd",
    target_os = "windows",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
)))]
compile_error!(
    "termcompat: unsupported target OS; expected Linux, Apple, GNU/Hurd, Windows (MinGW) or a BSD"
);

// The Windows byte-order branch returns its input unchanged.
#[cfg(all(target_os = "windows", target_endian = "big"))]
compile_error!("termcompat: Windows targets are assumed to be little-endian");

/// Operating system family driving which implementation variant is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTag {
    Linux,
    Apple,
    Hurd,
    Windows,
    Bsd,
}

#[cfg(target_os = "linux")]
const CURRENT_TAG: PlatformTag = PlatformTag::Linux;

#[cfg(any(target_os = "macos", target_os = "ios"))]
const CURRENT_TAG: PlatformTag = PlatformTag::Apple;

#[cfg(target_os = "hurd")]
const CURRENT_TAG: PlatformTag = PlatformTag::Hurd;

#[cfg(target_os = "windows")]
const CURRENT_TAG: PlatformTag = PlatformTag::Windows;

#[cfg(any(
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
const CURRENT_TAG: PlatformTag = PlatformTag::Bsd;

impl PlatformTag {
    /// The tag selected for this build.
    pub const CURRENT: PlatformTag = CURRENT_TAG;

    pub fn all() -> [PlatformTag; 5] {
        [
            PlatformTag::Linux,
            PlatformTag::Apple,
            PlatformTag::Hurd,
            PlatformTag::Windows,
            PlatformTag::Bsd,
        ]
    }

    /// Short machine-friendly name
    pub fn name(self) -> &'static str {
        match self {
            PlatformTag::Linux => "linux",
            PlatformTag::Apple => "apple",
            PlatformTag::Hurd => "hurd",
            PlatformTag::Windows => "windows",
            PlatformTag::Bsd => "bsd",
        }
    }

    /// Get a user-friendly description of the platform family
    pub fn description(self) -> &'static str {
        match self {
            PlatformTag::Linux => "Linux",
            PlatformTag::Apple => "macOS / iOS",
            PlatformTag::Hurd => "GNU/Hurd",
            PlatformTag::Windows => "Windows (MinGW)",
            PlatformTag::Bsd => "BSD",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
