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

//! One implementation of the facade per platform family.
//!
//! [`Native`] names the implementation selected for this build. The
//! degraded implementations are pure Rust and compile everywhere, so their
//! behavior can be checked on any host; the precise ones only exist where the
//! C library provides `wcwidth`.

use super::byte_order::{ByteOrder, network_then_swap};
use super::detection::PlatformTag;
use super::width::{WideChar, WidthCapability, degraded};

pub trait PlatformFacade {
    const TAG: PlatformTag;
    const WIDTH: WidthCapability;

    /// Value whose in-memory bytes are the little-endian encoding of `x`.
    fn to_little_endian32(x: u32) -> u32;

    /// Columns occupied by `wc`, or -1 when undefined.
    fn char_display_width(wc: WideChar) -> i32;

    /// Columns occupied by the first `n` elements of `s`, or -1 if any
    /// element is non-printable. `n` is clamped to `s.len()`.
    fn string_display_width(s: &[WideChar], n: usize) -> i32;
}

#[cfg(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
mod precise_impls {
    use super::*;
    use crate::platform::width::precise;

    /// Linux: `__bswap_32(htonl(x))`, `wcwidth`, `wcswidth`.
    #[derive(Debug, Clone, Copy)]
    pub struct Linux;

    /// macOS / iOS: `OSSwapInt32(htonl(x))`, `wcwidth`, `wcswidth`.
    #[derive(Debug, Clone, Copy)]
    pub struct Apple;

    /// BSDs: `bswap32(htonl(x))`, `wcwidth`, `wcswidth`.
    #[derive(Debug, Clone, Copy)]
    pub struct Bsd;

    macro_rules! precise_facade {
        ($ty:ty, $tag:expr) => {
            impl PlatformFacade for $ty {
                const TAG: PlatformTag = $tag;
                const WIDTH: WidthCapability = WidthCapability::Precise;

                #[inline]
                fn to_little_endian32(x: u32) -> u32 {
                    network_then_swap(ByteOrder::NATIVE, x)
                }

                #[inline]
                fn char_display_width(wc: WideChar) -> i32 {
                    precise::char_width(wc)
                }

                #[inline]
                fn string_display_width(s: &[WideChar], n: usize) -> i32 {
                    precise::string_width(s, n)
                }
            }
        };
    }

    precise_facade!(Linux, PlatformTag::Linux);
    precise_facade!(Apple, PlatformTag::Apple);
    precise_facade!(Bsd, PlatformTag::Bsd);
}

#[cfg(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
pub use precise_impls::{Apple, Bsd, Linux};

/// GNU/Hurd: byte order like Linux, width degraded.
#[derive(Debug, Clone, Copy)]
pub struct Hurd;

impl PlatformFacade for Hurd {
    const TAG: PlatformTag = PlatformTag::Hurd;
    const WIDTH: WidthCapability = WidthCapability::Degraded;

    #[inline]
    fn to_little_endian32(x: u32) -> u32 {
        network_then_swap(ByteOrder::NATIVE, x)
    }

    #[inline]
    fn char_display_width(wc: WideChar) -> i32 {
        degraded::char_width(wc)
    }

    #[inline]
    fn string_display_width(s: &[WideChar], n: usize) -> i32 {
        degraded::string_width(s, n)
    }
}

/// Windows (MinGW): identity byte order, width degraded.
#[derive(Debug, Clone, Copy)]
pub struct Windows;

impl PlatformFacade for Windows {
    const TAG: PlatformTag = PlatformTag::Windows;
    const WIDTH: WidthCapability = WidthCapability::Degraded;

    /// Assumes a little-endian host; big-endian Windows targets do not build.
    #[inline]
    fn to_little_endian32(x: u32) -> u32 {
        x
    }

    #[inline]
    fn char_display_width(wc: WideChar) -> i32 {
        degraded::char_width(wc)
    }

    #[inline]
    fn string_display_width(s: &[WideChar], n: usize) -> i32 {
        degraded::string_width(s, n)
    }
}

#[cfg(target_os = "linux")]
pub type Native = Linux;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub type Native = Apple;

#[cfg(target_os = "hurd")]
pub type Native = Hurd;

#[cfg(target_os = "windows")]
pub type Native = Windows;

#[cfg(any(
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
pub type Native = Bsd;

const _: () = assert!(Native::TAG as u8 == PlatformTag::CURRENT as u8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::width::encode_wide;

    #[test]
    fn test_native_tag_is_current() {
        assert_eq!(Native::TAG, PlatformTag::CURRENT);
    }

    #[test]
    fn test_degraded_platforms_report_one_for_everything() {
        for wc in [0, 0x07, 0x41, 0x0301, 0x4E2D] {
            assert_eq!(Hurd::char_display_width(wc as WideChar), 1);
            assert_eq!(Windows::char_display_width(wc as WideChar), 1);
        }
        assert_eq!(Hurd::WIDTH, WidthCapability::Degraded);
        assert_eq!(Windows::WIDTH, WidthCapability::Degraded);
    }

    #[test]
    fn test_degraded_string_width_counts_elements() {
        let s = encode_wide("中文abc");
        assert_eq!(Hurd::string_display_width(&s, s.len()), 5);
        assert_eq!(Windows::string_display_width(&s, 4), 4);
    }

    #[test]
    fn test_windows_byte_order_is_identity() {
        assert_eq!(Windows::to_little_endian32(0x0102_0304), 0x0102_0304);
    }

    #[test]
    fn test_hurd_byte_order_matches_std() {
        assert_eq!(Hurd::to_little_endian32(0x0102_0304), 0x0102_0304u32.to_le());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_precise_platforms_agree() {
        let s = encode_wide("width");
        for x in [0u32, 0xAABB_CCDD, u32::MAX] {
            assert_eq!(Linux::to_little_endian32(x), Apple::to_little_endian32(x));
            assert_eq!(Linux::to_little_endian32(x), Bsd::to_little_endian32(x));
        }
        assert_eq!(Linux::string_display_width(&s, s.len()), 5);
        assert_eq!(Apple::string_display_width(&s, s.len()), 5);
        assert_eq!(Bsd::WIDTH, WidthCapability::Precise);
    }
}
