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

//! Platform facade for byte order, display width and opaque record layout.
//!
//! The functions in this module are the stable call surface. Each one
//! forwards to [`Native`], the [`PlatformFacade`] implementation selected at
//! compile time for the current target.
//!
//! | Tag     | Byte order          | Width    |
//! |---------|---------------------|----------|
//! | Linux   | htonl + byte swap   | precise  |
//! | Apple   | htonl + byte swap   | precise  |
//! | Hurd    | htonl + byte swap   | degraded |
//! | Windows | identity            | degraded |
//! | Bsd     | htonl + byte swap   | precise  |
//!
//! On degraded platforms every character is one column wide. Callers that
//! care should check [`has_precise_width_info`].

pub mod byte_order;
pub mod facade;
pub mod regex_layout;
pub mod width;

mod detection;
#[cfg(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
mod sys;

pub use byte_order::{ByteOrder, SwapStrategy, from_little_endian32};
pub use detection::PlatformTag;
pub use facade::{Native, PlatformFacade};
pub use regex_layout::{
    REGEX_RECORD_ALIGN, REGEX_RECORD_SIZE, RecordLayout, RegexRecord, RegexStorage,
    align_of_regex_record, size_of_regex_record,
};
pub use width::{
    UNDEFINED_WIDTH, WideChar, WidthCapability, char_width, encode_wide, str_display_width,
};

/// Convert `x` so its in-memory bytes are little-endian on this host.
#[inline]
pub fn to_little_endian32(x: u32) -> u32 {
    Native::to_little_endian32(x)
}

/// Terminal columns occupied by `wc`.
///
/// Returns -1 for non-printable characters on precise platforms and 1 for
/// every input on degraded ones.
#[inline]
pub fn char_display_width(wc: WideChar) -> i32 {
    Native::char_display_width(wc)
}

/// Terminal columns occupied by the first `n` elements of `s`.
///
/// Returns -1 if any counted element is non-printable (precise platforms
/// only). Counting stops at a NUL element or at `n`, whichever comes first,
/// and `n` never reaches past the end of `s`.
#[inline]
pub fn string_display_width(s: &[WideChar], n: usize) -> i32 {
    Native::string_display_width(s, n)
}

pub fn width_capability() -> WidthCapability {
    Native::WIDTH
}

pub fn has_precise_width_info() -> bool {
    Native::WIDTH.is_precise()
}

pub fn current_platform() -> PlatformTag {
    PlatformTag::CURRENT
}
