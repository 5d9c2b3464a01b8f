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

//! Terminal display width of wide characters.
//!
//! Two backends exist. The precise backend forwards to the C library's
//! `wcwidth`/`wcswidth` and inherits the active `LC_CTYPE` locale. The
//! degraded backend is used where no reliable facility exists and counts
//! every character as one column.

use serde::Serialize;
use std::fmt;

/// The platform `wchar_t`: 32 bits on Unix, 16 bits (UTF-16 units) on Windows.
pub type WideChar = libc::wchar_t;

/// Width returned for non-printable characters or sequences containing one.
pub const UNDEFINED_WIDTH: i32 = -1;

/// Whether width results come from a real width table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthCapability {
    /// Results distinguish zero-width, double-width and non-printable characters.
    Precise,
    /// Every character counts as one column.
    Degraded,
}

impl WidthCapability {
    pub fn is_precise(self) -> bool {
        self == WidthCapability::Precise
    }
}

impl fmt::Display for WidthCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthCapability::Precise => write!(f, "precise"),
            WidthCapability::Degraded => write!(f, "degraded"),
        }
    }
}

/// Forwarding to the C library.
#[cfg(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
pub(crate) mod precise {
    use super::WideChar;
    use crate::platform::sys;

    pub(crate) fn char_width(wc: WideChar) -> i32 {
        // SAFETY: wcwidth takes its argument by value and has no preconditions.
        unsafe { sys::wcwidth(wc) }
    }

    pub(crate) fn string_width(s: &[WideChar], n: usize) -> i32 {
        let n = n.min(s.len());
        // SAFETY: wcswidth reads at most `n` elements and `n <= s.len()`.
        unsafe { sys::wcswidth(s.as_ptr(), n) }
    }
}

/// One column per character.
pub(crate) mod degraded {
    use super::WideChar;

    pub(crate) fn char_width(_wc: WideChar) -> i32 {
        1
    }

    /// Counts elements up to the first NUL, never past `n` or the slice end.
    pub(crate) fn string_width(s: &[WideChar], n: usize) -> i32 {
        let bounded = &s[..n.min(s.len())];
        let len = bounded
            .iter()
            .position(|&wc| wc == 0)
            .unwrap_or(bounded.len());
        i32::try_from(len).unwrap_or(i32::MAX)
    }
}

/// Encode `text` into the platform's wide-character representation.
///
/// Produces one element per `char` where `wchar_t` is 32 bits and UTF-16 code
/// units where it is 16 bits. No terminator is appended.
pub fn encode_wide(text: &str) -> Vec<WideChar> {
    if size_of::<WideChar>() == 2 {
        text.encode_utf16().map(|unit| unit as WideChar).collect()
    } else {
        text.chars().map(|c| c as u32 as WideChar).collect()
    }
}

/// Display width of a single Rust `char` through the platform facade.
pub fn char_width(c: char) -> i32 {
    match WideChar::try_from(c as u32) {
        Ok(wc) => super::char_display_width(wc),
        // Supplementary plane character on a 16-bit wchar_t platform.
        Err(_) => str_display_width(c.encode_utf8(&mut [0; 4])),
    }
}

/// Display width of a Rust string through the platform facade.
pub fn str_display_width(text: &str) -> i32 {
    let wide = encode_wide(text);
    super::string_display_width(&wide, wide.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(text: &str) -> Vec<WideChar> {
        encode_wide(text)
    }

    #[test]
    fn test_degraded_char_width_is_always_one() {
        for wc in [0, 0x07, 0x41, 0x0301, 0x4E2D, 0xFF21] {
            assert_eq!(degraded::char_width(wc as WideChar), 1);
        }
    }

    #[test]
    fn test_degraded_string_width_counts_until_nul() {
        let mut s = wide("abc");
        s.push(0);
        s.extend(wide("def"));
        assert_eq!(degraded::string_width(&s, s.len()), 3);
    }

    #[test]
    fn test_degraded_string_width_honors_length_bound() {
        let s = wide("abcdef");
        assert_eq!(degraded::string_width(&s, 2), 2);
        assert_eq!(degraded::string_width(&s, 0), 0);
    }

    #[test]
    fn test_degraded_string_width_clamps_to_slice() {
        let s = wide("abc");
        assert_eq!(degraded::string_width(&s, 100), 3);
        assert_eq!(degraded::string_width(&[], 5), 0);
    }

    #[test]
    fn test_encode_wide_ascii() {
        let encoded = encode_wide("Az");
        assert_eq!(encoded, vec!['A' as u32 as WideChar, 'z' as u32 as WideChar]);
    }

    #[test]
    fn test_encode_wide_bmp_length() {
        assert_eq!(encode_wide("中文").len(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_precise_locale_independent_results() {
        // ASCII and C0 controls behave the same in every locale.
        assert_eq!(precise::char_width('A' as WideChar), 1);
        assert_eq!(precise::char_width(0x07), UNDEFINED_WIDTH);

        let s = wide("hello");
        assert_eq!(precise::string_width(&s, s.len()), 5);
        assert_eq!(precise::string_width(&s, 3), 3);
        assert_eq!(precise::string_width(&s, 50), 5);

        let with_bell = [0x41 as WideChar, 0x07, 0x42];
        assert_eq!(precise::string_width(&with_bell, 3), UNDEFINED_WIDTH);
    }

    #[test]
    fn test_capability_display() {
        assert_eq!(WidthCapability::Precise.to_string(), "precise");
        assert_eq!(WidthCapability::Degraded.to_string(), "degraded");
        assert!(!WidthCapability::Degraded.is_precise());
    }
}
