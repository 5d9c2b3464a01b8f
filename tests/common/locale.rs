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

use std::ffi::CString;
use termcompat::platform::{self, WideChar};

const UTF8_LOCALES: &[&str] = &["C.UTF-8", "C.utf8", "en_US.UTF-8", "en_US.utf8"];

/// Switch `LC_CTYPE` to a UTF-8 locale so `wcwidth` knows about non-ASCII
/// characters. Returns false when no such locale is installed.
///
/// Callers must be `#[serial]`: the locale is process-wide.
pub fn use_utf8_ctype() -> bool {
    for name in UTF8_LOCALES {
        let c_name = CString::new(*name).unwrap();
        let applied = unsafe { libc::setlocale(libc::LC_CTYPE, c_name.as_ptr()) };
        if !applied.is_null() && platform::char_display_width(0x4E2D as WideChar) == 2 {
            return true;
        }
    }
    eprintln!("No UTF-8 locale available; skipping locale-dependent assertions");
    false
}
