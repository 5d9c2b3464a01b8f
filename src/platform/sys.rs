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

//! C library width functions the `libc` crate does not bind.
//!
//! Only compiled on targets whose C library ships a usable implementation.

use libc::{c_int, size_t, wchar_t};

unsafe extern "C" {
    pub fn wcwidth(c: wchar_t) -> c_int;
    pub fn wcswidth(s: *const wchar_t, n: size_t) -> c_int;
}
