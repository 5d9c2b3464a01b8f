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

//! Stable shims over platform-dependent C facilities used by terminal code:
//! host to little-endian conversion, `wcwidth`/`wcswidth` display width,
//! and the layout of the opaque `regex_t` record.

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod probe;

pub use platform::{
    align_of_regex_record, char_display_width, has_precise_width_info, size_of_regex_record,
    string_display_width, to_little_endian32,
};
