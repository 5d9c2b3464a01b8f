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

//! Size and alignment of the platform's opaque `regex_t`.
//!
//! Consumers that cannot see the record's fields allocate
//! [`REGEX_RECORD_SIZE`] bytes at [`REGEX_RECORD_ALIGN`] and pass that
//! storage to `regcomp`. [`RegexStorage`] does exactly that.

use crate::error::{CompatError, Result};
use serde::Serialize;
use std::alloc::{self, Layout};
use std::ptr::NonNull;

#[cfg(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "ios",
    target_os = "hurd",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
pub type RegexRecord = libc::regex_t;

/// GNU `re_pattern_buffer` as shipped by libgnurx on MinGW.
///
/// `allocated`, `used` and `syntax` are `unsigned long`, which stays 32 bits
/// on 64-bit Windows. The trailing bitfields share one `unsigned int`.
#[cfg(target_os = "windows")]
#[allow(dead_code)]
#[repr(C)]
pub struct RegexRecord {
    buffer: *mut libc::c_void,
    allocated: libc::c_ulong,
    used: libc::c_ulong,
    syntax: libc::c_ulong,
    fastmap: *mut libc::c_char,
    translate: *mut libc::c_uchar,
    re_nsub: libc::size_t,
    flags: libc::c_uint,
}

pub const REGEX_RECORD_SIZE: usize = size_of::<RegexRecord>();
pub const REGEX_RECORD_ALIGN: usize = align_of::<RegexRecord>();

const _: () = {
    assert!(REGEX_RECORD_SIZE > 0);
    assert!(REGEX_RECORD_ALIGN.is_power_of_two());
    assert!(REGEX_RECORD_SIZE % REGEX_RECORD_ALIGN == 0);
};

/// Bytes needed for one opaque regex record.
pub const fn size_of_regex_record() -> usize {
    REGEX_RECORD_SIZE
}

/// Alignment required for one opaque regex record.
pub const fn align_of_regex_record() -> usize {
    REGEX_RECORD_ALIGN
}

/// Size and alignment pair of an opaque foreign record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordLayout {
    pub size: usize,
    pub align: usize,
}

impl RecordLayout {
    pub const REGEX: RecordLayout = RecordLayout {
        size: REGEX_RECORD_SIZE,
        align: REGEX_RECORD_ALIGN,
    };

    /// Positive size, power-of-two alignment, size a multiple of alignment.
    pub fn is_well_formed(&self) -> bool {
        self.size > 0 && self.align.is_power_of_two() && self.size % self.align == 0
    }

    pub fn to_layout(&self) -> Result<Layout> {
        if !self.is_well_formed() {
            return Err(CompatError::InvalidLayout {
                size: self.size,
                align: self.align,
            });
        }
        Layout::from_size_align(self.size, self.align).map_err(|_| CompatError::InvalidLayout {
            size: self.size,
            align: self.align,
        })
    }
}

/// Owned, zero-filled storage for one [`RegexRecord`].
///
/// Dropping the storage releases the bytes only. A pattern compiled into it
/// must be released with `regfree` first.
#[derive(Debug)]
pub struct RegexStorage {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl RegexStorage {
    pub fn allocate() -> Result<Self> {
        Self::with_layout(RecordLayout::REGEX)
    }

    fn with_layout(record: RecordLayout) -> Result<Self> {
        let layout = record.to_layout()?;
        // SAFETY: `to_layout` rejects zero-sized layouts.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(CompatError::AllocationFailed {
            size: record.size,
            align: record.align,
        })?;
        log::trace!(
            "Allocated {} bytes at alignment {} for an opaque regex record",
            layout.size(),
            layout.align()
        );
        Ok(Self { ptr, layout })
    }

    pub fn as_ptr(&self) -> *const RegexRecord {
        self.ptr.as_ptr().cast()
    }

    pub fn as_mut_ptr(&mut self) -> *mut RegexRecord {
        self.ptr.as_ptr().cast()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }
}

impl Drop for RegexStorage {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from `alloc_zeroed` with this exact layout.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

// SAFETY: the allocation is exclusively owned and holds no thread-bound state.
unsafe impl Send for RegexStorage {}
