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

use crate::error::CompatError;

pub struct ErrorContext<'a> {
    pub error: &'a CompatError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a CompatError) -> Self {
        let (suggestion, details) = match error {
            CompatError::InvalidLayout { size, align } => {
                let details = Some(format!(
                    "A record layout needs a positive size that is a multiple of a power-of-two \
                     alignment; got size {size} and alignment {align}."
                ));
                (None, details)
            }
            CompatError::AllocationFailed { .. } => {
                let suggestion =
                    Some("The system is out of memory. Free memory and retry.".to_string());
                (suggestion, None)
            }
            CompatError::ConfigFile(msg) => {
                let suggestion = Some(
                    "Check the TOML syntax of the configuration file, or remove it to use the \
                     defaults."
                        .to_string(),
                );
                let details = Some(format!("Parse failure: {msg}"));
                (suggestion, details)
            }
            CompatError::InvalidConfig(_) => {
                let suggestion = Some(
                    "Sample code points must be valid Unicode scalar values (e.g., 0x41 or 0x4E2D)."
                        .to_string(),
                );
                (suggestion, None)
            }
            CompatError::InvalidValue(_) => {
                let suggestion = Some(
                    "Pass a decimal number (e.g., '16909060') or a hex number with a '0x' prefix \
                     (e.g., '0x01020304') no larger than 0xFFFFFFFF."
                        .to_string(),
                );
                (suggestion, None)
            }
            CompatError::Io(io_err) => {
                let details = Some(format!("I/O failure: {io_err}"));
                (None, details)
            }
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}
