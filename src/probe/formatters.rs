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

use crate::platform::UNDEFINED_WIDTH;
use crate::probe::ProbeReport;
use colored::Colorize;
use std::io::Write;

fn format_width(width: i32) -> String {
    if width == UNDEFINED_WIDTH {
        "-1 (non-printable)".to_string()
    } else {
        width.to_string()
    }
}

pub fn format_human_readable<W: Write>(
    writer: &mut W,
    report: &ProbeReport,
    verbose: bool,
) -> std::io::Result<()> {
    writeln!(writer, "\nTermcompat Probe Report")?;
    writeln!(writer, "=======================")?;
    writeln!(writer)?;

    writeln!(writer, "Platform")?;
    writeln!(writer, "--------")?;
    writeln!(writer, "Tag:            {} ({})", report.platform, report.description)?;
    writeln!(writer, "Host order:     {}", report.host_byte_order)?;
    writeln!(writer, "wchar_t:        {} bits", report.wide_char_bits)?;
    let capability = if report.is_degraded() {
        report.width_capability.to_string().yellow()
    } else {
        report.width_capability.to_string().green()
    };
    writeln!(writer, "Display width:  {capability}")?;
    if report.is_degraded() {
        writeln!(
            writer,
            "{} Width is approximate: every character counts as one column.",
            "⚠".yellow()
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Byte order")?;
    writeln!(writer, "----------")?;
    if verbose {
        writeln!(writer, "Strategy: {:?}", report.swap_strategy)?;
    }
    for sample in &report.byte_order {
        let bytes: Vec<String> = sample.bytes.iter().map(|b| format!("{b:02x}")).collect();
        writeln!(
            writer,
            "{:#010x} -> {:#010x}  [{}]",
            sample.input,
            sample.little_endian,
            bytes.join(" ")
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Character widths")?;
    writeln!(writer, "----------------")?;
    for sample in &report.codepoints {
        writeln!(
            writer,
            "U+{:04X} '{}': {}",
            sample.codepoint,
            sample.escaped,
            format_width(sample.width)
        )?;
    }
    for sample in &report.strings {
        writeln!(
            writer,
            "{:?} ({} units): {}",
            sample.text,
            sample.units,
            format_width(sample.width)
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Regex record")?;
    writeln!(writer, "------------")?;
    writeln!(
        writer,
        "size {} bytes, alignment {} bytes",
        report.regex_record.size, report.regex_record.align
    )?;

    if verbose {
        writeln!(writer)?;
        writeln!(writer, "Generated: {} (v{})", report.timestamp, report.version)?;
    }

    Ok(())
}

pub fn format_json<W: Write>(writer: &mut W, report: &ProbeReport) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}
