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

use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use termcompat::config::ProbeConfig;
use termcompat::error::{Result, format_error, get_exit_code};
use termcompat::logging;
use termcompat::platform::{self, RecordLayout};
use termcompat::probe::{self, ByteOrderSample, StringSample, formatters};

#[derive(Parser)]
#[command(name = "termcompat")]
#[command(author, version, about = "Inspect the platform shims compiled into this build", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to termcompat/config.toml in the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the platform tag, width capability, samples and regex record layout
    Report {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the terminal display width of each argument
    Width {
        /// Text to measure
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Convert a 32-bit value (decimal or 0x hex) to little-endian
    Htole {
        value: String,
    },

    /// Print the size and alignment of the opaque regex record
    Layout,
}

fn load_config(cli: &Cli) -> Result<ProbeConfig> {
    match &cli.config {
        Some(path) => ProbeConfig::load(path),
        None => ProbeConfig::load_default(),
    }
}

/// Adopt the user's locale so `wcwidth` sees the terminal's character set.
#[cfg(unix)]
fn adopt_user_locale() {
    // SAFETY: called once at startup before any other thread exists.
    let applied = unsafe { libc::setlocale(libc::LC_ALL, c"".as_ptr()) };
    if applied.is_null() {
        log::warn!("Could not apply the locale from the environment; widths use the C locale");
    }
}

#[cfg(not(unix))]
fn adopt_user_locale() {}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    logging::setup_logger(cli.verbose);
    adopt_user_locale();

    let result: Result<()> = (|| {
        match &cli.command {
            Commands::Report { json } => {
                let config = load_config(&cli)?;
                let report = probe::run_probe(&config);
                let mut stdout = io::stdout().lock();
                if *json {
                    formatters::format_json(&mut stdout, &report)?;
                } else {
                    formatters::format_human_readable(&mut stdout, &report, cli.verbose > 0)?;
                }
            }
            Commands::Width { text } => {
                if !platform::has_precise_width_info() {
                    log::warn!("Display width is approximate on this platform");
                }
                for item in text {
                    let sample = StringSample::new(item);
                    println!("{}\t{}", sample.width, sample.text);
                }
            }
            Commands::Htole { value } => {
                let sample = ByteOrderSample::new(probe::parse_value(value)?);
                println!("{:#010x}", sample.little_endian);
            }
            Commands::Layout => {
                let layout = RecordLayout::REGEX;
                println!("size={} align={}", layout.size, layout.align);
            }
        }
        Ok(())
    })();

    if let Err(e) = result {
        if !io::stderr().is_terminal() {
            colored::control::set_override(false);
        }
        eprint!("{}", format_error(&e));
        std::process::exit(get_exit_code(&e));
    }
}
