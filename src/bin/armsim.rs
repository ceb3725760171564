// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

use armsim::core::error::{EmulatorError, Result};
use armsim::core::loader;
use armsim::core::system::System;
use clap::Parser;
use log::{error, info};

/// ARM32 subset simulator
#[derive(Parser)]
#[command(name = "armsim")]
#[command(about = "ARM32 subset simulator", long_about = None)]
struct Args {
    /// Path to the program binary (big-endian 32-bit words)
    program: String,

    /// Preload a little-endian word into data memory (hex or decimal)
    #[arg(long, value_name = "ADDR=VALUE")]
    preload: Vec<String>,

    /// Maximum number of instructions to execute
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print only the final CPU state instead of every step
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("armsim v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    info!("Loading program from: {}", args.program);
    let bytes = match loader::load_program(&args.program) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to load program: {e}");
            return Err(e);
        }
    };

    let mut system = System::new();
    system.load_program(&bytes);
    info!("Decoded {} instructions", system.program().len());

    for spec in &args.preload {
        let (offset, value) = parse_preload(spec)?;
        system.cpu_mut().load_memory(offset, &value.to_le_bytes())?;
        info!("Preloaded 0x{value:08X} at offset 0x{offset:X}");
    }

    if !args.quiet {
        println!("--- CPU state before execution ---");
        println!("{}", system.cpu());
        println!("---------------------------------");
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let mut executed = 0;
    while executed < limit {
        let Some(instruction) = system.step() else {
            break;
        };
        executed += 1;
        if !args.quiet {
            println!("--- Executing instruction {executed}: {instruction} ---");
            println!("{}", system.cpu());
            println!("---------------------------------");
        }
    }

    if args.quiet {
        println!("{}", system.cpu());
    }
    info!("Executed {executed} instructions");

    Ok(())
}

/// Parse an `ADDR=VALUE` preload specification
fn parse_preload(spec: &str) -> Result<(usize, u32)> {
    let invalid = || EmulatorError::Config {
        message: format!("invalid preload {spec:?}, expected ADDR=VALUE"),
    };
    let (addr, value) = spec.split_once('=').ok_or_else(invalid)?;
    let addr = parse_number(addr.trim()).ok_or_else(invalid)?;
    let value = parse_number(value.trim()).ok_or_else(invalid)?;
    let value = u32::try_from(value).map_err(|_| invalid())?;
    Ok((addr as usize, value))
}

fn parse_number(text: &str) -> Option<u64> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        text.parse().ok()
    }
}
