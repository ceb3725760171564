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
use armsim::core::memory::{HierarchyConfig, L1Topology, MemorySimulator};
use clap::Parser;
use log::info;

/// Two-level cache hierarchy simulator
#[derive(Parser)]
#[command(name = "cachesim")]
#[command(about = "Two-level cache hierarchy simulator", long_about = None)]
struct Args {
    /// Path to the address trace (one `i|r|w <address>` per line)
    trace: String,

    /// TOML configuration file (takes precedence over the flags below)
    #[arg(short, long)]
    config: Option<String>,

    /// L1 block size in bytes (4, 8, 16, or 32)
    #[arg(long, default_value_t = 16)]
    l1_block_size: u64,

    /// L2 block size in bytes (16, 32, or 64)
    #[arg(long, default_value_t = 16)]
    l2_block_size: u64,

    /// L1 topology: direct or associative
    #[arg(long, default_value = "direct")]
    l1_topology: String,

    /// Emit the statistics as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("cachesim v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading cache configuration from: {path}");
            loader::load_hierarchy_config(path)?
        }
        None => HierarchyConfig {
            l1_block_size: args.l1_block_size,
            l2_block_size: args.l2_block_size,
            l1_topology: args.l1_topology.parse::<L1Topology>()?,
        },
    };
    info!(
        "L1: {} B blocks, {} | L2: {} B blocks, direct",
        config.l1_block_size, config.l1_topology, config.l2_block_size
    );

    let mut simulator = MemorySimulator::new(&config)?;

    let trace = loader::load_trace(&args.trace)?;
    info!("Replaying {} accesses from {}", trace.len(), args.trace);
    for &(address, kind) in &trace {
        simulator.access_memory(address, kind);
    }

    if args.json {
        let text = serde_json::to_string_pretty(&simulator.report()).map_err(|err| {
            EmulatorError::Config {
                message: err.to_string(),
            }
        })?;
        println!("{text}");
    } else {
        println!("--- L1 Instruction Cache Stats ---");
        println!("{}", simulator.l1_instruction().stats());
        println!();
        println!("--- L1 Data Cache Stats ---");
        println!("{}", simulator.l1_data().stats());
        println!();
        println!("--- L2 Unified Cache Stats ---");
        println!("{}", simulator.l2().stats());
        println!();
        println!("--- Total Cost ---");
        println!("Final cost: {}", simulator.cost());
    }

    Ok(())
}
