// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Quinary lookup tables verification tool.
//!
//! Rebuilds the evaluator lookup tables from first principles and checks
//! them against the tables shipped with the evaluator, reporting every cell
//! that disagrees.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::{error, info};

use quinary_tables::{TableId, verify};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Table {
    All,
    Suits,
    Choose,
    RankDist,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The table to verify.
    #[clap(long, short, value_enum, default_value_t = Table::All)]
    table: Table,
    /// Stop at the first table with mismatches.
    #[clap(long)]
    fail_fast: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let tables = match cli.table {
        Table::All => vec![TableId::Suits, TableId::Choose, TableId::RankDist],
        Table::Suits => vec![TableId::Suits],
        Table::Choose => vec![TableId::Choose],
        Table::RankDist => vec![TableId::RankDist],
    };

    let mut failures = 0;
    for id in tables {
        let mismatches = verify::verify(id);
        if mismatches.is_empty() {
            info!("{id}: ok");
        } else {
            for m in &mismatches {
                error!("{m}");
            }

            error!("{id}: {} mismatches", mismatches.len());
            failures += mismatches.len();

            if cli.fail_fast {
                break;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} table cells disagree with the reference");
    }

    Ok(())
}
