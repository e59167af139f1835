//! # allocate
//!
//! Runs a cost-minimizing allocation over a JSON listing catalog and
//! prints the transcript, the structured result, or the JSON Schemas of
//! the catalog and result types.
//!
//! ```text
//! allocate run --needed 10 --listings catalog.json
//! allocate run --needed 10 --listings catalog.json --json
//! allocate schema
//! ```

use anyhow::Context;
use charter_alloc::{
    AllocationEngine, AllocationRequest, AllocationResult, AllocatorConfig, InvalidListingPolicy,
    Listing, Transcript,
};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Command-line interface for the allocation engine.
#[derive(Debug, Parser)]
#[command(name = "allocate", about = "Cost-minimizing capacity allocation", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Allocate demand across a JSON listing catalog.
    Run {
        /// Quantity of capacity units required.
        #[arg(long)]
        needed: f64,

        /// Path to a JSON catalog: an array of
        /// `{"supplier", "capacity", "block_price"}` rows.
        #[arg(long)]
        listings: PathBuf,

        /// Emit the structured result as JSON instead of the transcript.
        #[arg(long)]
        json: bool,

        /// Skip malformed listing rows instead of failing the run.
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print the JSON Schemas of the catalog row and result types.
    Schema,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Run {
            needed,
            listings,
            json,
            skip_invalid,
        } => run(needed, &listings, json, skip_invalid),
        Command::Schema => print_schemas(),
    }
}

fn run(needed: f64, listings: &Path, json: bool, skip_invalid: bool) -> anyhow::Result<()> {
    let file = File::open(listings)
        .with_context(|| format!("opening listing catalog {}", listings.display()))?;
    let rows: Vec<Listing> =
        serde_json::from_reader(BufReader::new(file)).context("parsing listing catalog")?;

    let policy = if skip_invalid {
        InvalidListingPolicy::Skip
    } else {
        InvalidListingPolicy::Reject
    };
    let engine =
        AllocationEngine::new(AllocatorConfig::default().with_invalid_listing_policy(policy));

    let request = AllocationRequest::from_f64(needed)?;
    let result = engine.allocate(&request, &rows)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", Transcript::from_result(&result));
    }
    Ok(())
}

fn print_schemas() -> anyhow::Result<()> {
    let listing = schemars::schema_for!(Listing);
    let result = schemars::schema_for!(AllocationResult);
    println!("{}", serde_json::to_string_pretty(&listing)?);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
