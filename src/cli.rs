use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SmartTrip Planner - turn trip drafts into day-by-day itineraries
#[derive(Parser)]
#[command(name = "smarttrip-planner", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the itinerary items derived from a create-trip payload
    Derive {
        /// JSON payload file, or `-` for stdin
        #[arg(value_name = "PAYLOAD")]
        payload: PathBuf,
    },

    /// Create the trip in an in-memory store and print the stored result
    Plan {
        /// JSON payload file, or `-` for stdin
        #[arg(value_name = "PAYLOAD")]
        payload: PathBuf,

        /// Date used to pick upcoming trips (defaults to the local date)
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,
    },
}
