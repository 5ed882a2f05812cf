use std::error::Error;
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use env_logger::Env;
use log::info;
use serde::Serialize;
use tokio::io::AsyncReadExt;

use smarttrip_planner::config::PlannerConfig;
use smarttrip_planner::models::{NewTripRequest, StoredItineraryItem, Trip, TripSubData};
use smarttrip_planner::services::{ItineraryDerivationService, MemoryTripStore, TripPlanner};

mod cli;

use cli::{Cli, Command};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanReport<'a> {
    trip: &'a Trip,
    itinerary: &'a [StoredItineraryItem],
    recent_trips: Vec<&'a Trip>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let config = PlannerConfig::from_env()?;

    match cli.command {
        Command::Derive { payload } => {
            let request = read_payload(&payload).await?;
            let (new_trip, sub_data) = request.resolve(&TripSubData::default());
            let trip = Trip::from(new_trip);

            let items = ItineraryDerivationService::derive(&trip, &sub_data);
            info!("Derived {} itinerary items", items.len());
            print_json(&items, config.pretty_json)?;
        }
        Command::Plan { payload, today } => {
            let request = read_payload(&payload).await?;
            let today: NaiveDate = today.unwrap_or_else(|| Local::now().date_naive());

            let mut planner = TripPlanner::with_config(MemoryTripStore::new(), config);
            let planned = planner.add_trip(request).await?;

            let report = PlanReport {
                trip: &planned.trip,
                itinerary: &planned.itinerary,
                recent_trips: planner.recent_trips(today),
            };
            print_json(&report, planner.config().pretty_json)?;
        }
    }

    Ok(())
}

async fn read_payload(path: &Path) -> Result<NewTripRequest, Box<dyn Error>> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read payload {}: {}", path.display(), e))?
    };

    serde_json::from_str(&raw).map_err(|e| format!("Invalid trip payload: {}", e).into())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn Error>> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}
