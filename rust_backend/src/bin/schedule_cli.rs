//! Schedule command-line driver.
//!
//! # Usage
//!
//! ```bash
//! schedule-cli ingest schedule.csv
//! schedule-cli stops
//! schedule-cli day "Jul 05 2021"
//! schedule-cli near 1 "Jul 04 2021 07:42"
//! schedule-cli first "Jul 05 2021" 1
//! schedule-cli clear
//! ```
//!
//! # Environment Variables
//!
//! - `SCHEDULE_CONFIG`: path to a `schedule.toml` (default: standard locations)
//! - `SCHEDULE_STORE`: store type override (`json` | `local`)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use transit_schedule::config::ScheduleConfig;
use transit_schedule::db::{ScheduleStore, StoreFactory};
use transit_schedule::models::parse_schedule_date;
use transit_schedule::services;
use transit_schedule::StopId;

const USAGE: &str = "usage: schedule-cli <ingest FILE | stops | day DATE | near STOP TIME | first DATE STOP | clear>";

fn load_config() -> Result<ScheduleConfig> {
    if let Ok(path) = env::var("SCHEDULE_CONFIG") {
        return ScheduleConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path));
    }
    match ScheduleConfig::from_default_location() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("{}; using defaults", e);
            Ok(ScheduleConfig::default())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_stop(value: &str) -> Result<StopId> {
    value
        .parse()
        .with_context(|| format!("Invalid stop id: {}", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let config = load_config()?;
    let window = config.arrival_window()?;
    let store = StoreFactory::from_config(&config).await?;
    info!("Using {} store", config.resolved_store_type()?);

    match args.as_slice() {
        ["ingest", path] => {
            let written = services::ingest_file(store.as_ref(), path).await?;
            print_json(&written)?;
        }
        ["stops"] => {
            print_json(&services::all_distinct_stops(store.as_ref()).await?)?;
        }
        ["day", date] => {
            let date = parse_schedule_date(date)?;
            print_json(&services::schedule_for_date(store.as_ref(), date).await?)?;
        }
        ["near", stop, time] => {
            let stop = parse_stop(stop)?;
            let trains =
                services::trains_near_stop_and_time_within(store.as_ref(), stop, time, window)
                    .await?;
            print_json(&trains)?;
        }
        ["first", date, stop] => {
            let date = parse_schedule_date(date)?;
            let stop = parse_stop(stop)?;
            print_json(&services::first_multi_arrival_of_day(store.as_ref(), date, stop).await?)?;
        }
        ["clear"] => {
            store.clear().await?;
            info!("Store cleared");
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
