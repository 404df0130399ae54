//! This program computes statistics over public records published by state
//! governments: electric vehicle registrations from Washington State, and DMV
//! office locations from Oregon, New York and Missouri.
//!
//! Records are loaded from the Socrata CSV export of each dataset (or from a
//! local copy of it) into a [`Dataset`], which the summary is computed from.

mod config;
mod csv;
mod dataset;
mod error;
mod progress;
mod record;
mod report;
mod sources;
mod stats;
mod year;

use crate::{
    config::Config,
    dataset::Dataset,
    progress::ProgressReport,
    record::{
        facility::{MissouriFacilityRow, NewYorkFacilityRow, OregonFacilityRow, Region},
        vehicle::RawRegistration,
        Facility, Vehicle,
    },
    sources::SourceKind,
    year::ModelYear,
};
use clap::Parser;
use log::LevelFilter;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Summarize vehicle registrations and DMV facility datasets
///
/// The summary always includes the record count and the most common value of
/// one field. Vehicle datasets additionally get the most popular make and
/// model, the number of vehicles from one model year and the county with the
/// most registered vehicles.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// Short name of the dataset to be used, e.g. "wa-ev"
    ///
    /// Will interactively prompt for a supported dataset if not specified.
    #[arg(short, long, default_value = None)]
    source: Option<Box<str>>,

    /// Local CSV file or URL to read records from
    ///
    /// By default, the dataset is downloaded from its publisher. A local copy
    /// must use the same column layout as the publisher's CSV export.
    #[arg(short, long, default_value = None)]
    input: Option<Box<str>>,

    /// Model year whose vehicles are counted
    ///
    /// Only used by vehicle datasets.
    #[arg(short, long, default_value = "2019")]
    year: ModelYear,

    /// Field whose most common value is reported
    ///
    /// Defaults to the city of the vehicle registration or DMV office.
    #[arg(short, long)]
    group_by: Option<Box<str>>,

    /// Field by which records should be counted
    #[arg(long, requires = "filter_value")]
    filter_field: Option<Box<str>>,

    /// Value that --filter-field must have for a record to be counted
    #[arg(long, requires = "filter_field")]
    filter_value: Option<Box<str>>,

    /// Do not display progress bars
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}
//
impl Args {
    /// Decode and validate CLI arguments
    pub fn parse_and_check() -> Result<Self> {
        // Decode CLI arguments
        let args = Args::parse();

        // Check CLI arguments for basic sanity
        if let Some(input) = &args.input {
            anyhow::ensure!(!input.trim().is_empty(), "input location cannot be empty");
        }
        Ok(args)
    }
}
//
#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging
    setup_logging().map_err(|e| anyhow::format_err!("{e}"))?;

    // Decode CLI arguments
    let args = Args::parse_and_check()?;

    // Pick a data source
    let source = match &args.source {
        Some(short_name) => sources::get(short_name)?,
        None => sources::prompt()?,
    };
    log::info!("Using data source {}", source.name);
    let config = Config::new(args, source)?;

    // Set up progress reporting
    let progress = if config.quiet {
        ProgressReport::hidden()
    } else {
        ProgressReport::new()
    };

    // Load the records and summarize them
    let client = reqwest::Client::new();
    let summary = match config.source.kind {
        SourceKind::Vehicles => {
            let dataset = Dataset::new(
                csv::load::<RawRegistration, Vehicle>(&config.location, &client, &progress).await?,
            );
            report::summarize_vehicles(&config, &dataset)?
        }
        SourceKind::Facilities(region) => {
            let location = &config.location;
            let facilities = match region {
                Region::Oregon => {
                    csv::load::<OregonFacilityRow, Facility>(location, &client, &progress).await?
                }
                Region::NewYork => {
                    csv::load::<NewYorkFacilityRow, Facility>(location, &client, &progress).await?
                }
                Region::Missouri => {
                    csv::load::<MissouriFacilityRow, Facility>(location, &client, &progress).await?
                }
            };
            report::summarize(&config, &Dataset::new(facilities))?
        }
    };

    // Display the summary
    {
        let stdout = tokio::io::stdout();
        let mut stdout = BufWriter::new(stdout);
        for line in summary {
            stdout.write_all(line.to_string().as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
    }
    Ok(())
}

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}
