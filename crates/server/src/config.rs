// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Startup configuration: command-line arguments and the location hierarchy.

use clap::Parser;
use roster_domain::{
    BuildingFloors, CoverageThresholds, LocationHierarchy, RosterConfig, Weekday,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Roster Server - HTTP server for the staff roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON roster file. If not provided, uses an in-memory roster.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Path to a JSON location hierarchy. If not provided, uses the built-in one.
    #[arg(short, long)]
    pub locations: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// First day of the displayed week
    #[arg(long, default_value = "monday", value_parser = parse_weekday)]
    pub week_start: Weekday,

    /// Minimum morning assignments per day before the day is flagged
    #[arg(long, default_value_t = 2)]
    pub min_morning: u32,

    /// Minimum afternoon assignments per day before the day is flagged
    #[arg(long, default_value_t = 2)]
    pub min_afternoon: u32,

    /// Minimum night assignments per day before the day is flagged
    #[arg(long, default_value_t = 1)]
    pub min_night: u32,
}

impl Args {
    /// Builds the roster configuration from the arguments.
    #[must_use]
    pub const fn roster_config(&self) -> RosterConfig {
        RosterConfig {
            week_start: self.week_start,
            thresholds: CoverageThresholds {
                morning: self.min_morning,
                afternoon: self.min_afternoon,
                night: self.min_night,
            },
        }
    }
}

/// Parses a weekday name such as `monday` or `Sun`.
///
/// # Errors
///
/// Returns a message naming the rejected value.
pub fn parse_weekday(value: &str) -> Result<Weekday, String> {
    let lowered: String = value.trim().to_ascii_lowercase();
    let weekday: Weekday = match lowered.as_str() {
        "monday" | "mon" => Weekday::Monday,
        "tuesday" | "tue" => Weekday::Tuesday,
        "wednesday" | "wed" => Weekday::Wednesday,
        "thursday" | "thu" => Weekday::Thursday,
        "friday" | "fri" => Weekday::Friday,
        "saturday" | "sat" => Weekday::Saturday,
        "sunday" | "sun" => Weekday::Sunday,
        _ => return Err(format!("unknown weekday '{value}'")),
    };
    Ok(weekday)
}

/// The hierarchy used when no locations file is given.
#[must_use]
pub fn default_hierarchy() -> LocationHierarchy {
    LocationHierarchy::new(vec![
        BuildingFloors::new("Main", &["1F", "2F", "3F"]),
        BuildingFloors::new("East Wing", &["1F", "2F"]),
        BuildingFloors::new("West Wing", &["1F", "2F"]),
    ])
}

/// Loads the location hierarchy from `path`, or the built-in one when absent.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_hierarchy(path: Option<&Path>) -> Result<LocationHierarchy, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        info!("Using built-in location hierarchy");
        return Ok(default_hierarchy());
    };

    let contents: String = std::fs::read_to_string(path)?;
    let hierarchy: LocationHierarchy = serde_json::from_str(&contents)?;
    info!(
        path = %path.display(),
        building_count = hierarchy.buildings().len(),
        "Loaded location hierarchy"
    );
    Ok(hierarchy)
}
