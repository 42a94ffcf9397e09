//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use cr_core::RoadId;

#[derive(Debug, Parser)]
#[command(name = "route", version, about = "Congestion-aware road routing")]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Road list: JSON, or a roads CSV when `--connections` is also given.
    #[arg(long, global = true)]
    pub roads: Option<PathBuf>,

    /// Connections CSV (`road_id,target_road_id,distance_value`).
    #[arg(long, global = true, requires = "roads")]
    pub connections: Option<PathBuf>,

    /// Vehicle types, JSON or `.csv`.
    #[arg(long, global = true)]
    pub vehicles: Option<PathBuf>,

    /// Where `update-congestion` writes the updated road set (JSON).
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Print all roads.
    Roads,
    /// Print one road, or `null`.
    Road { id: RoadId },
    /// Print the vehicle catalog.
    Vehicles,
    /// Print every road that currently carries vehicles.
    Congestion,
    /// Replace road occupancy from a JSON `{ "congestions": [...] }` file.
    UpdateCongestion { file: PathBuf },
    /// Print the least-cost route as a JSON array of road names.
    Route {
        #[arg(long)]
        start: RoadId,
        #[arg(long)]
        end: RoadId,
    },
}
