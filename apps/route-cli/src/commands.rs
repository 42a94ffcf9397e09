//! Wiring and dispatch: build the service from files or seed data, then run
//! one subcommand.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use cr_service::{CongestionUpdate, TrafficService};
use cr_store::{loader, seed, InMemoryRoadStore, InMemoryVehicleCatalog};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

pub type Service = TrafficService<InMemoryRoadStore, InMemoryVehicleCatalog>;

pub fn build_service(cli: &Cli, config: &AppConfig) -> Result<Service> {
    let roads = match (&cli.roads, &cli.connections) {
        (Some(roads), Some(connections)) => loader::load_roads_csv(roads, connections)
            .with_context(|| format!("loading {} + {}", roads.display(), connections.display()))?,
        (Some(roads), None) => {
            loader::load_roads_json(roads).with_context(|| format!("loading {}", roads.display()))?
        }
        (None, _) => seed::default_roads(),
    };
    let vehicle_types = match &cli.vehicles {
        Some(path) => loader::load_vehicle_types(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => seed::default_vehicle_types(),
    };
    debug!(roads = roads.len(), vehicle_types = vehicle_types.len(), "data loaded");

    Ok(TrafficService::with_router_config(
        InMemoryRoadStore::new(roads),
        InMemoryVehicleCatalog::new(vehicle_types),
        config.router,
    ))
}

/// Run `command` and return its JSON result.
///
/// `output` is only used by `update-congestion`, to persist the new road set.
pub fn run(command: &Command, service: &Service, output: Option<&Path>) -> Result<Value> {
    let value = match command {
        Command::Roads => serde_json::to_value(service.list_roads()?)?,
        Command::Road { id } => serde_json::to_value(service.find_road(*id)?)?,
        Command::Vehicles => serde_json::to_value(service.list_vehicle_types()?)?,
        Command::Congestion => serde_json::to_value(service.list_congestion()?)?,
        Command::UpdateCongestion { file } => {
            let reader = BufReader::new(
                File::open(file).with_context(|| format!("opening {}", file.display()))?,
            );
            let update: CongestionUpdate = serde_json::from_reader(reader)
                .with_context(|| format!("parsing {}", file.display()))?;
            let roads = service.update_congestion(update)?;
            if let Some(path) = output {
                loader::save_roads_json(path, &roads)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            serde_json::to_value(roads)?
        }
        Command::Route { start, end } => {
            serde_json::to_value(service.efficient_route(*start, *end)?.into_names())?
        }
    };
    Ok(value)
}
