//! JSON and CSV loaders.
//!
//! # JSON
//!
//! Roads and vehicle types use the same document shape the service prints:
//!
//! ```json
//! [{ "id": 1, "name": "NE 42nd Way",
//!    "connections": [{ "road_id": 2, "distance_value": 1 }],
//!    "vehicles":    [{ "vehicle_id": 1, "amount": 3 }] }]
//! ```
//!
//! # CSV
//!
//! Vehicle types, one row each:
//!
//! ```csv
//! id,name,congestion_value
//! 1,Bike,1
//! 3,Bus,4
//! ```
//!
//! Roads come as two files, roads then connections.  Roads keep the order of
//! the roads file; connections keep their row order within each road.
//! Occupancy is not part of the CSV form (all roads start empty).
//!
//! ```csv
//! id,name
//! 1,NE 42nd Way
//! 2,NE 42nd St
//! ```
//!
//! ```csv
//! road_id,target_road_id,distance_value
//! 1,2,1
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Deserialize;

use cr_core::{Connection, Road, RoadId, VehicleType, VehicleTypeId};

use crate::{StoreError, StoreResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VehicleRecord {
    id:               u32,
    name:             String,
    congestion_value: f64,
}

#[derive(Deserialize)]
struct RoadRecord {
    id:   u32,
    name: String,
}

#[derive(Deserialize)]
struct ConnectionRecord {
    road_id:        u32,
    target_road_id: u32,
    distance_value: f64,
}

// ── Roads ─────────────────────────────────────────────────────────────────────

/// Load a JSON road list from `path`.
pub fn load_roads_json(path: &Path) -> StoreResult<Vec<Road>> {
    load_roads_reader(BufReader::new(File::open(path)?))
}

/// Like [`load_roads_json`] but accepts any `Read` source.
pub fn load_roads_reader<R: Read>(reader: R) -> StoreResult<Vec<Road>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write `roads` to `path` as pretty-printed JSON.
pub fn save_roads_json(path: &Path, roads: &[Road]) -> StoreResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    save_roads_writer(&mut out, roads)?;
    out.flush()?;
    Ok(())
}

/// Like [`save_roads_json`] but accepts any `Write` sink.
pub fn save_roads_writer<W: Write>(writer: W, roads: &[Road]) -> StoreResult<()> {
    serde_json::to_writer_pretty(writer, roads)?;
    Ok(())
}

/// Load roads from a roads CSV and a connections CSV.
pub fn load_roads_csv(roads: &Path, connections: &Path) -> StoreResult<Vec<Road>> {
    load_roads_csv_readers(File::open(roads)?, File::open(connections)?)
}

/// Like [`load_roads_csv`] but accepts any `Read` sources.
///
/// # Errors
///
/// [`StoreError::Parse`] if a connection names a source road that is not in
/// the roads file.  Unknown **targets** are kept; the router ignores them.
pub fn load_roads_csv_readers<R1: Read, R2: Read>(roads: R1, connections: R2) -> StoreResult<Vec<Road>> {
    let mut out: Vec<Road> = Vec::new();
    let mut position: HashMap<u32, usize> = HashMap::new();

    for result in csv::Reader::from_reader(roads).deserialize::<RoadRecord>() {
        let row = result?;
        position.insert(row.id, out.len());
        out.push(Road::new(RoadId(row.id), row.name));
    }

    for result in csv::Reader::from_reader(connections).deserialize::<ConnectionRecord>() {
        let row = result?;
        let pos = *position.get(&row.road_id).ok_or_else(|| {
            StoreError::Parse(format!(
                "connection {} -> {} starts at a road missing from the roads file",
                row.road_id, row.target_road_id
            ))
        })?;
        out[pos]
            .connections
            .push(Connection::new(RoadId(row.target_road_id), row.distance_value));
    }

    Ok(out)
}

// ── Vehicle types ─────────────────────────────────────────────────────────────

/// Load a JSON vehicle-type list from `path`.
pub fn load_vehicle_types_json(path: &Path) -> StoreResult<Vec<VehicleType>> {
    load_vehicle_types_reader(BufReader::new(File::open(path)?))
}

/// Like [`load_vehicle_types_json`] but accepts any `Read` source.
pub fn load_vehicle_types_reader<R: Read>(reader: R) -> StoreResult<Vec<VehicleType>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load vehicle types from a CSV file.
pub fn load_vehicle_types_csv(path: &Path) -> StoreResult<Vec<VehicleType>> {
    load_vehicle_types_csv_reader(File::open(path)?)
}

/// Like [`load_vehicle_types_csv`] but accepts any `Read` source.
pub fn load_vehicle_types_csv_reader<R: Read>(reader: R) -> StoreResult<Vec<VehicleType>> {
    csv::Reader::from_reader(reader)
        .deserialize::<VehicleRecord>()
        .map(|result| -> StoreResult<VehicleType> {
            let row = result?;
            Ok(VehicleType::new(VehicleTypeId(row.id), row.name, row.congestion_value))
        })
        .collect()
}

/// Load vehicle types, picking CSV or JSON from the file extension
/// (`.csv` → CSV, anything else → JSON).
pub fn load_vehicle_types(path: &Path) -> StoreResult<Vec<VehicleType>> {
    if is_csv(path) {
        load_vehicle_types_csv(path)
    } else {
        load_vehicle_types_json(path)
    }
}

/// `true` if `path` has a `.csv` extension (case-insensitive).
pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}
