//! Tests for argument parsing, configuration and command dispatch.

use clap::Parser;
use serde_json::json;

use cr_core::RoadId;
use cr_routing::{InferenceMode, RouterConfig};

use crate::cli::{Cli, Command};
use crate::commands::{build_service, run};
use crate::config::{load_config, parse_config, AppConfig};
use crate::logging::resolve_level;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("route").chain(args.iter().copied())).unwrap()
}

#[cfg(test)]
mod arguments {
    use super::*;

    #[test]
    fn route_subcommand() {
        let cli = parse(&["route", "--start", "1", "--end", "11"]);
        assert_eq!(cli.command, Command::Route { start: RoadId(1), end: RoadId(11) });
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["road", "7", "-vv", "--vehicles", "v.csv"]);
        assert_eq!(cli.command, Command::Road { id: RoadId(7) });
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.vehicles.as_deref(), Some(std::path::Path::new("v.csv")));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["route", "road", "seven"]).is_err());
    }

    #[test]
    fn connections_require_roads() {
        assert!(Cli::try_parse_from(["route", "roads", "--connections", "c.csv"]).is_err());
    }

    #[test]
    fn verbosity_overrides_config() {
        assert_eq!(resolve_level(0, None), "info");
        assert_eq!(resolve_level(0, Some("warn")), "warn");
        assert_eq!(resolve_level(1, Some("warn")), "debug");
        assert_eq!(resolve_level(3, None), "trace");
    }
}

#[cfg(test)]
mod configuration {
    use super::*;

    #[test]
    fn defaults_without_file() {
        assert_eq!(load_config(None).unwrap(), AppConfig::default());
        assert_eq!(parse_config("").unwrap().router, RouterConfig::default());
    }

    #[test]
    fn inference_mode_from_yaml() {
        let config = parse_config("router:\n  inference: symmetric\nlog_level: debug\n").unwrap();
        assert_eq!(config.router.inference, InferenceMode::Symmetric);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("routr:\n  inference: legacy\n").is_err());
        assert!(parse_config("router:\n  inference: sideways\n").is_err());
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.yaml");
        std::fs::write(&path, "router:\n  inference: declared\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.router.inference, InferenceMode::Declared);
    }
}

#[cfg(test)]
mod dispatch {
    use super::*;

    fn seeded(args: &[&str]) -> (Cli, crate::commands::Service) {
        let cli = parse(args);
        let service = build_service(&cli, &AppConfig::default()).unwrap();
        (cli, service)
    }

    #[test]
    fn route_prints_names() {
        let (cli, service) = seeded(&["route", "--start", "1", "--end", "11"]);
        let out = run(&cli.command, &service, None).unwrap();
        assert_eq!(
            out,
            json!(["NE 42nd Way", "NE 42nd St", "NE 39th St East", "204th Ave NE", "206th PI NE"])
        );
    }

    #[test]
    fn missing_route_prints_empty_array() {
        let (cli, service) = seeded(&["route", "--start", "110", "--end", "111"]);
        assert_eq!(run(&cli.command, &service, None).unwrap(), json!([]));
    }

    #[test]
    fn road_lookup() {
        let (cli, service) = seeded(&["road", "12"]);
        assert_eq!(run(&cli.command, &service, None).unwrap()["name"], "205th PI NE");

        let (cli, service) = seeded(&["road", "99"]);
        assert_eq!(run(&cli.command, &service, None).unwrap(), json!(null));
    }

    #[test]
    fn listings() {
        let (_, service) = seeded(&["roads"]);
        assert_eq!(run(&Command::Roads, &service, None).unwrap().as_array().unwrap().len(), 12);
        assert_eq!(run(&Command::Vehicles, &service, None).unwrap()[1]["name"], "Car");
        assert_eq!(run(&Command::Congestion, &service, None).unwrap(), json!([]));
    }

    #[test]
    fn update_congestion_persists_output() {
        let dir = tempfile::tempdir().unwrap();
        let update = dir.path().join("update.json");
        std::fs::write(
            &update,
            r#"{ "congestions": [{ "road_id": 9, "vehicles": [{ "vehicle_id": 1, "amount": 1 }] }] }"#,
        )
        .unwrap();
        let saved = dir.path().join("roads.json");

        let (cli, service) = seeded(&["update-congestion", update.to_str().unwrap()]);
        run(&cli.command, &service, Some(&saved)).unwrap();

        assert_eq!(
            run(&Command::Congestion, &service, None).unwrap(),
            json!([{ "road_id": 9, "vehicles": [{ "vehicle_id": 1, "amount": 1 }] }])
        );
        let route = run(&Command::Route { start: RoadId(1), end: RoadId(11) }, &service, None).unwrap();
        assert_eq!(route[2], "203rd Ave NE");

        // The persisted file loads back as the starting road set.
        let cli = parse(&["--roads", saved.to_str().unwrap(), "congestion"]);
        let reloaded = build_service(&cli, &AppConfig::default()).unwrap();
        assert_eq!(run(&cli.command, &reloaded, None).unwrap().as_array().unwrap().len(), 1);
    }

    #[test]
    fn invalid_update_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let update = dir.path().join("update.json");
        std::fs::write(&update, r#"{ "congestions": [{ "road_id": 404, "vehicles": [] }] }"#).unwrap();

        let (cli, service) = seeded(&["update-congestion", update.to_str().unwrap()]);
        let err = run(&cli.command, &service, None).unwrap_err();
        assert!(err.to_string().contains("road RoadId(404) does not exist"), "{err}");
    }

    #[test]
    fn csv_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let roads = dir.path().join("roads.csv");
        let connections = dir.path().join("connections.csv");
        let vehicles = dir.path().join("vehicles.csv");
        std::fs::write(&roads, "id,name\n1,A\n2,B\n3,C\n").unwrap();
        std::fs::write(&connections, "road_id,target_road_id,distance_value\n1,2,1\n2,3,1\n").unwrap();
        std::fs::write(&vehicles, "id,name,congestion_value\n1,Bike,1\n").unwrap();

        let cli = parse(&[
            "--roads", roads.to_str().unwrap(),
            "--connections", connections.to_str().unwrap(),
            "--vehicles", vehicles.to_str().unwrap(),
            "route", "--start", "1", "--end", "3",
        ]);
        let service = build_service(&cli, &AppConfig::default()).unwrap();
        assert_eq!(run(&cli.command, &service, None).unwrap(), json!(["A", "B", "C"]));
        assert_eq!(run(&Command::Vehicles, &service, None).unwrap().as_array().unwrap().len(), 1);
    }
}
