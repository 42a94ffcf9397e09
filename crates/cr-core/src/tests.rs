//! Unit tests for cr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RoadId, VehicleTypeId};

    #[test]
    fn ordering() {
        assert!(RoadId(1) < RoadId(2));
        assert!(VehicleTypeId(100) > VehicleTypeId(99));
    }

    #[test]
    fn display() {
        assert_eq!(RoadId(7).to_string(), "RoadId(7)");
        assert_eq!(VehicleTypeId(3).to_string(), "VehicleTypeId(3)");
    }

    #[test]
    fn parse_bare_integer() {
        assert_eq!(" 11 ".parse::<RoadId>().unwrap(), RoadId(11));
        assert!("eleven".parse::<RoadId>().is_err());
        assert!("-1".parse::<RoadId>().is_err());
    }

    #[test]
    fn from_raw() {
        assert_eq!(RoadId::from(4u32), RoadId(4));
        assert_eq!(RoadId(4).get(), 4);
    }
}

#[cfg(test)]
mod model {
    use crate::{Occupancy, Road, RoadId, VehicleTypeId};

    #[test]
    fn builder_accumulates() {
        let road = Road::new(RoadId(1), "NE 42nd Way")
            .connect(RoadId(2), 1.0)
            .connect(RoadId(3), 2.5)
            .with_vehicles(VehicleTypeId(1), 4);

        assert_eq!(road.connections.len(), 2);
        assert_eq!(road.vehicles, vec![Occupancy::new(VehicleTypeId(1), 4)]);
        assert!(road.has_occupancy());
    }

    #[test]
    fn empty_road_has_no_occupancy() {
        assert!(!Road::new(RoadId(5), "202nd Ave NE").has_occupancy());
    }

    #[test]
    fn distance_to_first_match() {
        let road = Road::new(RoadId(8), "203rd Ave NE")
            .connect(RoadId(9), 1.0)
            .connect(RoadId(10), 2.0)
            .connect(RoadId(10), 7.0);

        assert_eq!(road.distance_to(RoadId(10)), Some(2.0));
        assert_eq!(road.distance_to(RoadId(9)), Some(1.0));
        assert_eq!(road.distance_to(RoadId(1)), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_shape {
    use crate::{Road, RoadId, VehicleType, VehicleTypeId};

    #[test]
    fn road_uses_wire_field_names() {
        let road = Road::new(RoadId(9), "NE 39th St East")
            .connect(RoadId(10), 1.0)
            .with_vehicles(VehicleTypeId(1), 1);

        let json = serde_json::to_value(&road).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["connections"][0]["road_id"], 10);
        assert_eq!(json["connections"][0]["distance_value"], 1.0);
        assert_eq!(json["vehicles"][0]["vehicle_id"], 1);
        assert_eq!(json["vehicles"][0]["amount"], 1);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let road: Road = serde_json::from_str(r#"{"id": 5, "name": "202nd Ave NE"}"#).unwrap();
        assert!(road.connections.is_empty());
        assert!(road.vehicles.is_empty());
    }

    #[test]
    fn vehicle_type_parses() {
        let v: VehicleType =
            serde_json::from_str(r#"{"id": 3, "name": "Bus", "congestion_value": 4}"#).unwrap();
        assert_eq!(v, VehicleType::new(VehicleTypeId(3), "Bus", 4.0));
    }
}
