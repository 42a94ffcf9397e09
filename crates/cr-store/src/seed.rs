//! Default dataset: a twelve-road neighbourhood around NE 42nd St and three
//! vehicle types.
//!
//! ```text
//!  1 NE 42nd Way     → 2
//!  2 NE 42nd St      → 3, 5, 6, 8, 9
//!  3 201st Ave NE    → 4, 5
//!  4 NE 44th St      → 5
//!  6 NE 39th St West → 7
//!  8 203rd Ave NE    → 9, 10 (distance 2)
//!  9 NE 39th St East → 10
//! 10 204th Ave NE    → 11, 12
//! ```
//!
//! Every distance is 1 unless noted.  Nobody is on the road initially.

use cr_core::{Road, RoadId, VehicleType, VehicleTypeId};

pub fn default_roads() -> Vec<Road> {
    let r = RoadId;
    vec![
        Road::new(r(1), "NE 42nd Way").connect(r(2), 1.0),
        Road::new(r(2), "NE 42nd St")
            .connect(r(3), 1.0)
            .connect(r(5), 1.0)
            .connect(r(6), 1.0)
            .connect(r(8), 1.0)
            .connect(r(9), 1.0),
        Road::new(r(3), "201st Ave NE").connect(r(4), 1.0).connect(r(5), 1.0),
        Road::new(r(4), "NE 44th St").connect(r(5), 1.0),
        Road::new(r(5), "202nd Ave NE"),
        Road::new(r(6), "NE 39th St West").connect(r(7), 1.0),
        Road::new(r(7), "NE 39th Ln"),
        Road::new(r(8), "203rd Ave NE").connect(r(9), 1.0).connect(r(10), 2.0),
        Road::new(r(9), "NE 39th St East").connect(r(10), 1.0),
        Road::new(r(10), "204th Ave NE").connect(r(11), 1.0).connect(r(12), 1.0),
        Road::new(r(11), "206th PI NE"),
        Road::new(r(12), "205th PI NE"),
    ]
}

pub fn default_vehicle_types() -> Vec<VehicleType> {
    vec![
        VehicleType::new(VehicleTypeId(1), "Bike", 1.0),
        VehicleType::new(VehicleTypeId(2), "Car",  2.0),
        VehicleType::new(VehicleTypeId(3), "Bus",  4.0),
    ]
}
