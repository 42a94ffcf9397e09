//! Strongly typed identifier wrappers.
//!
//! Road and vehicle-type ids are assigned by the store, not by position, so
//! unlike a dense index they may be sparse and must be resolved through a
//! lookup before indexing into any `Vec`.  Both are `Copy + Ord + Hash` so
//! they can be used as map keys without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer as stored in the road/vehicle documents.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            /// Parses the bare integer form (`"7"`), as passed on the command line.
            fn from_str(s: &str) -> Result<$name, Self::Err> {
                s.trim().parse::<$inner>().map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier of a road segment.  Unique within one road set.
    pub struct RoadId(u32);
}

typed_id! {
    /// Identifier of a vehicle type in the vehicle catalog.
    pub struct VehicleTypeId(u32);
}
