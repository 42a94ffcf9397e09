//! Outgoing-edge construction and topology inference.
//!
//! Connections are stored only on the originating road, so the graph as
//! given may omit true reverse links.  When a road is expanded the router
//! asks [`InferenceMode::augment`] for extra edges derived from the rest of
//! the road set.  Augmentation is a pure function of the snapshot and the
//! expanded road; the only state it reports back is the list of roads it
//! marked as back-referenced.
//!
//! # `Legacy` inference
//!
//! For the expanded road `u` and every road `w` that lists `w -> u` with
//! distance `d`:
//!
//! 1. add the reverse edge `u -> w` with distance `d` and mark `w`
//!    back-referenced;
//! 2. for every connection `w -> x` whose distance is exactly `d`, add a
//!    speculative edge `u -> x` with distance `0`.
//!
//! Inferred edges are keyed by target: a later inference for the same target
//! overwrites the distance but keeps the slot of the first insertion.
//!
//! A back-referenced road that is later expanded has its declared distances
//! re-ranked as `max + 1 - d` (see [`declared_edges`]).
//!
//! The speculative step can fabricate edges that do not physically exist.
//! `Symmetric` keeps only step 1 without marking, `Declared` keeps none.

use rustc_hash::FxHashMap;

use cr_core::{Road, RoadId};

use crate::RoadSnapshot;

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One outgoing edge considered during relaxation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to:       RoadId,
    pub distance: f64,
}

// ── InferenceMode ─────────────────────────────────────────────────────────────

/// How missing reverse connections are recovered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InferenceMode {
    /// Reverse edges, same-distance speculative edges and back-reference
    /// distance inversion.  Reproduces the established routing results.
    #[default]
    Legacy,
    /// Every declared connection is also traversable in reverse at the same
    /// distance.  Nothing else is inferred.
    Symmetric,
    /// Declared connections only; the network is strictly directed.
    Declared,
}

/// Extra edges for one expanded road, plus the roads the inference marked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Augmentation {
    /// Inferred edges in first-insertion order.
    pub edges: Vec<Edge>,
    /// Positions of roads that reference the expanded road.
    pub back_referenced: Vec<usize>,
}

impl InferenceMode {
    /// Inferred outgoing edges of the road at `current`.
    pub fn augment(self, snapshot: &RoadSnapshot, current: usize) -> Augmentation {
        match self {
            InferenceMode::Legacy    => infer(snapshot, current, true),
            InferenceMode::Symmetric => {
                // Reverse edges without the marking that drives inversion.
                let mut aug = infer(snapshot, current, false);
                aug.back_referenced.clear();
                aug
            }
            InferenceMode::Declared  => Augmentation::default(),
        }
    }

    /// `true` if back-referenced roads get their declared distances inverted.
    #[inline]
    pub fn inverts_back_references(self) -> bool {
        matches!(self, InferenceMode::Legacy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InferenceMode::Legacy    => "legacy",
            InferenceMode::Symmetric => "symmetric",
            InferenceMode::Declared  => "declared",
        }
    }
}

impl std::fmt::Display for InferenceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Declared edges ────────────────────────────────────────────────────────────

/// The declared connections of `road` as edges.
///
/// With `inverted`, each distance `d` becomes `max + 1 - d` where `max` is
/// the largest declared distance of `road`, reversing their relative order.
pub fn declared_edges(road: &Road, inverted: bool) -> Vec<Edge> {
    let max = road
        .connections
        .iter()
        .map(|c| c.distance_value)
        .fold(f64::NEG_INFINITY, f64::max);

    road.connections
        .iter()
        .map(|c| Edge {
            to:       c.road_id,
            distance: if inverted { max + 1.0 - c.distance_value } else { c.distance_value },
        })
        .collect()
}

// ── Inference internals ───────────────────────────────────────────────────────

/// Insertion-ordered edge map keyed by target road.
#[derive(Default)]
struct EdgeMap {
    edges: Vec<Edge>,
    slot:  FxHashMap<RoadId, usize>,
}

impl EdgeMap {
    fn set(&mut self, to: RoadId, distance: f64) {
        match self.slot.get(&to) {
            Some(&i) => self.edges[i].distance = distance,
            None => {
                self.slot.insert(to, self.edges.len());
                self.edges.push(Edge { to, distance });
            }
        }
    }
}

fn infer(snapshot: &RoadSnapshot, current: usize, speculative: bool) -> Augmentation {
    let target = snapshot.road(current).id;
    let mut map = EdgeMap::default();
    let mut back_referenced = Vec::new();

    for (pos, referrer) in snapshot.roads().iter().enumerate() {
        let Some(distance) = referrer.distance_to(target) else {
            continue;
        };
        map.set(referrer.id, distance);
        back_referenced.push(pos);

        if speculative {
            for c in &referrer.connections {
                if c.distance_value == distance {
                    map.set(c.road_id, 0.0);
                }
            }
        }
    }

    Augmentation { edges: map.edges, back_referenced }
}
