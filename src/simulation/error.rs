//! Typed error taxonomy for the dispatch simulation
//!
//! Every error here is a pre-run or lookup-time condition and is fatal to
//! the run; there is no retry or partial-failure model.

use thiserror::Error;

use super::types::{BinId, ZoneId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The vehicle could never load a single bin.
    #[error("vehicle capacity is zero (max_volume and max_bins must both be positive)")]
    EmptyCapacity,

    /// A bin that cannot fit on an empty vehicle would deadlock the
    /// head-fits gate, so it is rejected before the run starts.
    #[error("bin {id} has volume {volume} exceeding vehicle capacity {max_volume}")]
    OversizedBin {
        id: BinId,
        volume: u32,
        max_volume: u32,
    },

    /// Service window closes before it opens.
    #[error("bin {id} has an inverted service window")]
    InvalidWindow { id: BinId },

    #[error("duplicate bin id {id}")]
    DuplicateBin { id: BinId },

    #[error("bin {id} references zone {zone} which is not in the graph")]
    UnknownZone { id: BinId, zone: ZoneId },

    /// No travel cost between two distinct zones. Never silently treated
    /// as zero: a zero cost would corrupt both the weight ordering and the
    /// vehicle clock.
    #[error("no travel cost from zone {from} to zone {to}")]
    MissingEdge { from: ZoneId, to: ZoneId },

    #[error("self-loop edge on zone {zone}")]
    SelfLoopEdge { zone: ZoneId },

    #[error("zero-cost edge from zone {from} to zone {to}")]
    ZeroCostEdge { from: ZoneId, to: ZoneId },
}
