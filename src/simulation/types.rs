//! Core types for the dispatch simulation

use std::fmt;

/// A discrete location in the routing graph
/// Zone 0 is reserved for the depot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub u32);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a waste bin (e.g. "wb1")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinId(pub String);

impl BinId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Waste stream a bin belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinKind {
    General,
    Recycling,
}

/// A waste receptacle awaiting collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasteBin {
    pub id: BinId,
    pub zone: ZoneId,
    pub kind: BinKind,
    /// Volume the bin adds to the vehicle load
    pub volume: u32,
    /// Earliest service time
    pub window_open: u64,
    /// Service deadline
    pub window_close: u64,
}

impl WasteBin {
    pub fn new(
        id: impl Into<String>,
        zone: ZoneId,
        kind: BinKind,
        volume: u32,
        window_open: u64,
        window_close: u64,
    ) -> Self {
        Self {
            id: BinId::new(id),
            zone,
            kind,
            volume,
            window_open,
            window_close,
        }
    }
}
