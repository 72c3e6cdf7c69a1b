//! Weighted priority queue of pending bins
//!
//! Pending bins are kept in ascending weight order. Equal weights pop in
//! insertion order, carried by a sequence number in the ordering key, so
//! the pop order matches a stable walk-and-splice insertion sort. Every
//! weight depends on the vehicle's current zone, which is why a move
//! triggers a full rebuild rather than an incremental re-sort.

use sorted_vec::SortedVec;

use super::error::SimError;
use super::registry::BinRegistry;
use super::types::{WasteBin, ZoneId};
use super::zone_graph::ZoneGraph;

/// Greedy urgency score for a pending bin: travel cost from the vehicle's
/// zone plus the bin's deadline. Bins reachable soon and due soon sort
/// first. Recomputed on every vehicle move, never cached across moves.
pub fn priority_weight(
    bin: &WasteBin,
    vehicle_zone: ZoneId,
    graph: &ZoneGraph,
) -> Result<u64, SimError> {
    Ok(graph.travel_cost(vehicle_zone, bin.zone)? + bin.window_close)
}

/// A queued bin: its current weight and its index into the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PendingEntry {
    pub weight: u64,
    /// Tie-break: equal weights pop in insertion order
    seq: u64,
    pub bin: usize,
}

/// The subset of bins not yet picked up, ordered ascending by weight
pub struct PendingQueue {
    entries: SortedVec<PendingEntry>,
    next_seq: u64,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self {
            entries: SortedVec::new(),
            next_seq: 0,
        }
    }

    /// Build the initial queue against the vehicle's starting zone.
    /// Registry order is the insertion order, so it breaks initial ties.
    pub fn build(
        registry: &BinRegistry,
        vehicle_zone: ZoneId,
        graph: &ZoneGraph,
    ) -> Result<Self, SimError> {
        let mut queue = Self::new();
        for (index, bin) in registry.iter().enumerate() {
            let weight = priority_weight(bin, vehicle_zone, graph)?;
            queue.insert(weight, index);
        }
        Ok(queue)
    }

    /// Inserts a bin keeping ascending weight order
    pub fn insert(&mut self, weight: u64, bin: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(PendingEntry { weight, seq, bin });
    }

    /// Removes and returns the minimum-weight entry
    pub fn pop_min(&mut self) -> Option<PendingEntry> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove_index(0))
        }
    }

    /// Non-destructive look at the minimum-weight entry
    pub fn peek_min(&self) -> Option<&PendingEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending weight order
    pub fn iter(&self) -> impl Iterator<Item = &PendingEntry> {
        self.entries.iter()
    }

    /// Recomputes every pending weight against the vehicle's new zone and
    /// reinserts into a fresh ordering.
    ///
    /// Sequence numbers are reassigned in the drain order of the old
    /// queue, so bins whose new weights tie keep the relative order they
    /// had before the move.
    pub fn rebuild(
        &mut self,
        vehicle_zone: ZoneId,
        graph: &ZoneGraph,
        registry: &BinRegistry,
    ) -> Result<(), SimError> {
        let drained = std::mem::replace(&mut self.entries, SortedVec::new()).into_vec();
        self.next_seq = 0;
        for entry in drained {
            let weight = priority_weight(registry.bin(entry.bin), vehicle_zone, graph)?;
            self.insert(weight, entry.bin);
        }
        Ok(())
    }
}

impl Default for PendingQueue {
    fn default() -> Self {
        Self::new()
    }
}
