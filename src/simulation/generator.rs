//! Random scenario generation
//!
//! Produces a registry of bins with randomized zones, volumes and service
//! windows, plus a fully connected road network between every pair of
//! distinct zones. Full connectivity is the contract the scheduler's
//! travel-cost lookups rely on.

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::error::SimError;
use super::registry::BinRegistry;
use super::types::{BinKind, WasteBin, ZoneId};
use super::zone_graph::ZoneGraph;

const KINDS: [BinKind; 2] = [BinKind::General, BinKind::Recycling];

/// Window length of every generated bin
const WINDOW_LENGTH: u64 = 20;

/// A generated input: bins to service and the roads between zones
pub struct Scenario {
    pub bins: BinRegistry,
    pub graph: ZoneGraph,
}

/// Generates `bin_count` bins spread over zones `1..=zones` and a fully
/// connected graph over zones `0..=zones` (zone 0 is the depot).
///
/// Window opens are drawn from `[0, 13 * bin_count - 20]` and every window
/// spans 20 time units; volumes are 1 to 3; travel costs are 1 to 10.
pub fn generate(zones: u32, bin_count: u32, rng: &mut impl Rng) -> Result<Scenario, SimError> {
    let zones = zones.max(1);

    let max_time = u64::from(bin_count) * 13;
    let open_limit = max_time.saturating_sub(WINDOW_LENGTH);

    let mut bins = Vec::with_capacity(bin_count as usize);
    for i in 1..=bin_count {
        let window_open = rng.random_range(0..=open_limit);
        let kind = KINDS.choose(rng).copied().unwrap_or(BinKind::General);
        bins.push(WasteBin::new(
            format!("wb{i}"),
            ZoneId(rng.random_range(1..=zones)),
            kind,
            rng.random_range(1..=3),
            window_open,
            window_open + WINDOW_LENGTH,
        ));
    }

    let mut graph = ZoneGraph::new();
    for from in 0..=zones {
        for to in 0..=zones {
            if from != to {
                graph.add_edge(ZoneId(from), ZoneId(to), rng.random_range(1..=10))?;
            }
        }
    }

    info!(
        "generated {} bins over {} zones ({} roads)",
        bins.len(),
        zones,
        graph.edge_count()
    );

    Ok(Scenario {
        bins: BinRegistry::new(bins),
        graph,
    })
}

/// Generates a reproducible scenario from a fixed seed
pub fn generate_seeded(zones: u32, bin_count: u32, seed: u64) -> Result<Scenario, SimError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(zones, bin_count, &mut rng)
}
