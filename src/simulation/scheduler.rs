//! Dispatch scheduler state machine
//!
//! Drives the single collection vehicle: pick the pending bin with the
//! lowest weight, move there, wait out its window if needed, service it,
//! and rebuild the pending ordering against the new position. When the
//! queue head does not fit the remaining capacity the vehicle returns to
//! the depot to unload. The capacity check is an all-or-nothing gate on
//! the head only: the scheduler never scans past the head for a smaller
//! bin, so an oversized head forces an early depot return even when
//! smaller bins remain pending.

use log::{debug, info, warn};
use std::collections::HashSet;

use super::error::SimError;
use super::metrics::{RunMetrics, RunSummary};
use super::queue::PendingQueue;
use super::registry::BinRegistry;
use super::types::{BinId, WasteBin, ZoneId};
use super::zone_graph::ZoneGraph;

/// Default vehicle volume capacity
pub const DEFAULT_MAX_VOLUME: u32 = 10;
/// Default vehicle bin-count capacity
pub const DEFAULT_MAX_BINS: u32 = 5;
/// Time spent unloading at the depot
pub const DEFAULT_UNLOAD_COST: u64 = 6;
/// Time spent servicing a single bin
pub const DEFAULT_SERVICE_COST: u64 = 1;
/// The depot zone
pub const DEPOT_ZONE: ZoneId = ZoneId(0);

/// Run configuration for the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub max_volume: u32,
    pub max_bins: u32,
    pub depot: ZoneId,
    pub unload_cost: u64,
    pub service_cost: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_volume: DEFAULT_MAX_VOLUME,
            max_bins: DEFAULT_MAX_BINS,
            depot: DEPOT_ZONE,
            unload_cost: DEFAULT_UNLOAD_COST,
            service_cost: DEFAULT_SERVICE_COST,
        }
    }
}

/// Mutable state of the collection vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleState {
    pub zone: ZoneId,
    pub volume_used: u32,
    pub bins_held: u32,
    pub clock: u64,
}

impl VehicleState {
    fn at_depot(depot: ZoneId) -> Self {
        Self {
            zone: depot,
            volume_used: 0,
            bins_held: 0,
            clock: 0,
        }
    }
}

/// A discrete scheduling transition, emitted for observability.
/// Consuming or ignoring these never affects scheduling outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    Move {
        from: ZoneId,
        to: ZoneId,
        cost: u64,
    },
    Wait {
        bin: BinId,
        idle: u64,
    },
    Pickup {
        bin: BinId,
        zone: ZoneId,
        late: bool,
    },
    DepotReturn {
        from: ZoneId,
        travel: u64,
        unload: u64,
    },
}

/// Result of a single scheduler cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The queue head was collected
    Collected(Vec<StepEvent>),
    /// Capacity forced an unload trip
    ReturnedToDepot(Vec<StepEvent>),
    /// All bins collected; the final depot leg (if any) was performed
    Finished(Vec<StepEvent>),
}

impl StepOutcome {
    pub fn events(&self) -> &[StepEvent] {
        match self {
            StepOutcome::Collected(events)
            | StepOutcome::ReturnedToDepot(events)
            | StepOutcome::Finished(events) => events,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, StepOutcome::Finished(_))
    }
}

/// The state machine driving the collection vehicle
pub struct Dispatcher {
    registry: BinRegistry,
    graph: ZoneGraph,
    config: SimConfig,
    queue: PendingQueue,
    vehicle: VehicleState,
    metrics: RunMetrics,
    finished: bool,
}

impl Dispatcher {
    /// Validates the input and builds the initial pending ordering against
    /// the depot. Validation rejects anything that could deadlock the
    /// scheduling loop before the run starts.
    pub fn new(
        registry: BinRegistry,
        graph: ZoneGraph,
        config: SimConfig,
    ) -> Result<Self, SimError> {
        validate(&registry, &graph, &config)?;
        let queue = PendingQueue::build(&registry, config.depot, &graph)?;
        let metrics = RunMetrics::for_registry(&registry);
        Ok(Self {
            vehicle: VehicleState::at_depot(config.depot),
            registry,
            graph,
            config,
            queue,
            metrics,
            finished: false,
        })
    }

    /// Performs one SELECT cycle. Once the run has finished, further calls
    /// keep returning an empty `Finished` outcome.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        if self.finished {
            return Ok(StepOutcome::Finished(Vec::new()));
        }

        let head = match self.queue.peek_min() {
            Some(entry) => entry.bin,
            None => return self.finish(),
        };

        let fits = {
            let bin = self.registry.bin(head);
            self.vehicle.volume_used + bin.volume <= self.config.max_volume
                && self.vehicle.bins_held + 1 <= self.config.max_bins
        };

        if fits {
            self.collect_head().map(StepOutcome::Collected)
        } else {
            self.unload_at_depot().map(StepOutcome::ReturnedToDepot)
        }
    }

    /// Drives the state machine to completion and returns the summary
    pub fn run(mut self) -> Result<RunSummary, SimError> {
        while !self.step()?.is_finished() {}
        let summary = self.metrics.finish(self.vehicle.clock);
        info!(
            "run complete: t={}, late={}/{}, waiting={}",
            summary.total_time, summary.late_count, summary.total_bins, summary.waiting_total
        );
        Ok(summary)
    }

    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    pub fn graph(&self) -> &ZoneGraph {
        &self.graph
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn picked_count(&self) -> usize {
        self.metrics.picked()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pending bins with their current weights, in pop order
    pub fn pending(&self) -> impl Iterator<Item = (u64, &WasteBin)> + '_ {
        self.queue
            .iter()
            .map(|entry| (entry.weight, self.registry.bin(entry.bin)))
    }

    fn collect_head(&mut self) -> Result<Vec<StepEvent>, SimError> {
        let Some(entry) = self.queue.pop_min() else {
            return Ok(Vec::new());
        };

        let mut events = Vec::new();
        let bin = self.registry.bin(entry.bin);

        if self.vehicle.zone != bin.zone {
            let cost = self.graph.travel_cost(self.vehicle.zone, bin.zone)?;
            debug!("move zone {} -> {} (t+{})", self.vehicle.zone, bin.zone, cost);
            self.vehicle.clock += cost;
            events.push(StepEvent::Move {
                from: self.vehicle.zone,
                to: bin.zone,
                cost,
            });
            self.vehicle.zone = bin.zone;
        } else {
            debug!("already in zone {}", bin.zone);
        }

        if self.vehicle.clock < bin.window_open {
            let idle = bin.window_open - self.vehicle.clock;
            debug!("waiting for bin {} (t+{})", bin.id, idle);
            self.metrics.record_wait(idle);
            self.vehicle.clock = bin.window_open;
            events.push(StepEvent::Wait {
                bin: bin.id.clone(),
                idle,
            });
        }

        self.vehicle.clock += self.config.service_cost;
        let late = self.vehicle.clock > bin.window_close;
        debug!("picked bin {} (t+{})", bin.id, self.config.service_cost);
        if late {
            warn!("bin {} serviced after its deadline", bin.id);
        }

        self.metrics.record_pickup(late);
        self.vehicle.volume_used += bin.volume;
        self.vehicle.bins_held += 1;
        events.push(StepEvent::Pickup {
            bin: bin.id.clone(),
            zone: bin.zone,
            late,
        });

        self.queue
            .rebuild(self.vehicle.zone, &self.graph, &self.registry)?;

        Ok(events)
    }

    fn unload_at_depot(&mut self) -> Result<Vec<StepEvent>, SimError> {
        let from = self.vehicle.zone;
        let travel = self.graph.travel_cost(from, self.config.depot)?;
        debug!(
            "returning to depot from zone {} (t+{}, unload t+{})",
            from, travel, self.config.unload_cost
        );

        self.vehicle.clock += travel + self.config.unload_cost;
        self.vehicle.zone = self.config.depot;
        self.vehicle.volume_used = 0;
        self.vehicle.bins_held = 0;

        self.queue
            .rebuild(self.config.depot, &self.graph, &self.registry)?;

        Ok(vec![StepEvent::DepotReturn {
            from,
            travel,
            unload: self.config.unload_cost,
        }])
    }

    /// Terminal transition: one final depot leg if the vehicle is out,
    /// with no load reset needed since the run is over.
    fn finish(&mut self) -> Result<StepOutcome, SimError> {
        let mut events = Vec::new();
        if self.vehicle.zone != self.config.depot {
            debug!("all bins collected, returning to depot");
            let from = self.vehicle.zone;
            let travel = self.graph.travel_cost(from, self.config.depot)?;
            self.vehicle.clock += travel + self.config.unload_cost;
            self.vehicle.zone = self.config.depot;
            events.push(StepEvent::DepotReturn {
                from,
                travel,
                unload: self.config.unload_cost,
            });
        }
        self.finished = true;
        Ok(StepOutcome::Finished(events))
    }
}

/// One-call API: validate, dispatch every bin, report
pub fn run(
    registry: BinRegistry,
    graph: ZoneGraph,
    config: SimConfig,
) -> Result<RunSummary, SimError> {
    Dispatcher::new(registry, graph, config)?.run()
}

fn validate(
    registry: &BinRegistry,
    graph: &ZoneGraph,
    config: &SimConfig,
) -> Result<(), SimError> {
    if config.max_volume == 0 || config.max_bins == 0 {
        return Err(SimError::EmptyCapacity);
    }

    let mut seen = HashSet::with_capacity(registry.len());
    for bin in registry.iter() {
        if !seen.insert(&bin.id) {
            return Err(SimError::DuplicateBin { id: bin.id.clone() });
        }
        if bin.window_open > bin.window_close {
            return Err(SimError::InvalidWindow { id: bin.id.clone() });
        }
        if bin.volume > config.max_volume {
            return Err(SimError::OversizedBin {
                id: bin.id.clone(),
                volume: bin.volume,
                max_volume: config.max_volume,
            });
        }
        if bin.zone != config.depot && !graph.contains_zone(bin.zone) {
            return Err(SimError::UnknownZone {
                id: bin.id.clone(),
                zone: bin.zone,
            });
        }
    }

    Ok(())
}
