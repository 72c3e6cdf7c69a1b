//! Greedy waste-collection dispatch simulation
//!
//! This module contains all the core scheduling logic. It has no
//! dependency on the CLI layer and can be driven headless or
//! step-by-step from tests.

mod error;
mod generator;
mod metrics;
mod queue;
mod registry;
mod scheduler;
mod types;
mod zone_graph;

pub use error::SimError;
pub use generator::{generate, generate_seeded, Scenario};
pub use metrics::{RunMetrics, RunSummary};
pub use queue::{priority_weight, PendingEntry, PendingQueue};
pub use registry::BinRegistry;
pub use scheduler::{
    run, Dispatcher, SimConfig, StepEvent, StepOutcome, VehicleState, DEFAULT_MAX_BINS,
    DEFAULT_MAX_VOLUME, DEFAULT_SERVICE_COST, DEFAULT_UNLOAD_COST, DEPOT_ZONE,
};
pub use types::{BinId, BinKind, WasteBin, ZoneId};
pub use zone_graph::ZoneGraph;
