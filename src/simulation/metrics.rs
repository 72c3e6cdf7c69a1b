//! Run metrics accumulation and the final summary record

use super::registry::BinRegistry;

/// Accumulates pickup outcomes over a run
#[derive(Debug, Clone)]
pub struct RunMetrics {
    total_bins: usize,
    general: usize,
    recycling: usize,
    picked: usize,
    late: usize,
    waiting: u64,
}

impl RunMetrics {
    /// Seeds the per-kind breakdown from the registry; the breakdown does
    /// not depend on the visiting order.
    pub fn for_registry(registry: &BinRegistry) -> Self {
        let (general, recycling) = registry.kind_counts();
        Self {
            total_bins: registry.len(),
            general,
            recycling,
            picked: 0,
            late: 0,
            waiting: 0,
        }
    }

    pub fn record_wait(&mut self, idle: u64) {
        self.waiting += idle;
    }

    pub fn record_pickup(&mut self, late: bool) {
        self.picked += 1;
        if late {
            self.late += 1;
        }
    }

    pub fn picked(&self) -> usize {
        self.picked
    }

    /// Seals the accumulator into the immutable summary record
    pub fn finish(&self, total_time: u64) -> RunSummary {
        RunSummary {
            total_time,
            late_count: self.late,
            total_bins: self.total_bins,
            waiting_total: self.waiting,
            general_count: self.general,
            recycling_count: self.recycling,
        }
    }
}

/// Final report of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_time: u64,
    pub late_count: usize,
    pub total_bins: usize,
    pub waiting_total: u64,
    pub general_count: usize,
    pub recycling_count: usize,
}

impl RunSummary {
    /// Multi-line report block for display
    pub fn report(&self) -> String {
        format!(
            "t={}\nlate={}/{}\nwaiting={}\nrecycling={}/{}\ngeneral={}/{}",
            self.total_time,
            self.late_count,
            self.total_bins,
            self.waiting_total,
            self.recycling_count,
            self.total_bins,
            self.general_count,
            self.total_bins,
        )
    }
}
