use sysinfo::System;

use super::snapshot::HealthSnapshot;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Source of host readings for the sampler. The production implementation
/// is [`Collector`]; tests substitute scripted values.
pub trait Probe {
    fn sample(&mut self) -> HealthSnapshot;
}

/// Reads memory and load-average figures through `sysinfo`.
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Collector { sys }
    }
}

impl Probe for Collector {
    fn sample(&mut self) -> HealthSnapshot {
        // Total and free come out of the same refresh, so the derived
        // used figure is consistent with both.
        self.sys.refresh_memory();
        let total_mb = self.sys.total_memory() / BYTES_PER_MB;
        let free_mb = self.sys.free_memory() / BYTES_PER_MB;

        // Truncation keeps the two implied decimals exact: 1.539 -> 153.
        let load_centi = (System::load_average().one * 100.0) as u64;

        HealthSnapshot::new(total_mb, free_mb, load_centi)
    }
}
