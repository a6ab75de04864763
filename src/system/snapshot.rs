/// One capture of host memory and load figures, replaced wholesale on
/// every sampling tick. `used_mb` is always derived from the same probe
/// that produced `total_mb` and `free_mb`, never recomputed from a later
/// reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthSnapshot {
    pub total_mb: u64,
    pub free_mb: u64,
    pub used_mb: u64,
    /// 1-minute load average scaled by 100, truncated (1.53 -> 153).
    pub load_centi: u64,
}

impl HealthSnapshot {
    pub fn new(total_mb: u64, free_mb: u64, load_centi: u64) -> Self {
        HealthSnapshot {
            total_mb,
            free_mb,
            used_mb: total_mb.saturating_sub(free_mb),
            load_centi,
        }
    }
}
