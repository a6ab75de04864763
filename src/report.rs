use crate::system::snapshot::HealthSnapshot;

/// Renders the fixed-format health report. Always succeeds; a store that
/// has never been written renders the zeroed report.
///
/// The "Free RAM" line carries no trailing newline, so "Used RAM" runs
/// on directly after the free value. That layout is what existing
/// consumers of this report parse; keep it until they are migrated.
pub fn render(snapshot: &HealthSnapshot) -> String {
    format!(
        "=== System Health Monitor ===\n\
         Total RAM: {} MB\n\
         Free RAM: {} MBUsed RAM: {} MB\n\
         CPU Load (1 min avg): {}.{:02} %\n",
        snapshot.total_mb,
        snapshot.free_mb,
        snapshot.used_mb,
        snapshot.load_centi / 100,
        snapshot.load_centi % 100,
    )
}
