use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::collector::Probe;
use super::store::SnapshotStore;

/// Periodic sampler: probes the host, checks the free-memory threshold,
/// and publishes the result to the shared store.
pub struct Sampler<P: Probe> {
    probe: P,
    store: SnapshotStore,
    threshold_mb: u64,
}

impl<P: Probe> Sampler<P> {
    pub fn new(probe: P, store: SnapshotStore, threshold_mb: u64) -> Self {
        Sampler {
            probe,
            store,
            threshold_mb,
        }
    }

    /// One self-contained sampling pass. Returns whether the alert fired
    /// on this tick. Every qualifying tick alerts again; there is no
    /// debouncing of repeated breaches.
    pub fn tick(&mut self) -> bool {
        let snapshot = self.probe.sample();

        let alerted = snapshot.free_mb < self.threshold_mb;
        if alerted {
            tracing::warn!(
                free_mb = snapshot.free_mb,
                threshold_mb = self.threshold_mb,
                "free memory ({} MB) below threshold ({} MB)",
                snapshot.free_mb,
                self.threshold_mb,
            );
        }

        self.store.publish(snapshot);
        alerted
    }
}

/// Handle to a running sampler task.
pub struct SamplerHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SamplerHandle {
    /// Signals the loop to exit and waits for the task to finish. Once
    /// this returns, no further tick runs and the store is never written
    /// again, so shared state can be torn down safely.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        if let Err(e) = self.task.await {
            tracing::error!("sampler task did not exit cleanly: {e}");
        }
    }
}

/// Spawns the sampling loop. The first tick lands one full `interval`
/// after start; each subsequent tick is re-armed after the previous one
/// completes, so ticks never overlap.
///
/// `interval` must be non-zero; `SamplerConfig::interval` rejects a zero
/// value before anything reaches this point.
pub fn spawn<P>(mut sampler: Sampler<P>, interval: Duration) -> SamplerHandle
where
    P: Probe + Send + 'static,
{
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Delay rather than burst if a tick overruns its slot.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; consume it so
        // the first sample happens at start + interval.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = stop_rx.changed() => break,
                _ = ticker.tick() => {
                    sampler.tick();
                }
            }
        }
    });

    SamplerHandle { stop_tx, task }
}
