use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use parking_lot::Mutex;
use sysinfo::{ProcessesToUpdate, System};
use tokio::task::JoinHandle;

use super::highlighter::HighlighterCache;
use super::lookup::LookupCaches;

/// How often the sweep checks memory usage.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Resident memory above which all caches are cleared.
pub const MEMORY_THRESHOLD_BYTES: u64 = 100 * 1024 * 1024;

/// Memory probe: returns resident bytes for this process. Injectable so tests
/// can pin memory pressure on or off.
pub type MemoryProbe = Arc<dyn Fn() -> u64 + Send + Sync>;

/// Background safety valve against unbounded cache growth.
///
/// Holds references to the highlighter pool and the lookup caches and clears
/// them all when resident memory crosses the threshold, checked on a fixed
/// interval. The sweep never blocks an in-flight conversion; a conversion
/// racing a clear simply pays creation cost again on its next lookup.
pub struct CacheManager {
    highlighters: Arc<HighlighterCache>,
    lookups: Arc<LookupCaches>,
    probe: MemoryProbe,
    interval: Duration,
    threshold: u64,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl CacheManager {
    pub fn new(highlighters: Arc<HighlighterCache>, lookups: Arc<LookupCaches>) -> Self {
        Self::with_probe(
            highlighters,
            lookups,
            Arc::new(resident_memory),
            SWEEP_INTERVAL,
            MEMORY_THRESHOLD_BYTES,
        )
    }

    pub fn with_probe(
        highlighters: Arc<HighlighterCache>,
        lookups: Arc<LookupCaches>,
        probe: MemoryProbe,
        interval: Duration,
        threshold: u64,
    ) -> Self {
        Self {
            highlighters,
            lookups,
            probe,
            interval,
            threshold,
            task: Mutex::new(None),
        }
    }

    /// Start the periodic sweep. A repeated start replaces the existing
    /// timer; timers never stack.
    pub fn start_cleanup(&self) {
        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let highlighters = Arc::clone(&self.highlighters);
        let lookups = Arc::clone(&self.lookups);
        let probe = Arc::clone(&self.probe);
        let (interval, threshold) = (self.interval, self.threshold);

        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; skip it so the sweep
            // starts one full interval out.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                sweep(&highlighters, &lookups, &probe, threshold);
            }
        }));
    }

    /// Stop the periodic sweep. Idempotent.
    pub fn stop_cleanup(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }

    /// Probe memory now and clear if above threshold. Returns whether a
    /// clear happened.
    pub fn sweep_now(&self) -> bool {
        sweep(&self.highlighters, &self.lookups, &self.probe, self.threshold)
    }

    /// Unconditionally empty the highlighter pool and every lookup cache.
    pub fn clear(&self) {
        self.highlighters.dispose_all();
        self.lookups.clear();
    }
}

impl Drop for CacheManager {
    fn drop(&mut self) {
        self.stop_cleanup();
    }
}

fn sweep(
    highlighters: &HighlighterCache,
    lookups: &LookupCaches,
    probe: &MemoryProbe,
    threshold: u64,
) -> bool {
    let used = probe();
    if used <= threshold {
        debug!("memory sweep: {used} bytes resident, under threshold");
        return false;
    }

    warn!("memory sweep: {used} bytes resident, clearing caches");
    highlighters.dispose_all();
    lookups.clear();
    true
}

/// Resident memory of the current process, in bytes. Returns 0 when the
/// platform refuses to answer, which disables the sweep rather than forcing
/// a spurious clear.
pub fn resident_memory() -> u64 {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return 0;
    };

    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    system.process(pid).map_or(0, |process| process.memory())
}
