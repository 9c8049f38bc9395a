//! Background worker that keeps slots fresh

use crate::{FeedMetrics, FeedSource, Slot};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Metrics shared between the worker and its readers
pub type SharedMetrics = Arc<Mutex<FeedMetrics>>;

type Job = Box<dyn FnOnce(watch::Receiver<bool>) -> JoinHandle<()> + Send>;

/// Background worker that refreshes each registered feed on its own interval
///
/// Every feed fetches once immediately on start, then once per interval.
/// Refreshes are unconditional: a failure does not change the schedule.
///
/// # Examples
///
/// ```no_run
/// use gotham_feeds::{RefreshWorker, Slot};
/// use tokio::sync::watch;
///
/// # async fn example(source: impl gotham_feeds::FeedSource<Output = Vec<u32>> + 'static) {
/// let slot = Slot::new("numbers", Vec::new(), "Failed to retrieve numbers");
/// let mut worker = RefreshWorker::new();
/// worker.register(source, slot.clone(), std::time::Duration::from_secs(60));
///
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handles = worker.start(shutdown_rx);
///
/// // ... later
/// shutdown_tx.send(true).ok();
/// for handle in handles {
///     handle.await.ok();
/// }
/// # }
/// ```
pub struct RefreshWorker {
    jobs: Vec<Job>,
    metrics: SharedMetrics,
}

impl RefreshWorker {
    /// Create a worker with no feeds
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            metrics: Arc::new(Mutex::new(FeedMetrics::new())),
        }
    }

    /// Shared handle to the fetch metrics
    pub fn metrics(&self) -> SharedMetrics {
        self.metrics.clone()
    }

    /// Number of registered feeds
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no feeds are registered
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Register a feed to refresh into `slot` every `every`
    pub fn register<S>(&mut self, source: S, slot: Slot<S::Output>, every: Duration)
    where
        S: FeedSource + 'static,
    {
        let metrics = self.metrics.clone();
        self.jobs.push(Box::new(move |shutdown| {
            tokio::spawn(run_feed(source, slot, every, metrics, shutdown))
        }));
    }

    /// Spawn one task per feed; each stops when `shutdown` turns true
    pub fn start(self, shutdown: watch::Receiver<bool>) -> Vec<JoinHandle<()>> {
        tracing::info!("Refresh worker starting {} feeds", self.jobs.len());
        self.jobs
            .into_iter()
            .map(|job| job(shutdown.clone()))
            .collect()
    }
}

impl Default for RefreshWorker {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch once into the slot, recording the outcome
///
/// Returns whether the fetch succeeded.
pub async fn refresh_once<S>(source: &S, slot: &Slot<S::Output>, metrics: &Mutex<FeedMetrics>) -> bool
where
    S: FeedSource + ?Sized,
{
    tracing::debug!("Refreshing feed '{}'", source.name());
    let result = source.fetch().await;

    let mut metrics = metrics.lock().unwrap_or_else(|p| p.into_inner());
    match result {
        Ok(value) => {
            slot.store(value);
            metrics.record_success(source.name());
            true
        }
        Err(e) => {
            tracing::error!("Feed '{}' failed: {}", source.name(), e);
            slot.record_failure();
            metrics.record_failure(source.name());
            false
        }
    }
}

async fn run_feed<S>(
    source: S,
    slot: Slot<S::Output>,
    every: Duration,
    metrics: SharedMetrics,
    mut shutdown: watch::Receiver<bool>,
) where
    S: FeedSource,
{
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!("Feed '{}' started (interval: {:?})", source.name(), every);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh_once(&source, &slot, &metrics).await;
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    tracing::info!("Feed '{}' stopped", source.name());
}
