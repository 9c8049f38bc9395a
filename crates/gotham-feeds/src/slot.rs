//! Display slots: one value per feed, replaced wholesale by each fetch

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

/// What a page reads from a slot
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Current value: the last successful fetch, or the fallback
    pub value: T,

    /// Whether `value` came from a fetch rather than the fallback
    pub live: bool,

    /// Notice left by the most recent failed fetch
    pub notice: Option<String>,

    /// When the value was last replaced (Unix epoch seconds)
    pub updated_at: Option<u64>,
}

#[derive(Debug)]
struct SlotState<T> {
    value: T,
    live: bool,
    notice: Option<String>,
    updated_at: Option<u64>,
}

/// A feed's single display value
///
/// Starts on the fallback. A successful fetch replaces the value and clears
/// the notice; a failed one keeps the value and sets the notice. Clones
/// share state.
#[derive(Debug)]
pub struct Slot<T> {
    name: &'static str,
    failure_notice: Arc<str>,
    state: Arc<RwLock<SlotState<T>>>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            failure_notice: self.failure_notice.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T: Clone> Slot<T> {
    /// Create a slot holding `fallback`
    pub fn new(name: &'static str, fallback: T, failure_notice: &str) -> Self {
        Self {
            name,
            failure_notice: Arc::from(failure_notice),
            state: Arc::new(RwLock::new(SlotState {
                value: fallback,
                live: false,
                notice: None,
                updated_at: None,
            })),
        }
    }

    /// Feed name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current value
    pub fn get(&self) -> T {
        self.read().value.clone()
    }

    /// Current value with its status
    pub fn snapshot(&self) -> Snapshot<T> {
        let state = self.read();
        Snapshot {
            value: state.value.clone(),
            live: state.live,
            notice: state.notice.clone(),
            updated_at: state.updated_at,
        }
    }

    /// Replace the value after a successful fetch
    pub fn store(&self, value: T) {
        let mut state = self.write();
        state.value = value;
        state.live = true;
        state.notice = None;
        state.updated_at = Some(now_secs());
    }

    /// Keep the value and leave the failure notice
    pub fn record_failure(&self) {
        self.write().notice = Some(self.failure_notice.to_string());
    }

    fn read(&self) -> RwLockReadGuard<'_, SlotState<T>> {
        self.state.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SlotState<T>> {
        self.state.write().unwrap_or_else(|p| p.into_inner())
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
