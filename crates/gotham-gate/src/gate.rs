//! Gate state and its reducer

use crate::config::GateConfig;
use crate::store::{FileFlagStore, FlagStore, MemoryFlagStore};
use crate::GateError;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// Message shown for a wrong passphrase
pub const DENIED_MESSAGE: &str = "Invalid access key. Access denied.";

/// Something a visitor does at the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    /// Submit a passphrase
    Submit(String),
    /// Clear the flag
    Logout,
}

/// What happened after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Passphrase matched, flag set
    Granted,
    /// Passphrase did not match, flag unchanged
    Denied {
        /// Inline message for the visitor
        message: String,
    },
    /// Flag cleared
    LoggedOut,
}

impl GateOutcome {
    /// Whether the outcome leaves the gate open
    pub fn is_granted(&self) -> bool {
        matches!(self, GateOutcome::Granted)
    }
}

/// Pure transition: current flag and action to the next flag and outcome
///
/// Comparison is exact and case-sensitive. A wrong passphrase never locks
/// anything and never revokes an open gate.
///
/// # Examples
///
/// ```
/// use gotham_gate::{reduce, GateAction, GateOutcome};
///
/// let (flag, outcome) = reduce(false, &GateAction::Submit("key".into()), "key");
/// assert!(flag);
/// assert_eq!(outcome, GateOutcome::Granted);
///
/// let (flag, _) = reduce(false, &GateAction::Submit("KEY".into()), "key");
/// assert!(!flag);
/// ```
pub fn reduce(authenticated: bool, action: &GateAction, access_key: &str) -> (bool, GateOutcome) {
    match action {
        GateAction::Submit(submitted) if submitted == access_key => (true, GateOutcome::Granted),
        GateAction::Submit(_) => (
            authenticated,
            GateOutcome::Denied {
                message: DENIED_MESSAGE.to_string(),
            },
        ),
        GateAction::Logout => (false, GateOutcome::LoggedOut),
    }
}

/// The gate flag with its persistence
pub struct GateStore {
    access_key: String,
    authenticated: RwLock<bool>,
    store: Box<dyn FlagStore>,
}

impl GateStore {
    /// Open the gate store described by `config`
    ///
    /// Uses a file store when `flag_path` is set, memory otherwise.
    pub fn new(config: GateConfig) -> Result<Self, GateError> {
        let store: Box<dyn FlagStore> = match &config.flag_path {
            Some(path) => Box::new(FileFlagStore::new(path)),
            None => Box::new(MemoryFlagStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Open a gate store over an explicit flag store
    pub fn with_store(config: GateConfig, store: Box<dyn FlagStore>) -> Result<Self, GateError> {
        config.validate().map_err(GateError::Config)?;
        let authenticated = store.load()?;
        info!("Gate opened, authenticated = {}", authenticated);

        Ok(Self {
            access_key: config.access_key,
            authenticated: RwLock::new(authenticated),
            store,
        })
    }

    /// Current flag
    pub fn is_authenticated(&self) -> bool {
        *self.read()
    }

    /// Apply an action, persisting the flag when it changes
    pub fn dispatch(&self, action: GateAction) -> Result<GateOutcome, GateError> {
        let mut flag = self.write();
        let (next, outcome) = reduce(*flag, &action, &self.access_key);

        if next != *flag {
            self.store.save(next)?;
            *flag = next;
        }

        match &outcome {
            GateOutcome::Granted => info!("Access granted"),
            GateOutcome::Denied { .. } => warn!("Access denied"),
            GateOutcome::LoggedOut => info!("Gate closed"),
        }
        Ok(outcome)
    }

    fn read(&self) -> RwLockReadGuard<'_, bool> {
        self.authenticated.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, bool> {
        self.authenticated.write().unwrap_or_else(|p| p.into_inner())
    }
}
