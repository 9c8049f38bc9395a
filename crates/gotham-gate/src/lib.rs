//! Gotham Gate
//!
//! The access gate: one boolean flag, opened by an exact passphrase match
//! and closed by logout.
//!
//! The gate is cosmetic. It hides pages; it does not protect them. There is
//! no lockout, no rate limiting and no hashing.
//!
//! # Examples
//!
//! ```
//! use gotham_gate::{GateAction, GateConfig, GateOutcome, GateStore};
//!
//! let gate = GateStore::new(GateConfig::new("open-sesame")).unwrap();
//! assert!(!gate.is_authenticated());
//!
//! let outcome = gate.dispatch(GateAction::Submit("open-sesame".into())).unwrap();
//! assert_eq!(outcome, GateOutcome::Granted);
//! assert!(gate.is_authenticated());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod gate;
mod store;

pub use config::GateConfig;
pub use error::GateError;
pub use gate::{reduce, GateAction, GateOutcome, GateStore, DENIED_MESSAGE};
pub use store::{FileFlagStore, FlagStore, MemoryFlagStore};
