//! Gotham Domain Layer
//!
//! Display records, wisdom kinds, the hardcoded fallback content every page
//! degrades to, and the formatting rules for market and health snapshots.
//!
//! ## Key Concepts
//!
//! - **ContentItem**: a card of `{title, body, category, icon}`
//! - **WisdomKind**: the fixed set of categories the wisdom proxy accepts
//! - **Fallback content**: hardcoded records rendered when a live fetch
//!   fails or is still pending
//! - **Snapshots**: transient third-party values, never persisted
//!
//! ## Architecture
//!
//! This crate holds no I/O. Serialization, HTTP and storage live in the
//! crates that depend on it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod announcement;
pub mod catalog;
pub mod content;
pub mod fallback;
pub mod format;
pub mod health;
pub mod market;
pub mod mission;
pub mod wisdom;

// Re-exports for convenience
pub use announcement::{Announcement, AnnouncementDraft, AnnouncementId};
pub use catalog::{ReliefOrganization, ReliefRegion, Tool, ToolCategory};
pub use content::{ContentItem, Feature, NavItem, RoutineStep};
pub use health::{DiseaseSnapshot, FoodItem, HealthIndicator, TrialDetail, TrialSummary};
pub use market::{AssetQuote, AssetType, CoinQuote};
pub use mission::{Cadence, Difficulty, Mission};
pub use wisdom::{FinanceTrack, WisdomKind};
