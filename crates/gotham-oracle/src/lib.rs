//! Gotham Oracle
//!
//! The wisdom proxy: maps a wisdom kind to its prompt template, sends it to
//! a completion provider with the fixed system role, and returns the text.
//!
//! # Architecture
//!
//! ```text
//! WisdomKind → prompt template → CompletionProvider → text
//!                                                    → parser → cards
//! ```
//!
//! Callers that render cards go through the strict parser. Any output that
//! breaks the schema is an error, and the caller falls back to the
//! hardcoded content in `gotham_domain::fallback`.
//!
//! # Example Usage
//!
//! ```no_run
//! use gotham_domain::WisdomKind;
//! use gotham_llm::MockProvider;
//! use gotham_oracle::{Oracle, OracleConfig};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let oracle = Oracle::new(Arc::new(MockProvider::new("Prepare.")), OracleConfig::default());
//! let text = oracle.wisdom(WisdomKind::AskBatman).await?;
//! assert_eq!(text, "Prepare.");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod oracle;
mod parser;
mod prompt;
mod types;

pub use config::OracleConfig;
pub use error::OracleError;
pub use oracle::Oracle;
pub use parser::{clean_text, parse_cards, parse_finance_tips};
pub use prompt::{build_prompt, CONVERSATION_ROLE, SYSTEM_ROLE};
pub use types::{Exchange, FinanceTips, Line, Speaker};
