//! # Feed Rules
//!
//! The rulebook crate - fallacy and campaign catalogs, post data, session
//! state, scoring, difficulty and statistics.
//! Everything here is deterministic: this crate holds no RNG and no timers.

pub mod campaigns;
pub mod config;
pub mod error;
pub mod fallacies;
pub mod posts;
pub mod scoring;
pub mod session;
pub mod stats;

pub use campaigns::*;
pub use config::*;
pub use error::*;
pub use fallacies::*;
pub use posts::*;
pub use scoring::*;
pub use session::*;
pub use stats::*;
