//! # Feed Core
//!
//! The engine of Echo Chamber. This crate builds on `feed_rules` to generate
//! feed posts, analyse the influence campaigns a player has seen, and run the
//! timed session loop.
//!
//! ## Core Components
//!
//! - **content**: Template and value-pool tables, with TOML overlays
//! - **generator**: Procedural post generation and chart selection
//! - **analysis**: Sentiment-analysis quiz questions
//! - **scheduler**: Pausable timers on a logical clock
//! - **session**: The game loop and its events
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: Every random decision draws from one injected RNG
//! - **Event-Driven**: The session reports what happened; the presentation layer decides how to show it
//! - **Pluggable**: Post sources, fallacy detectors and stats stores are traits

pub mod analysis;
pub mod content;
pub mod detector;
pub mod error;
pub mod events;
pub mod feedback;
pub mod generator;
pub mod persistence;
pub mod scheduler;
pub mod session;

pub use analysis::*;
pub use content::*;
pub use detector::*;
pub use error::*;
pub use events::*;
pub use feedback::*;
pub use generator::*;
pub use persistence::*;
pub use scheduler::*;
pub use session::*;
