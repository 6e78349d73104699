//! Session state - the aggregate every rule reads and updates.

mod tracker;

pub use tracker::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::fallacies::FallacyKind;
use crate::stats::GameStats;

/// Shield percentage ceiling, also the value restored after a life is lost.
pub const MAX_SHIELD: u32 = 100;

pub const MAX_COMBO_MULTIPLIER: f64 = 3.0;
pub const MIN_DIFFICULTY: f64 = 0.8;
pub const MAX_DIFFICULTY: f64 = 2.0;

/// Unique identifier for game sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Multiplier for a given combo count: `min(1 + 0.1 * combo, 3.0)`.
pub fn combo_multiplier(combo: u32) -> f64 {
    // Integer tenths keep 1.1, 1.2, ... exact.
    let tenths = 10 + u64::from(combo);
    (tenths as f64 / 10.0).min(MAX_COMBO_MULTIPLIER)
}

/// Mutable state of a single play-through.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: SessionId,
    pub level: u32,
    pub score: u64,
    pub lives: u32,
    /// Percentage in `0..=100`.
    pub shield: u32,
    pub correct_streak: u32,
    pub combo: u32,
    pub combo_multiplier: f64,
    /// Clamped to `0.8..=2.0`.
    pub difficulty: f64,
    pub spawn_interval_ms: u64,
    /// Cleared by any wrong or missed judgment during the current level.
    pub perfect_level: bool,
    pub tracker: CampaignTracker,
    pub stats: GameStats,
    /// Correct identifications per kind during the current level.
    pub level_identifications: BTreeMap<FallacyKind, u32>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl SessionState {
    /// Create a fresh level-1 session.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            id: SessionId::new(),
            level: 1,
            score: 0,
            lives: config.session.starting_lives,
            shield: (config.session.starting_shield.clamp(0, MAX_SHIELD as i32)) as u32,
            correct_streak: 0,
            combo: 0,
            combo_multiplier: 1.0,
            difficulty: 1.0,
            spawn_interval_ms: config.session.initial_spawn_interval_ms,
            perfect_level: true,
            tracker: CampaignTracker::new(&config.quiz),
            stats: GameStats::new(),
            level_identifications: BTreeMap::new(),
        }
    }

    /// Start at a later level, as when resuming a saved run.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    /// Set the combo counter and keep the multiplier in step.
    pub fn set_combo(&mut self, combo: u32) {
        self.combo = combo;
        self.combo_multiplier = combo_multiplier(combo);
    }

    pub fn reset_combo(&mut self) {
        self.set_combo(0);
    }

    pub fn restore_shield(&mut self, amount: u32) {
        self.shield = (self.shield + amount).min(MAX_SHIELD);
    }

    /// Apply shield damage. Returns true if the shield broke and a life was lost.
    pub fn damage_shield(&mut self, amount: u32) -> bool {
        self.shield = self.shield.saturating_sub(amount);
        if self.shield > 0 {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.shield = MAX_SHIELD;
        true
    }

    /// Whether posts may carry a visual cue hinting at a fallacy.
    pub fn shows_fallacy_cue(&self) -> bool {
        self.difficulty < 1.5
    }

    /// Filled bars on a five-bar difficulty indicator.
    pub fn difficulty_bars(&self) -> u32 {
        (self.difficulty * 2.5).ceil() as u32
    }

    /// Score needed to leave the current level.
    pub fn level_threshold(&self) -> u64 {
        u64::from(self.level) * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SessionState::default();
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.shield, 100);
        assert_eq!(state.spawn_interval_ms, 8000);
        assert_eq!(state.combo_multiplier, 1.0);
        assert!(state.perfect_level);
        assert!(!state.is_over());
    }

    #[test]
    fn test_combo_multiplier_formula() {
        assert_eq!(combo_multiplier(0), 1.0);
        assert_eq!(combo_multiplier(1), 1.1);
        assert_eq!(combo_multiplier(5), 1.5);
        assert_eq!(combo_multiplier(20), 3.0);
        assert_eq!(combo_multiplier(30), 3.0);
    }

    #[test]
    fn test_shield_break_costs_one_life() {
        let mut state = SessionState::default();
        state.shield = 6;

        assert!(state.damage_shield(8));
        assert_eq!(state.lives, 2);
        assert_eq!(state.shield, 100);

        assert!(!state.damage_shield(8));
        assert_eq!(state.shield, 92);
    }

    #[test]
    fn test_restore_shield_capped() {
        let mut state = SessionState::default();
        state.shield = 98;
        state.restore_shield(5);
        assert_eq!(state.shield, 100);
    }

    #[test]
    fn test_last_life() {
        let mut state = SessionState::default();
        state.lives = 1;
        state.shield = 10;

        assert!(state.damage_shield(10));
        assert!(state.is_over());
    }

    #[test]
    fn test_difficulty_cue_and_bars() {
        let mut state = SessionState::default();
        assert!(state.shows_fallacy_cue());
        assert_eq!(state.difficulty_bars(), 3);

        state.difficulty = 2.0;
        assert!(!state.shows_fallacy_cue());
        assert_eq!(state.difficulty_bars(), 5);

        state.difficulty = 0.8;
        assert_eq!(state.difficulty_bars(), 2);
    }
}
