//! Difficulty adaptation and level transitions.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::fallacies::FallacyKind;
use crate::session::{SessionState, MAX_DIFFICULTY, MIN_DIFFICULTY};

pub const MIN_SPAWN_INTERVAL_MS: f64 = 1500.0;
pub const BASE_SPAWN_INTERVAL_MS: f64 = 4500.0;

/// Spawn interval for a level and difficulty factor.
pub fn spawn_interval_ms(level: u32, difficulty: f64) -> u64 {
    let steps = f64::from(level.saturating_sub(1));
    (BASE_SPAWN_INTERVAL_MS - steps * 150.0 * difficulty).max(MIN_SPAWN_INTERVAL_MS) as u64
}

/// Adjust difficulty from the current performance ratio and recompute pacing.
pub fn recalibrate(state: &mut SessionState) {
    let encountered = state.stats.total_encountered.max(1);
    let ratio = f64::from(state.correct_streak) / f64::from(encountered);

    if ratio > 0.8 {
        state.difficulty = (state.difficulty + 0.2).min(MAX_DIFFICULTY);
    } else if ratio < 0.4 {
        state.difficulty = (state.difficulty - 0.1).max(MIN_DIFFICULTY);
    }
    state.spawn_interval_ms = spawn_interval_ms(state.level, state.difficulty);

    debug!(
        ratio,
        difficulty = state.difficulty,
        spawn_interval_ms = state.spawn_interval_ms,
        "Recalibrated difficulty"
    );
}

/// The kind the player identified most during a finished level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallacyInsight {
    pub kind: FallacyKind,
    pub count: u32,
}

impl FallacyInsight {
    pub fn text(&self) -> String {
        format!(
            "You identified {} instances of \"{}\" in the last level. Watch for more complex patterns of this fallacy in the next level.",
            self.count,
            self.kind.name()
        )
    }
}

/// Everything that happened when the player left a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelUp {
    pub new_level: u32,
    /// Zero unless the finished level had no wrong or missed judgments.
    pub perfect_bonus: u64,
    pub unlocked: Vec<FallacyKind>,
    pub insight: Option<FallacyInsight>,
}

impl LevelUp {
    /// Headline for the transition screen.
    pub fn description(&self) -> String {
        match self.new_level {
            3 => "Statistical manipulation and confirmation bias are now in the feed!".to_string(),
            5 => "Advanced manipulation tactics detected!".to_string(),
            _ => "Level increased! Posts now move faster. Stay vigilant!".to_string(),
        }
    }
}

fn most_identified(state: &SessionState) -> Option<FallacyInsight> {
    let mut best: Option<FallacyInsight> = None;
    for (&kind, &count) in &state.level_identifications {
        if best.map_or(true, |top| count > top.count) {
            best = Some(FallacyInsight { kind, count });
        }
    }
    best
}

/// Advance the level if the score has reached `level * 100`.
///
/// Awards the perfect-level bonus, resets the combo and recalibrates for the
/// new level. The caller is responsible for cancelling its combo timer.
pub fn check_level_up(state: &mut SessionState) -> Option<LevelUp> {
    if state.is_over() || state.score < state.level_threshold() {
        return None;
    }

    let perfect_bonus = if state.perfect_level {
        u64::from(state.level) * 50
    } else {
        0
    };
    state.score += perfect_bonus;
    state.perfect_level = true;
    state.reset_combo();

    let insight = most_identified(state);
    state.level_identifications.clear();

    state.level += 1;
    recalibrate(state);

    let level_up = LevelUp {
        new_level: state.level,
        perfect_bonus,
        unlocked: FallacyKind::newly_unlocked_at(state.level),
        insight,
    };

    info!(
        level = level_up.new_level,
        perfect_bonus,
        unlocked = level_up.unlocked.len(),
        "Level up"
    );

    Some(level_up)
}
