//! Scoring and combo engine.
//!
//! Judgments are pure functions of the post, the verdict and the
//! [`SessionState`]; the caller owns the clock and the combo-decay timer.

mod difficulty;

pub use difficulty::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RulesError;
use crate::fallacies::FallacyKind;
use crate::posts::{GeneratedPost, PostId};
use crate::session::SessionState;

/// Shield lost on a wrong label.
pub const INCORRECT_SHIELD_PENALTY: u32 = 8;
/// Shield lost when a fallacy post times out.
pub const TIMEOUT_SHIELD_PENALTY: u32 = 10;
/// Shield restored on every third consecutive correct answer.
pub const STREAK_SHIELD_RESTORE: u32 = 5;
pub const CAMPAIGN_BONUS: u64 = 15;
/// Reaction time, in seconds, under which a campaign post earns its bonus.
pub const CAMPAIGN_BONUS_WINDOW_SECS: f64 = 10.0;
/// Reaction time, in seconds, at which the speed bonus reaches zero.
pub const SPEED_BONUS_WINDOW_SECS: f64 = 8.0;

/// Result of judging one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub post_id: PostId,
    pub correct: bool,
    pub timed_out: bool,
    /// `None` for timeouts.
    pub selected: Option<FallacyKind>,
    pub actual: FallacyKind,
    pub points_awarded: u64,
    /// Change in shield percentage before any life-loss reset.
    pub shield_delta: i32,
    pub combo_after: u32,
    pub life_lost: bool,
    pub game_over: bool,
}

/// Points breakdown for a correct answer, before the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub base: u64,
    pub speed: u64,
    pub streak: u64,
    pub campaign: u64,
}

impl PointsBreakdown {
    pub fn compute(level: u32, correct_streak: u32, is_campaign: bool, reaction_time_secs: f64) -> Self {
        let base = 10 * u64::from(level);
        let remaining = 1.0 - (reaction_time_secs / SPEED_BONUS_WINDOW_SECS).min(1.0);
        let speed = (base as f64 * remaining * 0.5).floor().max(0.0) as u64;
        let streak = u64::from(correct_streak / 3) * 5;
        let campaign = if is_campaign && reaction_time_secs < CAMPAIGN_BONUS_WINDOW_SECS {
            CAMPAIGN_BONUS
        } else {
            0
        };
        Self {
            base,
            speed,
            streak,
            campaign,
        }
    }

    pub fn sum(&self) -> u64 {
        self.base + self.speed + self.streak + self.campaign
    }

    /// Apply the combo multiplier, rounding down.
    pub fn total(&self, multiplier: f64) -> u64 {
        (self.sum() as f64 * multiplier).floor() as u64
    }
}

fn check_judgeable(post: &GeneratedPost, state: &SessionState) -> Result<(), RulesError> {
    if state.is_over() {
        return Err(RulesError::SessionOver);
    }
    if post.is_marked() {
        return Err(RulesError::PostAlreadyJudged(post.id));
    }
    Ok(())
}

/// Judge a player's verdict on `post`.
pub fn judge(
    post: &mut GeneratedPost,
    selected: FallacyKind,
    reaction_time_secs: f64,
    state: &mut SessionState,
) -> Result<Outcome, RulesError> {
    check_judgeable(post, state)?;
    if !reaction_time_secs.is_finite() || reaction_time_secs < 0.0 {
        return Err(RulesError::InvalidReactionTime(reaction_time_secs));
    }

    post.mark();
    state.stats.track_reaction_time(reaction_time_secs);

    let correct = selected == post.fallacy;
    let shield_before = state.shield;
    let mut points_awarded = 0;
    let mut life_lost = false;

    if correct {
        *state.level_identifications.entry(selected).or_insert(0) += 1;

        let breakdown = PointsBreakdown::compute(
            state.level,
            state.correct_streak,
            post.is_campaign(),
            reaction_time_secs,
        );
        points_awarded = breakdown.total(state.combo_multiplier);
        state.score += points_awarded;

        state.correct_streak += 1;
        state.set_combo(state.combo + 1);
        if state.correct_streak % 3 == 0 {
            state.restore_shield(STREAK_SHIELD_RESTORE);
        }

        state.stats.track_correct(selected);
    } else {
        state.correct_streak = 0;
        state.perfect_level = false;
        state.reset_combo();
        life_lost = state.damage_shield(INCORRECT_SHIELD_PENALTY);

        state.stats.track_incorrect(selected, post.fallacy);
    }

    let shield_delta = shield_delta(shield_before, state.shield, life_lost);

    debug!(
        post = %post.id,
        selected = selected.as_str(),
        actual = post.fallacy.as_str(),
        correct,
        points = points_awarded,
        combo = state.combo,
        shield = state.shield,
        "Judged post"
    );

    Ok(Outcome {
        post_id: post.id,
        correct,
        timed_out: false,
        selected: Some(selected),
        actual: post.fallacy,
        points_awarded,
        shield_delta,
        combo_after: state.combo,
        life_lost,
        game_over: state.is_over(),
    })
}

/// Judge a post whose answer window elapsed without a verdict.
///
/// A fallacy-free post that times out counts as correct and costs nothing.
pub fn judge_timeout(post: &mut GeneratedPost, state: &mut SessionState) -> Result<Outcome, RulesError> {
    check_judgeable(post, state)?;
    post.mark();

    let shield_before = state.shield;
    let missed = post.fallacy.is_fallacy();
    let mut life_lost = false;

    if missed {
        state.correct_streak = 0;
        state.perfect_level = false;
        state.reset_combo();
        life_lost = state.damage_shield(TIMEOUT_SHIELD_PENALTY);

        state.stats.track_missed(post.fallacy);
    }

    debug!(
        post = %post.id,
        actual = post.fallacy.as_str(),
        missed,
        shield = state.shield,
        "Post timed out"
    );

    Ok(Outcome {
        post_id: post.id,
        correct: !missed,
        timed_out: true,
        selected: None,
        actual: post.fallacy,
        points_awarded: 0,
        shield_delta: shield_delta(shield_before, state.shield, life_lost),
        combo_after: state.combo,
        life_lost,
        game_over: state.is_over(),
    })
}

fn shield_delta(before: u32, after: u32, life_lost: bool) -> i32 {
    // A broken shield reads as dropping all the way to zero.
    let after = if life_lost { 0 } else { after };
    after as i32 - before as i32
}
