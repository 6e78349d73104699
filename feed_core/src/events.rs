//! Events emitted by the session loop to the presentation layer.

use feed_rules::{FallacyKind, GeneratedPost, LevelUp, Outcome, SessionState};
use serde::{Deserialize, Serialize};

use crate::analysis::{Question, QuizResult};
use crate::detector::Detection;
use crate::feedback::{CampaignHint, Feedback};

/// Everything the presentation layer needs to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A post entered the feed and its answer window opened. Campaign posts
    /// carry the analysis hint for their archetype.
    PostSpawned {
        post: GeneratedPost,
        detections: Vec<Detection>,
        hint: Option<CampaignHint>,
    },

    /// The player submitted a verdict.
    PostJudged { outcome: Outcome, feedback: Feedback },

    /// The answer window ran out. Fallacy-free posts carry no feedback.
    PostMissed {
        outcome: Outcome,
        feedback: Option<Feedback>,
    },

    /// The combo window elapsed without a correct answer.
    ComboExpired,

    LevelUp { level_up: LevelUp, feedback: Feedback },

    /// The feed is paused until the question is answered.
    QuizStarted(Question),

    QuizAnswered(QuizResult),

    LifeLost { lives_left: u32 },

    GameOver(GameOverSummary),
}

impl GameEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PostSpawned { .. } => "post_spawned",
            GameEvent::PostJudged { .. } => "post_judged",
            GameEvent::PostMissed { .. } => "post_missed",
            GameEvent::ComboExpired => "combo_expired",
            GameEvent::LevelUp { .. } => "level_up",
            GameEvent::QuizStarted(_) => "quiz_started",
            GameEvent::QuizAnswered(_) => "quiz_answered",
            GameEvent::LifeLost { .. } => "life_lost",
            GameEvent::GameOver(_) => "game_over",
        }
    }
}

/// Final numbers shown on the game-over screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub final_score: u64,
    pub final_level: u32,
    pub most_missed: Option<FallacyKind>,
    /// Display name of `most_missed`, or "None".
    pub most_missed_name: String,
    /// Mean reaction time in seconds.
    pub average_reaction_time: f64,
}

impl GameOverSummary {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            final_score: state.score,
            final_level: state.level,
            most_missed: state.stats.most_missed(),
            most_missed_name: state.stats.most_missed_name().to_string(),
            average_reaction_time: state.stats.average_reaction_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_state() {
        let mut state = SessionState::default();
        state.score = 420;
        state.level = 4;
        state.stats.track_missed(FallacyKind::Strawman);
        state.stats.track_missed(FallacyKind::Strawman);
        state.stats.track_missed(FallacyKind::AdHominem);
        state.stats.track_reaction_time(2.0);
        state.stats.track_reaction_time(4.0);

        let summary = GameOverSummary::from_state(&state);
        assert_eq!(summary.final_score, 420);
        assert_eq!(summary.final_level, 4);
        assert_eq!(summary.most_missed, Some(FallacyKind::Strawman));
        assert_eq!(summary.most_missed_name, FallacyKind::Strawman.name());
        assert!((summary.average_reaction_time - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_without_misses() {
        let summary = GameOverSummary::from_state(&SessionState::default());
        assert_eq!(summary.most_missed, None);
        assert_eq!(summary.most_missed_name, "None");
        assert_eq!(summary.average_reaction_time, 0.0);
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let json = serde_json::to_value(GameEvent::LifeLost { lives_left: 2 }).unwrap();
        assert_eq!(json["type"], "life_lost");
        assert_eq!(json["lives_left"], 2);
    }

    #[test]
    fn test_event_names_match_serde_tags() {
        let events = [
            GameEvent::ComboExpired,
            GameEvent::LifeLost { lives_left: 0 },
            GameEvent::GameOver(GameOverSummary::from_state(&SessionState::default())),
        ];
        for event in events {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["type"], event.name());
        }
    }
}
