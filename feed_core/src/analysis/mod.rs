//! Sentiment-analysis interlude - question selection and scoring.
//!
//! Questions are picked from the campaign kinds seen in the most recent
//! campaign posts:
//! - **state-sponsored + domestic political**: which emotion is targeted,
//!   answered by keyword counts over the recent posts
//! - **corporate astroturf**: signs of astroturfing
//! - **domestic political**: urgency tactics
//! - **otherwise**: username patterns

mod emotion;

pub use emotion::*;

use feed_rules::{CampaignKind, CampaignRecord};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// The fixed question catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    EmotionalTarget,
    UsernamePattern,
    UrgencyTactics,
    AstroturfSigns,
}

/// A multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: [String; 4],
    pub correct_index: usize,
    pub explanation: String,
}

impl Question {
    fn fixed(
        kind: QuestionKind,
        prompt: &str,
        options: [&str; 4],
        correct_index: usize,
        explanation: &str,
    ) -> Self {
        Self {
            kind,
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct_index,
            explanation: explanation.to_string(),
        }
    }

    /// The emotion question, with its answer taken from `target`.
    pub fn emotional_target(target: Emotion) -> Self {
        Self::fixed(
            QuestionKind::EmotionalTarget,
            "Looking at recent posts, which emotional response seems most targeted?",
            [
                "Fear and urgency",
                "Anger and outrage",
                "Hope and unity",
                "Confusion and doubt",
            ],
            target.option_index(),
            "Influence campaigns often target specific emotions to bypass critical thinking.",
        )
    }

    pub fn username_pattern() -> Self {
        Self::fixed(
            QuestionKind::UsernamePattern,
            "What pattern do you notice in the usernames of suspicious posts?",
            [
                "Random personal names",
                "Authority-sounding accounts",
                "Celebrity parodies",
                "Number sequences",
            ],
            1,
            "Fake accounts often use authoritative names to appear credible.",
        )
    }

    pub fn urgency_tactics() -> Self {
        Self::fixed(
            QuestionKind::UrgencyTactics,
            "Which tactic appears most frequently in recent political posts?",
            [
                "Presenting balanced viewpoints",
                "Creating false urgency",
                "Citing academic sources",
                "Encouraging dialogue",
            ],
            1,
            "Influence campaigns often create artificial time pressure to prevent careful consideration.",
        )
    }

    pub fn astroturf_signs() -> Self {
        Self::fixed(
            QuestionKind::AstroturfSigns,
            "How do authentic grassroots posts differ from astroturfing?",
            [
                "More typos and errors",
                "Perfect grammar only",
                "Corporate buzzwords",
                "Celebrity endorsements",
            ],
            0,
            "Real people make natural language mistakes; astroturfing often appears too polished.",
        )
    }

    /// Check an answer. Out-of-range indices are rejected.
    pub fn answer(&self, index: usize, bonus: u64) -> Result<QuizResult, SessionError> {
        if index >= self.options.len() {
            return Err(SessionError::InvalidQuizAnswer(index));
        }
        let correct = index == self.correct_index;
        Ok(QuizResult {
            kind: self.kind,
            selected: index,
            correct_index: self.correct_index,
            correct,
            points_awarded: if correct { bonus } else { 0 },
            explanation: self.explanation.clone(),
        })
    }
}

/// Outcome of answering a quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub kind: QuestionKind,
    pub selected: usize,
    pub correct_index: usize,
    pub correct: bool,
    pub points_awarded: u64,
    pub explanation: String,
}

impl QuizResult {
    /// "Correct!" or "Not quite." followed by the explanation.
    pub fn message(&self) -> String {
        let verdict = if self.correct { "Correct!" } else { "Not quite." };
        format!("{} {}", verdict, self.explanation)
    }
}

/// Pick the question for the given recent campaign posts.
pub fn select_question(recent: &[CampaignRecord]) -> Question {
    let seen = |kind: CampaignKind| recent.iter().any(|record| record.campaign == kind);

    if seen(CampaignKind::StateSponsored) && seen(CampaignKind::DomesticPolitical) {
        let contents = recent.iter().map(|record| record.content.as_str());
        Question::emotional_target(EmotionCounts::tally(contents).dominant())
    } else if seen(CampaignKind::CorporateAstroturf) {
        Question::astroturf_signs()
    } else if seen(CampaignKind::DomesticPolitical) {
        Question::urgency_tactics()
    } else {
        Question::username_pattern()
    }
}
