//! Player-facing feedback text for judged and missed posts, level
//! transitions and campaign analysis hints.

use feed_rules::{CampaignKind, FallacyKind, GeneratedPost, LevelUp, Outcome};
use serde::{Deserialize, Serialize};

const TIMEOUT_TIP: &str = "Tip: Look for key warning signs to identify this faster next time.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub correct: bool,
    pub header: String,
    pub body: String,
}

impl Feedback {
    /// Feedback for a verdict on `post`.
    pub fn for_judgment(outcome: &Outcome, post: &GeneratedPost) -> Self {
        let actual = outcome.actual.info();
        let profile = post.campaign_kind().map(|kind| kind.profile());

        if outcome.correct {
            let (header, body) = match profile {
                Some(profile) => (
                    format!("✅ {} in {}", actual.name, profile.hint_title),
                    format!(
                        "{}\n\n🎯 Campaign Context: {}",
                        actual.description, profile.hint_objective
                    ),
                ),
                None => (format!("Correct: {}", actual.name), actual.description.to_string()),
            };
            return Self { correct: true, header, body };
        }

        let selected = outcome.selected.unwrap_or(FallacyKind::None).name();
        let mut body = format!(
            "This post contains a {}, not {}.\n\n{}",
            actual.name, selected, actual.description
        );
        let header = match profile {
            Some(profile) => {
                let hints: Vec<&str> = profile.look_for.iter().take(2).copied().collect();
                body.push_str(&format!(
                    "\n\n🎯 Campaign Analysis: {}\n\nKey indicators you missed:\n• {}",
                    profile.hint_objective,
                    hints.join("\n• ")
                ));
                format!("❌ This was {} in {}", actual.name, profile.hint_title)
            }
            None => "Incorrect Identification".to_string(),
        };
        Self { correct: false, header, body }
    }

    /// Feedback for a post whose answer window ran out. Posts without a
    /// fallacy expire silently.
    pub fn for_timeout(post: &GeneratedPost) -> Option<Self> {
        if !post.fallacy.is_fallacy() {
            return None;
        }
        let info = post.fallacy.info();
        Some(Self {
            correct: false,
            header: format!("⏰ Time's up! This post contained: {}", info.name),
            body: format!("{}\n\n{}", info.description, TIMEOUT_TIP),
        })
    }

    /// Transition-screen text for a finished level.
    pub fn for_level_up(level_up: &LevelUp) -> Self {
        let mut body = level_up.description();
        if level_up.perfect_bonus > 0 {
            body.push_str(&format!(
                "\n\nPERFECT LEVEL BONUS: +{}",
                level_up.perfect_bonus
            ));
        }
        if let Some(insight) = &level_up.insight {
            body.push_str("\n\n");
            body.push_str(&insight.text());
        }
        Self {
            correct: true,
            header: format!("Level {}", level_up.new_level),
            body,
        }
    }
}

/// Analysis panel shown while a campaign post is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignHint {
    pub campaign: CampaignKind,
    pub title: String,
    /// Who is behind the operation.
    pub operator: String,
    /// What the operation is after, as shown to the player.
    pub objective: String,
    pub goal: String,
    pub tactics: Vec<String>,
    pub look_for: Vec<String>,
}

impl CampaignHint {
    pub fn for_campaign(campaign: CampaignKind) -> Self {
        let profile = campaign.profile();
        Self {
            campaign,
            title: profile.hint_title.to_string(),
            operator: profile.label.to_string(),
            objective: profile.hint_objective.to_string(),
            goal: profile.objective.to_string(),
            tactics: profile
                .tactics
                .iter()
                .map(|tactic| tactic.replace('_', " "))
                .collect(),
            look_for: profile.look_for.iter().map(|hint| hint.to_string()).collect(),
        }
    }
}
