//! Post definitions for the feed.

mod visualization;

pub use visualization::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::campaigns::CampaignKind;
use crate::fallacies::FallacyKind;

/// Unique identifier for generated posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Create a new random post ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty post ID (useful for fixtures).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The unit produced each round.
///
/// Never mutated after creation except for `marked`, which records that the
/// post has been judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub id: PostId,
    pub username: String,
    pub content: String,
    /// Label the player is judged against.
    pub fallacy: FallacyKind,
    pub visualization: Option<VisualizationDescriptor>,
    campaign: Option<CampaignKind>,
    /// Session clock at spawn, in milliseconds.
    pub created_at_ms: u64,
    /// Display age such as "5m ago".
    pub age_label: String,
    marked: bool,
}

impl GeneratedPost {
    /// Create a regular (non-campaign) post.
    pub fn regular(
        username: impl Into<String>,
        content: impl Into<String>,
        fallacy: FallacyKind,
    ) -> Self {
        Self {
            id: PostId::new(),
            username: username.into(),
            content: content.into(),
            fallacy,
            visualization: None,
            campaign: None,
            created_at_ms: 0,
            age_label: "Just now".to_string(),
            marked: false,
        }
    }

    /// Create an influence-campaign post.
    pub fn campaign(
        campaign: CampaignKind,
        username: impl Into<String>,
        content: impl Into<String>,
        fallacy: FallacyKind,
    ) -> Self {
        Self {
            campaign: Some(campaign),
            ..Self::regular(username, content, fallacy)
        }
    }

    /// Neutral, fallacy-free post used when generation fails.
    pub fn fallback() -> Self {
        Self::regular(
            "FeedModerator",
            "Taking a short break from the timeline today. Remember to check sources before you share.",
            FallacyKind::None,
        )
    }

    /// Attach a chart descriptor.
    pub fn with_visualization(mut self, visualization: Option<VisualizationDescriptor>) -> Self {
        self.visualization = visualization;
        self
    }

    /// Set the spawn time and age label.
    pub fn with_timestamp(mut self, created_at_ms: u64, age_label: impl Into<String>) -> Self {
        self.created_at_ms = created_at_ms;
        self.age_label = age_label.into();
        self
    }

    pub fn campaign_kind(&self) -> Option<CampaignKind> {
        self.campaign
    }

    pub fn is_campaign(&self) -> bool {
        self.campaign.is_some()
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Record that the post has been judged.
    pub fn mark(&mut self) {
        self.marked = true;
    }
}
