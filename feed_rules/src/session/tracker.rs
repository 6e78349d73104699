//! Campaign tracking and the sentiment-analysis quiz trigger.

use serde::{Deserialize, Serialize};

use crate::campaigns::CampaignKind;
use crate::config::QuizConfig;
use crate::fallacies::FallacyKind;
use crate::posts::GeneratedPost;

/// A campaign post as remembered by the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub content: String,
    pub campaign: CampaignKind,
    pub fallacy: FallacyKind,
    pub timestamp_ms: u64,
}

/// Counts processed posts and remembers campaign posts between quizzes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignTracker {
    pub posts_processed: u32,
    pub records: Vec<CampaignRecord>,
    pub threshold: u32,
    pub min_level: u32,
    pub min_campaign_posts: usize,
    pub last_quiz_level: Option<u32>,
}

impl Default for CampaignTracker {
    fn default() -> Self {
        Self::new(&QuizConfig::default())
    }
}

impl CampaignTracker {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            posts_processed: 0,
            records: Vec::new(),
            threshold: config.threshold,
            min_level: config.min_level,
            min_campaign_posts: config.min_campaign_posts,
            last_quiz_level: None,
        }
    }

    /// Count a spawned post and remember it if it belongs to a campaign.
    pub fn record(&mut self, post: &GeneratedPost) {
        self.posts_processed += 1;

        if let Some(campaign) = post.campaign_kind() {
            self.records.push(CampaignRecord {
                content: post.content.clone(),
                campaign,
                fallacy: post.fallacy,
                timestamp_ms: post.created_at_ms,
            });
        }
    }

    pub fn should_quiz(&self, level: u32) -> bool {
        self.posts_processed >= self.threshold
            && level >= self.min_level
            && self.records.len() >= self.min_campaign_posts
    }

    /// Fire the quiz if due. Resets the processed counter when it fires.
    pub fn trigger(&mut self, level: u32) -> bool {
        if !self.should_quiz(level) {
            return false;
        }
        self.posts_processed = 0;
        self.last_quiz_level = Some(level);
        true
    }

    /// The last `count` campaign records, oldest first.
    pub fn recent(&self, count: usize) -> &[CampaignRecord] {
        let start = self.records.len().saturating_sub(count);
        &self.records[start..]
    }
}
