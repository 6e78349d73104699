//! Post Content Generator - builds one feed post per round.
//!
//! Each call walks the same decision chain:
//! 1. **Campaign roll**: `min(0.2 + 0.05 * level, 0.4)`, honoured from level 3
//! 2. **Regular post**: fallacy roll `0.4 + 0.1 * level`, then a kind unlocked at `level`
//! 3. **Campaign post**: a campaign available at `level`, its template and username,
//!    and a scoring label drawn from the campaign's allowed fallacies
//! 4. **Visualization**: optional chart from the selector
//! 5. **Age label**: a display age for the post
//!
//! Every decision draws from the one RNG passed in.

mod visualization;

pub use visualization::*;

use feed_rules::{CampaignKind, FallacyKind, GeneratedPost};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::{debug, warn};

use crate::content::{resolve_layered, ContentPack, TemplateSource};
use crate::error::ContentError;

/// Display ages a post may claim.
pub const AGE_LABELS: [&str; 8] = [
    "Just now", "1m ago", "2m ago", "5m ago", "10m ago", "15m ago", "30m ago", "1h ago",
];

/// Level from which a campaign roll produces a campaign post.
pub const CAMPAIGN_MIN_LEVEL: u32 = 3;

/// Anything that can supply the next post for a level.
pub trait PostSource {
    /// Produce a post. Must not fail: implementations fall back to a neutral post.
    fn next_post(&self, level: u32, now_ms: u64, rng: &mut dyn RngCore) -> GeneratedPost;
}

pub fn campaign_probability(level: u32) -> f64 {
    (0.2 + 0.05 * f64::from(level)).min(0.4)
}

/// Chance that a regular post carries a fallacy. Reaches certainty at level 6.
pub fn fallacy_probability(level: u32) -> f64 {
    0.4 + 0.1 * f64::from(level)
}

/// Sample a display age label.
pub fn age_label(rng: &mut dyn RngCore) -> &'static str {
    AGE_LABELS.choose(rng).copied().unwrap_or(AGE_LABELS[0])
}

/// Template-driven post generator over a [`ContentPack`].
#[derive(Debug, Clone)]
pub struct PostGenerator {
    pack: ContentPack,
}

impl Default for PostGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PostGenerator {
    /// Create a generator over the given content pack.
    pub fn new(pack: ContentPack) -> Self {
        Self { pack }
    }

    /// Create a generator over the built-in content pack.
    pub fn with_defaults() -> Self {
        Self::new(ContentPack::builtin())
    }

    pub fn pack(&self) -> &ContentPack {
        &self.pack
    }

    /// Generate a post, falling back to a neutral post on any content failure.
    pub fn generate(&self, level: u32, now_ms: u64, rng: &mut dyn RngCore) -> GeneratedPost {
        match self.try_generate(level, now_ms, rng) {
            Ok(post) => post,
            Err(err) => {
                warn!(level, error = %err, "Post generation failed, using fallback post");
                GeneratedPost::fallback().with_timestamp(now_ms, AGE_LABELS[0])
            }
        }
    }

    /// Generate a post, reporting gaps in the content pack as errors.
    pub fn try_generate(
        &self,
        level: u32,
        now_ms: u64,
        rng: &mut dyn RngCore,
    ) -> Result<GeneratedPost, ContentError> {
        let campaign_roll = rng.gen::<f64>() < campaign_probability(level);

        let post = if campaign_roll && level >= CAMPAIGN_MIN_LEVEL {
            let kind = CampaignKind::available_at(level)
                .choose(rng)
                .copied()
                .ok_or_else(|| ContentError::NoTemplates("campaign".to_string()))?;
            self.campaign_post(kind, rng)?
        } else {
            self.regular_post(level, rng)?
        };

        let visualization = maybe_attach(post.fallacy, &post.content, rng);
        let post = post
            .with_visualization(visualization)
            .with_timestamp(now_ms, age_label(rng));

        debug!(
            post = %post.id,
            level,
            fallacy = post.fallacy.as_str(),
            campaign = post.campaign_kind().map(|kind| kind.as_str()),
            chart = post.visualization.is_some(),
            "Generated post"
        );

        Ok(post)
    }

    fn regular_post(&self, level: u32, rng: &mut dyn RngCore) -> Result<GeneratedPost, ContentError> {
        let has_fallacy = rng.gen::<f64>() < fallacy_probability(level);
        let fallacy = if has_fallacy {
            FallacyKind::unlocked_at(level)
                .choose(rng)
                .copied()
                .unwrap_or(FallacyKind::None)
        } else {
            FallacyKind::None
        };

        let username = self
            .pack
            .usernames()
            .choose(rng)
            .ok_or_else(|| ContentError::NoUsernames("generic".to_string()))?;
        let template = self
            .pack
            .templates(fallacy)
            .choose(rng)
            .ok_or_else(|| ContentError::NoTemplates(fallacy.as_str().to_string()))?;

        let source = TemplateSource::Fallacy(fallacy);
        let content = resolve_layered(template, &self.pack.layers_for(source), rng);

        Ok(GeneratedPost::regular(username.clone(), content, fallacy))
    }

    fn campaign_post(
        &self,
        kind: CampaignKind,
        rng: &mut dyn RngCore,
    ) -> Result<GeneratedPost, ContentError> {
        let template = self
            .pack
            .campaign_templates(kind)
            .choose(rng)
            .ok_or_else(|| ContentError::NoTemplates(kind.as_str().to_string()))?;
        let username = self
            .pack
            .campaign_usernames(kind)
            .choose(rng)
            .ok_or_else(|| ContentError::NoUsernames(kind.as_str().to_string()))?;

        let source = TemplateSource::Campaign(kind);
        let content = resolve_layered(template, &self.pack.layers_for(source), rng);

        let fallacy = kind
            .allowed_fallacies()
            .choose(rng)
            .copied()
            .ok_or_else(|| ContentError::NoTemplates(kind.as_str().to_string()))?;

        Ok(GeneratedPost::campaign(kind, username.clone(), content, fallacy))
    }
}

impl PostSource for PostGenerator {
    fn next_post(&self, level: u32, now_ms: u64, rng: &mut dyn RngCore) -> GeneratedPost {
        self.generate(level, now_ms, rng)
    }
}
