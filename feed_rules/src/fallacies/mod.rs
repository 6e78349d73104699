//! Fallacy catalog: the kinds a player can flag, their teaching text, and level gating.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RulesError;

/// Every label the player can assign to a post.
///
/// `None` marks fallacy-free content and is always unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallacyKind {
    // Basic
    Strawman,
    FalseDilemma,
    AdHominem,
    AppealEmotion,
    HastyGeneralization,
    AppealAuthority,

    // Advanced
    StatsManipulation,
    ConfirmationBias,
    FalseCausality,

    // Expert
    InauthenticBehavior,
    Whataboutism,
    MovingGoalposts,

    None,
}

/// Unlock tier of a fallacy kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallacyTier {
    Basic,
    Advanced,
    Expert,
}

impl FallacyTier {
    /// First level at which this tier appears in the feed.
    pub fn unlock_level(&self) -> u32 {
        match self {
            FallacyTier::Basic => 1,
            FallacyTier::Advanced => 3,
            FallacyTier::Expert => 5,
        }
    }
}

/// Display metadata for a fallacy kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallacyInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub avoidance: &'static str,
}

impl FallacyKind {
    /// All twelve fallacies in unlock order, without `None`.
    pub const FALLACIES: [FallacyKind; 12] = [
        FallacyKind::Strawman,
        FallacyKind::FalseDilemma,
        FallacyKind::AdHominem,
        FallacyKind::AppealEmotion,
        FallacyKind::HastyGeneralization,
        FallacyKind::AppealAuthority,
        FallacyKind::StatsManipulation,
        FallacyKind::ConfirmationBias,
        FallacyKind::FalseCausality,
        FallacyKind::InauthenticBehavior,
        FallacyKind::Whataboutism,
        FallacyKind::MovingGoalposts,
    ];

    /// Every kind including `None`.
    pub const ALL: [FallacyKind; 13] = [
        FallacyKind::Strawman,
        FallacyKind::FalseDilemma,
        FallacyKind::AdHominem,
        FallacyKind::AppealEmotion,
        FallacyKind::HastyGeneralization,
        FallacyKind::AppealAuthority,
        FallacyKind::StatsManipulation,
        FallacyKind::ConfirmationBias,
        FallacyKind::FalseCausality,
        FallacyKind::InauthenticBehavior,
        FallacyKind::Whataboutism,
        FallacyKind::MovingGoalposts,
        FallacyKind::None,
    ];

    /// Snake-case identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FallacyKind::Strawman => "strawman",
            FallacyKind::FalseDilemma => "false_dilemma",
            FallacyKind::AdHominem => "ad_hominem",
            FallacyKind::AppealEmotion => "appeal_emotion",
            FallacyKind::HastyGeneralization => "hasty_generalization",
            FallacyKind::AppealAuthority => "appeal_authority",
            FallacyKind::StatsManipulation => "stats_manipulation",
            FallacyKind::ConfirmationBias => "confirmation_bias",
            FallacyKind::FalseCausality => "false_causality",
            FallacyKind::InauthenticBehavior => "inauthentic_behavior",
            FallacyKind::Whataboutism => "whataboutism",
            FallacyKind::MovingGoalposts => "moving_goalposts",
            FallacyKind::None => "none",
        }
    }

    /// Whether this kind denotes an actual fallacy.
    pub fn is_fallacy(&self) -> bool {
        *self != FallacyKind::None
    }

    /// Tier the kind belongs to. `None` counts as basic.
    pub fn tier(&self) -> FallacyTier {
        match self {
            FallacyKind::StatsManipulation
            | FallacyKind::ConfirmationBias
            | FallacyKind::FalseCausality => FallacyTier::Advanced,
            FallacyKind::InauthenticBehavior
            | FallacyKind::Whataboutism
            | FallacyKind::MovingGoalposts => FallacyTier::Expert,
            _ => FallacyTier::Basic,
        }
    }

    /// Minimum level at which the kind can appear.
    pub fn min_level(&self) -> u32 {
        self.tier().unlock_level()
    }

    /// Check if the kind may appear at `level`.
    pub fn is_unlocked_at(&self, level: u32) -> bool {
        level >= self.min_level()
    }

    /// Fallacies a regular post may carry at `level` (never includes `None`).
    pub fn unlocked_at(level: u32) -> Vec<FallacyKind> {
        Self::FALLACIES
            .iter()
            .copied()
            .filter(|kind| kind.is_unlocked_at(level))
            .collect()
    }

    /// Fallacies that become available exactly when `level` is reached.
    pub fn newly_unlocked_at(level: u32) -> Vec<FallacyKind> {
        Self::FALLACIES
            .iter()
            .copied()
            .filter(|kind| kind.min_level() == level && level > 1)
            .collect()
    }

    /// Display metadata for this kind.
    pub fn info(&self) -> &'static FallacyInfo {
        match self {
            FallacyKind::Strawman => &STRAWMAN,
            FallacyKind::FalseDilemma => &FALSE_DILEMMA,
            FallacyKind::AdHominem => &AD_HOMINEM,
            FallacyKind::AppealEmotion => &APPEAL_EMOTION,
            FallacyKind::HastyGeneralization => &HASTY_GENERALIZATION,
            FallacyKind::AppealAuthority => &APPEAL_AUTHORITY,
            FallacyKind::StatsManipulation => &STATS_MANIPULATION,
            FallacyKind::ConfirmationBias => &CONFIRMATION_BIAS,
            FallacyKind::FalseCausality => &FALSE_CAUSALITY,
            FallacyKind::InauthenticBehavior => &INAUTHENTIC_BEHAVIOR,
            FallacyKind::Whataboutism => &WHATABOUTISM,
            FallacyKind::MovingGoalposts => &MOVING_GOALPOSTS,
            FallacyKind::None => &NO_FALLACY,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        self.info().name
    }
}

impl FromStr for FallacyKind {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FallacyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RulesError::UnknownFallacy(s.to_string()))
    }
}

impl std::fmt::Display for FallacyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up display metadata for a fallacy identifier.
///
/// Unknown identifiers are a data defect and return an error instead of a default.
pub fn lookup(kind: &str) -> Result<&'static FallacyInfo, RulesError> {
    kind.parse::<FallacyKind>().map(|k| k.info())
}

static STRAWMAN: FallacyInfo = FallacyInfo {
    name: "Strawman Argument",
    description: "Misrepresenting someone's argument to make it easier to attack. By exaggerating, misrepresenting, or completely fabricating someone's argument, it's much easier to present your own position as being reasonable.",
    example: "After Will said we should invest more in education and healthcare, Warren responded by saying that Will wants to leave the country defenseless by cutting military spending.",
    avoidance: "Always verify you understand the other person's position. Quote their actual words rather than paraphrasing when possible.",
};

static FALSE_DILEMMA: FallacyInfo = FallacyInfo {
    name: "False Dilemma/Dichotomy",
    description: "Presenting only two options or sides when there are many more possibilities. This fallacy artificially limits the options being considered, forcing a choice between two extremes when alternative options exist.",
    example: "Either we cut healthcare funding, or the national debt will cause an economic collapse. There's no middle ground.",
    avoidance: "Ask yourself if there might be a spectrum of options, compromises, or alternative approaches not being considered.",
};

static AD_HOMINEM: FallacyInfo = FallacyInfo {
    name: "Ad Hominem Attack",
    description: "Attacking the person instead of addressing their argument. This fallacy attempts to undermine someone's position by criticizing their personal characteristics rather than engaging with their reasoning.",
    example: "Don't listen to his arguments about climate policy. He didn't even graduate from college!",
    avoidance: "Focus on evaluating the argument itself rather than who is making it. The validity of an argument is independent of its source.",
};

static APPEAL_EMOTION: FallacyInfo = FallacyInfo {
    name: "Appeal to Emotion",
    description: "Manipulating emotions rather than using valid reasoning. This technique substitutes emotionally charged language, imagery, or stories for logical arguments to sway opinions and decisions.",
    example: "Think of the children who will suffer if you don't support this policy! How will you be able to sleep at night?",
    avoidance: "While emotions can be valid, ask if they're being used as a substitute for evidence. Consider whether the emotional appeal is relevant to the actual merits of the argument.",
};

static HASTY_GENERALIZATION: FallacyInfo = FallacyInfo {
    name: "Hasty Generalization",
    description: "Drawing a general conclusion from a sample that is too small or biased. This error involves making a broad claim based on insufficient or unrepresentative evidence.",
    example: "I met two people from that country and they were both rude. Everyone from there must be impolite.",
    avoidance: "Consider the sample size and representativeness. Ask whether a few examples are sufficient to support a broad conclusion about an entire group.",
};

static APPEAL_AUTHORITY: FallacyInfo = FallacyInfo {
    name: "Appeal to Authority",
    description: "Using the opinion of an authority figure in place of actual evidence. While expert opinions can be valuable, they don't replace facts, especially when the authority is speaking outside their expertise.",
    example: "This famous actor says this health supplement works, so it must be effective.",
    avoidance: "Evaluate the expertise of the authority. Are they qualified in the relevant field? Even then, ask for the evidence behind their position.",
};

static STATS_MANIPULATION: FallacyInfo = FallacyInfo {
    name: "Statistical Manipulation",
    description: "Misusing statistics to create misleading impressions. This includes cherry-picking data, presenting correlations as causations, or using deceptive visual representations to support a predetermined conclusion.",
    example: "Our product is 50% more effective! (Compared to a deliberately weak competitor, or measuring from an artificially low baseline.)",
    avoidance: "Look for the full context of statistics: what's being measured, what's the baseline, what's being excluded, and who conducted the research.",
};

static CONFIRMATION_BIAS: FallacyInfo = FallacyInfo {
    name: "Confirmation Bias",
    description: "Favoring information that confirms existing beliefs while rejecting contradictory evidence. This cognitive bias leads people to selectively collect and interpret evidence that supports their preconceptions.",
    example: "I know this theory is true because I only read news sources that agree with my viewpoint. The others are obviously biased.",
    avoidance: "Deliberately seek out information from diverse sources, including those that challenge your existing beliefs. Be willing to revise opinions based on new evidence.",
};

static FALSE_CAUSALITY: FallacyInfo = FallacyInfo {
    name: "False Causality",
    description: "Assuming that because one event followed another, the first event caused the second. This 'post hoc ergo propter hoc' fallacy confuses correlation with causation.",
    example: "I wore my lucky shirt and our team won, so my shirt must have caused the victory.",
    avoidance: "Remember that correlation doesn't imply causation. Consider alternative explanations, including coincidence, reverse causation, or common causes.",
};

static INAUTHENTIC_BEHAVIOR: FallacyInfo = FallacyInfo {
    name: "Inauthentic Behavior",
    description: "Coordinated efforts to manipulate public perception by creating an artificial impression of consensus or grassroots support. This includes astroturfing, bot networks, and orchestrated campaigns masquerading as organic activity.",
    example: "Suddenly thousands of identical comments supporting this policy appeared overnight, all using similar phrasing and talking points.",
    avoidance: "Look for unusual patterns like identical messaging, sudden surges of activity, or accounts with limited history. Consider the authenticity and diversity of sources.",
};

static WHATABOUTISM: FallacyInfo = FallacyInfo {
    name: "Whataboutism",
    description: "Deflecting criticism by pointing to someone else's real or alleged wrongdoing. This technique attempts to change the subject rather than addressing the original criticism.",
    example: "Why are you criticizing our corruption when others are doing the same thing? What about their misconduct?",
    avoidance: "Recognize that multiple wrongs don't make a right. Each issue deserves to be addressed on its own merits without deflection.",
};

static MOVING_GOALPOSTS: FallacyInfo = FallacyInfo {
    name: "Moving the Goalposts",
    description: "Changing the criteria of an argument when the original conditions are met. This fallacy involves continuously raising the standards of evidence or adding new demands to avoid conceding a point.",
    example: "After evidence was provided, they said, 'That's not enough, I need to see more comprehensive data from multiple sources.'",
    avoidance: "Establish clear criteria for what would constitute sufficient evidence at the beginning of a discussion. Recognize when new demands are being added to avoid acknowledging a valid point.",
};

static NO_FALLACY: FallacyInfo = FallacyInfo {
    name: "No Fallacy",
    description: "The post makes its point without a logical fallacy or manipulation tactic.",
    example: "Meta-analysis of 15 studies suggests moderate benefits. Good to see researchers synthesizing multiple data sources.",
    avoidance: "Not every post is manipulative. Check the reasoning before flagging it.",
};
