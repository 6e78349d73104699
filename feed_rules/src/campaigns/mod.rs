//! Influence campaign archetypes and their analysis profiles.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RulesError;
use crate::fallacies::FallacyKind;

/// Simulated influence-operation archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignKind {
    StateSponsored,
    CorporateAstroturf,
    DomesticPolitical,
}

/// Static profile of a campaign archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CampaignProfile {
    /// Human label.
    pub label: &'static str,
    /// What the operation is trying to achieve.
    pub objective: &'static str,
    pub tactics: &'static [&'static str],
    /// Title shown when the player analyses a post from this campaign.
    pub hint_title: &'static str,
    pub hint_objective: &'static str,
    /// Tell-tale signs, most salient first.
    pub look_for: &'static [&'static str],
    /// Fallacies a campaign post may be scored as.
    pub allowed_fallacies: &'static [FallacyKind],
}

impl CampaignKind {
    pub const ALL: [CampaignKind; 3] = [
        CampaignKind::StateSponsored,
        CampaignKind::CorporateAstroturf,
        CampaignKind::DomesticPolitical,
    ];

    /// Campaigns that may appear at `level`. Domestic political campaigns start at level 5.
    pub fn available_at(level: u32) -> &'static [CampaignKind] {
        if level < 5 {
            &Self::ALL[..2]
        } else {
            &Self::ALL
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignKind::StateSponsored => "state_sponsored",
            CampaignKind::CorporateAstroturf => "corporate_astroturf",
            CampaignKind::DomesticPolitical => "domestic_political",
        }
    }

    pub fn profile(&self) -> &'static CampaignProfile {
        match self {
            CampaignKind::StateSponsored => &STATE_SPONSORED,
            CampaignKind::CorporateAstroturf => &CORPORATE_ASTROTURF,
            CampaignKind::DomesticPolitical => &DOMESTIC_POLITICAL,
        }
    }

    pub fn allowed_fallacies(&self) -> &'static [FallacyKind] {
        self.profile().allowed_fallacies
    }
}

impl FromStr for CampaignKind {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RulesError::UnknownCampaign(s.to_string()))
    }
}

impl std::fmt::Display for CampaignKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static STATE_SPONSORED: CampaignProfile = CampaignProfile {
    label: "Foreign State Disinformation",
    objective: "Undermine institutional trust and social cohesion",
    tactics: &["doubt_seeding", "false_equivalency", "amplify_division"],
    hint_title: "Disinformation Campaign Detected",
    hint_objective: "This appears designed to undermine trust in institutions and create confusion",
    look_for: &[
        "\"Both sides are equally bad\" messaging",
        "Vague claims about institutional failures",
        "Appeals to distrust experts or authorities",
        "Emotional language without supporting evidence",
        "Username appears authoritative but generic",
    ],
    allowed_fallacies: &[
        FallacyKind::AppealEmotion,
        FallacyKind::FalseDilemma,
        FallacyKind::AdHominem,
        FallacyKind::Strawman,
    ],
};

static CORPORATE_ASTROTURF: CampaignProfile = CampaignProfile {
    label: "Corporate Astroturfing",
    objective: "Simulate grassroots support for corporate interests",
    tactics: &["fake_grassroots", "economic_fear", "job_concerns"],
    hint_title: "Astroturfing Campaign Detected",
    hint_objective: "This appears to be fake grassroots messaging funded by corporate interests",
    look_for: &[
        "Claims of representing \"ordinary workers\" or \"families\"",
        "Economic fear tactics (job losses, price increases)",
        "Professional language that seems too polished",
        "Focus on economic impacts over other concerns",
        "Username suggests industry or worker affiliation",
    ],
    allowed_fallacies: &[
        FallacyKind::AppealAuthority,
        FallacyKind::AppealEmotion,
        FallacyKind::HastyGeneralization,
        FallacyKind::StatsManipulation,
    ],
};

static DOMESTIC_POLITICAL: CampaignProfile = CampaignProfile {
    label: "Domestic Political Manipulation",
    objective: "Increase polarization and emotional response",
    tactics: &["emotional_manipulation", "group_identity", "urgency_creation"],
    hint_title: "Political Manipulation Detected",
    hint_objective: "This appears designed to increase emotional response and polarization",
    look_for: &[
        "Urgent time pressure (\"before it's too late\")",
        "Strong in-group/out-group language",
        "Appeals to identity and values over facts",
        "Extreme characterizations of opponents",
        "Calls for immediate political action",
    ],
    allowed_fallacies: &[
        FallacyKind::AppealEmotion,
        FallacyKind::FalseDilemma,
        FallacyKind::Strawman,
        FallacyKind::HastyGeneralization,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_campaigns_by_level() {
        assert_eq!(CampaignKind::available_at(3).len(), 2);
        assert!(!CampaignKind::available_at(4).contains(&CampaignKind::DomesticPolitical));
        assert_eq!(CampaignKind::available_at(5).len(), 3);
    }

    #[test]
    fn test_profiles_are_complete() {
        for kind in CampaignKind::ALL {
            let profile = kind.profile();
            assert_eq!(profile.look_for.len(), 5);
            assert_eq!(profile.allowed_fallacies.len(), 4);
            assert!(profile
                .allowed_fallacies
                .iter()
                .all(|f| f.is_fallacy()));
        }
    }

    #[test]
    fn test_parse_campaign() {
        assert_eq!(
            "corporate_astroturf".parse::<CampaignKind>().unwrap(),
            CampaignKind::CorporateAstroturf
        );
        assert!("grassroots".parse::<CampaignKind>().is_err());
    }
}
