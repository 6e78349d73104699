//! Emotion keyword tallies for the emotional-target question.

use serde::{Deserialize, Serialize};

/// Emotion buckets, in tally order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Fear,
    Anger,
    Confusion,
}

impl Emotion {
    pub const ALL: [Emotion; 3] = [Emotion::Fear, Emotion::Anger, Emotion::Confusion];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Fear => &["urgent", "danger", "threat", "crisis", "attack", "destroy", "lose"],
            Emotion::Anger => &["outrage", "betrayal", "corrupt", "lying", "wrong", "unfair"],
            Emotion::Confusion => &["question", "doubt", "uncertain", "contradictory", "confusing"],
        }
    }

    /// Index of the matching option in the emotional-target question.
    pub fn option_index(&self) -> usize {
        match self {
            Emotion::Fear => 0,
            Emotion::Anger => 1,
            // Option 2 is the distractor "Hope and unity"
            Emotion::Confusion => 3,
        }
    }
}

/// Keyword hits per emotion bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionCounts {
    pub fear: u32,
    pub anger: u32,
    pub confusion: u32,
}

impl EmotionCounts {
    /// Count keyword hits across `contents`.
    ///
    /// Each keyword counts at most once per text, matched case-insensitively
    /// as a substring.
    pub fn tally<'a>(contents: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = Self::default();
        for content in contents {
            let lower = content.to_lowercase();
            for emotion in Emotion::ALL {
                let hits = emotion
                    .keywords()
                    .iter()
                    .filter(|keyword| lower.contains(*keyword))
                    .count() as u32;
                *counts.get_mut(emotion) += hits;
            }
        }
        counts
    }

    pub fn get(&self, emotion: Emotion) -> u32 {
        match emotion {
            Emotion::Fear => self.fear,
            Emotion::Anger => self.anger,
            Emotion::Confusion => self.confusion,
        }
    }

    fn get_mut(&mut self, emotion: Emotion) -> &mut u32 {
        match emotion {
            Emotion::Fear => &mut self.fear,
            Emotion::Anger => &mut self.anger,
            Emotion::Confusion => &mut self.confusion,
        }
    }

    /// The bucket with the most hits. On a tie the later bucket wins, so an
    /// all-zero tally reads as confusion.
    pub fn dominant(&self) -> Emotion {
        Emotion::ALL
            .into_iter()
            .reduce(|best, next| if self.get(best) > self.get(next) { best } else { next })
            .unwrap_or(Emotion::Confusion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_keywords_once_per_post() {
        let counts = EmotionCounts::tally([
            "URGENT urgent: a crisis!",
            "They are lying. It's wrong.",
        ]);
        assert_eq!(counts.fear, 2);
        assert_eq!(counts.anger, 2);
        assert_eq!(counts.confusion, 0);
    }

    #[test]
    fn test_dominant() {
        let fear = EmotionCounts { fear: 3, anger: 1, confusion: 2 };
        assert_eq!(fear.dominant(), Emotion::Fear);

        let anger = EmotionCounts { fear: 0, anger: 2, confusion: 1 };
        assert_eq!(anger.dominant(), Emotion::Anger);
    }

    #[test]
    fn test_dominant_ties_go_to_later_bucket() {
        assert_eq!(EmotionCounts::default().dominant(), Emotion::Confusion);

        let tie = EmotionCounts { fear: 2, anger: 2, confusion: 0 };
        assert_eq!(tie.dominant(), Emotion::Anger);
    }

    #[test]
    fn test_option_indices() {
        assert_eq!(Emotion::Fear.option_index(), 0);
        assert_eq!(Emotion::Anger.option_index(), 1);
        assert_eq!(Emotion::Confusion.option_index(), 3);
    }
}
