//! Aggregate player statistics across a session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::fallacies::FallacyKind;

/// Running per-kind counters for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStats {
    pub correct: BTreeMap<FallacyKind, u32>,
    /// Keyed by `(selected, actual)`.
    pub misidentified: BTreeMap<(FallacyKind, FallacyKind), u32>,
    pub missed: BTreeMap<FallacyKind, u32>,
    pub reaction_times: Vec<f64>,
    pub total_encountered: u32,
    pub total_correct: u32,
    pub total_incorrect: u32,
    pub total_missed: u32,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_correct(&mut self, kind: FallacyKind) {
        *self.correct.entry(kind).or_insert(0) += 1;
        self.total_correct += 1;
        self.total_encountered += 1;
    }

    /// A wrong label also counts as a miss of the actual kind.
    pub fn track_incorrect(&mut self, selected: FallacyKind, actual: FallacyKind) {
        *self.misidentified.entry((selected, actual)).or_insert(0) += 1;
        self.total_incorrect += 1;
        self.total_encountered += 1;
        self.track_missed(actual);
    }

    pub fn track_missed(&mut self, kind: FallacyKind) {
        *self.missed.entry(kind).or_insert(0) += 1;
        self.total_missed += 1;
    }

    pub fn track_reaction_time(&mut self, seconds: f64) {
        self.reaction_times.push(seconds);
    }

    /// The kind missed most often. Ties go to the kind listed first in the catalog.
    pub fn most_missed(&self) -> Option<FallacyKind> {
        let mut best: Option<(FallacyKind, u32)> = None;
        for (&kind, &count) in &self.missed {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((kind, count));
            }
        }
        best.map(|(kind, _)| kind)
    }

    /// Display name of [`Self::most_missed`], or "None".
    pub fn most_missed_name(&self) -> &'static str {
        self.most_missed().map_or("None", |kind| kind.name())
    }

    /// Mean reaction time in seconds, 0.0 when nothing was answered.
    pub fn average_reaction_time(&self) -> f64 {
        if self.reaction_times.is_empty() {
            return 0.0;
        }
        self.reaction_times.iter().sum::<f64>() / self.reaction_times.len() as f64
    }

    /// Build the persisted form.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            correct_identifications: self
                .correct
                .iter()
                .map(|(kind, count)| (kind.as_str().to_string(), *count))
                .collect(),
            incorrect_identifications: self
                .misidentified
                .iter()
                .map(|((selected, actual), count)| {
                    (format!("{}:{}", selected.as_str(), actual.as_str()), *count)
                })
                .collect(),
            missed_fallacies: self
                .missed
                .iter()
                .map(|(kind, count)| (kind.as_str().to_string(), *count))
                .collect(),
            total_correct: self.total_correct,
            total_incorrect: self.total_incorrect,
            total_missed: self.total_missed,
            avg_reaction_time: self.average_reaction_time(),
        }
    }
}

/// Serializable stats record handed to a stats store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub correct_identifications: BTreeMap<String, u32>,
    /// Keyed by `"selected:actual"`.
    pub incorrect_identifications: BTreeMap<String, u32>,
    pub missed_fallacies: BTreeMap<String, u32>,
    pub total_correct: u32,
    pub total_incorrect: u32,
    pub total_missed: u32,
    pub avg_reaction_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorrect_counts_as_miss() {
        let mut stats = GameStats::new();
        stats.track_incorrect(FallacyKind::Strawman, FallacyKind::AdHominem);

        assert_eq!(stats.total_incorrect, 1);
        assert_eq!(stats.total_missed, 1);
        assert_eq!(stats.total_encountered, 1);
        assert_eq!(stats.missed.get(&FallacyKind::AdHominem), Some(&1));
    }

    #[test]
    fn test_most_missed() {
        let mut stats = GameStats::new();
        assert_eq!(stats.most_missed(), None);
        assert_eq!(stats.most_missed_name(), "None");

        stats.track_missed(FallacyKind::FalseDilemma);
        stats.track_missed(FallacyKind::Whataboutism);
        stats.track_missed(FallacyKind::Whataboutism);

        assert_eq!(stats.most_missed(), Some(FallacyKind::Whataboutism));
        assert_eq!(stats.most_missed_name(), FallacyKind::Whataboutism.name());
    }

    #[test]
    fn test_average_reaction_time() {
        let mut stats = GameStats::new();
        assert_eq!(stats.average_reaction_time(), 0.0);

        stats.track_reaction_time(2.0);
        stats.track_reaction_time(4.0);
        assert!((stats.average_reaction_time() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_keys() {
        let mut stats = GameStats::new();
        stats.track_correct(FallacyKind::Strawman);
        stats.track_incorrect(FallacyKind::AdHominem, FallacyKind::FalseDilemma);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.correct_identifications.get("strawman"), Some(&1));
        assert_eq!(
            snapshot.incorrect_identifications.get("ad_hominem:false_dilemma"),
            Some(&1)
        );
        assert_eq!(snapshot.total_correct, 1);

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StatsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
