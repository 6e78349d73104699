//! Fallacy detection port.
//!
//! Posts carry their fallacy label from generation, so the shipped detector
//! finds nothing. The trait exists so a real classifier can be plugged into
//! the session without touching the loop.

use feed_rules::FallacyKind;
use serde::{Deserialize, Serialize};

/// One finding reported by a detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub kind: FallacyKind,
    /// Confidence from 0.0 to 1.0.
    pub confidence: f32,
    /// The span of text that triggered the finding, if known.
    pub excerpt: Option<String>,
}

/// Text classifier for fallacies.
pub trait FallacyDetector {
    fn detect(&self, text: &str) -> Vec<Detection>;

    fn contains(&self, text: &str, kind: FallacyKind) -> bool {
        self.detect(text).iter().any(|detection| detection.kind == kind)
    }
}

/// Detector that never reports anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDetector;

impl FallacyDetector for NullDetector {
    fn detect(&self, _text: &str) -> Vec<Detection> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeywordDetector;

    impl FallacyDetector for KeywordDetector {
        fn detect(&self, text: &str) -> Vec<Detection> {
            if text.contains("what about") {
                vec![Detection {
                    kind: FallacyKind::Whataboutism,
                    confidence: 0.6,
                    excerpt: Some("what about".to_string()),
                }]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn test_null_detector_finds_nothing() {
        let detector = NullDetector;
        assert!(detector.detect("Either we act now or everything collapses.").is_empty());
        assert!(!detector.contains("anything", FallacyKind::FalseDilemma));
    }

    #[test]
    fn test_contains_uses_detect() {
        let detector = KeywordDetector;
        assert!(detector.contains("but what about them?", FallacyKind::Whataboutism));
        assert!(!detector.contains("but what about them?", FallacyKind::Strawman));
    }
}
