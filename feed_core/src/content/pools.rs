//! Value pools and the placeholder resolver.

use rand::seq::SliceRandom;
use rand::RngCore;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::ContentError;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("valid regex"));

/// Named lists of candidate strings for `{name}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolTable {
    pools: BTreeMap<String, Vec<String>>,
}

impl PoolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from static data.
    pub fn from_static(entries: &[(&str, &[&str])]) -> Self {
        let pools = entries
            .iter()
            .map(|(name, values)| {
                (
                    name.to_string(),
                    values.iter().map(|value| value.to_string()).collect(),
                )
            })
            .collect();
        Self { pools }
    }

    /// Append candidates to a pool, creating it if needed. Empty input is rejected.
    pub fn extend(&mut self, name: &str, values: Vec<String>) -> Result<(), ContentError> {
        if values.is_empty() {
            return Err(ContentError::EmptyPool(name.to_string()));
        }
        self.pools.entry(name.to_string()).or_default().extend(values);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.pools.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    /// Resolve `template` against this table alone.
    pub fn resolve(&self, template: &str, rng: &mut dyn RngCore) -> String {
        resolve_layered(template, &[self], rng)
    }
}

/// Sample one candidate for `name` from the first layer that defines it.
fn sample<'a>(name: &str, layers: &[&'a PoolTable], rng: &mut dyn RngCore) -> Option<&'a str> {
    layers
        .iter()
        .copied()
        .find_map(|table| table.get(name))
        .and_then(|values| values.choose(rng))
        .map(String::as_str)
}

/// Replace every `{name}` in `template` with a value sampled from `layers`.
///
/// Earlier layers win when more than one defines a name. Every occurrence is
/// sampled independently. Placeholders no layer defines are left verbatim,
/// braces included.
pub fn resolve_layered(template: &str, layers: &[&PoolTable], rng: &mut dyn RngCore) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            match sample(&caps[1], layers, &mut *rng) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Names of all `{name}` placeholders in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .collect()
}

/// Whether `text` still contains a `{name}` token.
pub fn has_placeholders(text: &str) -> bool {
    !placeholders(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn table() -> PoolTable {
        PoolTable::from_static(&[
            ("topic", &["healthcare", "education"]),
            ("person", &["that politician"]),
        ])
    }

    #[test]
    fn test_resolve_known_placeholders() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let text = table().resolve("Don't trust {person} on {topic}.", &mut rng);

        assert!(text.starts_with("Don't trust that politician on "));
        assert!(!has_placeholders(&text));
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let text = table().resolve("Stop {civic_action} about {topic}.", &mut rng);

        assert!(text.starts_with("Stop {civic_action} about "));
        assert_eq!(placeholders(&text), vec!["civic_action"]);
    }

    #[test]
    fn test_non_placeholder_braces_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let table = table();

        assert_eq!(table.resolve("{} and {", &mut rng), "{} and {");
        assert_eq!(table.resolve("{not a name}", &mut rng), "{not a name}");
        assert_eq!(table.resolve("{topic", &mut rng), "{topic");
    }

    #[test]
    fn test_repeated_placeholder_resamples() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let table = PoolTable::from_static(&[("n", &["1", "2", "3", "4", "5", "6", "7", "8"])]);

        let mut saw_different = false;
        for _ in 0..50 {
            let text = table.resolve("{n}-{n}", &mut rng);
            let (a, b) = text.split_once('-').unwrap();
            if a != b {
                saw_different = true;
                break;
            }
        }
        assert!(saw_different);
    }

    #[test]
    fn test_earlier_layer_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let campaign = PoolTable::from_static(&[("timeframe", &["November"])]);
        let generic = PoolTable::from_static(&[
            ("timeframe", &["one week"]),
            ("policy", &["the new system"]),
        ]);

        let text = resolve_layered("{policy} by {timeframe}", &[&campaign, &generic], &mut rng);
        assert_eq!(text, "the new system by November");
    }

    #[test]
    fn test_placeholders_scan() {
        assert_eq!(
            placeholders("{a} {b_2} {} {c d} {e"),
            vec!["a", "b_2"]
        );
        assert!(placeholders("plain text").is_empty());
    }

    #[test]
    fn test_placeholder_names_are_word_characters() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let table = PoolTable::from_static(&[("topic", &["science"])]);

        assert_eq!(table.resolve("{{topic}}", &mut rng), "{science}");
        assert_eq!(table.resolve("{topic-x} {topic}", &mut rng), "{topic-x} science");
        assert_eq!(placeholders("{{topic}} {topic-x}"), vec!["topic"]);
    }

    #[test]
    fn test_extend_rejects_empty() {
        let mut table = PoolTable::new();
        assert!(matches!(
            table.extend("topic", Vec::new()),
            Err(ContentError::EmptyPool(_))
        ));
        table.extend("topic", vec!["science".into()]).unwrap();
        table.extend("topic", vec!["sports".into()]).unwrap();
        assert_eq!(table.get("topic").unwrap().len(), 2);
    }
}
