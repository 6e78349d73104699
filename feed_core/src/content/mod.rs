//! Content pack - usernames, post templates and the value pools they draw on.
//!
//! The pack is split in two layers:
//! - **Generic**: templates per fallacy kind (or `none`), generic usernames and pools
//! - **Campaign**: templates, usernames and pools per influence campaign
//!
//! Campaign templates resolve against the campaign pools first and fall back
//! to the generic pools.

mod pools;
mod templates;

pub use pools::*;

use feed_rules::{CampaignKind, FallacyKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ContentError;

/// Which template list a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateSource {
    Fallacy(FallacyKind),
    Campaign(CampaignKind),
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Fallacy(kind) => write!(f, "fallacy:{}", kind),
            TemplateSource::Campaign(kind) => write!(f, "campaign:{}", kind),
        }
    }
}

/// A placeholder that no visible pool can resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub source: TemplateSource,
    pub template: String,
    pub placeholder: String,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: unresolved {{{}}} in \"{}\"",
            self.source, self.placeholder, self.template
        )
    }
}

/// TOML overlay accepted by [`ContentPack::merge_toml`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentOverlay {
    usernames: Vec<String>,
    campaign_usernames: BTreeMap<String, Vec<String>>,
    templates: BTreeMap<String, Vec<String>>,
    campaign_templates: BTreeMap<String, Vec<String>>,
    pools: BTreeMap<String, Vec<String>>,
    campaign_pools: BTreeMap<String, Vec<String>>,
}

/// Everything the post generator samples from.
#[derive(Debug, Clone, Default)]
pub struct ContentPack {
    usernames: Vec<String>,
    campaign_usernames: BTreeMap<CampaignKind, Vec<String>>,
    templates: BTreeMap<FallacyKind, Vec<String>>,
    campaign_templates: BTreeMap<CampaignKind, Vec<String>>,
    pools: PoolTable,
    campaign_pools: PoolTable,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl ContentPack {
    /// An empty pack. Generation from it falls back to the neutral post.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in pack shipped with the game.
    pub fn builtin() -> Self {
        Self {
            usernames: owned(templates::USERNAMES),
            campaign_usernames: CampaignKind::ALL
                .iter()
                .map(|&kind| (kind, owned(templates::campaign_usernames(kind))))
                .collect(),
            templates: FallacyKind::ALL
                .iter()
                .map(|&kind| (kind, owned(templates::fallacy_templates(kind))))
                .collect(),
            campaign_templates: CampaignKind::ALL
                .iter()
                .map(|&kind| (kind, owned(templates::campaign_templates(kind))))
                .collect(),
            pools: PoolTable::from_static(templates::GENERIC_POOLS),
            campaign_pools: PoolTable::from_static(templates::CAMPAIGN_POOLS),
        }
    }

    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    pub fn campaign_usernames(&self, kind: CampaignKind) -> &[String] {
        self.campaign_usernames
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn templates(&self, kind: FallacyKind) -> &[String] {
        self.templates.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn campaign_templates(&self, kind: CampaignKind) -> &[String] {
        self.campaign_templates
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn pools(&self) -> &PoolTable {
        &self.pools
    }

    pub fn campaign_pools(&self) -> &PoolTable {
        &self.campaign_pools
    }

    /// Pool layers a template from `source` resolves against, highest priority first.
    pub fn layers_for(&self, source: TemplateSource) -> Vec<&PoolTable> {
        match source {
            TemplateSource::Fallacy(_) => vec![&self.pools],
            TemplateSource::Campaign(_) => vec![&self.campaign_pools, &self.pools],
        }
    }

    pub fn add_username(&mut self, username: impl Into<String>) {
        self.usernames.push(username.into());
    }

    pub fn add_template(&mut self, kind: FallacyKind, template: impl Into<String>) {
        self.templates.entry(kind).or_default().push(template.into());
    }

    pub fn add_campaign_template(&mut self, kind: CampaignKind, template: impl Into<String>) {
        self.campaign_templates
            .entry(kind)
            .or_default()
            .push(template.into());
    }

    /// Overlay usernames, templates and pools from a TOML document.
    ///
    /// Lists are appended to what the pack already holds. The pack is left
    /// untouched if any part of the overlay is invalid.
    ///
    /// ```toml
    /// usernames = ["QuietReader"]
    ///
    /// [templates]
    /// strawman = ["So you think {position} means {exaggerated_consequence}?"]
    ///
    /// [campaign_pools]
    /// institution = ["City Council"]
    /// ```
    pub fn merge_toml(&mut self, content: &str) -> Result<(), ContentError> {
        let overlay: ContentOverlay = toml::from_str(content)?;
        let mut next = self.clone();

        next.usernames.extend(overlay.usernames);
        for (name, values) in overlay.campaign_usernames {
            let kind: CampaignKind = name.parse()?;
            next.campaign_usernames.entry(kind).or_default().extend(values);
        }
        for (name, values) in overlay.templates {
            let kind: FallacyKind = name.parse()?;
            next.templates.entry(kind).or_default().extend(values);
        }
        for (name, values) in overlay.campaign_templates {
            let kind: CampaignKind = name.parse()?;
            next.campaign_templates.entry(kind).or_default().extend(values);
        }
        for (name, values) in overlay.pools {
            next.pools.extend(&name, values)?;
        }
        for (name, values) in overlay.campaign_pools {
            next.campaign_pools.extend(&name, values)?;
        }

        *self = next;
        Ok(())
    }

    /// Report every placeholder that none of its template's pools define.
    ///
    /// Resolution itself is unaffected: unresolved placeholders are still
    /// emitted verbatim at runtime.
    pub fn lint(&self) -> Vec<LintIssue> {
        let fallacy_lists = self
            .templates
            .iter()
            .map(|(&kind, list)| (TemplateSource::Fallacy(kind), list));
        let campaign_lists = self
            .campaign_templates
            .iter()
            .map(|(&kind, list)| (TemplateSource::Campaign(kind), list));

        let mut issues = Vec::new();
        for (source, list) in fallacy_lists.chain(campaign_lists) {
            let layers = self.layers_for(source);
            for template in list {
                for name in placeholders(template) {
                    if !layers.iter().any(|table| table.contains(name)) {
                        issues.push(LintIssue {
                            source,
                            template: template.clone(),
                            placeholder: name.to_string(),
                        });
                    }
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pack_is_complete() {
        let pack = ContentPack::builtin();

        assert_eq!(pack.usernames().len(), 20);
        for kind in FallacyKind::ALL {
            assert!(!pack.templates(kind).is_empty(), "no templates for {}", kind);
        }
        for kind in CampaignKind::ALL {
            assert_eq!(pack.campaign_templates(kind).len(), 8);
            assert_eq!(pack.campaign_usernames(kind).len(), 12);
        }
    }

    #[test]
    fn test_builtin_pack_lints_clean() {
        let issues = ContentPack::builtin().lint();
        let report: Vec<String> = issues.iter().map(ToString::to_string).collect();
        assert!(issues.is_empty(), "{:#?}", report);
    }

    #[test]
    fn test_builtin_pools_non_empty() {
        let pack = ContentPack::builtin();
        for table in [pack.pools(), pack.campaign_pools()] {
            for name in table.names() {
                assert!(!table.get(name).unwrap().is_empty(), "empty pool {}", name);
            }
        }
    }

    #[test]
    fn test_lint_reports_unknown_placeholder() {
        let mut pack = ContentPack::builtin();
        pack.add_template(FallacyKind::Strawman, "They want {nonexistent_pool}!");
        // Campaign-only pools are invisible to fallacy templates.
        pack.add_template(FallacyKind::AdHominem, "{institution} is lying.");
        pack.add_campaign_template(CampaignKind::StateSponsored, "About {topic} and {institution}.");

        let issues = pack.lint();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].source, TemplateSource::Fallacy(FallacyKind::Strawman));
        assert_eq!(issues[0].placeholder, "nonexistent_pool");
        assert_eq!(issues[1].placeholder, "institution");
    }

    #[test]
    fn test_merge_toml_overlay() {
        let mut pack = ContentPack::builtin();
        let before = pack.templates(FallacyKind::Strawman).len();

        pack.merge_toml(
            r#"
            usernames = ["QuietReader"]

            [templates]
            strawman = ["So {group} wants {exaggerated_consequence}?"]

            [campaign_usernames]
            domestic_political = ["CivicMinded"]

            [pools]
            group = ["bloggers"]
            "#,
        )
        .unwrap();

        assert_eq!(pack.templates(FallacyKind::Strawman).len(), before + 1);
        assert!(pack.usernames().iter().any(|u| u == "QuietReader"));
        assert!(pack
            .campaign_usernames(CampaignKind::DomesticPolitical)
            .iter()
            .any(|u| u == "CivicMinded"));
        assert!(pack.pools().get("group").unwrap().iter().any(|g| g == "bloggers"));
        assert!(pack.lint().is_empty());
    }

    #[test]
    fn test_merge_toml_rejects_bad_overlay() {
        let mut pack = ContentPack::builtin();
        let before = pack.usernames().len();

        let err = pack
            .merge_toml("usernames = [\"Someone\"]\n[templates]\nred_herring = [\"x\"]")
            .unwrap_err();
        assert!(matches!(err, ContentError::Rules(_)));
        assert_eq!(pack.usernames().len(), before);

        let err = pack.merge_toml("[pools]\ntopic = []").unwrap_err();
        assert!(matches!(err, ContentError::EmptyPool(_)));

        let err = pack.merge_toml("usernames = [").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
