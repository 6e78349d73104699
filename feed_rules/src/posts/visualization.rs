//! Chart descriptors attached to data-flavoured posts.

use serde::{Deserialize, Serialize};

/// The closed set of stylized chart archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartArchetype {
    /// Bar chart whose Y-axis starts just below the data.
    MisleadingBar,
    /// Line chart over a hand-picked time window.
    CherryPickedLine,
    /// Scatter plot presenting correlation as causation.
    CorrelationScatter,
    /// Long-range data with sample size and confidence bands.
    HonestStatistics,
}

impl ChartArchetype {
    pub fn is_misleading(&self) -> bool {
        !matches!(self, ChartArchetype::HonestStatistics)
    }

    /// Fine print rendered at the bottom of the chart.
    pub fn footnote(&self) -> &'static str {
        match self {
            ChartArchetype::MisleadingBar => "*Y-axis does not start at zero",
            ChartArchetype::CherryPickedLine => "*Limited time period shown",
            ChartArchetype::CorrelationScatter => "*Correlation does not imply causation",
            ChartArchetype::HonestStatistics => "Peer-reviewed methodology available online",
        }
    }

    /// Value range of the Y-axis as drawn.
    pub fn y_axis_range(&self) -> (f32, f32) {
        match self {
            // 98.2 vs 98.8 drawn on a 98..99 axis
            ChartArchetype::MisleadingBar => (98.0, 99.0),
            _ => (0.0, 100.0),
        }
    }
}

/// Pure data describing which chart accompanies a post and how it is labelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationDescriptor {
    pub archetype: ChartArchetype,
    pub title: String,
    pub y_label: String,
    /// X-axis caption, or the before/after bar labels joined by the renderer.
    pub x_labels: Vec<String>,
    pub source: String,
    /// Timeframe, sample size, or fit statistic printed under the title.
    pub context: String,
    pub footnote: String,
}

impl VisualizationDescriptor {
    pub fn new(archetype: ChartArchetype, title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            archetype,
            title: title.into(),
            y_label: y_label.into(),
            x_labels: Vec::new(),
            source: String::new(),
            context: String::new(),
            footnote: archetype.footnote().to_string(),
        }
    }

    pub fn with_x_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.x_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn is_misleading(&self) -> bool {
        self.archetype.is_misleading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_honest_chart_is_not_misleading() {
        assert!(ChartArchetype::MisleadingBar.is_misleading());
        assert!(ChartArchetype::CherryPickedLine.is_misleading());
        assert!(ChartArchetype::CorrelationScatter.is_misleading());
        assert!(!ChartArchetype::HonestStatistics.is_misleading());
    }

    #[test]
    fn test_descriptor_builder() {
        let chart = VisualizationDescriptor::new(
            ChartArchetype::MisleadingBar,
            "Crime Rate SKYROCKETS Under New Policy!",
            "Safety Index",
        )
        .with_x_labels(["Before", "After"])
        .with_source("Independent Research Institute");

        assert_eq!(chart.x_labels, vec!["Before", "After"]);
        assert!(chart.is_misleading());
        assert_eq!(chart.archetype.y_axis_range(), (98.0, 99.0));
        assert_eq!(chart.footnote, "*Y-axis does not start at zero");
    }

    #[test]
    fn test_archetype_serialization() {
        let json = serde_json::to_string(&ChartArchetype::CorrelationScatter).unwrap();
        assert_eq!(json, "\"correlation_scatter\"");
    }
}
