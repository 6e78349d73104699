//! Visualization selector - decides whether a post gets a chart, and which.
//!
//! Only data-flavoured kinds are eligible. Manipulative kinds get misleading
//! archetypes and fallacy-free posts get the honest one.

use feed_rules::{ChartArchetype, FallacyKind, VisualizationDescriptor};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Case-insensitive keywords that mark content as data-related.
pub const DATA_KEYWORDS: [&str; 11] = [
    "chart",
    "graph",
    "data",
    "study",
    "research",
    "trend",
    "shows",
    "evidence",
    "statistics",
    "findings",
    "analysis",
];

/// Kinds that may carry a chart at all.
pub const CHART_ELIGIBLE: [FallacyKind; 4] = [
    FallacyKind::StatsManipulation,
    FallacyKind::FalseCausality,
    FallacyKind::ConfirmationBias,
    FallacyKind::None,
];

/// Labels for one chart topic.
#[derive(Debug, Clone, Copy)]
struct ChartTopic {
    title: &'static str,
    y_label: &'static str,
    x_labels: &'static [&'static str],
    source: &'static str,
    context: &'static str,
}

const MISLEADING_BAR_TOPICS: [ChartTopic; 5] = [
    ChartTopic {
        title: "COVID Vaccine Effectiveness PLUMMETS!",
        y_label: "Effectiveness (%)",
        x_labels: &["Initial", "6 Months"],
        source: "Independent Research Institute",
        context: "Share if you care!",
    },
    ChartTopic {
        title: "Crime Rate SKYROCKETS Under New Policy!",
        y_label: "Safety Index",
        x_labels: &["Before", "After"],
        source: "Independent Research Institute",
        context: "Share if you care!",
    },
    ChartTopic {
        title: "Student Performance CRASHES With Online Learning!",
        y_label: "Test Scores (%)",
        x_labels: &["In-Person", "Online"],
        source: "Independent Research Institute",
        context: "Share if you care!",
    },
    ChartTopic {
        title: "Electric Car Sales TANK This Quarter!",
        y_label: "Market Share (%)",
        x_labels: &["Q1", "Q2"],
        source: "Independent Research Institute",
        context: "Share if you care!",
    },
    ChartTopic {
        title: "Social Media Usage DESTROYS Productivity!",
        y_label: "Efficiency (%)",
        x_labels: &["Limited Use", "Heavy Use"],
        source: "Independent Research Institute",
        context: "Share if you care!",
    },
];

const CORRELATION_TOPICS: [ChartTopic; 5] = [
    ChartTopic {
        title: "PROOF: Social Media Use Causes Depression!",
        y_label: "Depression Index",
        x_labels: &["Daily Social Media Hours"],
        source: "Lifestyle Blog Network",
        context: "R² = 0.89 (STRONG!)",
    },
    ChartTopic {
        title: "Video Games Linked to Academic Failure!",
        y_label: "GPA Decline",
        x_labels: &["Gaming Hours/Week"],
        source: "Parents Against Gaming",
        context: "R² = 0.89 (STRONG!)",
    },
    ChartTopic {
        title: "Coffee Consumption Drives Economic Growth!",
        y_label: "GDP Growth Rate",
        x_labels: &["Cups of Coffee per Capita"],
        source: "Coffee Industry Alliance",
        context: "R² = 0.89 (STRONG!)",
    },
    ChartTopic {
        title: "Screen Time DIRECTLY Causes Sleep Problems!",
        y_label: "Sleep Quality Score",
        x_labels: &["Screen Time (hours)"],
        source: "Digital Wellness Blog",
        context: "R² = 0.89 (STRONG!)",
    },
    ChartTopic {
        title: "Fast Food = Lower Test Scores (SHOCKING!)",
        y_label: "Average Test Scores",
        x_labels: &["Fast Food Outlets per City"],
        source: "Health Freedom Network",
        context: "R² = 0.89 (STRONG!)",
    },
];

const CHERRY_PICKED_TOPICS: [ChartTopic; 5] = [
    ChartTopic {
        title: "Climate Change REVERSED! Global Cooling Confirmed!",
        y_label: "Temperature (°F)",
        x_labels: &["Start", "End"],
        source: "Climate Truth Network",
        context: "Jan-May 2023",
    },
    ChartTopic {
        title: "Renewable Energy FAILING - Coal Making Comeback!",
        y_label: "Energy Output (MW)",
        x_labels: &["Start", "End"],
        source: "Energy Independence Blog",
        context: "Winter Months Only",
    },
    ChartTopic {
        title: "Crime Wave EXPLODES Under Liberal Policies!",
        y_label: "Incident Reports",
        x_labels: &["Start", "End"],
        source: "Law & Order Today",
        context: "Selected Districts",
    },
    ChartTopic {
        title: "Stock Market COLLAPSE Imminent - Sell Everything!",
        y_label: "Market Index",
        x_labels: &["Start", "End"],
        source: "Bear Market Predictions",
        context: "Last 30 Days",
    },
    ChartTopic {
        title: "Remote Work DESTROYS Team Productivity!",
        y_label: "Output Score",
        x_labels: &["Start", "End"],
        source: "Back to Office Movement",
        context: "Transition Period",
    },
];

const HONEST_TOPICS: [ChartTopic; 5] = [
    ChartTopic {
        title: "Long-term Climate Data Analysis (1970-2023)",
        y_label: "Global Temperature Anomaly (°C)",
        x_labels: &["2010", "2016", "2023"],
        source: "NOAA Climate Research",
        context: "n=50,000 stations | p<0.001, CI: 95%",
    },
    ChartTopic {
        title: "Educational Outcomes: 10-Year Longitudinal Study",
        y_label: "Reading Proficiency (%)",
        x_labels: &["2010", "2016", "2023"],
        source: "National Education Research Center",
        context: "n=250,000 students | p<0.001, CI: 95%",
    },
    ChartTopic {
        title: "Public Health Trends: Vaccination Impact Study",
        y_label: "Disease Incidence Rate",
        x_labels: &["2010", "2016", "2023"],
        source: "CDC Epidemiology Division",
        context: "n=15M participants | p<0.001, CI: 95%",
    },
    ChartTopic {
        title: "Economic Mobility Research (2010-2023)",
        y_label: "Income Progression Index",
        x_labels: &["2010", "2016", "2023"],
        source: "Bureau of Labor Statistics",
        context: "n=75,000 households | p<0.001, CI: 95%",
    },
    ChartTopic {
        title: "Mental Health Intervention Effectiveness",
        y_label: "Wellness Score (0-100)",
        x_labels: &["2010", "2016", "2023"],
        source: "Journal of Clinical Psychology",
        context: "n=12,000 participants | p<0.001, CI: 95%",
    },
];

fn topics(archetype: ChartArchetype) -> &'static [ChartTopic] {
    match archetype {
        ChartArchetype::MisleadingBar => &MISLEADING_BAR_TOPICS,
        ChartArchetype::CorrelationScatter => &CORRELATION_TOPICS,
        ChartArchetype::CherryPickedLine => &CHERRY_PICKED_TOPICS,
        ChartArchetype::HonestStatistics => &HONEST_TOPICS,
    }
}

pub fn is_chart_eligible(kind: FallacyKind) -> bool {
    CHART_ELIGIBLE.contains(&kind)
}

pub fn has_data_keywords(content: &str) -> bool {
    let lower = content.to_lowercase();
    DATA_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Chance that an eligible post with data keywords gets a chart.
pub fn attach_probability(kind: FallacyKind) -> f64 {
    match kind {
        FallacyKind::StatsManipulation => 0.7,
        FallacyKind::None => 0.3,
        _ => 0.4,
    }
}

/// Pick the archetype for a post that passed the attachment roll.
///
/// Keyword checks here are case-sensitive.
pub fn choose_archetype(kind: FallacyKind, content: &str) -> Option<ChartArchetype> {
    let mentions = |words: &[&str]| words.iter().any(|word| content.contains(word));

    match kind {
        FallacyKind::StatsManipulation => {
            if mentions(&["skyrocketed", "dramatic"]) {
                Some(ChartArchetype::MisleadingBar)
            } else if mentions(&["trend", "alarming"]) {
                Some(ChartArchetype::CherryPickedLine)
            } else {
                Some(ChartArchetype::MisleadingBar)
            }
        }
        FallacyKind::FalseCausality => Some(ChartArchetype::CorrelationScatter),
        FallacyKind::ConfirmationBias if mentions(&["graph", "charts"]) => {
            Some(ChartArchetype::CherryPickedLine)
        }
        FallacyKind::None if mentions(&["study", "research", "data"]) => {
            Some(ChartArchetype::HonestStatistics)
        }
        _ => None,
    }
}

/// Build a descriptor for `archetype` with a randomly chosen topic.
pub fn describe(archetype: ChartArchetype, rng: &mut dyn RngCore) -> VisualizationDescriptor {
    let topic = topics(archetype)
        .choose(rng)
        .copied()
        .unwrap_or(MISLEADING_BAR_TOPICS[0]);

    VisualizationDescriptor::new(archetype, topic.title, topic.y_label)
        .with_x_labels(topic.x_labels.iter().copied())
        .with_source(topic.source)
        .with_context(topic.context)
}

/// Decide whether `content` of kind `kind` gets a chart.
///
/// The probability roll only happens once the kind and keyword gates pass.
pub fn maybe_attach(
    kind: FallacyKind,
    content: &str,
    rng: &mut dyn RngCore,
) -> Option<VisualizationDescriptor> {
    if !is_chart_eligible(kind) || !has_data_keywords(content) {
        return None;
    }
    if !rng.gen_bool(attach_probability(kind)) {
        return None;
    }
    choose_archetype(kind, content).map(|archetype| describe(archetype, rng))
}
