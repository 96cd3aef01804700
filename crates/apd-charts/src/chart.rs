//! Renderer-agnostic chart description.
//!
//! Builders produce a [`Chart`]; the GUI paints it, the CLI prints it as a
//! table or JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    AiVsProductivity,
    ErrorRateVsAutomation,
    ProductivityByJobRole,
    AiUsageByJobRole,
    BurnoutCorrelation,
    MeetingHoursVsProductivity,
    ExperienceVsProductivity,
    TopPerformerProfile,
}

impl ChartId {
    /// All charts in dashboard order.
    pub fn all() -> &'static [ChartId] {
        &[
            Self::AiVsProductivity,
            Self::ErrorRateVsAutomation,
            Self::ProductivityByJobRole,
            Self::AiUsageByJobRole,
            Self::BurnoutCorrelation,
            Self::MeetingHoursVsProductivity,
            Self::ExperienceVsProductivity,
            Self::TopPerformerProfile,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::AiVsProductivity => "ai-vs-productivity",
            Self::ErrorRateVsAutomation => "error-rate-vs-automation",
            Self::ProductivityByJobRole => "productivity-by-job-role",
            Self::AiUsageByJobRole => "ai-usage-by-job-role",
            Self::BurnoutCorrelation => "burnout-correlation",
            Self::MeetingHoursVsProductivity => "meeting-hours-vs-productivity",
            Self::ExperienceVsProductivity => "experience-vs-productivity",
            Self::TopPerformerProfile => "top-performer-profile",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ChartId> {
        Self::all().iter().copied().find(|id| id.slug() == slug)
    }

    /// The question the chart answers on the dashboard.
    pub fn question(&self) -> &'static str {
        match self {
            Self::AiVsProductivity => "How much does AI use actually raise productivity?",
            Self::ErrorRateVsAutomation => "Does more automation mean fewer errors?",
            Self::ProductivityByJobRole | Self::AiUsageByJobRole => {
                "Which job roles get the most out of AI, and how heavily do they use it?"
            }
            Self::BurnoutCorrelation => "What drives burnout risk in the company?",
            Self::MeetingHoursVsProductivity => {
                "How many meeting hours can a week hold before productivity drops?"
            }
            Self::ExperienceVsProductivity => "Does more experience guarantee higher productivity?",
            Self::TopPerformerProfile => "What do the most productive employees look like?",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Visual form of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Vertical bars, one per category.
    Bar,
    /// Points joined in category order.
    Line,
    /// Horizontal bars, categories on the vertical axis.
    HorizontalBar,
    /// Horizontal bars, one bar per series within each category.
    GroupedHorizontalBar,
}

/// One named sequence of values aligned with [`Chart::categories`].
///
/// `None` marks a category with no data (an empty bin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub id: ChartId,
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Rows that fell outside every bin or group.
    pub dropped: usize,
}

impl Chart {
    pub fn new(id: ChartId, kind: ChartKind, title: &str) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            categories: Vec::new(),
            series: Vec::new(),
            dropped: 0,
        }
    }

    pub fn with_axes(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_series(mut self, name: &str, values: Vec<Option<f64>>) -> Self {
        self.series.push(ChartSeries {
            name: name.to_string(),
            values,
        });
        self
    }

    pub fn with_dropped(mut self, dropped: usize) -> Self {
        self.dropped = dropped;
        self
    }

    /// Values of the first series; empty when the chart has none.
    pub fn primary_values(&self) -> &[Option<f64>] {
        self.series.first().map_or(&[], |s| s.values.as_slice())
    }

    /// Smallest and largest present value across all series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().flatten().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = ChartId::all().iter().map(ChartId::slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), ChartId::all().len());
    }

    #[test]
    fn slugs_round_trip() {
        for id in ChartId::all() {
            assert_eq!(ChartId::from_slug(id.slug()), Some(*id));
        }
        assert_eq!(ChartId::from_slug("pie"), None);
    }

    #[test]
    fn value_range_spans_series() {
        let chart = Chart::new(ChartId::BurnoutCorrelation, ChartKind::HorizontalBar, "t")
            .with_categories(vec!["a".into(), "b".into()])
            .with_series("r", vec![Some(-0.4), None])
            .with_series("s", vec![Some(0.7), Some(0.1)]);
        assert_eq!(chart.value_range(), Some((-0.4, 0.7)));
    }

    #[test]
    fn serializes_with_kebab_ids() {
        let json = serde_json::to_value(ChartId::TopPerformerProfile).unwrap();
        assert_eq!(json, serde_json::json!("top-performer-profile"));
    }
}
