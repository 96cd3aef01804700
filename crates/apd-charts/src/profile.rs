//! Top-decile productivity profile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use apd_ingest::EmployeeDataset;
use apd_model::columns::{
    AI_TOOL_USAGE_HOURS, EXPERIENCE_YEARS, FOCUS_HOURS_PER_DAY, PRODUCTIVITY_SCORE,
    TASKS_AUTOMATED_PERCENT,
};

use crate::chart::{Chart, ChartId, ChartKind};
use crate::error::{ChartError, Result};
use crate::stats::{mean, quantile};

pub const TOP_PERFORMER: &str = "Top 10% Performer";
pub const OTHERS: &str = "Others";
pub const TOP_QUANTILE: f64 = 0.9;

/// Features compared between the two segments.
pub const PROFILE_FEATURES: &[&str] = &[
    EXPERIENCE_YEARS,
    AI_TOOL_USAGE_HOURS,
    TASKS_AUTOMATED_PERCENT,
    FOCUS_HOURS_PER_DAY,
];

/// Which segment a record falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    TopPerformer,
    Others,
}

impl Segment {
    pub fn label(&self) -> &'static str {
        match self {
            Segment::TopPerformer => TOP_PERFORMER,
            Segment::Others => OTHERS,
        }
    }
}

/// One row of the long-form comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub feature: String,
    pub category: String,
    pub average: Option<f64>,
}

/// Segmentation result behind the profile chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformerProfile {
    pub threshold: f64,
    pub segments: Vec<Segment>,
    pub rows: Vec<ProfileRow>,
}

impl TopPerformerProfile {
    pub fn count(&self, segment: Segment) -> usize {
        self.segments.iter().filter(|s| **s == segment).count()
    }
}

/// Labels each record by whether its productivity reaches the 90th percentile.
///
/// Ties with the threshold count as top performers; a missing score never does.
pub fn segment_by_productivity(scores: &[Option<f64>]) -> Option<(f64, Vec<Segment>)> {
    let threshold = quantile(scores, TOP_QUANTILE)?;
    let segments = scores
        .iter()
        .map(|score| match score {
            Some(v) if *v >= threshold => Segment::TopPerformer,
            _ => Segment::Others,
        })
        .collect();
    Some((threshold, segments))
}

/// Per-segment means of [`PROFILE_FEATURES`], melted into long form.
///
/// Rows are ordered by feature, then by segment label, so the "Others" row
/// of each feature precedes the top-performer row.
pub fn top_performer_profile(dataset: &EmployeeDataset) -> Result<TopPerformerProfile> {
    let scores = dataset.numeric(PRODUCTIVITY_SCORE)?;
    let (threshold, segments) =
        segment_by_productivity(&scores).ok_or_else(|| ChartError::NoValues {
            column: PRODUCTIVITY_SCORE.to_string(),
        })?;

    let mut rows = Vec::with_capacity(PROFILE_FEATURES.len() * 2);
    for feature in PROFILE_FEATURES {
        let values = dataset.numeric(feature)?;
        for segment in [Segment::Others, Segment::TopPerformer] {
            let average = mean(
                values
                    .iter()
                    .zip(&segments)
                    .filter(|(_, s)| **s == segment)
                    .map(|(v, _)| *v),
            );
            rows.push(ProfileRow {
                feature: (*feature).to_string(),
                category: segment.label().to_string(),
                average,
            });
        }
    }

    let profile = TopPerformerProfile {
        threshold,
        segments,
        rows,
    };
    debug!(
        threshold,
        top = profile.count(Segment::TopPerformer),
        others = profile.count(Segment::Others),
        "segmented productivity"
    );
    Ok(profile)
}

/// Grouped horizontal bars: one category per feature, one series per segment.
pub fn top_performer_chart(dataset: &EmployeeDataset) -> Result<Chart> {
    let profile = top_performer_profile(dataset)?;
    let mut chart = Chart::new(
        ChartId::TopPerformerProfile,
        ChartKind::GroupedHorizontalBar,
        "Employee profile: top 10% productivity vs others",
    )
    .with_axes("Average value", "Feature")
    .with_categories(PROFILE_FEATURES.iter().map(|f| (*f).to_string()).collect());

    for segment in [Segment::Others, Segment::TopPerformer] {
        let values = PROFILE_FEATURES
            .iter()
            .map(|feature| {
                profile
                    .rows
                    .iter()
                    .find(|row| row.feature == *feature && row.category == segment.label())
                    .and_then(|row| row.average)
            })
            .collect();
        chart = chart.with_series(segment.label(), values);
    }
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_at_threshold_are_top_performers() {
        let scores: Vec<Option<f64>> = [50.0, 60.0, 70.0, 90.0, 90.0, 90.0]
            .iter()
            .copied()
            .map(Some)
            .collect();
        let (threshold, segments) = segment_by_productivity(&scores).unwrap();
        assert_eq!(threshold, 90.0);
        let top = segments
            .iter()
            .filter(|s| **s == Segment::TopPerformer)
            .count();
        assert_eq!(top, 3);
    }

    #[test]
    fn missing_scores_are_others() {
        let scores = vec![Some(10.0), None, Some(20.0)];
        let (_, segments) = segment_by_productivity(&scores).unwrap();
        assert_eq!(segments[1], Segment::Others);
    }

    #[test]
    fn no_scores_no_segmentation() {
        assert!(segment_by_productivity(&[None, None]).is_none());
    }
}
