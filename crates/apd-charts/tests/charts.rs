//! Chart builder tests over small in-memory datasets.

use polars::prelude::*;

use apd_charts::{
    ChartError, ChartId, ChartKind, Segment, ai_usage_by_job_role, ai_vs_productivity,
    burnout_correlation, dashboard_charts, experience_vs_productivity,
    meeting_hours_vs_productivity, productivity_by_job_role, top_performer_chart,
    top_performer_profile,
};
use apd_ingest::{EmployeeDataset, IngestError};

fn employees() -> EmployeeDataset {
    let df = DataFrame::new(vec![
        Series::new(
            "job_role".into(),
            vec!["Engineer", "Analyst", "Engineer", "Manager", "Analyst", "Manager"],
        )
        .into(),
        Series::new("experience_years".into(), vec![0i64, 3, 8, 15, 1, 25]).into(),
        Series::new(
            "ai_tool_usage_hours_per_week".into(),
            vec![1.0, 4.0, 12.0, 7.5, 0.0, 2.0],
        )
        .into(),
        Series::new(
            "tasks_automated_percent".into(),
            vec![10.0, 30.0, 80.0, 55.0, 0.0, 25.0],
        )
        .into(),
        Series::new(
            "meeting_hours_per_week".into(),
            vec![2.0, 6.0, 12.0, 38.0, 45.0, 5.0],
        )
        .into(),
        Series::new("focus_hours_per_day".into(), vec![4.0, 5.0, 7.0, 3.0, 6.0, 2.0]).into(),
        Series::new("error_rate_percent".into(), vec![3.0, 2.5, 0.5, 1.5, 4.0, 2.0]).into(),
        Series::new(
            "productivity_score".into(),
            vec![60.0, 65.0, 90.0, 70.0, 55.0, 62.0],
        )
        .into(),
        Series::new(
            "burnout_risk_score".into(),
            vec![4.0, 5.0, 2.0, 8.0, 6.0, 9.0],
        )
        .into(),
    ])
    .unwrap();
    EmployeeDataset::from_frame(df)
}

#[test]
fn ai_usage_bins_average_productivity() {
    let chart = ai_vs_productivity(&employees()).unwrap();
    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.categories, vec!["0-2 h", "3-5 h", "6-10 h", ">10 h"]);
    // [0,2]: 60, 55, 62 | (2,5]: 65 | (5,10]: 70 | (10,20]: 90
    assert_eq!(
        chart.primary_values(),
        &[Some(59.0), Some(65.0), Some(70.0), Some(90.0)]
    );
    assert_eq!(chart.dropped, 0);
}

#[test]
fn experience_zero_lands_in_first_bin_and_overflow_is_dropped() {
    let chart = experience_vs_productivity(&employees()).unwrap();
    // 0 and 1 years -> first bin; 25 years exceeds the last edge.
    assert_eq!(chart.primary_values()[0], Some(57.5));
    assert_eq!(chart.dropped, 1);
}

#[test]
fn meeting_chart_is_a_line_with_empty_bins() {
    let chart = meeting_hours_vs_productivity(&employees()).unwrap();
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.categories.len(), 8);
    assert_eq!(chart.primary_values()[0], Some(61.0));
    assert_eq!(chart.primary_values()[3], None);
    assert_eq!(chart.dropped, 1);
}

#[test]
fn role_charts_are_sorted_descending() {
    let ds = employees();
    let productivity = productivity_by_job_role(&ds).unwrap();
    assert_eq!(productivity.categories, vec!["Engineer", "Manager", "Analyst"]);
    assert_eq!(
        productivity.primary_values(),
        &[Some(75.0), Some(66.0), Some(60.0)]
    );

    let usage = ai_usage_by_job_role(&ds).unwrap();
    let values: Vec<f64> = usage.primary_values().iter().flatten().copied().collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(usage.categories[0], "Engineer");
}

#[test]
fn role_charts_trim_padded_roles_and_drop_blank_ones() {
    let df = DataFrame::new(vec![
        Series::new("job_role".into(), vec!["Engineer", " Engineer ", "   ", "Analyst"]).into(),
        Series::new("productivity_score".into(), vec![80.0, 70.0, 99.0, 60.0]).into(),
    ])
    .unwrap();
    let chart = productivity_by_job_role(&EmployeeDataset::from_frame(df)).unwrap();
    assert_eq!(chart.categories, vec!["Engineer", "Analyst"]);
    assert_eq!(chart.primary_values(), &[Some(75.0), Some(60.0)]);
    assert_eq!(chart.dropped, 1);
}

#[test]
fn correlation_excludes_target_and_sorts_ascending() {
    let chart = burnout_correlation(&employees()).unwrap();
    assert_eq!(chart.kind, ChartKind::HorizontalBar);
    assert!(!chart.categories.iter().any(|c| c == "burnout_risk_score"));
    assert!(chart.categories.iter().any(|c| c == "productivity_score"));
    let values: Vec<f64> = chart.primary_values().iter().flatten().copied().collect();
    assert_eq!(values.len(), chart.categories.len());
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(values.iter().all(|r| (-1.0..=1.0).contains(r)));
}

#[test]
fn missing_productivity_column_fails() {
    let ds = employees();
    let df = ds.frame().drop("productivity_score").unwrap();
    let err = ai_vs_productivity(&EmployeeDataset::from_frame(df)).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Ingest(IngestError::ColumnNotFound { ref column })
            if column == "productivity_score"
    ));
}

#[test]
fn top_decile_includes_ties() {
    let ds = employees();
    let profile = top_performer_profile(&ds).unwrap();
    let scores = ds.numeric("productivity_score").unwrap();
    let expected = scores
        .iter()
        .flatten()
        .filter(|v| **v >= profile.threshold)
        .count();
    assert_eq!(profile.count(Segment::TopPerformer), expected);
    assert_eq!(
        profile.count(Segment::TopPerformer) + profile.count(Segment::Others),
        ds.height()
    );
    assert_eq!(profile.rows.len(), 8);
}

#[test]
fn top_performer_chart_has_two_series() {
    let chart = top_performer_chart(&employees()).unwrap();
    assert_eq!(chart.kind, ChartKind::GroupedHorizontalBar);
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].name, "Others");
    assert_eq!(chart.series[1].name, "Top 10% Performer");
    // The single top performer is the 90-point engineer with 8 years.
    assert_eq!(chart.series[1].values[0], Some(8.0));
}

#[test]
fn dashboard_builds_every_chart_in_order() {
    let charts = dashboard_charts(&employees()).unwrap();
    let ids: Vec<ChartId> = charts.iter().map(|c| c.id).collect();
    assert_eq!(ids, ChartId::all());
}
