//! The binned, role-ordered, and correlation charts.

use polars::prelude::*;
use tracing::debug;

use apd_common::{f64_values, string_values};
use apd_ingest::EmployeeDataset;
use apd_model::columns::{
    AI_TOOL_USAGE_HOURS, BURNOUT_RISK_SCORE, ERROR_RATE_PERCENT, EXPERIENCE_YEARS, JOB_ROLE,
    MEETING_HOURS, PRODUCTIVITY_SCORE, TASKS_AUTOMATED_PERCENT,
};

use crate::binning::{AI_USAGE_BINS, AUTOMATION_BINS, BinSpec, EXPERIENCE_BINS, MEETING_BINS};
use crate::chart::{Chart, ChartId, ChartKind};
use crate::error::{ChartError, Result};
use crate::stats::pearson;

const MEAN_COLUMN: &str = "mean";

/// Mean productivity per AI-usage band.
pub fn ai_vs_productivity(dataset: &EmployeeDataset) -> Result<Chart> {
    binned_mean_chart(
        dataset,
        ChartId::AiVsProductivity,
        ChartKind::Bar,
        "Average productivity by AI usage intensity",
        (AI_TOOL_USAGE_HOURS, &AI_USAGE_BINS, "AI usage per week"),
        (PRODUCTIVITY_SCORE, "Average productivity score"),
    )
}

/// Mean error rate per automation band.
pub fn error_rate_vs_automation(dataset: &EmployeeDataset) -> Result<Chart> {
    binned_mean_chart(
        dataset,
        ChartId::ErrorRateVsAutomation,
        ChartKind::Bar,
        "Average error rate by automation level",
        (TASKS_AUTOMATED_PERCENT, &AUTOMATION_BINS, "Share of tasks automated"),
        (ERROR_RATE_PERCENT, "Average error rate (%)"),
    )
}

/// Mean productivity per meeting-load band, drawn as a line.
pub fn meeting_hours_vs_productivity(dataset: &EmployeeDataset) -> Result<Chart> {
    binned_mean_chart(
        dataset,
        ChartId::MeetingHoursVsProductivity,
        ChartKind::Line,
        "Productivity as meeting hours grow",
        (MEETING_HOURS, &MEETING_BINS, "Meeting hours per week"),
        (PRODUCTIVITY_SCORE, "Average productivity score"),
    )
}

/// Mean productivity per experience band.
pub fn experience_vs_productivity(dataset: &EmployeeDataset) -> Result<Chart> {
    binned_mean_chart(
        dataset,
        ChartId::ExperienceVsProductivity,
        ChartKind::Bar,
        "Average productivity by work experience",
        (EXPERIENCE_YEARS, &EXPERIENCE_BINS, "Experience group"),
        (PRODUCTIVITY_SCORE, "Average productivity"),
    )
}

/// Mean productivity per job role, highest first.
pub fn productivity_by_job_role(dataset: &EmployeeDataset) -> Result<Chart> {
    role_mean_chart(
        dataset,
        ChartId::ProductivityByJobRole,
        "AI effectiveness on productivity by job role",
        PRODUCTIVITY_SCORE,
        "Average productivity score",
    )
}

/// Mean weekly AI usage per job role, highest first.
pub fn ai_usage_by_job_role(dataset: &EmployeeDataset) -> Result<Chart> {
    role_mean_chart(
        dataset,
        ChartId::AiUsageByJobRole,
        "AI usage intensity by job role",
        AI_TOOL_USAGE_HOURS,
        "Average AI hours per week",
    )
}

/// Correlation of every numeric column with the burnout risk score, ascending.
///
/// Columns whose correlation is undefined (constant, or fewer than two
/// complete rows) are left out.
pub fn burnout_correlation(dataset: &EmployeeDataset) -> Result<Chart> {
    let target = dataset.numeric(BURNOUT_RISK_SCORE)?;
    let mut correlations: Vec<(String, f64)> = Vec::new();
    for name in dataset.numeric_columns() {
        if name == BURNOUT_RISK_SCORE {
            continue;
        }
        let values = dataset.numeric(&name)?;
        match pearson(&values, &target) {
            Some(r) => correlations.push((name, r)),
            None => debug!(column = %name, "correlation undefined; column skipped"),
        }
    }
    correlations.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    let (categories, values): (Vec<String>, Vec<Option<f64>>) = correlations
        .into_iter()
        .map(|(name, r)| (name, Some(r)))
        .unzip();
    Ok(Chart::new(
        ChartId::BurnoutCorrelation,
        ChartKind::HorizontalBar,
        "How strongly each factor relates to burnout",
    )
    .with_axes("Correlation", "Factor")
    .with_categories(categories)
    .with_series("correlation", values))
}

fn binned_mean_chart(
    dataset: &EmployeeDataset,
    id: ChartId,
    kind: ChartKind,
    title: &str,
    (key_column, bins, x_label): (&str, &BinSpec, &str),
    (target_column, y_label): (&str, &str),
) -> Result<Chart> {
    let keys = dataset.numeric(key_column)?;
    let targets = dataset.numeric(target_column)?;
    let binned = bins.means(&keys, &targets);
    debug!(
        chart = %id,
        counts = ?binned.counts,
        dropped = binned.dropped,
        "binned {key_column} against {target_column}"
    );
    Ok(Chart::new(id, kind, title)
        .with_axes(x_label, y_label)
        .with_categories(binned.labels)
        .with_series(target_column, binned.means)
        .with_dropped(binned.dropped))
}

fn role_mean_chart(
    dataset: &EmployeeDataset,
    id: ChartId,
    title: &str,
    metric: &str,
    y_label: &str,
) -> Result<Chart> {
    // Surface missing or mistyped columns as ingest errors before aggregating.
    // Blank roles count as dropped here and are filtered out of the grouping below.
    let dropped = dataset
        .text(JOB_ROLE)?
        .iter()
        .filter(|role| role.is_none())
        .count();
    let metric_values = dataset.numeric(metric)?;
    if metric_values.iter().all(Option::is_none) {
        return Err(ChartError::NoValues {
            column: metric.to_string(),
        });
    }

    let role = col(JOB_ROLE)
        .cast(DataType::String)
        .str()
        .strip_chars(lit(NULL));
    let grouped = dataset
        .frame()
        .clone()
        .lazy()
        .with_column(role.alias(JOB_ROLE))
        .filter(col(JOB_ROLE).is_not_null().and(col(JOB_ROLE).neq(lit(""))))
        .group_by([col(JOB_ROLE)])
        .agg([col(metric).cast(DataType::Float64).mean().alias(MEAN_COLUMN)])
        .sort(
            [MEAN_COLUMN, JOB_ROLE],
            SortMultipleOptions::default()
                .with_order_descending_multi([true, false])
                .with_nulls_last(true),
        )
        .collect()?;

    let roles = string_values(&grouped, JOB_ROLE)?;
    let means = f64_values(&grouped, MEAN_COLUMN)?;
    debug!(chart = %id, roles = roles.len(), "grouped {metric} by job role");

    let categories = roles.into_iter().map(Option::unwrap_or_default).collect();
    Ok(Chart::new(id, ChartKind::Bar, title)
        .with_axes("Job role", y_label)
        .with_categories(categories)
        .with_series(metric, means)
        .with_dropped(dropped))
}
