use tracing::info_span;

use apd_ingest::EmployeeDataset;

use crate::builders::{
    ai_usage_by_job_role, ai_vs_productivity, burnout_correlation, error_rate_vs_automation,
    experience_vs_productivity, meeting_hours_vs_productivity, productivity_by_job_role,
};
use crate::chart::{Chart, ChartId};
use crate::error::Result;
use crate::profile::top_performer_chart;

/// Builds one chart by id.
pub fn build_chart(id: ChartId, dataset: &EmployeeDataset) -> Result<Chart> {
    let _guard = info_span!("chart", id = %id).entered();
    match id {
        ChartId::AiVsProductivity => ai_vs_productivity(dataset),
        ChartId::ErrorRateVsAutomation => error_rate_vs_automation(dataset),
        ChartId::ProductivityByJobRole => productivity_by_job_role(dataset),
        ChartId::AiUsageByJobRole => ai_usage_by_job_role(dataset),
        ChartId::BurnoutCorrelation => burnout_correlation(dataset),
        ChartId::MeetingHoursVsProductivity => meeting_hours_vs_productivity(dataset),
        ChartId::ExperienceVsProductivity => experience_vs_productivity(dataset),
        ChartId::TopPerformerProfile => top_performer_chart(dataset),
    }
}

/// Builds all eight charts in dashboard order; the first failure aborts.
pub fn dashboard_charts(dataset: &EmployeeDataset) -> Result<Vec<Chart>> {
    ChartId::all()
        .iter()
        .map(|id| build_chart(*id, dataset))
        .collect()
}
