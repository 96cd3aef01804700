use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use apd_charts::{Chart, ChartId, build_chart, dashboard_charts};
use apd_ingest::load_dataset;
use apd_model::{FormField, RiskAssessment};
use apd_predict::{BundleState, ModelBundle, PredictionForm, load_model_bundle, predict};
use tracing::{info, info_span};

use crate::cli::{ChartFormatArg, ChartsArgs, PredictArgs};
use crate::render::{chart_csv, fields_table, print_chart};

/// Builds the requested charts, or all eight in dashboard order.
pub fn build_charts(dataset_path: &Path, only: &[ChartId]) -> Result<Vec<Chart>> {
    let dataset = load_dataset(dataset_path)
        .with_context(|| format!("load dataset {}", dataset_path.display()))?;
    let start = Instant::now();
    let charts = if only.is_empty() {
        dashboard_charts(&dataset).context("build dashboard charts")?
    } else {
        only.iter()
            .map(|id| build_chart(*id, &dataset).with_context(|| format!("build chart {id}")))
            .collect::<Result<Vec<_>>>()?
    };
    info!(
        charts = charts.len(),
        duration_ms = start.elapsed().as_millis(),
        "charts built"
    );
    Ok(charts)
}

pub fn run_charts(dataset_path: &Path, args: &ChartsArgs) -> Result<()> {
    let charts = build_charts(dataset_path, &args.only)?;
    match args.format {
        ChartFormatArg::Table => charts.iter().for_each(print_chart),
        ChartFormatArg::Json => {
            let json = serde_json::to_string_pretty(&charts).context("serialize charts")?;
            println!("{json}");
        }
        ChartFormatArg::Csv => {
            for chart in &charts {
                println!("# {}", chart.id);
                println!("{}", chart_csv(chart)?);
                println!();
            }
        }
    }
    Ok(())
}

/// Form defaults from the bundle, overridden by any flags given.
pub fn form_from_args(bundle: &ModelBundle, args: &PredictArgs) -> PredictionForm {
    let mut form = PredictionForm::for_bundle(bundle);
    if let Some(role) = &args.job_role {
        form.set_choice(FormField::JobRole, role.as_str());
    }
    if let Some(pressure) = &args.deadline_pressure {
        form.set_choice(FormField::DeadlinePressure, pressure.as_str());
    }
    let numeric = [
        (
            FormField::ExperienceYears,
            args.experience_years.map(|years| years as f64),
        ),
        (FormField::AiUsageHours, args.ai_usage_hours),
        (FormField::LearningHours, args.learning_hours),
        (FormField::AutomationPercent, args.automation_percent),
        (FormField::ManualWorkHours, args.manual_work_hours),
        (FormField::CollaborationHours, args.collaboration_hours),
        (FormField::MeetingHours, args.meeting_hours),
        (FormField::FocusHours, args.focus_hours),
        (FormField::WorkLifeBalance, args.work_life_balance),
        (FormField::ErrorRate, args.error_rate),
    ];
    for (field, value) in numeric {
        if let Some(value) = value {
            form.set_numeric(field, value);
        }
    }
    form
}

pub fn run_predict(model_path: &Path, args: &PredictArgs) -> Result<RiskAssessment> {
    let _guard = info_span!("predict_command", model = %model_path.display()).entered();
    let bundle = load_model_bundle(model_path)
        .with_context(|| format!("load model bundle {}", model_path.display()))?;
    let form = form_from_args(&bundle, args);
    predict(&bundle, &form).context("predict burnout risk")
}

pub fn run_fields(model_path: &Path) -> Result<()> {
    let state = BundleState::load(model_path);
    if let Some(reason) = state.reason() {
        eprintln!("note: {reason}; choice vocabularies are unavailable");
    }
    println!("{}", fields_table(state.bundle().map(Arc::as_ref)));
    Ok(())
}
