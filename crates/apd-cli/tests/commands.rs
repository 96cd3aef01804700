//! Command tests over on-disk fixtures.

use std::fs;
use std::path::PathBuf;

use apd_charts::{Chart, ChartId, ChartKind};
use apd_cli::cli::PredictArgs;
use apd_cli::commands::{build_charts, form_from_args, run_predict};
use apd_cli::render::{chart_csv, fields_table};
use apd_model::Severity;
use apd_predict::load_model_bundle;
use tempfile::TempDir;

const EMPLOYEES: &str = "\
job_role,experience_years,ai_tool_usage_hours_per_week,tasks_automated_percent,meeting_hours_per_week,focus_hours_per_day,error_rate_percent,productivity_score,burnout_risk_score
Engineer,0,1.0,10.0,2.0,4.0,3.0,60.0,4.0
Analyst,3,4.0,30.0,6.0,5.0,2.5,65.0,5.0
Engineer,8,12.0,80.0,12.0,7.0,0.5,90.0,2.0
Manager,15,7.5,55.0,38.0,3.0,1.5,70.0,8.0
Analyst,1,0.0,0.0,45.0,6.0,4.0,55.0,6.0
Manager,25,2.0,25.0,5.0,2.0,2.0,62.0,9.0
";

/// Single tree splitting on focus hours (index 11) at 4.0:
/// short focus leans High, otherwise Low.
const BUNDLE: &str = r#"{
    "features": [
        "job_role", "experience_years", "ai_tool_usage_hours_per_week",
        "tasks_automated_percent", "manual_work_hours_per_week",
        "learning_time_hours_per_week", "deadline_pressure_level",
        "meeting_hours_per_week", "collaboration_hours_per_week",
        "error_rate_percent", "task_complexity_score", "focus_hours_per_day",
        "work_life_balance_score", "productivity_score"
    ],
    "encoders": {
        "job_role": { "classes": ["Analyst", "Engineer", "Manager"] },
        "deadline_pressure_level": { "classes": ["High", "Low", "Medium"] },
        "burnout_risk_level": { "classes": ["High", "Low", "Medium"] }
    },
    "model": {
        "kind": "decision_tree",
        "n_classes": 3,
        "tree": {
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [11, -2, -2],
            "threshold": [4.0, -2.0, -2.0],
            "value": [[5, 5, 5], [9, 0, 1], [1, 8, 1]]
        }
    }
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn builds_all_charts_in_dashboard_order() {
    let dir = TempDir::new().unwrap();
    let dataset = write(&dir, "df.csv", EMPLOYEES);
    let charts = build_charts(&dataset, &[]).unwrap();
    let ids: Vec<ChartId> = charts.iter().map(|chart| chart.id).collect();
    assert_eq!(ids, ChartId::all());
}

#[test]
fn only_builds_the_selected_charts() {
    let dir = TempDir::new().unwrap();
    let dataset = write(&dir, "df.csv", EMPLOYEES);
    let charts = build_charts(
        &dataset,
        &[ChartId::AiVsProductivity, ChartId::ProductivityByJobRole],
    )
    .unwrap();
    assert_eq!(charts.len(), 2);
    insta::assert_snapshot!(chart_csv(&charts[0]).unwrap(), @r"
    AI usage per week,productivity_score
    0-2 h,59
    3-5 h,65
    6-10 h,70
    >10 h,90
    ");
    assert_eq!(charts[1].categories, vec!["Engineer", "Manager", "Analyst"]);
}

#[test]
fn missing_dataset_fails() {
    let dir = TempDir::new().unwrap();
    let err = build_charts(&dir.path().join("df.csv"), &[]).unwrap_err();
    assert!(format!("{err:#}").contains("dataset unavailable"));
}

#[test]
fn csv_quotes_fields_and_blanks_empty_bins() {
    let chart = Chart::new(ChartId::AiUsageByJobRole, ChartKind::Bar, "AI usage by role")
        .with_categories(vec!["Manager, Senior".into(), "Engineer".into()])
        .with_series("ai_tool_usage_hours_per_week", vec![Some(12.25), None]);
    insta::assert_snapshot!(chart_csv(&chart).unwrap(), @r#"
    category,ai_tool_usage_hours_per_week
    "Manager, Senior",12.25
    Engineer,
    "#);
}

#[test]
fn csv_quotes_carriage_returns() {
    let chart = Chart::new(ChartId::ProductivityByJobRole, ChartKind::Bar, "Productivity by role")
        .with_categories(vec!["Eng\rineer".into(), "Analyst".into()])
        .with_series("productivity_score", vec![Some(70.0), Some(65.5)]);
    let csv = chart_csv(&chart).unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "\"Eng\rineer\",70");
    assert_eq!(lines[2], "Analyst,65.5");
}

#[test]
fn predict_flags_override_and_clamp_defaults() {
    let dir = TempDir::new().unwrap();
    let bundle = load_model_bundle(write(&dir, "rf_model.json", BUNDLE)).unwrap();
    let args = PredictArgs {
        job_role: Some("Manager".into()),
        experience_years: Some(99),
        ai_usage_hours: Some(-5.0),
        focus_hours: Some(8.0),
        ..PredictArgs::default()
    };
    let form = form_from_args(&bundle, &args);
    assert_eq!(form.job_role, "Manager");
    assert_eq!(form.deadline_pressure, "High");
    assert_eq!(form.experience_years, 40);
    assert_eq!(form.ai_usage_hours, 0.0);
    assert_eq!(form.focus_hours, 8.0);
    assert_eq!(form.meeting_hours, 10.0);
}

#[test]
fn predict_decodes_the_risk_label() {
    let dir = TempDir::new().unwrap();
    let model = write(&dir, "rf_model.json", BUNDLE);

    let short_focus = PredictArgs {
        focus_hours: Some(2.0),
        ..PredictArgs::default()
    };
    let assessment = run_predict(&model, &short_focus).unwrap();
    assert_eq!(assessment.label, "High");
    assert_eq!(assessment.severity, Severity::Error);

    let assessment = run_predict(&model, &PredictArgs::default()).unwrap();
    assert_eq!(assessment.label, "Low");
    assert_eq!(assessment.severity, Severity::Success);
}

#[test]
fn predict_without_bundle_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = run_predict(&dir.path().join("rf_model.json"), &PredictArgs::default()).unwrap_err();
    assert!(format!("{err:#}").contains("model bundle unavailable"));
}

#[test]
fn fields_table_lists_every_form_field() {
    let dir = TempDir::new().unwrap();
    let bundle = load_model_bundle(write(&dir, "rf_model.json", BUNDLE)).unwrap();
    let rendered = fields_table(Some(&bundle)).to_string();
    for column in ["job_role", "experience_years", "focus_hours_per_day", "error_rate_percent"] {
        assert!(rendered.contains(column), "missing {column}");
    }
    assert!(rendered.contains("Analyst | Engineer | Manager"));
}
