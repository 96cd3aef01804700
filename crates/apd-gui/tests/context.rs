//! Context tests over on-disk fixtures.

use std::fs;
use std::path::PathBuf;

use apd_charts::ChartId;
use apd_gui::context::AppContext;
use apd_gui::settings::DataSettings;
use tempfile::TempDir;

const EMPLOYEES: &str = "\
job_role,experience_years,ai_tool_usage_hours_per_week,tasks_automated_percent,meeting_hours_per_week,focus_hours_per_day,error_rate_percent,productivity_score,burnout_risk_score
Engineer,0,1.0,10.0,2.0,4.0,3.0,60.0,4.0
Analyst,3,4.0,30.0,6.0,5.0,2.5,65.0,5.0
Engineer,8,12.0,80.0,12.0,7.0,0.5,90.0,2.0
Manager,15,7.5,55.0,38.0,3.0,1.5,70.0,8.0
";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn visualization_renders_without_a_bundle() {
    let dir = TempDir::new().unwrap();
    let data = DataSettings {
        dataset_path: write(&dir, "df.csv", EMPLOYEES),
        model_path: dir.path().join("rf_model.json"),
    };
    let context = AppContext::from_settings(&data);

    assert!(!context.bundle().is_ready());
    assert!(!context.dataset_loaded());
    let charts = context.charts().unwrap();
    assert!(context.dataset_loaded());
    let ids: Vec<ChartId> = charts.iter().map(|chart| chart.id).collect();
    assert_eq!(ids, ChartId::all());
}

#[test]
fn charts_are_built_once() {
    let dir = TempDir::new().unwrap();
    let dataset = write(&dir, "df.csv", EMPLOYEES);
    let context = AppContext::new(&dataset, &dir.path().join("rf_model.json"));

    let first = context.charts().unwrap().as_ptr();
    fs::remove_file(&dataset).unwrap();
    assert_eq!(context.charts().unwrap().as_ptr(), first);
}

#[test]
fn missing_dataset_blocks_visualization() {
    let dir = TempDir::new().unwrap();
    let context = AppContext::new(&dir.path().join("df.csv"), &dir.path().join("rf_model.json"));
    let err = context.charts().unwrap_err();
    assert!(format!("{err:#}").contains("dataset unavailable"));
}

#[test]
fn dataset_without_productivity_fails_instead_of_rendering_empty() {
    let dir = TempDir::new().unwrap();
    let dataset = write(
        &dir,
        "df.csv",
        "job_role,ai_tool_usage_hours_per_week,burnout_risk_score\nEngineer,3.0,4.0\n",
    );
    let context = AppContext::new(&dataset, &dir.path().join("rf_model.json"));
    let err = context.charts().unwrap_err();
    assert!(format!("{err:#}").contains("productivity_score"));
}
