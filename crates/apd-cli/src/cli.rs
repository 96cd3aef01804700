//! CLI argument definitions.

use std::path::PathBuf;

use apd_charts::ChartId;
use apd_ingest::DEFAULT_DATASET_PATH;
use apd_predict::DEFAULT_MODEL_PATH;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "apd",
    version,
    about = "AI productivity dashboard - charts and burnout risk prediction",
    long_about = "Summarise the employee productivity dataset as the dashboard's eight charts\n\
                  and predict burnout risk with the trained model bundle."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Employee dataset (CSV with a header row).
    #[arg(
        long = "dataset",
        value_name = "PATH",
        default_value = DEFAULT_DATASET_PATH,
        global = true
    )]
    pub dataset: PathBuf,

    /// Model bundle (JSON).
    #[arg(long = "model", value_name = "PATH", default_value = DEFAULT_MODEL_PATH, global = true)]
    pub model: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the dashboard charts from the dataset.
    Charts(ChartsArgs),

    /// Predict the burnout risk level for one employee.
    Predict(PredictArgs),

    /// List the prediction form fields with their ranges and defaults.
    Fields,
}

#[derive(Args)]
pub struct ChartsArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ChartFormatArg,

    /// Only build these charts (repeatable), e.g. `--only ai-vs-productivity`.
    #[arg(long = "only", value_name = "CHART", value_parser = parse_chart_id)]
    pub only: Vec<ChartId>,
}

/// Form values; omitted flags take the form defaults and values outside a
/// field's range are clamped.
#[derive(Args, Default)]
pub struct PredictArgs {
    /// Job role (default: first role the model knows).
    #[arg(long = "job-role")]
    pub job_role: Option<String>,

    /// Deadline pressure level (default: first level the model knows).
    #[arg(long = "deadline-pressure")]
    pub deadline_pressure: Option<String>,

    /// Years of experience [0-40, default 5].
    #[arg(long = "experience")]
    pub experience_years: Option<i64>,

    /// AI tool usage in hours per week [0-50, default 10].
    #[arg(long = "ai-hours")]
    pub ai_usage_hours: Option<f64>,

    /// Learning time in hours per week [0-20, default 2].
    #[arg(long = "learning-hours")]
    pub learning_hours: Option<f64>,

    /// Percentage of tasks automated [0-100, default 30].
    #[arg(long = "automation")]
    pub automation_percent: Option<f64>,

    /// Manual work in hours per week [0-50, default 20].
    #[arg(long = "manual-hours")]
    pub manual_work_hours: Option<f64>,

    /// Collaboration in hours per week [0-30, default 5].
    #[arg(long = "collaboration-hours")]
    pub collaboration_hours: Option<f64>,

    /// Meetings in hours per week [0-50, default 10].
    #[arg(long = "meeting-hours")]
    pub meeting_hours: Option<f64>,

    /// Focus time in hours per day [1-12, default 5].
    #[arg(long = "focus-hours")]
    pub focus_hours: Option<f64>,

    /// Work-life balance score [1-10, default 7].
    #[arg(long = "work-life-balance")]
    pub work_life_balance: Option<f64>,

    /// Error rate percentage [0-10, default 1].
    #[arg(long = "error-rate")]
    pub error_rate: Option<f64>,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

fn parse_chart_id(value: &str) -> Result<ChartId, String> {
    ChartId::from_slug(value).ok_or_else(|| {
        let known: Vec<&str> = ChartId::all().iter().map(ChartId::slug).collect();
        format!("unknown chart '{value}' (expected one of: {})", known.join(", "))
    })
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartFormatArg {
    Table,
    Json,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
