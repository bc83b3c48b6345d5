//! CLI argument definitions for the ML workflow simulator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mlsim_lesson::AnalogyChoice;
use mlsim_model::TaskType;

use mlsim_cli::config::Overrides;

#[derive(Parser)]
#[command(
    name = "mlsim",
    version,
    about = "ML workflow simulator - preprocess a small sales table and walk through a model lifecycle",
    long_about = "Walk through a machine learning workflow on a fixed 12-row sales table.\n\n\
                  Choose a business problem, toggle preprocessing steps, inspect the\n\
                  train/test split and step through scripted training, evaluation and\n\
                  prediction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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
    /// Show the preprocessed data table for a task and configuration.
    Preview(PreviewArgs),

    /// Run the five-step workflow end to end for one task.
    Walkthrough(WalkthroughArgs),

    /// List the key concepts and the workflow steps.
    Concepts,

    /// Answer an algorithm-vs-model analogy.
    Quiz(QuizArgs),
}

#[derive(Args)]
pub struct PreprocessingArgs {
    /// Business problem; decides which label columns are hidden.
    #[arg(long = "task", value_enum)]
    pub task: Option<TaskArg>,

    /// Group rare product categories into "Other".
    #[arg(long = "reduce-cardinality")]
    pub reduce_cardinality: bool,

    /// Replace `location` with one 0/1 column per location.
    #[arg(long = "one-hot-encode")]
    pub one_hot_encode: bool,

    /// Scale `cost` and `units_sold` to mean 0 and standard deviation 1.
    #[arg(long = "standardize")]
    pub standardize: bool,

    /// Percentage of leading rows used for training (10-90).
    #[arg(long = "split", value_name = "PERCENT")]
    pub split: Option<u8>,

    /// TOML file with `task` and a `[preprocessing]` table.
    ///
    /// Command-line flags are applied on top of the file.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl PreprocessingArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            task: self.task.map(TaskType::from),
            reduce_cardinality: self.reduce_cardinality,
            one_hot_encode: self.one_hot_encode,
            standardize: self.standardize,
            split: self.split,
        }
    }
}

#[derive(Parser)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub preprocessing: PreprocessingArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write JSON or CSV output to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct WalkthroughArgs {
    #[command(flatten)]
    pub preprocessing: PreprocessingArgs,
}

#[derive(Parser)]
pub struct QuizArgs {
    /// Analogy number, starting at 1.
    #[arg(long = "analogy", value_name = "N", default_value_t = 1)]
    pub analogy: usize,

    /// Assign an item of the analogy, e.g. `--assign Recipe=algorithm`.
    #[arg(long = "assign", value_name = "ITEM=CHOICE", value_parser = parse_assignment)]
    pub assign: Vec<Assignment>,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub item: String,
    pub choice: AnalogyChoice,
}

fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let (item, choice) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM=CHOICE, got '{raw}'"))?;
    let choice = choice.parse().map_err(|error| format!("{error}"))?;
    Ok(Assignment {
        item: item.trim().to_string(),
        choice,
    })
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TaskArg {
    Classification,
    Regression,
    Clustering,
}

impl From<TaskArg> for TaskType {
    fn from(task: TaskArg) -> Self {
        match task {
            TaskArg::Classification => TaskType::Classification,
            TaskArg::Regression => TaskType::Regression,
            TaskArg::Clustering => TaskType::Clustering,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
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
