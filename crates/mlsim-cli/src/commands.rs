use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use mlsim_lesson::{
    AnalogyQuiz, KEY_CONCEPTS, WorkflowError, WorkflowSession, WorkflowStage, evaluation,
    prediction,
};
use mlsim_model::baseline_dataset;
use mlsim_transform::{PreprocessingPipeline, project};
use tracing::{debug, info, info_span};

use mlsim_cli::config::{SimulatorConfig, resolve};
use mlsim_cli::render;

use crate::cli::{OutputFormatArg, PreprocessingArgs, PreviewArgs, QuizArgs, WalkthroughArgs};

fn load_config(args: &PreprocessingArgs) -> Result<SimulatorConfig> {
    resolve(args.config.as_deref(), &args.overrides())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let config = load_config(&args.preprocessing)?;
    let span = info_span!("preview", task = ?config.task);
    let _guard = span.enter();

    let output =
        PreprocessingPipeline::from_config(&config.preprocessing).execute(&baseline_dataset());
    for step in &output.report.steps {
        debug!(step = %step.kind(), report = ?step, "preprocessing step report");
    }
    let view = project(
        &output.dataset,
        config.task,
        config.preprocessing.train_test_split,
    );
    info!(
        fields = view.headers.len(),
        rows = view.row_count(),
        split_index = view.split_index,
        "projected view"
    );

    match args.format {
        OutputFormatArg::Table => {
            if config.preprocessing.is_identity() {
                println!("Applied: none (raw baseline)");
            }
            for kind in output.report.applied() {
                println!("Applied: {kind}");
            }
            render::print_view_table(&view);
        }
        OutputFormatArg::Json => write_output(args.output.as_deref(), |writer| {
            render::write_json(&view, writer)
        })?,
        OutputFormatArg::Csv => write_output(args.output.as_deref(), |writer| {
            render::write_csv(&view, writer)
        })?,
    }
    Ok(())
}

fn write_output<F>(path: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush().context("flush output file")?;
            info!(path = %path.display(), "wrote output");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write(&mut writer)?;
        }
    }
    Ok(())
}

pub fn run_walkthrough(args: &WalkthroughArgs) -> Result<()> {
    let config = load_config(&args.preprocessing)?;
    let task = config.task.ok_or(WorkflowError::NoTaskSelected)?;
    let span = info_span!("walkthrough", %task);
    let _guard = span.enter();

    let mut session = WorkflowSession::new();
    render::print_stage(session.stage());
    println!("→ {}", task.business_problem());
    session.start(task)?;

    render::print_stage(session.stage());
    session.set_config(config.preprocessing)?;
    render::print_view_table(&session.view());

    session.advance(Instant::now())?;
    render::print_stage(session.stage());
    wait_for_training(&mut session)?;

    render::print_stage(session.stage());
    render::print_evaluation(&evaluation(task));

    session.advance(Instant::now())?;
    render::print_stage(session.stage());
    render::print_prediction(&prediction(task));
    Ok(())
}

/// Spin until the training gate opens, then advance to evaluation.
fn wait_for_training(session: &mut WorkflowSession) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}").context("spinner template")?,
    );
    spinner.set_message("Training in progress...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    loop {
        match session.advance(Instant::now()) {
            Ok(WorkflowStage::Evaluating) => break,
            Ok(stage) => {
                spinner.abandon();
                anyhow::bail!("unexpected workflow stage after training: {stage}");
            }
            Err(WorkflowError::TrainingInProgress { remaining }) => thread::sleep(remaining),
            Err(error) => {
                spinner.abandon();
                return Err(error.into());
            }
        }
    }
    spinner.finish_with_message("Model training complete!");
    Ok(())
}

pub fn run_concepts() -> Result<()> {
    render::print_concepts(&KEY_CONCEPTS);
    println!();
    render::print_workflow_steps();
    Ok(())
}

pub fn run_quiz(args: &QuizArgs) -> Result<()> {
    let index = args.analogy.checked_sub(1).context("analogy numbers start at 1")?;
    let mut quiz = AnalogyQuiz::starting_at(index);
    render::print_quiz_prompt(&quiz);
    if args.assign.is_empty() {
        return Ok(());
    }
    for assignment in &args.assign {
        quiz.select(&assignment.item, assignment.choice)
            .with_context(|| format!("assign '{}'", assignment.item))?;
    }
    let feedback = quiz.check().context("check answer")?;
    println!();
    render::print_feedback(&feedback);
    Ok(())
}
