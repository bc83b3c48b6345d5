//! Terminal, JSON and CSV rendering.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use mlsim_lesson::{
    ANALOGIES, AnalogyQuiz, Concept, Evaluation, Feedback, Prediction, WORKFLOW_STEPS,
    WorkflowStage, workflow_step,
};
use mlsim_model::Value;
use mlsim_transform::{Partition, ProjectedView};
use polars::prelude::{CsvWriter, SerWriter};

/// Column header as shown to the reader: underscores become spaces.
pub fn display_header(name: &str) -> String {
    name.replace('_', " ")
}

/// Cell text: numbers with two decimals, text as-is, `-` when absent.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::Int(value)) => format!("{:.2}", *value as f64),
        Some(Value::Float(value)) => format!("{value:.2}"),
        Some(Value::Text(value)) => value.clone(),
        None => "-".to_string(),
    }
}

fn partition_color(partition: Partition) -> Color {
    match partition {
        Partition::Train => Color::Blue,
        Partition::Test => Color::Green,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

/// Data table with train rows tinted blue and test rows green.
pub fn view_table(view: &ProjectedView) -> Table {
    let mut table = Table::new();
    table.set_header(
        view.headers
            .iter()
            .map(|header| header_cell(&display_header(header)))
            .collect::<Vec<_>>(),
    );
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    for (idx, row) in view.rows.iter().enumerate() {
        let color = partition_color(view.partition(idx));
        table.add_row(row.iter().map(|value| {
            let alignment = if value.as_ref().is_some_and(Value::is_numeric) {
                CellAlignment::Right
            } else {
                CellAlignment::Left
            };
            Cell::new(format_value(value.as_ref()))
                .fg(color)
                .set_alignment(alignment)
        }));
    }
    table
}

fn split_caption(view: &ProjectedView) -> String {
    let train = view.train_rows().len();
    let test = view.test_rows().len();
    format!("{train} training rows (blue), {test} test rows (green)")
}

pub fn print_view_table(view: &ProjectedView) {
    println!("{}", view_table(view));
    println!("{}", split_caption(view));
}

pub fn write_json<W: Write + ?Sized>(view: &ProjectedView, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, view).context("serialize view as JSON")?;
    writeln!(writer).context("write JSON output")?;
    Ok(())
}

pub fn write_csv<W: Write + ?Sized>(view: &ProjectedView, writer: &mut W) -> Result<()> {
    let mut frame = view.to_frame().context("build view frame")?;
    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut frame)
        .context("write CSV output")?;
    Ok(())
}

pub fn print_concepts(concepts: &[Concept]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Concept"),
        header_cell("Definition"),
        header_cell("Analogy"),
    ]);
    apply_table_style(&mut table);
    for concept in concepts {
        table.add_row(vec![
            Cell::new(concept.term)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(concept.definition),
            Cell::new(concept.analogy).add_attribute(Attribute::Italic),
        ]);
    }
    println!("{table}");
}

pub fn print_workflow_steps() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for (idx, step) in WORKFLOW_STEPS.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(step.title).add_attribute(Attribute::Bold),
            Cell::new(step.description),
        ]);
    }
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    println!("{table}");
}

/// Heading for a workflow stage, e.g. `Step 3: Train Model (50%)`.
pub fn stage_heading(stage: WorkflowStage) -> String {
    let step = workflow_step(stage);
    format!(
        "Step {}: {} ({:.0}%)",
        stage.index() + 1,
        step.title,
        stage.progress_percent()
    )
}

pub fn print_stage(stage: WorkflowStage) {
    println!();
    println!("{}", stage_heading(stage));
    println!("{}", workflow_step(stage).description);
}

pub fn print_evaluation(evaluation: &Evaluation) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match evaluation {
        Evaluation::Classification { confusion } => {
            println!("Classification Metrics");
            table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
            table.add_row(vec![
                Cell::new("Accuracy"),
                Cell::new(format!("{:.1}%", confusion.accuracy() * 100.0)).fg(Color::Green),
            ]);
            table.add_row(vec![
                Cell::new("True negatives"),
                Cell::new(confusion.true_negative).fg(Color::Green),
            ]);
            table.add_row(vec![
                Cell::new("False positives"),
                Cell::new(confusion.false_positive).fg(Color::Red),
            ]);
            table.add_row(vec![
                Cell::new("False negatives"),
                Cell::new(confusion.false_negative).fg(Color::Red),
            ]);
            table.add_row(vec![
                Cell::new("True positives"),
                Cell::new(confusion.true_positive).fg(Color::Green),
            ]);
        }
        Evaluation::Regression { rmse, r_squared } => {
            println!("Regression Metrics");
            table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
            table.add_row(vec![
                Cell::new("RMSE (Root Mean Squared Error)"),
                Cell::new(format!("{rmse:.2}")).fg(Color::Green),
            ]);
            table.add_row(vec![
                Cell::new("R-squared (R²)"),
                Cell::new(format!("{r_squared:.2}")).fg(Color::Green),
            ]);
        }
        Evaluation::Clustering { k, clusters } => {
            println!("Clustering Results (k={k})");
            table.set_header(vec![header_cell("Cluster"), header_cell("Locations")]);
            for (idx, members) in clusters.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(format!("Cluster {}", idx + 1)).add_attribute(Attribute::Bold),
                    Cell::new(members.join(", ")),
                ]);
            }
        }
    }
    println!("{table}");
}

pub fn print_prediction(prediction: &Prediction) {
    println!("{}", prediction.prompt);
    println!("  {}", prediction.input);
    println!("  → {}", prediction.outcome);
}

pub fn print_quiz_prompt(quiz: &AnalogyQuiz) {
    let analogy = quiz.current();
    println!(
        "Analogy {} of {}: {} / {}",
        quiz.index() + 1,
        ANALOGIES.len(),
        analogy.pair[0],
        analogy.pair[1]
    );
    println!("Assign each item to Algorithm or Model.");
}

pub fn print_feedback(feedback: &Feedback) {
    println!("{}", feedback.message());
    println!("{}", feedback.explanation);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_use_two_decimals() {
        assert_eq!(format_value(Some(&Value::Int(7))), "7.00");
        assert_eq!(format_value(Some(&Value::Float(120.5))), "120.50");
        assert_eq!(format_value(Some(&Value::Float(-0.123_456))), "-0.12");
        assert_eq!(format_value(Some(&Value::Text("Miami".into()))), "Miami");
        assert_eq!(format_value(None), "-");
    }

    #[test]
    fn headers_show_spaces() {
        assert_eq!(display_header("units_sold"), "units sold");
        assert_eq!(display_header("location_New_York"), "location New York");
    }

    #[test]
    fn stage_heading_includes_progress() {
        assert_eq!(
            stage_heading(WorkflowStage::Training),
            "Step 3: Train Model (50%)"
        );
    }
}
