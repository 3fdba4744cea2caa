use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use comfy_table::{Cell, CellAlignment, Table};

use crate::estimators::hyperparams::ModelKind;
use crate::metrics::RegressionMetrics;
use crate::pipeline::PipelineReport;

#[cfg(test)]
mod tests;

const TITLE: &str = "Food Delivery Time Prediction - Model Results";

/// Side by side R², RMSE and MAE of every model, the best one flagged.
pub fn comparison_table(report: &PipelineReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Model", "R²", "RMSE (min)", "MAE (min)", ""]);
    for (kind, metrics) in &report.results {
        let marker = if *kind == report.best { "best" } else { "" };
        table.add_row(vec![
            Cell::new(kind.display_name()),
            Cell::new(format!("{:.4}", metrics.r2)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", metrics.rmse)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", metrics.mae)).set_alignment(CellAlignment::Right),
            Cell::new(marker),
        ]);
    }
    table
}

/// Writes the plain-text results summary.
pub fn write_results<W: Write>(
    results: &[(ModelKind, RegressionMetrics)],
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "{TITLE}")?;
    writeln!(writer, "{}", "=".repeat(50))?;
    writeln!(writer)?;
    for (kind, metrics) in results {
        writeln!(writer, "{} Regression:", kind.display_name())?;
        writeln!(writer, "  R² Score: {:.4}", metrics.r2)?;
        writeln!(writer, "  RMSE: {:.2}", metrics.rmse)?;
        writeln!(writer, "  MAE: {:.2}", metrics.mae)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes the plain-text results summary to `path`, replacing any existing
/// file.
pub fn save_results<P: AsRef<Path>>(
    results: &[(ModelKind, RegressionMetrics)],
    path: P,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_results(results, &mut writer)?;
    writer.flush()
}
