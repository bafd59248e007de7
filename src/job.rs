use crate::base::{OutputPaths, ParameterSet};
use crate::export::{ExportReport, OutputFormat};
use crate::physics::Normalization;
use crate::plot::Plotter;
use crate::StrError;
use std::path::PathBuf;
use tracing::info;

/// Holds the results of a complete normalization job
#[derive(Clone, Debug)]
pub struct JobReport {
    /// All computed stages
    pub normalization: Normalization,

    /// Requested output format
    pub format: OutputFormat,

    /// Exported files or the notice for an unimplemented format
    pub export: ExportReport,

    /// Figures written (empty if disabled or if plotting failed)
    pub figures: Vec<PathBuf>,
}

/// Runs validation, computation, export, and (optionally) plotting
///
/// Nothing is written if the parameters are invalid or a numeric failure occurs.
/// An unimplemented output format is not an error: the figures are still generated
/// and the report carries the notice.
pub fn run_job(params: &ParameterSet) -> Result<JobReport, StrError> {
    info!(filename = %params.filename, format = %params.output_format, "starting normalization");
    let normalization = Normalization::new(params)?;
    let paths = OutputPaths::from_params(params);
    let format = OutputFormat::from_name(&params.output_format);
    let export = format.export(
        &normalization.table,
        &normalization.material,
        &params.material_name,
        &paths,
    )?;
    let figures = if params.generate_figures {
        Plotter::new(&normalization).save_all(&paths)
    } else {
        Vec::new()
    };
    Ok(JobReport {
        normalization,
        format,
        export,
        figures,
    })
}
