//! Makes available common structures needed to run a normalization
//!
//! You may write `use dea_expansion::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{OutputPaths, ParameterSet, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::export::{read_table, ExportReport, OutputFormat};
pub use crate::physics::{ExpansionTable, MaterialParameters, Normalization, PrestretchState, VoltageSweep};
pub use crate::plot::Plotter;
pub use crate::{run_job, JobReport, StrError};
