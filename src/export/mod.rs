//! Implements the export of expansion tables to files consumed by FEA software

mod abaqus;
mod number_format;
mod output_format;
mod table_file;
pub use crate::export::abaqus::*;
pub use crate::export::number_format::*;
pub use crate::export::output_format::*;
pub use crate::export::table_file::*;
