use super::{format_abaqus_deck, format_table, write_text};
use crate::base::OutputPaths;
use crate::physics::{ExpansionTable, MaterialParameters};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Defines the target formats of the expansion table
///
/// New targets are added as new variants; [OutputFormat::from_name] maps
/// every unknown name to [OutputFormat::Unimplemented].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum OutputFormat {
    /// Whitespace-delimited table (`.txt`) plus Abaqus deck fragment (`_abaqus.inp`)
    TabularAbaqus,

    /// A format without exporter; holds the requested name
    Unimplemented(String),
}

/// Holds the outcome of an export
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportReport {
    /// Files written, in order
    pub files: Vec<PathBuf>,

    /// Informational message when nothing could be exported
    pub notice: Option<String>,
}

impl OutputFormat {
    /// Returns the format corresponding to a name such as "Abaqus"
    pub fn from_name(name: &str) -> Self {
        match name {
            "Abaqus" => OutputFormat::TabularAbaqus,
            _ => OutputFormat::Unimplemented(name.to_string()),
        }
    }

    /// Returns the name of the format
    pub fn name(&self) -> &str {
        match self {
            OutputFormat::TabularAbaqus => "Abaqus",
            OutputFormat::Unimplemented(name) => name,
        }
    }

    /// Returns true if files are written for this format
    pub fn is_implemented(&self) -> bool {
        !matches!(self, OutputFormat::Unimplemented(_))
    }

    /// Writes the expansion table in this format
    ///
    /// Existing files with the same name are overwritten. An unimplemented format writes
    /// nothing and returns a report carrying the notice (this is not an error).
    pub fn export(
        &self,
        table: &ExpansionTable,
        material: &MaterialParameters,
        material_name: &str,
        paths: &OutputPaths,
    ) -> Result<ExportReport, StrError> {
        match self {
            OutputFormat::TabularAbaqus => {
                // both files or none
                let contents_table = format_table(table, None);
                let contents_deck = format_abaqus_deck(table, material_name, material.emodulus);

                let path_table = paths.table();
                write_text(&path_table, &contents_table)?;
                info!(path = %path_table.display(), rows = table.len(), "table saved in Abaqus format");

                let path_deck = paths.abaqus_deck();
                if let Err(e) = write_text(&path_deck, &contents_deck) {
                    let _ = fs::remove_file(&path_table);
                    error!(path = %path_deck.display(), "{}; removed {}", e, path_table.display());
                    return Err(e);
                }
                info!(path = %path_deck.display(), "Abaqus .inp file saved");

                Ok(ExportReport {
                    files: vec![path_table, path_deck],
                    notice: None,
                })
            }
            OutputFormat::Unimplemented(name) => {
                let notice = format!(
                    "output format \"{}\" is not yet defined; no file was exported (available: Abaqus)",
                    name
                );
                warn!("{}", notice);
                Ok(ExportReport {
                    files: Vec::new(),
                    notice: Some(notice),
                })
            }
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
