use super::{format_shortest, format_table, write_text};
use crate::base::{DECK_POISSON, PA_PER_MPA};
use crate::physics::ExpansionTable;
use crate::StrError;
use std::ffi::OsStr;

/// Returns the Abaqus material-definition header
///
/// ```text
/// *Material, name=<material_name>
/// *Elastic
/// <E in MPa>,0.45
/// *Expansion, type=ANISO
/// ```
///
/// # Input
///
/// * `material_name` -- name of the material in the deck
/// * `emodulus` -- elastic modulus in Pa
pub fn abaqus_header(material_name: &str, emodulus: f64) -> String {
    format!(
        "*Material, name={}\n*Elastic\n{},{}\n*Expansion, type=ANISO",
        material_name,
        format_shortest(emodulus / PA_PER_MPA),
        format_shortest(DECK_POISSON),
    )
}

/// Writes the Abaqus input-deck fragment: material header followed by the expansion rows
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
/// * `table` -- the expansion coefficients
/// * `material_name` -- name of the material in the deck
/// * `emodulus` -- elastic modulus in Pa
pub fn write_abaqus_deck<P>(full_path: &P, table: &ExpansionTable, material_name: &str, emodulus: f64) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    write_text(full_path, &format_abaqus_deck(table, material_name, emodulus))
}

/// Returns the contents of the Abaqus input-deck fragment
pub fn format_abaqus_deck(table: &ExpansionTable, material_name: &str, emodulus: f64) -> String {
    let header = abaqus_header(material_name, emodulus);
    format_table(table, Some(&header))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
