use super::format_scientific;
use crate::physics::{ExpansionTable, N_COLUMN};
use crate::StrError;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Returns the expansion table as whitespace-delimited rows
///
/// # Input
///
/// * `table` -- the expansion coefficients
/// * `header` -- lines written verbatim before the rows (without comment markers)
pub fn format_table(table: &ExpansionTable, header: Option<&str>) -> String {
    let mut buffer = String::new();
    if let Some(lines) = header {
        buffer.push_str(lines);
        buffer.push('\n');
    }
    for row in table.rows() {
        let line: Vec<_> = row.iter().map(|v| format_scientific(*v)).collect();
        buffer.push_str(&line.join(" "));
        buffer.push('\n');
    }
    buffer
}

/// Writes text to a file, creating the parent directory if needed
///
/// Existing files are overwritten.
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn write_text<P>(full_path: &P, contents: &str) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    if let Some(p) = path.parent() {
        fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
    }
    let file = File::create(&path).map_err(|_| "cannot create file")?;
    let mut buffer = BufWriter::new(file);
    buffer.write_all(contents.as_bytes()).map_err(|_| "cannot write file")?;
    buffer.flush().map_err(|_| "cannot flush buffer")?;
    Ok(())
}

/// Writes the expansion table as whitespace-delimited rows
///
/// Existing files are overwritten.
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
/// * `table` -- the expansion coefficients
/// * `header` -- lines written verbatim before the rows (without comment markers)
pub fn write_table<P>(full_path: &P, table: &ExpansionTable, header: Option<&str>) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    write_text(full_path, &format_table(table, header))
}

/// Reads an expansion table written by [write_table]
///
/// Empty lines and keyword lines starting with `*` (e.g., an Abaqus header) are skipped.
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn read_table<P>(full_path: &P) -> Result<ExpansionTable, StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    let file = File::open(path).map_err(|_| "cannot open file")?;
    let buffered = BufReader::new(file);
    let mut rows = Vec::new();
    for line in buffered.lines() {
        let line = line.map_err(|_| "cannot read line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('*') {
            continue;
        }
        rows.push(parse_row(trimmed)?);
    }
    ExpansionTable::from_rows(&rows)
}

/// Parses a row of seven whitespace-separated numbers
fn parse_row(line: &str) -> Result<[f64; N_COLUMN], StrError> {
    let mut row = [0.0; N_COLUMN];
    let mut count = 0;
    for token in line.split_whitespace() {
        if count == N_COLUMN {
            return Err("each row must have 7 columns");
        }
        row[count] = token.parse::<f64>().map_err(|_| "cannot parse number")?;
        count += 1;
    }
    if count != N_COLUMN {
        return Err("each row must have 7 columns");
    }
    Ok(row)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
