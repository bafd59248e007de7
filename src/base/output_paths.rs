use super::{ParameterSet, DEFAULT_OUT_DIR};
use std::path::{Path, PathBuf};

/// Holds the paths of all files written by a normalization run
#[derive(Clone, Debug, PartialEq)]
pub struct OutputPaths {
    /// Directory of all files
    pub dir: PathBuf,

    /// Filename stem without extension
    pub stem: String,
}

impl OutputPaths {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `stem` -- the filename without path and extension
    /// * `output_dir` -- the directory of the files; None means [DEFAULT_OUT_DIR]
    pub fn new(stem: &str, output_dir: Option<&str>) -> Self {
        let dir = match output_dir {
            Some(d) => d,
            None => DEFAULT_OUT_DIR,
        };
        OutputPaths {
            dir: Path::new(dir).to_path_buf(),
            stem: stem.to_string(),
        }
    }

    /// Allocates a new instance from the filename and output directory of the parameters
    pub fn from_params(params: &ParameterSet) -> Self {
        OutputPaths::new(&params.filename, params.output_dir.as_deref())
    }

    /// Returns the path of the whitespace-delimited table (`<stem>.txt`)
    pub fn table(&self) -> PathBuf {
        self.with_suffix(".txt")
    }

    /// Returns the path of the Abaqus input-deck fragment (`<stem>_abaqus.inp`)
    pub fn abaqus_deck(&self) -> PathBuf {
        self.with_suffix("_abaqus.inp")
    }

    /// Returns the path of the actuation strain figure
    pub fn figure_actuation_strain(&self) -> PathBuf {
        self.with_suffix("_actuation_strain.svg")
    }

    /// Returns the path of the total strain figure
    pub fn figure_total_strain(&self) -> PathBuf {
        self.with_suffix("_total_strain.svg")
    }

    /// Returns the path of the expansion coefficient figure
    pub fn figure_alpha_coefficient(&self) -> PathBuf {
        self.with_suffix("_alpha_coefficient.svg")
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut filename = self.stem.clone();
        filename.push_str(suffix);
        self.dir.join(filename)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
