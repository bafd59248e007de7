use crate::base::OutputPaths;
use crate::physics::Normalization;
use crate::StrError;
use plotpy::{Curve, Plot};
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::{info, warn};

/// Defines the diagnostic figures
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Figure {
    /// Actuation strain versus voltage
    ActuationStrain,

    /// Total strain versus voltage
    TotalStrain,

    /// Expansion coefficient versus stimulus value
    AlphaCoefficient,
}

impl Figure {
    /// Returns all figures in pipeline order
    pub fn all() -> [Figure; 3] {
        [Figure::ActuationStrain, Figure::TotalStrain, Figure::AlphaCoefficient]
    }

    /// Returns the (x, y) axis labels
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Figure::ActuationStrain => ("Actuating Voltage V/V", "Actuation strain"),
            Figure::TotalStrain => ("Actuating Voltage V/V", "Total strain"),
            Figure::AlphaCoefficient => ("Stimulus value", "Expansion coefficient"),
        }
    }
}

/// Holds the data of one line of a figure
#[derive(Clone, Debug, PartialEq)]
pub struct Line<'a> {
    /// Legend entry
    pub label: &'static str,

    /// Matplotlib line style
    pub style: &'static str,

    /// Ordinates (one per voltage sample)
    pub y: &'a [f64],
}

/// Plots the strain and expansion-coefficient curves of a normalization
pub struct Plotter<'a> {
    /// Do not draw the grid lines
    pub no_grid: bool,

    /// Holds the results
    norm: &'a Normalization,
}

impl<'a> Plotter<'a> {
    /// Allocates a new instance
    pub fn new(norm: &'a Normalization) -> Self {
        Plotter { no_grid: false, norm }
    }

    /// Returns the abscissae and lines of a figure
    ///
    /// The actuation figure also holds the zz curve computed without prestretch, for reference.
    pub fn series(&self, figure: Figure) -> (&'a [f64], Vec<Line<'a>>) {
        let norm = self.norm;
        match figure {
            Figure::ActuationStrain => {
                let c = &norm.actuation.with_prestretch;
                let n = &norm.actuation.without_prestretch;
                (
                    norm.sweep.samples(),
                    vec![
                        Line { label: "actuation_strain_xx", style: "-", y: &c.xx },
                        Line { label: "actuation_strain_yy", style: "--", y: &c.yy },
                        Line { label: "actuation_strain_zz", style: ":", y: &c.zz },
                        Line { label: "actuation_strain_zz_no_prestretch", style: "-.", y: &n.zz },
                    ],
                )
            }
            Figure::TotalStrain => {
                let c = &norm.total_strain;
                (
                    norm.sweep.samples(),
                    vec![
                        Line { label: "total_strain_xx", style: "-", y: &c.xx },
                        Line { label: "total_strain_yy", style: "--", y: &c.yy },
                        Line { label: "total_strain_zz", style: ":", y: &c.zz },
                    ],
                )
            }
            Figure::AlphaCoefficient => {
                let c = &norm.table.alpha;
                (
                    norm.table.stimulus.as_slice(),
                    vec![
                        Line { label: "alpha_xx", style: "-", y: &c.xx },
                        Line { label: "alpha_yy", style: "--", y: &c.yy },
                        Line { label: "alpha_zz", style: ":", y: &c.zz },
                    ],
                )
            }
        }
    }

    /// Draws a figure
    pub fn draw(&self, figure: Figure) -> Plot {
        let (x, lines) = self.series(figure);
        let mut plot = Plot::new();
        for line in &lines {
            let mut curve = Curve::new();
            curve.set_label(line.label).set_line_style(line.style);
            curve.draw(&x.to_vec(), &line.y.to_vec());
            plot.add(&curve);
        }
        let (x_label, y_label) = figure.labels();
        if self.no_grid {
            plot.set_labels(x_label, y_label).legend();
        } else {
            plot.grid_labels_legend(x_label, y_label);
        }
        plot
    }

    /// Saves a figure
    ///
    /// # Input
    ///
    /// * `figure` -- which figure
    /// * `filepath` -- may be a String, &str, or Path; the extension selects the image format
    pub fn save<P>(&self, figure: Figure, filepath: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        self.draw(figure).save(filepath)
    }

    /// Saves all figures and returns the paths of the files written
    ///
    /// Failures (e.g., missing Python/Matplotlib) are reported as warnings only.
    pub fn save_all(&self, paths: &OutputPaths) -> Vec<PathBuf> {
        let mut written = Vec::new();
        for figure in Figure::all() {
            let path = match figure {
                Figure::ActuationStrain => paths.figure_actuation_strain(),
                Figure::TotalStrain => paths.figure_total_strain(),
                Figure::AlphaCoefficient => paths.figure_alpha_coefficient(),
            };
            match self.save(figure, &path) {
                Ok(()) => {
                    info!(path = %path.display(), "figure saved");
                    written.push(path);
                }
                Err(e) => warn!(path = %path.display(), "cannot save figure: {}", e),
            }
        }
        written
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Figure, Plotter};
    use crate::base::{OutputPaths, ParameterSet, DEFAULT_TEST_DIR};
    use crate::physics::Normalization;

    const SAVE_FIGURE: bool = false;

    fn small_run() -> Normalization {
        let mut params = ParameterSet::new();
        params.set_actuation_range(0.0, 50.0).unwrap();
        Normalization::new(&params).unwrap()
    }

    #[test]
    fn labels_work() {
        assert_eq!(
            Figure::ActuationStrain.labels(),
            ("Actuating Voltage V/V", "Actuation strain")
        );
        assert_eq!(Figure::AlphaCoefficient.labels().0, "Stimulus value");
        assert_eq!(Figure::all().len(), 3);
    }

    #[test]
    fn series_works() {
        let norm = small_run();
        let plotter = Plotter::new(&norm);

        let (x, lines) = plotter.series(Figure::ActuationStrain);
        assert_eq!(x, norm.sweep.samples());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].label, "actuation_strain_zz");
        assert_eq!(lines[2].y, &norm.actuation.with_prestretch.zz[..]);
        assert_eq!(lines[3].y, &norm.actuation.without_prestretch.zz[..]);

        let (x, lines) = plotter.series(Figure::TotalStrain);
        assert_eq!(x.len(), 51);
        assert_eq!(lines[0].y, &norm.total_strain.xx[..]);
        assert_eq!(lines[1].style, "--");

        let (x, lines) = plotter.series(Figure::AlphaCoefficient);
        assert_eq!(x, &norm.table.stimulus[..]);
        assert_eq!(lines[2].y, &norm.table.alpha.zz[..]);
        for line in &lines {
            assert_eq!(line.y.len(), x.len());
        }
    }

    #[test]
    fn save_all_works() {
        if SAVE_FIGURE {
            let norm = small_run();
            let plotter = Plotter::new(&norm);
            let paths = OutputPaths::new("plotter_save_all", Some(DEFAULT_TEST_DIR));
            let written = plotter.save_all(&paths);
            assert_eq!(written.len(), 3);
        }
    }
}
