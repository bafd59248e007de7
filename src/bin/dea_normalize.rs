use dea_expansion::prelude::*;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "dea_normalize",
    about = "Converts the voltage-driven actuation of a dielectric elastomer actuator into \
             normalized anisotropic expansion coefficients for FEA software"
)]
struct Options {
    /// Reads all parameters from a JSON file (the other options are ignored)
    #[structopt(long)]
    params: Option<String>,

    /// Filename for export (without extension)
    #[structopt(long, default_value = "normalization_dea_exported_dea_behavior")]
    filename: String,

    /// Prestretch in x-direction
    #[structopt(long = "prestretch_x", default_value = "1.5")]
    prestretch_x: f64,

    /// Prestretch in y-direction
    #[structopt(long = "prestretch_y", default_value = "1.5")]
    prestretch_y: f64,

    /// Membrane thickness (m)
    #[structopt(long = "t_membrane", default_value = "100e-6")]
    t_membrane: f64,

    /// Relative dielectric permittivity of the elastomer
    #[structopt(long = "epsilon_r", default_value = "2.8")]
    epsilon_r: f64,

    /// Elastic modulus of the elastomer, linearized at the working point (Pa)
    #[structopt(long, default_value = "1400.4e3")]
    emodulus: f64,

    /// Actuation minimum voltage (V)
    #[structopt(long = "actuation_min", default_value = "0")]
    actuation_min: f64,

    /// Actuation maximum voltage (V)
    #[structopt(long = "actuation_max", default_value = "5000")]
    actuation_max: f64,

    /// FEA software in which the expansion behavior is used
    #[structopt(long = "output_format", default_value = "Abaqus")]
    output_format: String,

    /// Material name in the FEA deck
    #[structopt(long = "material_name", default_value = "Material-hab_DEA_100_new")]
    material_name: String,

    /// Directory for the exported files
    #[structopt(long = "output_dir")]
    output_dir: Option<String>,

    /// Skips the generation of the diagnostic figures
    #[structopt(long = "no_figures")]
    no_figures: bool,
}

impl Options {
    /// Converts the options into validated parameters
    fn to_params(&self) -> Result<ParameterSet, StrError> {
        if let Some(path) = &self.params {
            return ParameterSet::read_json(path);
        }
        let mut params = ParameterSet::new();
        params
            .set_filename(&self.filename)?
            .set_prestretch(self.prestretch_x, self.prestretch_y)?
            .set_thickness(self.t_membrane)?
            .set_epsilon_r(self.epsilon_r)?
            .set_emodulus(self.emodulus)?
            .set_actuation_range(self.actuation_min, self.actuation_max)?
            .set_output_format(&self.output_format)?
            .set_material_name(&self.material_name)?
            .set_generate_figures(!self.no_figures)?;
        if let Some(dir) = &self.output_dir {
            params.set_output_dir(dir)?;
        }
        params.validate()?;
        Ok(params)
    }
}

fn main() -> Result<(), StrError> {
    // logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // parse options
    let options = Options::from_args();
    let params = options.to_params()?;
    info!("the filename for saving is {}", params.filename);

    // run
    let report = run_job(&params)?;

    // message
    let mut lines: Vec<String> = report.export.files.iter().map(|p| p.display().to_string()).collect();
    lines.extend(report.figures.iter().map(|p| p.display().to_string()));
    if let Some(notice) = &report.export.notice {
        lines.push(notice.clone());
    }
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let thin_line = format!("{:─^1$}", "", width);
    println!("\n\n{}", thin_line);
    if report.export.files.is_empty() {
        println!("No expansion table exported");
    } else {
        println!("Expansion table exported ({} rows); the files are:", report.normalization.table.len());
    }
    for line in &lines {
        println!("{}", line);
    }
    println!("{}\n\n", thin_line);
    Ok(())
}
