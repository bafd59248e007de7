use super::{DEFAULT_FILENAME, DEFAULT_MATERIAL_NAME, MAX_N_SAMPLE, MAX_VOLTAGE};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the named input options of a normalization run
///
/// Missing keys in a JSON parameter file take the default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Filename stem for the exported files (without extension)
    pub filename: String,

    /// Prestretch factor in the x-direction
    pub prestretch_x: f64,

    /// Prestretch factor in the y-direction
    pub prestretch_y: f64,

    /// Membrane thickness before prestretching (m)
    pub t_membrane: f64,

    /// Relative dielectric permittivity of the elastomer
    pub epsilon_r: f64,

    /// Elastic modulus of the elastomer (Pa)
    ///
    /// Linearized from the nonlinear elastic behavior at the working point.
    pub emodulus: f64,

    /// Minimum actuation voltage (V)
    pub actuation_min: f64,

    /// Maximum actuation voltage (V)
    pub actuation_max: f64,

    /// FEA software in which the expansion behavior is used (e.g., "Abaqus")
    pub output_format: String,

    /// Material name written to the FEA deck header
    pub material_name: String,

    /// Generates the diagnostic figures
    pub generate_figures: bool,

    /// Directory for the exported files; None means the current directory
    pub output_dir: Option<String>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet {
            filename: DEFAULT_FILENAME.to_string(),
            prestretch_x: 1.5,
            prestretch_y: 1.5,
            t_membrane: 100e-6,
            epsilon_r: 2.8,
            emodulus: 1400.4e3,
            actuation_min: 0.0,
            actuation_max: 5000.0,
            output_format: "Abaqus".to_string(),
            material_name: DEFAULT_MATERIAL_NAME.to_string(),
            generate_figures: true,
            output_dir: None,
        }
    }
}

impl ParameterSet {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        ParameterSet::default()
    }

    /// Sets the filename stem
    pub fn set_filename(&mut self, filename: &str) -> Result<&mut Self, StrError> {
        if filename.trim().is_empty() {
            return Err("filename must not be empty");
        }
        self.filename = filename.to_string();
        Ok(self)
    }

    /// Sets the in-plane prestretch factors
    pub fn set_prestretch(&mut self, prestretch_x: f64, prestretch_y: f64) -> Result<&mut Self, StrError> {
        check_positive(prestretch_x, "prestretch_x must be > 0.0")?;
        check_positive(prestretch_y, "prestretch_y must be > 0.0")?;
        self.prestretch_x = prestretch_x;
        self.prestretch_y = prestretch_y;
        Ok(self)
    }

    /// Sets the membrane thickness (m)
    pub fn set_thickness(&mut self, value: f64) -> Result<&mut Self, StrError> {
        check_positive(value, "thickness must be > 0.0")?;
        self.t_membrane = value;
        Ok(self)
    }

    /// Sets the relative permittivity
    pub fn set_epsilon_r(&mut self, value: f64) -> Result<&mut Self, StrError> {
        check_positive(value, "relative permittivity must be > 0.0")?;
        self.epsilon_r = value;
        Ok(self)
    }

    /// Sets the elastic modulus (Pa)
    pub fn set_emodulus(&mut self, value: f64) -> Result<&mut Self, StrError> {
        check_positive(value, "elastic modulus must be > 0.0")?;
        self.emodulus = value;
        Ok(self)
    }

    /// Sets the actuation voltage range (V)
    pub fn set_actuation_range(&mut self, v_min: f64, v_max: f64) -> Result<&mut Self, StrError> {
        check_voltage_range(v_min, v_max)?;
        self.actuation_min = v_min;
        self.actuation_max = v_max;
        Ok(self)
    }

    /// Sets the output format name (e.g., "Abaqus")
    pub fn set_output_format(&mut self, name: &str) -> Result<&mut Self, StrError> {
        self.output_format = name.to_string();
        Ok(self)
    }

    /// Sets the material name of the FEA deck
    pub fn set_material_name(&mut self, name: &str) -> Result<&mut Self, StrError> {
        check_material_name(name)?;
        self.material_name = name.to_string();
        Ok(self)
    }

    /// Enables or disables the diagnostic figures
    pub fn set_generate_figures(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.generate_figures = flag;
        Ok(self)
    }

    /// Sets the output directory
    pub fn set_output_dir(&mut self, dir: &str) -> Result<&mut Self, StrError> {
        self.output_dir = Some(dir.to_string());
        Ok(self)
    }

    /// Checks all values at once
    ///
    /// Must be called before any computation; the setters check single values only,
    /// whereas fields may also be assigned directly or read from a file.
    pub fn validate(&self) -> Result<(), StrError> {
        if self.filename.trim().is_empty() {
            return Err("filename must not be empty");
        }
        check_positive(self.prestretch_x, "prestretch_x must be > 0.0")?;
        check_positive(self.prestretch_y, "prestretch_y must be > 0.0")?;
        check_positive(self.prestretch_x * self.prestretch_y, "prestretch product must be > 0.0")?;
        check_positive(self.t_membrane, "thickness must be > 0.0")?;
        check_positive(self.epsilon_r, "relative permittivity must be > 0.0")?;
        check_positive(self.emodulus, "elastic modulus must be > 0.0")?;
        check_voltage_range(self.actuation_min, self.actuation_max)?;
        check_material_name(&self.material_name)?;
        Ok(())
    }

    /// Reads a JSON file containing this struct
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let params: ParameterSet = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        params.validate()?;
        Ok(params)
    }

    /// Writes a JSON file with this struct
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Returns an error if the value is not finite or not strictly positive
pub(crate) fn check_positive(value: f64, message: StrError) -> Result<(), StrError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(message);
    }
    Ok(())
}

/// Checks the material name written to the `*Material, name=` line of the deck
///
/// Commas and line breaks would start new options or keyword lines in the deck.
pub(crate) fn check_material_name(name: &str) -> Result<(), StrError> {
    if name.trim().is_empty() {
        return Err("material name must not be empty");
    }
    if name.contains(',') || name.contains('\n') || name.contains('\r') {
        return Err("material name must not contain commas or line breaks");
    }
    Ok(())
}

/// Checks the voltage bounds of the sweep
///
/// The stimulus value is linear in the voltage, hence negative voltages are rejected.
/// The maximum is the reference voltage and must not be zero. The maximum is also
/// bounded by [MAX_VOLTAGE] (unit steps stay distinct) and the number of samples
/// by [MAX_N_SAMPLE].
pub(crate) fn check_voltage_range(v_min: f64, v_max: f64) -> Result<(), StrError> {
    if !v_min.is_finite() || !v_max.is_finite() {
        return Err("actuation voltages must be finite");
    }
    if v_min < 0.0 {
        return Err("actuation_min must be ≥ 0.0");
    }
    if v_max < v_min {
        return Err("actuation_max must be ≥ actuation_min");
    }
    if v_max <= 0.0 {
        return Err("actuation_max must be > 0.0");
    }
    if v_max > MAX_VOLTAGE {
        return Err("actuation_max must be ≤ 2^53");
    }
    if (v_max - v_min).floor() >= MAX_N_SAMPLE as f64 {
        return Err("actuation range exceeds the maximum number of voltage samples");
    }
    Ok(())
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameters\n")?;
        write!(f, "==========\n")?;
        write!(f, "filename = {}\n", self.filename)?;
        write!(f, "prestretch_x = {:?}\n", self.prestretch_x)?;
        write!(f, "prestretch_y = {:?}\n", self.prestretch_y)?;
        write!(f, "t_membrane = {:?} m\n", self.t_membrane)?;
        write!(f, "epsilon_r = {:?}\n", self.epsilon_r)?;
        write!(f, "emodulus = {:?} Pa\n", self.emodulus)?;
        write!(f, "actuation = [{:?}, {:?}] V\n", self.actuation_min, self.actuation_max)?;
        write!(f, "output_format = {}\n", self.output_format)?;
        write!(f, "material_name = {}\n", self.material_name)?;
        write!(f, "generate_figures = {:?}\n", self.generate_figures)?;
        write!(f, "output_dir = {:?}\n", self.output_dir)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ParameterSet;
    use crate::base::DEFAULT_TEST_DIR;
    use crate::StrError;
    use std::fs;

    #[test]
    fn default_matches_reference_actuator() {
        let params = ParameterSet::new();
        assert_eq!(params.filename, "normalization_dea_exported_dea_behavior");
        assert_eq!(params.prestretch_x, 1.5);
        assert_eq!(params.prestretch_y, 1.5);
        assert_eq!(params.t_membrane, 100e-6);
        assert_eq!(params.epsilon_r, 2.8);
        assert_eq!(params.emodulus, 1400.4e3);
        assert_eq!(params.actuation_min, 0.0);
        assert_eq!(params.actuation_max, 5000.0);
        assert_eq!(params.output_format, "Abaqus");
        assert!(params.generate_figures);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn setters_work() -> Result<(), StrError> {
        let mut params = ParameterSet::new();
        params
            .set_filename("dea")?
            .set_prestretch(2.0, 1.25)?
            .set_thickness(50e-6)?
            .set_epsilon_r(3.1)?
            .set_emodulus(1e6)?
            .set_actuation_range(0.0, 10.0)?
            .set_output_format("ANSYS")?
            .set_material_name("Elastosil")?
            .set_generate_figures(false)?
            .set_output_dir("/tmp/dea")?;
        assert_eq!(params.filename, "dea");
        assert_eq!(params.prestretch_x, 2.0);
        assert_eq!(params.prestretch_y, 1.25);
        assert_eq!(params.t_membrane, 50e-6);
        assert_eq!(params.epsilon_r, 3.1);
        assert_eq!(params.emodulus, 1e6);
        assert_eq!(params.actuation_max, 10.0);
        assert_eq!(params.output_format, "ANSYS");
        assert_eq!(params.material_name, "Elastosil");
        assert!(!params.generate_figures);
        assert_eq!(params.output_dir, Some("/tmp/dea".to_string()));
        params.validate()
    }

    #[test]
    fn setters_capture_errors() {
        let mut params = ParameterSet::new();
        assert_eq!(params.set_filename(" ").err(), Some("filename must not be empty"));
        assert_eq!(params.set_prestretch(0.0, 1.0).err(), Some("prestretch_x must be > 0.0"));
        assert_eq!(params.set_prestretch(1.0, -1.0).err(), Some("prestretch_y must be > 0.0"));
        assert_eq!(params.set_thickness(0.0).err(), Some("thickness must be > 0.0"));
        assert_eq!(params.set_thickness(f64::NAN).err(), Some("thickness must be > 0.0"));
        assert_eq!(
            params.set_epsilon_r(-2.8).err(),
            Some("relative permittivity must be > 0.0")
        );
        assert_eq!(params.set_emodulus(0.0).err(), Some("elastic modulus must be > 0.0"));
        assert_eq!(
            params.set_actuation_range(-1.0, 10.0).err(),
            Some("actuation_min must be ≥ 0.0")
        );
        assert_eq!(
            params.set_actuation_range(5.0, 4.0).err(),
            Some("actuation_max must be ≥ actuation_min")
        );
        assert_eq!(
            params.set_actuation_range(0.0, 0.0).err(),
            Some("actuation_max must be > 0.0")
        );
        assert_eq!(
            params.set_actuation_range(0.0, f64::INFINITY).err(),
            Some("actuation voltages must be finite")
        );
        assert_eq!(
            params.set_material_name("a,b").err(),
            Some("material name must not contain commas or line breaks")
        );
        // nothing was changed by the failed calls
        assert_eq!(params, ParameterSet::new());
    }

    #[test]
    fn validate_captures_direct_assignments() {
        let mut params = ParameterSet::new();
        params.t_membrane = -100e-6;
        assert_eq!(params.validate().err(), Some("thickness must be > 0.0"));

        let mut params = ParameterSet::new();
        params.prestretch_x = 1e-200;
        params.prestretch_y = 1e-200;
        assert_eq!(params.validate().err(), Some("prestretch product must be > 0.0"));

        let mut params = ParameterSet::new();
        params.emodulus = 0.0;
        assert_eq!(params.validate().err(), Some("elastic modulus must be > 0.0"));
    }

    #[test]
    fn validate_captures_deck_breaking_material_names() {
        let mut params = ParameterSet::new();
        params.material_name = "A,B".to_string();
        assert_eq!(
            params.validate().err(),
            Some("material name must not contain commas or line breaks")
        );
        params.material_name = "A\n*Elastic".to_string();
        assert_eq!(
            params.validate().err(),
            Some("material name must not contain commas or line breaks")
        );
        params.material_name = "  ".to_string();
        assert_eq!(params.validate().err(), Some("material name must not be empty"));
    }

    #[test]
    fn read_json_captures_deck_breaking_material_names() {
        let path = format!("{}/parameter_set_bad_material_name.json", DEFAULT_TEST_DIR);
        fs::create_dir_all(DEFAULT_TEST_DIR).unwrap();
        fs::write(&path, r#"{"material_name": "A,B\n*Elastic"}"#).unwrap();
        assert_eq!(
            ParameterSet::read_json(&path).err(),
            Some("material name must not contain commas or line breaks")
        );
    }

    #[test]
    fn validate_captures_oversized_ranges() {
        let mut params = ParameterSet::new();
        params.actuation_max = 1e20;
        assert_eq!(params.validate().err(), Some("actuation_max must be ≤ 2^53"));
        params.actuation_max = 1e9;
        assert_eq!(
            params.validate().err(),
            Some("actuation range exceeds the maximum number of voltage samples")
        );
        params.actuation_min = 1e9 - 100.0;
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn read_and_write_json_work() -> Result<(), StrError> {
        let mut params = ParameterSet::new();
        params.set_prestretch(1.2, 1.3)?.set_actuation_range(0.0, 100.0)?;
        let path = format!("{}/parameter_set_read_and_write.json", DEFAULT_TEST_DIR);
        params.write_json(&path)?;
        let read = ParameterSet::read_json(&path)?;
        assert_eq!(read, params);
        Ok(())
    }

    #[test]
    fn partial_json_takes_defaults() {
        let json = r#"{"filename": "short", "actuation_max": 10.0}"#;
        let params: ParameterSet = serde_json::from_str(json).unwrap();
        assert_eq!(params.filename, "short");
        assert_eq!(params.actuation_max, 10.0);
        assert_eq!(params.prestretch_x, 1.5);
        assert_eq!(params.output_format, "Abaqus");
    }

    #[test]
    fn display_works() {
        let params = ParameterSet::new();
        let text = format!("{}", params);
        assert!(text.starts_with("Parameters\n==========\n"));
        assert!(text.contains("emodulus = 1400400.0 Pa\n"));
        assert!(text.contains("actuation = [0.0, 5000.0] V\n"));
    }
}
