use crate::base::{check_positive, ParameterSet, PA_PER_MPA, VACUUM_PERMITTIVITY};
use crate::StrError;

/// Holds the dielectric and elastic properties of the membrane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialParameters {
    /// Membrane thickness before prestretching t₀ (m)
    pub thickness: f64,

    /// Relative permittivity ε_r
    pub epsilon_r: f64,

    /// Elastic modulus E (Pa)
    pub emodulus: f64,
}

impl MaterialParameters {
    /// Allocates a new instance
    pub fn new(thickness: f64, epsilon_r: f64, emodulus: f64) -> Result<Self, StrError> {
        check_positive(thickness, "thickness must be > 0.0")?;
        check_positive(epsilon_r, "relative permittivity must be > 0.0")?;
        check_positive(emodulus, "elastic modulus must be > 0.0")?;
        Ok(MaterialParameters {
            thickness,
            epsilon_r,
            emodulus,
        })
    }

    /// Allocates a new instance from the input parameters
    pub fn from_params(params: &ParameterSet) -> Result<Self, StrError> {
        MaterialParameters::new(params.t_membrane, params.epsilon_r, params.emodulus)
    }

    /// Returns the vacuum permittivity ε₀ (As/Vm)
    pub fn epsilon_0(&self) -> f64 {
        VACUUM_PERMITTIVITY
    }

    /// Returns the absolute permittivity ε₀ · ε_r
    pub fn permittivity(&self) -> f64 {
        VACUUM_PERMITTIVITY * self.epsilon_r
    }

    /// Returns the elastic modulus in MPa
    pub fn emodulus_mpa(&self) -> f64 {
        self.emodulus / PA_PER_MPA
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::MaterialParameters;
    use crate::base::ParameterSet;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            MaterialParameters::new(0.0, 2.8, 1e6).err(),
            Some("thickness must be > 0.0")
        );
        assert_eq!(
            MaterialParameters::new(1e-4, -2.8, 1e6).err(),
            Some("relative permittivity must be > 0.0")
        );
        assert_eq!(
            MaterialParameters::new(1e-4, 2.8, 0.0).err(),
            Some("elastic modulus must be > 0.0")
        );
    }

    #[test]
    fn from_params_works() {
        let params = ParameterSet::new();
        let mat = MaterialParameters::from_params(&params).unwrap();
        assert_eq!(mat.thickness, 100e-6);
        assert_eq!(mat.epsilon_r, 2.8);
        assert_eq!(mat.emodulus, 1400.4e3);
        assert_eq!(mat.epsilon_0(), 8.854e-12);
        assert_eq!(mat.permittivity(), 8.854e-12 * 2.8);
        assert_eq!(mat.emodulus_mpa(), 1.4004);
    }
}
