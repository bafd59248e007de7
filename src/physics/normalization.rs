use super::{compose_total_strain, ActuationStrain, ExpansionTable, MaterialParameters, PrestretchState};
use super::{StrainCurves, VoltageSweep};
use crate::base::ParameterSet;
use crate::StrError;
use tracing::{debug, info};

/// Holds every stage of a voltage-to-expansion normalization
///
/// All members are computed once by [Normalization::new] and never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalization {
    /// Membrane properties
    pub material: MaterialParameters,

    /// Prestretch with the derived out-of-plane factor
    pub prestretch: PrestretchState,

    /// Voltage samples
    pub sweep: VoltageSweep,

    /// Actuation strains with and without the prestretch correction
    pub actuation: ActuationStrain,

    /// Total strain (prestretch-corrected actuation strain plus inverted prestrain)
    pub total_strain: StrainCurves,

    /// Expansion coefficients and stimulus values
    pub table: ExpansionTable,
}

impl Normalization {
    /// Runs the physics stages for the given parameters
    ///
    /// The parameters are validated first; any non-finite intermediate result aborts the run.
    pub fn new(params: &ParameterSet) -> Result<Self, StrError> {
        params.validate()?;
        let material = MaterialParameters::from_params(params)?;
        let prestretch = PrestretchState::new(params.prestretch_x, params.prestretch_y)?;
        let sweep = VoltageSweep::new(params.actuation_min, params.actuation_max)?;
        debug!(
            lambda_z = prestretch.lambda_z(),
            t_pre = prestretch.prestretched_thickness(material.thickness),
            n_sample = sweep.len(),
            "prestretch resolved"
        );

        let actuation = ActuationStrain::new(&sweep, &material, &prestretch)?;
        let total_strain = compose_total_strain(&actuation.with_prestretch, &prestretch)?;
        let table = ExpansionTable::new(&sweep, &total_strain)?;

        let last = sweep.len() - 1;
        info!(
            v_ref = sweep.reference(),
            strain_zz = actuation.with_prestretch.zz[last],
            alpha_zz = table.alpha.zz[last],
            "expansion coefficients computed"
        );
        Ok(Normalization {
            material,
            prestretch,
            sweep,
            actuation,
            total_strain,
            table,
        })
    }

    /// Returns the membrane thickness after prestretching
    pub fn prestretched_thickness(&self) -> f64 {
        self.prestretch.prestretched_thickness(self.material.thickness)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
