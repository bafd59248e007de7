use super::{StrainCurves, VoltageSweep};
use crate::StrError;

/// Number of columns of an exported row: αxx, αyy, αzz, three shear terms, and the stimulus
pub const N_COLUMN: usize = 7;

/// Holds the voltage-normalized anisotropic expansion coefficients
///
/// The stimulus value plays the role of the temperature in a thermal-expansion table:
///
/// ```text
/// S(V) = V / V_ref + 1
/// α(V) = ε_total(V) / S(V)
/// ```
///
/// where `V_ref` is the maximum voltage of the sweep. Thus, `S = 1` at `V = 0` and `S = 2` at `V = V_ref`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpansionTable {
    /// Expansion coefficients (αxx, αyy, αzz) per sample
    pub alpha: StrainCurves,

    /// Stimulus value per sample
    pub stimulus: Vec<f64>,
}

impl ExpansionTable {
    /// Normalizes the total strain by the stimulus value
    pub fn new(sweep: &VoltageSweep, total_strain: &StrainCurves) -> Result<Self, StrError> {
        if sweep.len() != total_strain.len() {
            return Err("total strain must have one entry per voltage sample");
        }
        let v_ref = sweep.reference();
        if !(v_ref > 0.0) {
            return Err("reference voltage must be > 0.0");
        }
        let stimulus: Vec<f64> = sweep.samples().iter().map(|v| stimulus_value(*v, v_ref)).collect();
        if stimulus.iter().any(|s| !(*s > 0.0)) {
            return Err("stimulus values must be > 0.0");
        }
        let normalize = |strain: &[f64]| -> Vec<f64> { strain.iter().zip(&stimulus).map(|(e, s)| e / s).collect() };
        let alpha = StrainCurves {
            xx: normalize(total_strain.xx.as_slice()),
            yy: normalize(total_strain.yy.as_slice()),
            zz: normalize(total_strain.zz.as_slice()),
        };
        alpha.check_finite()?;
        Ok(ExpansionTable { alpha, stimulus })
    }

    /// Allocates a new instance from exported rows
    ///
    /// Each row is (αxx, αyy, αzz, 0, 0, 0, stimulus).
    pub fn from_rows(rows: &[[f64; N_COLUMN]]) -> Result<Self, StrError> {
        let mut alpha = StrainCurves::new(rows.len());
        let mut stimulus = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row[3] != 0.0 || row[4] != 0.0 || row[5] != 0.0 {
                return Err("shear expansion columns must be zero");
            }
            alpha.xx[i] = row[0];
            alpha.yy[i] = row[1];
            alpha.zz[i] = row[2];
            stimulus.push(row[6]);
        }
        alpha.check_finite()?;
        if stimulus.iter().any(|s| !s.is_finite()) {
            return Err("stimulus values must be finite");
        }
        Ok(ExpansionTable { alpha, stimulus })
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.stimulus.len()
    }

    /// Returns true if there are no rows
    pub fn is_empty(&self) -> bool {
        self.stimulus.is_empty()
    }

    /// Returns a row in export order: (αxx, αyy, αzz, 0, 0, 0, stimulus)
    ///
    /// # Panics
    ///
    /// A panic occurs if `index` is out of bounds.
    pub fn row(&self, index: usize) -> [f64; N_COLUMN] {
        let [xx, yy, zz] = self.alpha.at(index);
        [xx, yy, zz, 0.0, 0.0, 0.0, self.stimulus[index]]
    }

    /// Returns all rows in export order
    pub fn rows(&self) -> Vec<[f64; N_COLUMN]> {
        (0..self.len()).map(|i| self.row(i)).collect()
    }
}

/// Calculates the stimulus value `V / V_ref + 1`
pub fn stimulus_value(voltage: f64, v_ref: f64) -> f64 {
    voltage / v_ref + 1.0
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
