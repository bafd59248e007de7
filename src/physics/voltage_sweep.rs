use crate::base::check_voltage_range;
use crate::StrError;

/// Holds the ordered voltage samples of an actuation sweep
///
/// One sample per unit step from the minimum up to the maximum (inclusive),
/// i.e., `v_min + i` for `i = 0, 1, ..., floor(v_max - v_min)`.
#[derive(Clone, Debug, PartialEq)]
pub struct VoltageSweep {
    samples: Vec<f64>,
}

impl VoltageSweep {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `v_min` -- minimum voltage (≥ 0)
    /// * `v_max` -- maximum voltage (> 0 and ≥ v_min)
    pub fn new(v_min: f64, v_max: f64) -> Result<Self, StrError> {
        check_voltage_range(v_min, v_max)?;
        let n_step = (v_max - v_min).floor() as usize;
        let samples = (0..=n_step).map(|i| v_min + i as f64).collect();
        Ok(VoltageSweep { samples })
    }

    /// Returns the number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples (never happens for a valid sweep)
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the voltage samples in ascending order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the reference voltage, i.e., the last (maximum) sample
    pub fn reference(&self) -> f64 {
        match self.samples.last() {
            Some(v) => *v,
            None => 0.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
