use crate::StrError;

/// Holds the xx, yy, and zz components of a strain-like quantity along the voltage sweep
///
/// Each vector has one entry per voltage sample.
#[derive(Clone, Debug, PartialEq)]
pub struct StrainCurves {
    /// Component along x
    pub xx: Vec<f64>,

    /// Component along y
    pub yy: Vec<f64>,

    /// Component along z (out-of-plane)
    pub zz: Vec<f64>,
}

impl StrainCurves {
    /// Allocates a new instance with zeroed components
    pub fn new(n_sample: usize) -> Self {
        StrainCurves {
            xx: vec![0.0; n_sample],
            yy: vec![0.0; n_sample],
            zz: vec![0.0; n_sample],
        }
    }

    /// Returns the number of samples
    pub fn len(&self) -> usize {
        self.zz.len()
    }

    /// Returns true if there are no samples
    pub fn is_empty(&self) -> bool {
        self.zz.is_empty()
    }

    /// Returns the (xx, yy, zz) triple at a sample
    ///
    /// # Panics
    ///
    /// A panic occurs if `index` is out of bounds.
    pub fn at(&self, index: usize) -> [f64; 3] {
        [self.xx[index], self.yy[index], self.zz[index]]
    }

    /// Returns an error if any component is NaN or infinite
    pub fn check_finite(&self) -> Result<(), StrError> {
        let all = self.xx.iter().chain(self.yy.iter()).chain(self.zz.iter());
        for value in all {
            if !value.is_finite() {
                return Err("strain components must be finite");
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
