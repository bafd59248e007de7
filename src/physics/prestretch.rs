use crate::base::check_positive;
use crate::StrError;

/// Holds the 3-axis prestretch of the membrane
///
/// The out-of-plane factor follows from volume constancy:
///
/// ```text
/// λx · λy · λz = 1  ⇒  λz = 1 / (λx · λy)
/// ```
///
/// The prestrain of each axis is `λ - 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrestretchState {
    lambda: [f64; 3],
}

impl PrestretchState {
    /// Allocates a new instance from the in-plane prestretch factors
    pub fn new(lambda_x: f64, lambda_y: f64) -> Result<Self, StrError> {
        check_positive(lambda_x, "prestretch_x must be > 0.0")?;
        check_positive(lambda_y, "prestretch_y must be > 0.0")?;
        let area_ratio = lambda_x * lambda_y;
        check_positive(area_ratio, "prestretch product must be > 0.0")?;
        let lambda_z = 1.0 / area_ratio;
        if !lambda_z.is_finite() {
            return Err("out-of-plane prestretch is not finite");
        }
        Ok(PrestretchState {
            lambda: [lambda_x, lambda_y, lambda_z],
        })
    }

    /// Returns the prestretch factors (λx, λy, λz)
    pub fn stretches(&self) -> [f64; 3] {
        self.lambda
    }

    /// Returns the prestretch factor in x
    pub fn lambda_x(&self) -> f64 {
        self.lambda[0]
    }

    /// Returns the prestretch factor in y
    pub fn lambda_y(&self) -> f64 {
        self.lambda[1]
    }

    /// Returns the derived prestretch factor in z
    pub fn lambda_z(&self) -> f64 {
        self.lambda[2]
    }

    /// Returns the prestrains (λ - 1) of each axis
    pub fn prestrains(&self) -> [f64; 3] {
        self.lambda.map(|l| l - 1.0)
    }

    /// Returns the inverted view (1/λx, 1/λy, 1/λz)
    ///
    /// Inverting twice recovers the original factors.
    pub fn inverted(&self) -> PrestretchState {
        PrestretchState {
            lambda: self.lambda.map(|l| 1.0 / l),
        }
    }

    /// Returns the prestrains of the inverted view, i.e., (1/λ - 1) of each axis
    ///
    /// These bring the prestretched reference configuration back towards the unstretched state.
    pub fn inverted_prestrains(&self) -> [f64; 3] {
        self.inverted().prestrains()
    }

    /// Returns the membrane thickness after prestretching
    ///
    /// Biaxial stretching (λx · λy > 1) thins the membrane: `t_pre = t0 · λz < t0`.
    pub fn prestretched_thickness(&self, t0: f64) -> f64 {
        t0 * self.lambda[2]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
