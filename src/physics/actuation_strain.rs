use super::{MaterialParameters, PrestretchState, StrainCurves, VoltageSweep};
use crate::StrError;
use tracing::error;

/// Holds the Maxwell-stress actuation strains along the voltage sweep
///
/// The out-of-plane strain follows from the electrostatic pressure across the membrane:
///
/// ```text
///          ε₀ ε_r V²
/// εzz = - ───────────
///           E t²
/// ```
///
/// By volume conservation, the in-plane strains are:
///
/// ```text
/// εxx = εyy = (1 + εzz)^(-1/2) - 1
/// ```
///
/// Both curves are kept: with the prestretched thickness `t = t0 λz` (carried forward)
/// and with the initial thickness `t = t0` (reference only).
#[derive(Clone, Debug, PartialEq)]
pub struct ActuationStrain {
    /// Strains computed with the prestretched thickness
    pub with_prestretch: StrainCurves,

    /// Strains computed with the initial thickness
    pub without_prestretch: StrainCurves,
}

impl ActuationStrain {
    /// Evaluates the actuation strains for every voltage sample
    ///
    /// Returns an error if the compression `1 + εzz` reaches zero or below at any sample,
    /// since the in-plane strain is undefined there.
    pub fn new(
        sweep: &VoltageSweep,
        material: &MaterialParameters,
        prestretch: &PrestretchState,
    ) -> Result<Self, StrError> {
        let t_pre = prestretch.prestretched_thickness(material.thickness);
        let with_prestretch = strain_curves(sweep, material, t_pre)?;
        let without_prestretch = strain_curves(sweep, material, material.thickness)?;
        Ok(ActuationStrain {
            with_prestretch,
            without_prestretch,
        })
    }
}

/// Calculates the out-of-plane Maxwell-stress strain for a single voltage
pub fn maxwell_strain_zz(voltage: f64, material: &MaterialParameters, thickness: f64) -> f64 {
    -material.epsilon_0() * material.epsilon_r * voltage.powi(2) / (material.emodulus * thickness.powi(2))
}

/// Calculates the in-plane strain under incompressibility given the out-of-plane strain
///
/// Returns an error if `1 + strain_zz ≤ 0` (or NaN).
pub fn in_plane_strain(strain_zz: f64) -> Result<f64, StrError> {
    let compression = 1.0 + strain_zz;
    if !(compression > 0.0) || !compression.is_finite() {
        return Err("actuation strain collapses the membrane thickness (1 + strain_zz ≤ 0)");
    }
    Ok(compression.powf(-0.5) - 1.0)
}

/// Maps every voltage sample to its (xx, yy, zz) actuation strain
fn strain_curves(sweep: &VoltageSweep, material: &MaterialParameters, thickness: f64) -> Result<StrainCurves, StrError> {
    let samples = sweep.samples();
    let zz: Vec<f64> = samples
        .iter()
        .map(|&voltage| maxwell_strain_zz(voltage, material, thickness))
        .collect();
    let xx = samples
        .iter()
        .zip(&zz)
        .map(|(&voltage, &strain_zz)| {
            in_plane_strain(strain_zz).map_err(|e| {
                error!(voltage, strain_zz, thickness, "{}", e);
                e
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let curves = StrainCurves { yy: xx.clone(), xx, zz };
    curves.check_finite()?;
    Ok(curves)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{in_plane_strain, maxwell_strain_zz, ActuationStrain};
    use crate::physics::{MaterialParameters, PrestretchState, VoltageSweep};
    use approx::assert_relative_eq;

    fn reference_material() -> MaterialParameters {
        MaterialParameters::new(100e-6, 2.8, 1400.4e3).unwrap()
    }

    #[test]
    fn maxwell_strain_works() {
        let mat = reference_material();
        let t_pre = 100e-6 / 2.25;
        let expected = -8.854e-12 * 2.8 * 1.0 / (1400.4e3 * t_pre * t_pre);
        assert_relative_eq!(maxwell_strain_zz(1.0, &mat, t_pre), expected, max_relative = 1e-14);
        assert!(expected < 0.0 && expected > -1e-5);
        // V² makes the sign of the voltage irrelevant
        assert_eq!(maxwell_strain_zz(-3.0, &mat, t_pre), maxwell_strain_zz(3.0, &mat, t_pre));
    }

    #[test]
    fn in_plane_strain_works() {
        assert_eq!(in_plane_strain(0.0), Ok(0.0));
        assert_eq!(in_plane_strain(-0.0), Ok(0.0));
        assert_relative_eq!(in_plane_strain(-0.75).unwrap(), 1.0);
        assert_relative_eq!(in_plane_strain(3.0).unwrap(), -0.5);
    }

    #[test]
    fn in_plane_strain_captures_collapse() {
        let msg = "actuation strain collapses the membrane thickness (1 + strain_zz ≤ 0)";
        assert_eq!(in_plane_strain(-1.0).err(), Some(msg));
        assert_eq!(in_plane_strain(-1.5).err(), Some(msg));
        assert_eq!(in_plane_strain(f64::NAN).err(), Some(msg));
    }

    #[test]
    fn zero_voltage_gives_zero_strain() {
        let mat = reference_material();
        let pre = PrestretchState::new(1.5, 1.5).unwrap();
        let sweep = VoltageSweep::new(0.0, 10.0).unwrap();
        let act = ActuationStrain::new(&sweep, &mat, &pre).unwrap();
        assert_eq!(act.with_prestretch.at(0), [0.0, 0.0, 0.0]);
        assert_eq!(act.without_prestretch.at(0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn in_plane_components_are_equal() {
        let mat = reference_material();
        for (lx, ly) in [(1.5, 1.5), (2.0, 1.1), (1.0, 3.0)] {
            let pre = PrestretchState::new(lx, ly).unwrap();
            let sweep = VoltageSweep::new(0.0, 500.0).unwrap();
            let act = ActuationStrain::new(&sweep, &mat, &pre).unwrap();
            assert_eq!(act.with_prestretch.xx, act.with_prestretch.yy);
            assert_eq!(act.without_prestretch.xx, act.without_prestretch.yy);
        }
    }

    #[test]
    fn strain_magnitude_grows_with_voltage() {
        let mat = reference_material();
        let pre = PrestretchState::new(1.5, 1.5).unwrap();
        let sweep = VoltageSweep::new(0.0, 5000.0).unwrap();
        let act = ActuationStrain::new(&sweep, &mat, &pre).unwrap();
        for curves in [&act.with_prestretch, &act.without_prestretch] {
            for pair in curves.zz.windows(2) {
                assert!(pair[1].abs() >= pair[0].abs());
                assert!(pair[1] <= 0.0);
            }
            for pair in curves.xx.windows(2) {
                assert!(pair[1] >= pair[0]);
            }
        }
    }

    #[test]
    fn prestretch_increases_actuation() {
        let mat = reference_material();
        let pre = PrestretchState::new(1.5, 1.5).unwrap();
        let sweep = VoltageSweep::new(0.0, 1000.0).unwrap();
        let act = ActuationStrain::new(&sweep, &mat, &pre).unwrap();
        let last = sweep.len() - 1;
        // thickness ratio squared: (1/λz)² = 2.25² = 5.0625
        assert_relative_eq!(
            act.with_prestretch.zz[last] / act.without_prestretch.zz[last],
            5.0625,
            max_relative = 1e-12
        );
        assert!(act.with_prestretch.xx[last] > act.without_prestretch.xx[last]);
    }

    #[test]
    fn new_captures_collapse() {
        // soft and thin membrane: εzz passes -1 within the sweep
        let mat = MaterialParameters::new(1e-6, 2.8, 1e3).unwrap();
        let pre = PrestretchState::new(1.5, 1.5).unwrap();
        let sweep = VoltageSweep::new(0.0, 100.0).unwrap();
        assert_eq!(
            ActuationStrain::new(&sweep, &mat, &pre).err(),
            Some("actuation strain collapses the membrane thickness (1 + strain_zz ≤ 0)")
        );
    }
}
