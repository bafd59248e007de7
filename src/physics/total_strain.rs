use super::{PrestretchState, StrainCurves};
use crate::StrError;

/// Composes the total engineering strain from actuation strain and prestretch
///
/// Small-strain superposition: the inverted prestrain (1/λ - 1) of each axis is added
/// to the actuation strain computed with the prestretched thickness.
///
/// ```text
/// ε_total = ε_act + (1/λ - 1)
/// ```
pub fn compose_total_strain(actuation: &StrainCurves, prestretch: &PrestretchState) -> Result<StrainCurves, StrError> {
    let [inv_x, inv_y, inv_z] = prestretch.inverted_prestrains();
    let total = StrainCurves {
        xx: actuation.xx.iter().map(|e| e + inv_x).collect(),
        yy: actuation.yy.iter().map(|e| e + inv_y).collect(),
        zz: actuation.zz.iter().map(|e| e + inv_z).collect(),
    };
    total.check_finite()?;
    Ok(total)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
