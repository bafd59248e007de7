//! Implements the physics transformation from voltage sweep to expansion coefficients
//!
//! The stages run in this order, each one a pure function of the previous ones:
//!
//! 1. [VoltageSweep] -- ordered voltage samples
//! 2. [PrestretchState] -- 3-axis prestretch under volume constancy
//! 3. [ActuationStrain] -- Maxwell-stress strains with and without prestretch
//! 4. [compose_total_strain] -- actuation strain plus inverted prestrain
//! 5. [ExpansionTable] -- total strain divided by the stimulus value
//!
//! [Normalization] drives the whole sequence.

mod actuation_strain;
mod expansion_table;
mod material;
mod normalization;
mod prestretch;
mod strain_curves;
mod total_strain;
mod voltage_sweep;
pub use crate::physics::actuation_strain::*;
pub use crate::physics::expansion_table::*;
pub use crate::physics::material::*;
pub use crate::physics::normalization::*;
pub use crate::physics::prestretch::*;
pub use crate::physics::strain_curves::*;
pub use crate::physics::total_strain::*;
pub use crate::physics::voltage_sweep::*;
