//! Dielectric elastomer actuator (DEA) to FEA expansion-coefficient normalization
//!
//! A voltage sweep is turned into Maxwell-stress actuation strains, combined with the
//! (inverted) membrane prestretch, and rescaled by a dimensionless stimulus value so that
//! an FEA solver can consume the result as an anisotropic thermal-expansion material.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod export;
mod job;
pub mod physics;
pub mod plot;
pub mod prelude;
pub use crate::job::*;
