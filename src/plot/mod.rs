//! Implements the diagnostic figures of the normalization stages

mod plotter;
pub use crate::plot::plotter::*;
