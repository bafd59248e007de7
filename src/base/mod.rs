//! Implements the base structures: constants, input parameters, and output paths

mod constants;
mod output_paths;
mod parameter_set;
pub use crate::base::constants::*;
pub use crate::base::output_paths::*;
pub use crate::base::parameter_set::*;
