/// Vacuum permittivity ε₀ (As/Vm)
pub const VACUUM_PERMITTIVITY: f64 = 8.854e-12;

/// Poisson's ratio written to the elastic-property line of the FEA deck
///
/// The elastomer is treated as nearly incompressible.
pub const DECK_POISSON: f64 = 0.45;

/// Conversion factor from Pa to MPa
pub const PA_PER_MPA: f64 = 1e6;

/// Maximum number of voltage samples of a sweep
pub const MAX_N_SAMPLE: usize = 10_000_000;

/// Maximum actuation voltage (V)
///
/// Above 2^53, adding a unit step to an `f64` no longer changes its value.
pub const MAX_VOLTAGE: f64 = 9_007_199_254_740_992.0;

/// Default material name used in the FEA deck header
pub const DEFAULT_MATERIAL_NAME: &str = "Material-hab_DEA_100_new";

/// Default filename stem of the exported files
pub const DEFAULT_FILENAME: &str = "normalization_dea_exported_dea_behavior";

/// Defines the directory where the exported files are saved when none is given
pub const DEFAULT_OUT_DIR: &str = ".";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/dea_expansion/test";
