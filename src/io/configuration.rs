//! Default dimensions and safety limits

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 15;

/// Default number of grid columns
pub const DEFAULT_COLUMNS: usize = 60;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
