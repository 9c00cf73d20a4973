//! Unit heuristics for inputs that callers supply in more than one unit.

/// mmol/L urea → mg/dL BUN.
pub const UREA_TO_BUN_FACTOR: f64 = 2.8;

/// CURB-65 treats urea values at or below this as mmol/L.
pub const CURB65_UREA_CROSSOVER: f64 = 40.0;

/// Glasgow-Blatchford treats urea values at or below this as mmol/L.
pub const BLATCHFORD_UREA_CROSSOVER: f64 = 50.0;

/// Convert a urea-or-BUN figure to BUN in mg/dL.
///
/// Values at or below `crossover` are taken to be urea in mmol/L and
/// converted; anything above is assumed to already be mg/dL. A genuinely
/// low mg/dL value near the crossover cannot be told apart from a mmol/L
/// one, so it is converted as well.
pub fn convert_urea_to_bun(value: f64, crossover: f64) -> f64 {
    if value <= crossover {
        value * UREA_TO_BUN_FACTOR
    } else {
        value
    }
}

/// FiO2 as a fraction. Values above 1 are read as a percentage.
pub fn normalize_fio2(value: f64) -> f64 {
    if value > 1.0 { value / 100.0 } else { value }
}
