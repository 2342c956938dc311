/// decimal places kept by every vector component
pub(crate) const DECIMALS: usize = 2;

/// round `value` to [`DECIMALS`] places on its exact decimal expansion,
/// ties to even
pub(crate) fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = format!("{:.*}", DECIMALS, value)
        .parse::<f64>()
        .unwrap_or(value);
    // keep -0.0 out of stored components so that equal vectors print alike
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
