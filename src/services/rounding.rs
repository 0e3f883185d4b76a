/// Rounds to the nearest integer with halves going towards positive
/// infinity (`-2.5 => -2`, `2.5 => 3`).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Rounds to `decimals` places using [`round_half_up`].
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    round_half_up(value * scale) / scale
}
