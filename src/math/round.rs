/// Rounds `x` to `digits` decimals, ties to even.
pub fn round(x: f64, digits: u32) -> f64 {
    // 10^digits is split in two so neither factor overflows for large digits
    let (pow1, pow2) = if digits > 22 {
        (10f64.powi((digits - 22) as i32), 1e22)
    } else {
        (10f64.powi(digits as i32), 1.0)
    };

    let y = (x * pow1) * pow2;
    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }
    (z / pow2) / pow1
}

/// Fractional minutes to whole seconds, ties away from zero.
pub fn minutes_to_seconds(minutes: f64) -> i64 {
    (minutes * 60.0).round() as i64
}
