//! Decimal rounding by scaling, used for plot and summary bounds.
//!
//! These scale by a power of ten, apply ceil/floor/round, and scale back. They do not
//! attempt to correct for binary representation error, so `round_down(0.15, 1)` is `0.1`.

/// The scale factor for a number of decimal places. Negative places scale down.
fn multiplier(decimals: i32) -> f64 {
    if decimals >= 0 {
        10f64.powi(decimals)
    } else {
        1.0 / 10f64.powi(-decimals)
    }
}

/// Round towards positive infinity at the given number of decimal places
pub fn round_up(n: f64, decimals: i32) -> f64 {
    let scale = multiplier(decimals);
    (n * scale).ceil() / scale
}

/// Round towards negative infinity at the given number of decimal places
pub fn round_down(n: f64, decimals: i32) -> f64 {
    let scale = multiplier(decimals);
    (n * scale).floor() / scale
}
