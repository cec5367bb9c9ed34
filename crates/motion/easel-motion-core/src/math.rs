//! Scalar helpers shared by the motion models, the sampler and the share codec.

/// Linear remap of `value` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// No clamping is applied; callers that need a bounded result clamp explicitly.
#[inline]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / span
}

/// Round to a fixed number of decimal places (half away from zero).
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // normalise -0.0 so formatting and equality stay stable
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a number with at most `decimals` fractional digits and no trailing zeros.
///
/// `0.500 -> "0.5"`, `1.000 -> "1"`, `-0.0001 -> "0"`.
pub fn format_number(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    let mut text = format!("{:.*}", decimals as usize, rounded);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Approximate equality for values that have already been rounded to `decimals`.
#[inline]
pub fn approx_eq(a: f64, b: f64, decimals: u32) -> bool {
    round_to(a, decimals) == round_to(b, decimals)
}
