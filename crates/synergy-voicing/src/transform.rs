//! Value remaps between displayed and stored envelope/detune codes.
//!
//! Out-of-range results saturate at the edge of the stored type; the
//! `checked_` forms return `None` instead.

/// Offset between displayed amplitude values and stored codes.
pub const AMP_ENV_BIAS: i32 = 55;

/// Largest displayed detune handled by the linear region (32 codes * 3).
pub const DETUNE_LINEAR_LIMIT: i32 = 32 * 3;

/// Frequency envelope values are stored as displayed.
pub fn unscale_freq_env_value(value: u8) -> u8 {
    value
}

pub fn checked_unscale_amp_env_value(value: i32) -> Option<u8> {
    u8::try_from(value.saturating_add(AMP_ENV_BIAS)).ok()
}

/// Displayed amplitude value to its stored code, saturating at 0..=255.
pub fn unscale_amp_env_value(value: i32) -> u8 {
    checked_unscale_amp_env_value(value).unwrap_or_else(|| {
        tracing::debug!("Amplitude value {} out of range, saturating", value);
        value.saturating_add(AMP_ENV_BIAS).clamp(0, u8::MAX as i32) as u8
    })
}

/// Stored amplitude code to its displayed value.
pub fn scale_amp_env_value(code: u8) -> i32 {
    code as i32 - AMP_ENV_BIAS
}

/// Displayed detune to a stored code, before narrowing.
fn unscale_detune_wide(value: i32) -> i32 {
    if value > DETUNE_LINEAR_LIMIT {
        ((value / 3) + 32) / 2
    } else if value < -DETUNE_LINEAR_LIMIT {
        ((value / 3) - 32) / 2
    } else {
        value / 3
    }
}

pub fn checked_unscale_detune(value: i32) -> Option<i8> {
    i8::try_from(unscale_detune_wide(value)).ok()
}

/// Displayed detune to its stored signed code.
///
/// Within +-96 the firmware uses steps of 3; beyond that the steps double.
/// Codes outside the `i8` range saturate.
pub fn unscale_detune(value: i32) -> i8 {
    let wide = unscale_detune_wide(value);
    i8::try_from(wide).unwrap_or_else(|_| {
        tracing::debug!("Detune {} maps to code {} outside i8, saturating", value, wide);
        wide.clamp(i8::MIN as i32, i8::MAX as i32) as i8
    })
}

/// Stored detune code to its displayed value.
pub fn scale_detune(code: i8) -> i32 {
    let code = code as i32;
    if code > 32 {
        code * 6 - DETUNE_LINEAR_LIMIT
    } else if code < -32 {
        code * 6 + DETUNE_LINEAR_LIMIT
    } else {
        code * 3
    }
}
