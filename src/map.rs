//! Integer range remapping.
//!
//! Every range conversion in the crate goes through [`map`]. It uses only
//! integer arithmetic and truncates toward zero, so the same inputs always
//! produce the same channel values on any target.

/// Linearly remaps `x` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Division truncates toward zero. Values of `x` outside the input range
/// are extrapolated, not clamped. `in_min` must differ from `in_max`; an
/// empty input range returns `out_min`.
///
/// # Example
/// ```
/// use glowing_ball::map;
///
/// assert_eq!(map(5000, 0, 10000, 0, 255), 127);
/// assert_eq!(map(0, 0, 41, 255, 0), 255);
/// ```
#[inline]
pub const fn map(x: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    if in_min == in_max {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Remaps `x` like [`map`] and clamps the result into the declared output
/// range, narrowed to a color channel.
///
/// Channel values can therefore never leave `[min(out_min, out_max),
/// max(out_min, out_max)]`, even when `x` lies outside the input range.
#[inline]
pub const fn map_u8(x: i64, in_min: i64, in_max: i64, out_min: u8, out_max: u8) -> u8 {
    let (low, high) = if out_min <= out_max {
        (out_min, out_max)
    } else {
        (out_max, out_min)
    };

    let value = map(x, in_min, in_max, out_min as i64, out_max as i64);
    if value < low as i64 {
        low
    } else if value > high as i64 {
        high
    } else {
        value as u8
    }
}

/// Scales an already hue-resolved channel by `value` (0 = off, 255 = unchanged).
#[inline]
pub(crate) const fn scale(channel: u8, value: u8) -> u8 {
    map_u8(channel as i64, 0, 255, 0, value)
}
