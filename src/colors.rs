//! Integer hue wheels.
//!
//! Each wheel splits the 8-bit hue domain into equal arcs. Inside an arc
//! exactly two of red, green and blue change linearly while the third is
//! held at 0 or 255. Arc upper bounds are exclusive, so every hue belongs
//! to exactly one arc.
//!
//! All wheels accept a saturation argument and ignore it: output is always
//! fully saturated. `value` scales the hue-resolved channels afterwards.
//!
//! The wheels differ in arc count and in which channel is held at which
//! extreme. Animations pick one explicitly through [`HueWheel`].

use crate::map::{map_u8, scale};
use palette::Srgb;

const THIRD: u8 = 255 / 3;
const TWO_THIRDS: u8 = (255 * 2 / 3) as u8;

const SIXTH: [u8; 5] = [
    (255 / 6) as u8,
    (255 * 2 / 6) as u8,
    (255 * 3 / 6) as u8,
    (255 * 4 / 6) as u8,
    (255 * 5 / 6) as u8,
];

const QUARTER: [u8; 3] = [(255 / 4) as u8, (255 * 2 / 4) as u8, (255 * 3 / 4) as u8];

/// Remaps `hue` across the arc `[start, end]` onto `[from, to]`.
#[inline]
const fn ramp(hue: u8, start: u8, end: u8, from: u8, to: u8) -> u8 {
    map_u8(hue as i64, start as i64, end as i64, from, to)
}

#[inline]
const fn scaled(red: u8, green: u8, blue: u8, value: u8) -> Srgb<u8> {
    Srgb::new(scale(red, value), scale(green, value), scale(blue, value))
}

/// Three-arc wheel: red → green → blue → red.
///
/// Within each arc one primary fades out while the next fades in, so the
/// pair always sums to 255.
pub const fn three_sector(hue: u8, _saturation: u8, value: u8) -> Srgb<u8> {
    let (red, green, blue) = if hue < THIRD {
        let green = ramp(hue, 0, THIRD - 1, 0, 255);
        (255 - green, green, 0)
    } else if hue < TWO_THIRDS {
        let blue = ramp(hue, THIRD, TWO_THIRDS - 1, 0, 255);
        (0, 255 - blue, blue)
    } else {
        let red = ramp(hue, TWO_THIRDS, 255, 0, 255);
        (red, 0, 255 - red)
    };

    scaled(red, green, blue, value)
}

/// Six-arc wheel: red → yellow → green → cyan → blue → magenta → red.
///
/// One channel moves per arc while one of the others is held at 255.
pub const fn six_sector(hue: u8, _saturation: u8, value: u8) -> Srgb<u8> {
    let (red, green, blue) = if hue < SIXTH[0] {
        (255, ramp(hue, 0, SIXTH[0] - 1, 0, 255), 0)
    } else if hue < SIXTH[1] {
        (ramp(hue, SIXTH[0], SIXTH[1] - 1, 255, 0), 255, 0)
    } else if hue < SIXTH[2] {
        (0, 255, ramp(hue, SIXTH[1], SIXTH[2] - 1, 0, 255))
    } else if hue < SIXTH[3] {
        (0, ramp(hue, SIXTH[2], SIXTH[3] - 1, 255, 0), 255)
    } else if hue < SIXTH[4] {
        (ramp(hue, SIXTH[3], SIXTH[4] - 1, 0, 255), 0, 255)
    } else {
        (255, 0, ramp(hue, SIXTH[4], 255, 255, 0))
    };

    scaled(red, green, blue, value)
}

/// Four-arc cool palette: blue → red → blue → green → blue.
///
/// Green and red never mix, which keeps the palette in violet and teal
/// tones.
pub const fn four_sector(hue: u8, _saturation: u8, value: u8) -> Srgb<u8> {
    let (red, green, blue) = if hue < QUARTER[0] {
        let red = ramp(hue, 0, QUARTER[0] - 1, 0, 255);
        (red, 0, 255 - red)
    } else if hue < QUARTER[1] {
        let blue = ramp(hue, QUARTER[0], QUARTER[1] - 1, 0, 255);
        (255 - blue, 0, blue)
    } else if hue < QUARTER[2] {
        let green = ramp(hue, QUARTER[1], QUARTER[2] - 1, 0, 255);
        (0, green, 255 - green)
    } else {
        let blue = ramp(hue, QUARTER[2], 255, 0, 255);
        (0, 255 - blue, blue)
    };

    scaled(red, green, blue, value)
}

/// Selects one of the hue wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HueWheel {
    /// [`three_sector`]: primary-to-primary blends.
    ThreeSector,

    /// [`six_sector`]: full spectrum including secondaries.
    #[default]
    SixSector,

    /// [`four_sector`]: blue-centered cool palette.
    FourSector,
}

impl HueWheel {
    /// Converts a hue with this wheel.
    #[inline]
    pub const fn to_rgb(self, hue: u8, saturation: u8, value: u8) -> Srgb<u8> {
        match self {
            HueWheel::ThreeSector => three_sector(hue, saturation, value),
            HueWheel::SixSector => six_sector(hue, saturation, value),
            HueWheel::FourSector => four_sector(hue, saturation, value),
        }
    }
}
