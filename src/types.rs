//! Core types shared by the link, the color helpers and the animations.

use palette::Srgb;

/// Frame counter driving every animation.
///
/// Incremented once per frame and wrapping on overflow. It is the only
/// animation state that survives from one frame to the next.
pub type Tick = u32;

/// One pixel's color: red, green, blue and white intensities.
///
/// Fields are stored in the usual R-G-B-W order; [`Rgbw::grbw_bytes`] gives
/// the G-R-B-W order the chain expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgbw {
    /// Red intensity.
    pub red: u8,

    /// Green intensity.
    pub green: u8,

    /// Blue intensity.
    pub blue: u8,

    /// White intensity.
    pub white: u8,
}

impl Rgbw {
    /// All channels off.
    pub const BLACK: Rgbw = Rgbw::new(0, 0, 0, 0);
    /// Full red.
    pub const RED: Rgbw = Rgbw::new(255, 0, 0, 0);
    /// Full green.
    pub const GREEN: Rgbw = Rgbw::new(0, 255, 0, 0);
    /// Full blue.
    pub const BLUE: Rgbw = Rgbw::new(0, 0, 255, 0);
    /// Full white channel, RGB off.
    pub const WHITE: Rgbw = Rgbw::new(0, 0, 0, 255);

    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Combines a hue-resolved RGB color with a white level.
    #[inline]
    pub const fn from_rgb(rgb: Srgb<u8>, white: u8) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue, white)
    }

    /// Red-only color.
    #[inline]
    pub const fn red_only(red: u8) -> Self {
        Self::new(red, 0, 0, 0)
    }

    /// Green-only color.
    #[inline]
    pub const fn green_only(green: u8) -> Self {
        Self::new(0, green, 0, 0)
    }

    /// Blue-only color.
    #[inline]
    pub const fn blue_only(blue: u8) -> Self {
        Self::new(0, 0, blue, 0)
    }

    /// The RGB part of this color.
    #[inline]
    pub const fn rgb(&self) -> Srgb<u8> {
        Srgb::new(self.red, self.green, self.blue)
    }

    /// Bytes in transmission order: green, red, blue, white.
    #[inline]
    pub const fn grbw_bytes(&self) -> [u8; 4] {
        [self.green, self.red, self.blue, self.white]
    }

    /// Returns true if every channel is zero.
    #[inline]
    pub const fn is_dark(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0 && self.white == 0
    }
}

impl From<Srgb<u8>> for Rgbw {
    fn from(rgb: Srgb<u8>) -> Self {
        Rgbw::from_rgb(rgb, 0)
    }
}

impl From<[u8; 4]> for Rgbw {
    /// Interprets the array as `[red, green, blue, white]`.
    fn from(raw: [u8; 4]) -> Self {
        Rgbw::new(raw[0], raw[1], raw[2], raw[3])
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pixel count of zero.
    NoPixels,

    /// An animation period or step duration of zero.
    ZeroDuration,

    /// An animation period does not fit a tick.
    PeriodOverflow,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoPixels => write!(f, "pixel count must be at least 1"),
            ConfigError::ZeroDuration => write!(f, "animation durations must be non-zero"),
            ConfigError::PeriodOverflow => {
                write!(f, "animation period exceeds the tick range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
