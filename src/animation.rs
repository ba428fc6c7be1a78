//! Stateless animations.
//!
//! Each [`Animation`] turns a tick and the pixel count into a [`Frame`].
//! Nothing is carried between frames: the same tick always produces the
//! same colors, and every animation repeats after [`Animation::period`]
//! ticks.

use crate::breath::BreathEnvelope;
use crate::colors::{HueWheel, six_sector, three_sector};
use crate::frame::Frame;
use crate::link::PixelLink;
use crate::map::{map, map_u8};
use crate::types::{ConfigError, Rgbw, Tick};
use crate::wire::PixelWire;

/// The animation compiled into a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Animation {
    /// Primary colors wiping over each other, one pixel every `step` ticks.
    ///
    /// The wipe runs red over blue, then green over red, then blue over
    /// green.
    Chase {
        /// Ticks per wiped pixel.
        step: u32,
    },

    /// Uniform color rotating through `wheel` while the white channel
    /// follows `envelope`.
    HueBreath {
        /// Ticks per hue revolution.
        hue_period: u32,
        /// Wheel the hue is resolved with (at full value).
        wheel: HueWheel,
        /// White channel envelope.
        envelope: BreathEnvelope,
    },

    /// Uniform color rotating through the three-arc wheel.
    HueRotate {
        /// Ticks per hue revolution.
        period: u32,
    },

    /// Uniform color rotating through the six-arc wheel.
    PaletteRotate {
        /// Ticks per hue revolution.
        period: u32,
    },

    /// The chain split at its midpoint, each half showing one channel of a
    /// six-arc hue. Halves trade channels after every hue revolution.
    Split {
        /// Ticks per hue revolution.
        period: u32,
    },

    /// Hue rotation at sub-pixel resolution: one channel at a time sweeps
    /// along the chain, with the front pixel partially lit.
    Rainbow {
        /// Ticks per full six-phase revolution.
        period: u32,
    },

    /// A fixed color.
    Solid(Rgbw),
}

impl Animation {
    pub const CHASE: Animation = Animation::Chase { step: 100 };

    pub const HUE_BREATH: Animation = Animation::HueBreath {
        hue_period: 10_000,
        wheel: HueWheel::SixSector,
        envelope: BreathEnvelope::REFERENCE,
    };

    pub const HUE_ROTATE: Animation = Animation::HueRotate { period: 10_000 };

    pub const PALETTE_ROTATE: Animation = Animation::PaletteRotate { period: 20_000 };

    pub const SPLIT: Animation = Animation::Split { period: 10_000 };

    pub const RAINBOW: Animation = Animation::Rainbow { period: 20_000 };

    /// Warm orange with a touch of white.
    pub const SOLID: Animation = Animation::Solid(Rgbw::new(255, 100, 0, 10));

    /// Checks that every period is non-zero and fits a [`Tick`] for a
    /// chain of `pixel_count` pixels.
    pub const fn validate(&self, pixel_count: u8) -> Result<(), ConfigError> {
        if pixel_count == 0 {
            return Err(ConfigError::NoPixels);
        }

        match *self {
            Animation::Chase { step } => {
                if step == 0 {
                    return Err(ConfigError::ZeroDuration);
                }
                match step.checked_mul(pixel_count as u32 * 3) {
                    Some(_) => Ok(()),
                    None => Err(ConfigError::PeriodOverflow),
                }
            }
            Animation::HueBreath {
                hue_period,
                envelope,
                ..
            } => {
                if hue_period == 0 {
                    return Err(ConfigError::ZeroDuration);
                }
                match envelope.period() {
                    Some(0) => Err(ConfigError::ZeroDuration),
                    Some(_) => Ok(()),
                    None => Err(ConfigError::PeriodOverflow),
                }
            }
            Animation::HueRotate { period }
            | Animation::PaletteRotate { period }
            | Animation::Rainbow { period } => {
                if period == 0 {
                    Err(ConfigError::ZeroDuration)
                } else {
                    Ok(())
                }
            }
            Animation::Split { period } => {
                if period == 0 {
                    return Err(ConfigError::ZeroDuration);
                }
                match period.checked_mul(2) {
                    Some(_) => Ok(()),
                    None => Err(ConfigError::PeriodOverflow),
                }
            }
            Animation::Solid(_) => Ok(()),
        }
    }

    /// Ticks after which the animation repeats.
    ///
    /// Only meaningful for a configuration that passed
    /// [`validate`](Animation::validate).
    pub fn period(&self, pixel_count: u8) -> u64 {
        match *self {
            Animation::Chase { step } => u64::from(step) * u64::from(pixel_count) * 3,
            Animation::HueBreath {
                hue_period,
                envelope,
                ..
            } => {
                let breath = u64::from(envelope.period().unwrap_or(1));
                lcm(u64::from(hue_period), breath)
            }
            Animation::HueRotate { period }
            | Animation::PaletteRotate { period }
            | Animation::Rainbow { period } => u64::from(period),
            Animation::Split { period } => u64::from(period) * 2,
            Animation::Solid(_) => 1,
        }
    }

    /// Colors of every pixel at `tick`.
    ///
    /// Only meaningful for a configuration that passed
    /// [`validate`](Animation::validate).
    pub fn frame(&self, tick: Tick, pixel_count: u8) -> Frame {
        match *self {
            Animation::Chase { step } => chase(tick, step, pixel_count),
            Animation::HueBreath {
                hue_period,
                wheel,
                envelope,
            } => {
                let rgb = wheel.to_rgb(hue_at(tick, hue_period), 0, 255);
                Frame::uniform(Rgbw::from_rgb(rgb, envelope.level(tick)), pixel_count)
            }
            Animation::HueRotate { period } => {
                let rgb = three_sector(hue_at(tick, period), 0, 255);
                Frame::uniform(Rgbw::from_rgb(rgb, 0), pixel_count)
            }
            Animation::PaletteRotate { period } => {
                let rgb = six_sector(hue_at(tick, period), 255, 255);
                Frame::uniform(Rgbw::from_rgb(rgb, 0), pixel_count)
            }
            Animation::Split { period } => split(tick, period, pixel_count),
            Animation::Rainbow { period } => rainbow(tick, period, pixel_count),
            Animation::Solid(color) => Frame::uniform(color, pixel_count),
        }
    }

    /// Streams the frame for `tick` to `link` and latches it.
    pub fn render<W: PixelWire>(&self, tick: Tick, link: &mut PixelLink<W>) {
        let frame = self.frame(tick, link.pixel_count());
        link.write_frame(frame);
    }
}

/// Hue reached `tick % period` ticks into a revolution.
fn hue_at(tick: Tick, period: u32) -> u8 {
    map_u8(i64::from(tick % period), 0, i64::from(period), 0, 255)
}

fn chase(tick: Tick, step: u32, pixel_count: u8) -> Frame {
    const PRIMARIES: [Rgbw; 3] = [Rgbw::RED, Rgbw::GREEN, Rgbw::BLUE];

    let wipe = step * u32::from(pixel_count);
    let state = tick % (wipe * 3);
    let color_state = (state / wipe) as usize;
    let sweep = state % wipe / step;

    Frame::wipe(
        sweep,
        PRIMARIES[color_state],
        PRIMARIES[(color_state + 2) % 3],
        pixel_count,
    )
}

fn split(tick: Tick, period: u32, pixel_count: u8) -> Frame {
    let rgb = six_sector(hue_at(tick, period), 255, 255);
    let swapped = tick % (period * 2) / period == 1;

    // Pick the two channels that are lit; a zero channel would leave one
    // half dark at the arc seams.
    let (first, second) = if rgb.blue == 0 {
        (Rgbw::green_only(rgb.green), Rgbw::red_only(rgb.red))
    } else if rgb.red == 0 {
        (Rgbw::green_only(rgb.green), Rgbw::blue_only(rgb.blue))
    } else {
        (Rgbw::red_only(rgb.red), Rgbw::blue_only(rgb.blue))
    };

    let midpoint = pixel_count / 2;
    if swapped {
        Frame::halves(midpoint, second, first, pixel_count)
    } else {
        Frame::halves(midpoint, first, second, pixel_count)
    }
}

fn rainbow(tick: Tick, period: u32, pixel_count: u8) -> Frame {
    // 255 levels per pixel, per moving channel, six channel moves.
    let phase_span = 255 * u32::from(pixel_count);
    let steps = i64::from(phase_span) * 6;

    let position = map(i64::from(tick % period), 0, i64::from(period), 0, steps) as u32;
    let phase = (position / phase_span) as u8;
    let progress = position % phase_span;

    Frame::sweep(phase, progress / 255, (progress % 255) as u8, pixel_count)
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

const fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}
