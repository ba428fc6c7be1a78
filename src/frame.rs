//! One tick's worth of pixel colors, produced on demand.
//!
//! A [`Frame`] holds only the handful of scalars an animation derived from
//! the tick. Pixel colors are computed as the frame is iterated and are
//! never stored.

use crate::types::Rgbw;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    /// Every pixel shows the same color.
    Uniform(Rgbw),

    /// Pixels below `sweep` show `current`, the rest `previous`.
    Wipe {
        sweep: u32,
        current: Rgbw,
        previous: Rgbw,
    },

    /// Pixels below `midpoint` show `first`, the rest `second`.
    Halves {
        midpoint: u8,
        first: Rgbw,
        second: Rgbw,
    },

    /// A channel sweeping along the chain with a fractional front pixel.
    Sweep { phase: u8, front: u32, fraction: u8 },
}

/// Iterator over the colors of one frame, in chain order.
///
/// Yields exactly `pixel_count` colors.
#[derive(Debug, Clone)]
pub struct Frame {
    pattern: Pattern,
    index: u8,
    pixel_count: u8,
}

impl Frame {
    pub(crate) fn uniform(color: Rgbw, pixel_count: u8) -> Self {
        Self::with(Pattern::Uniform(color), pixel_count)
    }

    pub(crate) fn wipe(sweep: u32, current: Rgbw, previous: Rgbw, pixel_count: u8) -> Self {
        Self::with(
            Pattern::Wipe {
                sweep,
                current,
                previous,
            },
            pixel_count,
        )
    }

    pub(crate) fn halves(midpoint: u8, first: Rgbw, second: Rgbw, pixel_count: u8) -> Self {
        Self::with(
            Pattern::Halves {
                midpoint,
                first,
                second,
            },
            pixel_count,
        )
    }

    /// `phase` in `0..6` picks the moving channel, as in the six-arc wheel:
    /// green in, red out, blue in, green out, red in, blue out.
    pub(crate) fn sweep(phase: u8, front: u32, fraction: u8, pixel_count: u8) -> Self {
        Self::with(
            Pattern::Sweep {
                phase,
                front,
                fraction,
            },
            pixel_count,
        )
    }

    fn with(pattern: Pattern, pixel_count: u8) -> Self {
        Self {
            pattern,
            index: 0,
            pixel_count,
        }
    }

    /// Number of pixels in the frame.
    pub fn pixel_count(&self) -> u8 {
        self.pixel_count
    }

    /// Color of the pixel at `index`, independent of iteration progress.
    pub fn pixel(&self, index: u8) -> Rgbw {
        match self.pattern {
            Pattern::Uniform(color) => color,
            Pattern::Wipe {
                sweep,
                current,
                previous,
            } => {
                if u32::from(index) < sweep {
                    current
                } else {
                    previous
                }
            }
            Pattern::Halves {
                midpoint,
                first,
                second,
            } => {
                if index < midpoint {
                    first
                } else {
                    second
                }
            }
            Pattern::Sweep {
                phase,
                front,
                fraction,
            } => {
                let index = u32::from(index);
                let level = if index < front {
                    255
                } else if index == front {
                    fraction
                } else {
                    0
                };

                match phase {
                    0 => Rgbw::new(255, level, 0, 0),
                    1 => Rgbw::new(255 - level, 255, 0, 0),
                    2 => Rgbw::new(0, 255, level, 0),
                    3 => Rgbw::new(0, 255 - level, 255, 0),
                    4 => Rgbw::new(level, 0, 255, 0),
                    _ => Rgbw::new(255, 0, 255 - level, 0),
                }
            }
        }
    }
}

impl Iterator for Frame {
    type Item = Rgbw;

    fn next(&mut self) -> Option<Rgbw> {
        if self.index >= self.pixel_count {
            return None;
        }
        let color = self.pixel(self.index);
        self.index += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.pixel_count - self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frame {}
