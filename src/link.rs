//! Pixel-level operations on top of a [`PixelWire`].

use crate::types::Rgbw;
use crate::wire::PixelWire;

/// Drives a chain of `pixel_count` RGBW pixels through a [`PixelWire`].
///
/// Pixels are written in chain order, four bytes each (green, red, blue,
/// white). Nothing is shown until [`latch`](PixelLink::latch) is called.
pub struct PixelLink<W: PixelWire> {
    wire: W,
    pixel_count: u8,
}

impl<W: PixelWire> PixelLink<W> {
    /// Creates a link for a chain of `pixel_count` pixels.
    pub fn new(wire: W, pixel_count: u8) -> Self {
        Self { wire, pixel_count }
    }

    /// Number of pixels in the chain.
    #[inline]
    pub fn pixel_count(&self) -> u8 {
        self.pixel_count
    }

    /// Puts the data pin into its idle-low output state.
    pub fn configure_output(&mut self) {
        self.wire.configure_output();
    }

    /// Sends one raw byte.
    #[inline]
    pub fn send_byte(&mut self, byte: u8) {
        self.wire.send_byte(byte);
    }

    /// Sends one pixel in green, red, blue, white order.
    #[inline]
    pub fn write_color(&mut self, color: Rgbw) {
        for byte in color.grbw_bytes() {
            self.wire.send_byte(byte);
        }
    }

    /// Sends the same color to every pixel of the chain.
    pub fn write_color_all(&mut self, color: Rgbw) {
        for _ in 0..self.pixel_count {
            self.write_color(color);
        }
    }

    /// Sends black to three times as many pixels as the chain has.
    ///
    /// Over-clearing also blanks pixels beyond the configured count, e.g.
    /// when a longer chain is attached.
    pub fn clear(&mut self) {
        for _ in 0..u16::from(self.pixel_count) * 3 {
            self.write_color(Rgbw::default());
        }
    }

    /// Holds the line low so the chain displays everything sent since the
    /// previous latch.
    #[inline]
    pub fn latch(&mut self) {
        self.wire.latch();
    }

    /// Sends a whole frame and latches it without being preempted.
    ///
    /// `pixels` should yield [`pixel_count`](PixelLink::pixel_count) colors.
    pub fn write_frame<I>(&mut self, pixels: I)
    where
        I: IntoIterator<Item = Rgbw>,
    {
        critical_section::with(|_| {
            for color in pixels {
                self.write_color(color);
            }
            self.latch();
        });
    }

    /// Broadcasts `color`, latches, all inside one critical section.
    pub fn show_all(&mut self, color: Rgbw) {
        critical_section::with(|_| {
            self.write_color_all(color);
            self.latch();
        });
    }

    /// Returns the underlying wire.
    pub fn release(self) -> W {
        self.wire
    }
}
