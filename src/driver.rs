//! The frame loop.
//!
//! [`FrameDriver`] owns the link, a delay provider and the tick counter. Each
//! [`step`](FrameDriver::step) renders one frame, waits the fixed frame
//! delay and advances the tick; [`run`](FrameDriver::run) repeats that
//! forever.
//!
//! Interrupts should be masked for the whole program before entering
//! [`run`](FrameDriver::run). Frames are additionally sent inside a
//! critical section, so a stray interrupt can never split a frame.

use crate::animation::Animation;
use crate::link::PixelLink;
use crate::types::{ConfigError, Rgbw, Tick};
use crate::wire::PixelWire;
use embedded_hal::delay::DelayNs;

/// Pause between the power-on clear and the first self-test color.
pub const SELF_TEST_SETTLE_MS: u32 = 3000;

/// How long each self-test color is shown.
pub const SELF_TEST_COLOR_MS: u32 = 500;

const SELF_TEST_COLORS: [Rgbw; 4] = [Rgbw::RED, Rgbw::GREEN, Rgbw::BLUE, Rgbw::WHITE];

/// Build-time configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Pixels in the chain (1-255).
    pub pixel_count: u8,

    /// The animation to play.
    pub animation: Animation,

    /// Delay after each frame, in milliseconds.
    pub frame_delay_ms: u32,

    /// Flash red, green, blue and white once before the loop starts.
    pub self_test: bool,
}

impl Config {
    /// Thirteen pixels, split animation, 1 ms per tick, no self-test.
    pub const REFERENCE: Config = Config {
        pixel_count: crate::REFERENCE_PIXEL_COUNT,
        animation: Animation::SPLIT,
        frame_delay_ms: 1,
        self_test: false,
    };

    /// Creates a configuration with the reference frame delay and no
    /// self-test.
    pub const fn new(pixel_count: u8, animation: Animation) -> Self {
        Self {
            pixel_count,
            animation,
            frame_delay_ms: Self::REFERENCE.frame_delay_ms,
            self_test: false,
        }
    }

    /// Sets the frame delay.
    pub const fn frame_delay_ms(mut self, frame_delay_ms: u32) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    /// Enables or disables the startup self-test.
    pub const fn self_test(mut self, enabled: bool) -> Self {
        self.self_test = enabled;
        self
    }

    /// Validates the configuration.
    ///
    /// Being a `const fn`, this can reject a configuration at compile time:
    ///
    /// ```
    /// use glowing_ball::{Animation, Config};
    ///
    /// const CONFIG: Config = Config::new(13, Animation::CHASE);
    /// const _: () = assert!(CONFIG.validate().is_ok());
    /// ```
    pub const fn validate(&self) -> Result<(), ConfigError> {
        self.animation.validate(self.pixel_count)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Runs one animation on one chain, forever.
pub struct FrameDriver<W, D>
where
    W: PixelWire,
    D: DelayNs,
{
    link: PixelLink<W>,
    delay: D,
    config: Config,
    tick: Tick,
}

impl<W, D> FrameDriver<W, D>
where
    W: PixelWire,
    D: DelayNs,
{
    /// Creates a driver at tick 0.
    ///
    /// # Errors
    /// Any error from [`Config::validate`].
    pub fn new(config: Config, wire: W, delay: D) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            link: PixelLink::new(wire, config.pixel_count),
            delay,
            config,
            tick: 0,
        })
    }

    /// One-time setup: drives the data pin low and runs the self-test if
    /// the configuration asks for it.
    pub fn start(&mut self) {
        self.link.configure_output();

        #[cfg(feature = "defmt")]
        defmt::info!(
            "driving {} pixels with {}",
            self.config.pixel_count,
            self.config.animation
        );

        if self.config.self_test {
            self.self_test();
        }
    }

    /// Blanks the chain, waits, then shows red, green, blue and white in turn.
    pub fn self_test(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("self-test");

        critical_section::with(|_| {
            self.link.clear();
            self.link.latch();
        });
        self.delay.delay_ms(SELF_TEST_SETTLE_MS);

        for color in SELF_TEST_COLORS {
            self.link.show_all(color);
            self.delay.delay_ms(SELF_TEST_COLOR_MS);
        }
    }

    /// Renders the current tick, waits the frame delay and advances the tick.
    pub fn step(&mut self) {
        self.config.animation.render(self.tick, &mut self.link);
        self.delay.delay_ms(self.config.frame_delay_ms);
        self.tick = self.tick.wrapping_add(1);
    }

    /// Starts the driver and steps it forever.
    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.step();
        }
    }

    /// The tick the next [`step`](FrameDriver::step) will render.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying link.
    pub fn link(&self) -> &PixelLink<W> {
        &self.link
    }

    /// Returns the link and the delay provider.
    pub fn release(self) -> (PixelLink<W>, D) {
        (self.link, self.delay)
    }
}
