#![no_std]
#![no_main]

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use glowing_ball::{Animation, Config, FrameDriver, PixelLink, PixelWire, REFERENCE_PIXEL_COUNT};
use panic_halt as _;

// ============================================================================
// Minimal Wire and Delay
// ============================================================================

/// Zero-size wire for measuring library overhead
pub struct MinimalWire;

impl PixelWire for MinimalWire {
    fn send_byte(&mut self, byte: u8) {
        core::hint::black_box(byte);
    }

    fn latch(&mut self) {
        core::hint::black_box(());
    }
}

/// Zero-size delay that returns immediately
pub struct MinimalDelay;

impl DelayNs for MinimalDelay {
    fn delay_ns(&mut self, ns: u32) {
        core::hint::black_box(ns);
    }
}

// ============================================================================
// Animations
// ============================================================================

const ANIMATIONS: [Animation; 7] = [
    Animation::CHASE,
    Animation::HUE_BREATH,
    Animation::HUE_ROTATE,
    Animation::PALETTE_ROTATE,
    Animation::SPLIT,
    Animation::RAINBOW,
    Animation::SOLID,
];

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn render_animations() {
    for animation in core::hint::black_box(ANIMATIONS) {
        let config = Config::new(REFERENCE_PIXEL_COUNT, animation).self_test(true);
        if let Ok(mut driver) = FrameDriver::new(config, MinimalWire, MinimalDelay) {
            driver.start();
            driver.step();
            core::hint::black_box(driver.tick());
        }
    }

    let mut link = PixelLink::new(MinimalWire, REFERENCE_PIXEL_COUNT);
    Animation::RAINBOW.render(core::hint::black_box(12_345), &mut link);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    render_animations();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
