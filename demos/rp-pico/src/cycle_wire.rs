use embedded_hal::digital::OutputPin;
use glowing_ball::{BitTiming, LATCH_MICROS, PixelWire};

/// Cycles spent inside one SIO set or clear, subtracted from each busy-wait.
const PIN_WRITE_CYCLES: u32 = 4;

/// Cycle-counted transmitter for a GPIO driven through SIO
///
/// Busy-waits with `cortex_m::asm::delay` using the budget from
/// [`BitTiming`], so the waveform only depends on the core clock. Must run
/// with interrupts masked.
pub struct CycleWire<P>
where
    P: OutputPin,
{
    pin: P,
    high_cycles: [u32; 2],
    bit_cycles: u32,
    latch_cycles: u32,
}

impl<P> CycleWire<P>
where
    P: OutputPin,
{
    /// Create a new transmitter
    ///
    /// # Arguments
    /// * `pin` - GPIO configured as push-pull output
    /// * `timing` - Cycle budget for the core clock
    pub fn new(pin: P, timing: BitTiming) -> Self {
        Self {
            pin,
            high_cycles: [timing.zero_high_cycles(), timing.one_high_cycles()],
            bit_cycles: timing.bit_cycles(),
            latch_cycles: LATCH_MICROS * (timing.clock_hz() / 1_000_000 + 1),
        }
    }
}

impl<P> PixelWire for CycleWire<P>
where
    P: OutputPin,
{
    fn configure_output(&mut self) {
        let _ = self.pin.set_low();
    }

    #[inline(always)]
    fn send_byte(&mut self, byte: u8) {
        let mut byte = byte;
        for _ in 0..8 {
            let high = self.high_cycles[usize::from(byte >> 7)];

            let _ = self.pin.set_high();
            cortex_m::asm::delay(high.saturating_sub(PIN_WRITE_CYCLES));
            let _ = self.pin.set_low();
            cortex_m::asm::delay((self.bit_cycles - high).saturating_sub(PIN_WRITE_CYCLES));

            byte <<= 1;
        }
    }

    fn latch(&mut self) {
        let _ = self.pin.set_low();
        cortex_m::asm::delay(self.latch_cycles);
    }
}
