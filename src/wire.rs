//! Single-wire transmission to the pixel chain.
//!
//! Every bit starts with the data line driven high. A `1` keeps the line
//! high for most of the bit period, a `0` drops it almost immediately. Bits
//! go out most-significant first, and a long low hold latches the frame.
//!
//! The line timing is tighter than anything interrupts or data-dependent
//! branches can tolerate, so a transmitter must:
//! - run without preemption (see [`PixelLink::write_frame`](crate::PixelLink::write_frame)),
//! - spend the same number of cycles on every bit regardless of its value.
//!
//! [`BitTiming`] turns a core clock into per-bit cycle budgets and rejects
//! clocks that cannot meet the chain's tolerance. Cycle-exact transmitters
//! for a particular core implement [`PixelWire`] on top of those budgets;
//! [`BitBangWire`] is the portable version built on `embedded-hal`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Nominal high time of a `0` bit.
pub const ZERO_HIGH_NS: u32 = 350;

/// Nominal high time of a `1` bit.
pub const ONE_HIGH_NS: u32 = 700;

/// Nominal low time of a `1` bit.
pub const ONE_LOW_NS: u32 = 550;

/// Nominal bit period (800 kHz).
pub const BIT_NS: u32 = 1250;

/// Allowed deviation of each high or low phase.
pub const PHASE_TOLERANCE_NS: u32 = 150;

/// Allowed deviation of the bit period, in percent.
pub const BIT_TOLERANCE_PERCENT: u32 = 5;

/// Low hold that makes the chain display what it received.
pub const LATCH_MICROS: u32 = 281;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Errors returned when a clock cannot produce valid bit timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Clock frequency of zero.
    NoClock,

    /// High phase of a `0` bit is outside tolerance.
    ZeroHigh {
        /// Achieved duration in nanoseconds.
        ns: u32,
    },

    /// High phase of a `1` bit is outside tolerance.
    OneHigh {
        /// Achieved duration in nanoseconds.
        ns: u32,
    },

    /// Low phase of a `1` bit is outside tolerance.
    OneLow {
        /// Achieved duration in nanoseconds.
        ns: u32,
    },

    /// Bit period is outside tolerance.
    BitPeriod {
        /// Achieved duration in nanoseconds.
        ns: u32,
    },
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::NoClock => write!(f, "clock frequency must be non-zero"),
            TimingError::ZeroHigh { ns } => {
                write!(
                    f,
                    "'0' bit high phase of {} ns is outside {} ± {} ns",
                    ns,
                    ZERO_HIGH_NS,
                    PHASE_TOLERANCE_NS,
                )
            }
            TimingError::OneHigh { ns } => {
                write!(
                    f,
                    "'1' bit high phase of {} ns is outside {} ± {} ns",
                    ns,
                    ONE_HIGH_NS,
                    PHASE_TOLERANCE_NS,
                )
            }
            TimingError::OneLow { ns } => {
                write!(
                    f,
                    "'1' bit low phase of {} ns is outside {} ± {} ns",
                    ns,
                    ONE_LOW_NS,
                    PHASE_TOLERANCE_NS,
                )
            }
            TimingError::BitPeriod { ns } => {
                write!(
                    f,
                    "bit period of {} ns is outside {} ns ± {}%",
                    ns,
                    BIT_NS,
                    BIT_TOLERANCE_PERCENT,
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// Per-bit cycle budget for one core clock.
///
/// A value of this type has passed the tolerance check, so any transmitter
/// that spends exactly these cycles per phase produces a valid waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitTiming {
    clock_hz: u32,
    zero_high: u32,
    one_high: u32,
    bit: u32,
}

impl BitTiming {
    /// Budget of the reference 9.6 MHz controller: 12 cycles per bit, the
    /// line drops after 3 cycles for a `0` and after 7 cycles for a `1`.
    pub const REFERENCE: BitTiming = BitTiming {
        clock_hz: 9_600_000,
        zero_high: 3,
        one_high: 7,
        bit: 12,
    };

    /// Derives the cycle budget for `clock_hz` by rounding each nominal
    /// duration to the nearest whole cycle.
    pub const fn for_clock(clock_hz: u32) -> Result<Self, TimingError> {
        if clock_hz == 0 {
            return Err(TimingError::NoClock);
        }

        Self::from_cycles(
            clock_hz,
            ns_to_cycles(ZERO_HIGH_NS, clock_hz),
            ns_to_cycles(ONE_HIGH_NS, clock_hz),
            ns_to_cycles(BIT_NS, clock_hz),
        )
    }

    /// Checks a hand-counted budget, e.g. one read off an instruction listing.
    pub const fn from_cycles(
        clock_hz: u32,
        zero_high: u32,
        one_high: u32,
        bit: u32,
    ) -> Result<Self, TimingError> {
        if clock_hz == 0 {
            return Err(TimingError::NoClock);
        }

        let timing = BitTiming {
            clock_hz,
            zero_high,
            one_high,
            bit,
        };

        let zero_high_ns = timing.zero_high_ns();
        if zero_high_ns.abs_diff(ZERO_HIGH_NS) > PHASE_TOLERANCE_NS {
            return Err(TimingError::ZeroHigh { ns: zero_high_ns });
        }

        let one_high_ns = timing.one_high_ns();
        if one_high_ns.abs_diff(ONE_HIGH_NS) > PHASE_TOLERANCE_NS {
            return Err(TimingError::OneHigh { ns: one_high_ns });
        }

        let bit_ns = timing.bit_ns();
        if bit_ns.abs_diff(BIT_NS) * 100 > BIT_NS * BIT_TOLERANCE_PERCENT {
            return Err(TimingError::BitPeriod { ns: bit_ns });
        }

        let one_low_ns = bit_ns.saturating_sub(one_high_ns);
        if bit <= one_high || one_low_ns.abs_diff(ONE_LOW_NS) > PHASE_TOLERANCE_NS {
            return Err(TimingError::OneLow { ns: one_low_ns });
        }

        Ok(timing)
    }

    /// Core clock this budget was computed for.
    pub const fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    /// Cycles the line stays high for a `0` bit.
    pub const fn zero_high_cycles(&self) -> u32 {
        self.zero_high
    }

    /// Cycles the line stays high for a `1` bit.
    pub const fn one_high_cycles(&self) -> u32 {
        self.one_high
    }

    /// Cycles per bit.
    pub const fn bit_cycles(&self) -> u32 {
        self.bit
    }

    pub const fn zero_high_ns(&self) -> u32 {
        cycles_to_ns(self.zero_high, self.clock_hz)
    }

    pub const fn one_high_ns(&self) -> u32 {
        cycles_to_ns(self.one_high, self.clock_hz)
    }

    pub const fn bit_ns(&self) -> u32 {
        cycles_to_ns(self.bit, self.clock_hz)
    }
}

const fn ns_to_cycles(ns: u32, clock_hz: u32) -> u32 {
    ((ns as u64 * clock_hz as u64 + NANOS_PER_SECOND / 2) / NANOS_PER_SECOND) as u32
}

const fn cycles_to_ns(cycles: u32, clock_hz: u32) -> u32 {
    ((cycles as u64 * NANOS_PER_SECOND + clock_hz as u64 / 2) / clock_hz as u64) as u32
}

/// Hardware seam between [`PixelLink`](crate::PixelLink) and the data pin.
///
/// Implementations must emit bits with constant per-bit timing and must
/// not be preempted while a frame is in flight. There is no error path:
/// a timing fault shows up as flicker on the chain, not as a value.
pub trait PixelWire {
    /// Puts the data pin into its driven, idle-low state.
    fn configure_output(&mut self) {}

    /// Transmits one byte, most-significant bit first.
    fn send_byte(&mut self, byte: u8);

    /// Holds the line low for at least [`LATCH_MICROS`].
    fn latch(&mut self);
}

impl<W: PixelWire + ?Sized> PixelWire for &mut W {
    fn configure_output(&mut self) {
        (**self).configure_output();
    }

    fn send_byte(&mut self, byte: u8) {
        (**self).send_byte(byte);
    }

    fn latch(&mut self) {
        (**self).latch();
    }
}

/// Portable transmitter driving an `embedded-hal` pin with nanosecond delays.
///
/// Each bit costs the same pin writes and delay calls whichever value it
/// carries; only the split between high and low changes. Accuracy is
/// bounded by the delay provider, so this suits fast cores and host
/// simulation. Slow cores want a cycle-counted [`PixelWire`] instead.
pub struct BitBangWire<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    pin: P,
    delay: D,
    high_ns: [u32; 2],
    bit_ns: u32,
}

impl<P, D> BitBangWire<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Creates a transmitter using the phase lengths of `timing`.
    pub fn new(pin: P, delay: D, timing: BitTiming) -> Self {
        Self {
            pin,
            delay,
            high_ns: [timing.zero_high_ns(), timing.one_high_ns()],
            bit_ns: timing.bit_ns(),
        }
    }

    /// Returns the pin and delay provider.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P, D> PixelWire for BitBangWire<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn configure_output(&mut self) {
        let _ = self.pin.set_low();
    }

    fn send_byte(&mut self, byte: u8) {
        let mut byte = byte;
        for _ in 0..8 {
            let high_ns = self.high_ns[usize::from(byte >> 7)];

            let _ = self.pin.set_high();
            self.delay.delay_ns(high_ns);
            let _ = self.pin.set_low();
            self.delay.delay_ns(self.bit_ns - high_ns);

            byte <<= 1;
        }
    }

    fn latch(&mut self) {
        let _ = self.pin.set_low();
        self.delay.delay_us(LATCH_MICROS);
    }
}
