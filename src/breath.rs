//! Piecewise-linear brightness envelope.

use crate::map::map_u8;
use crate::types::Tick;

/// A breathing cycle: rest at `floor`, ramp up, hold at `peak`, ramp down.
///
/// One cycle lasts `2 × (rest + ramp + hold)` ticks and is laid out as
///
/// ```text
/// | rest | ramp up | hold × 2 | ramp down | rest |
/// ```
///
/// so a cycle both starts and ends at `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BreathEnvelope {
    /// Ticks spent at `floor` on each side of the cycle.
    pub rest: u32,

    /// Ticks for each ramp.
    pub ramp: u32,

    /// Half the ticks spent at `peak`.
    pub hold: u32,

    /// Level while resting.
    pub floor: u8,

    /// Level at the top of the cycle.
    pub peak: u8,
}

impl BreathEnvelope {
    /// Slow breath: two seconds dark on each side, three-second ramps, no hold.
    pub const REFERENCE: BreathEnvelope = BreathEnvelope {
        rest: 2000,
        ramp: 3000,
        hold: 0,
        floor: 0,
        peak: 255,
    };

    /// Ticks in one cycle, or `None` if that does not fit a [`Tick`].
    pub const fn period(&self) -> Option<u32> {
        let half = match self.rest.checked_add(self.ramp) {
            Some(sum) => sum.checked_add(self.hold),
            None => None,
        };
        match half {
            Some(half) => half.checked_mul(2),
            None => None,
        }
    }

    /// Envelope level at `tick`.
    ///
    /// Callers must ensure [`period`](BreathEnvelope::period) is non-zero.
    pub fn level(&self, tick: Tick) -> u8 {
        let Some(period) = self.period() else {
            return self.floor;
        };
        if period == 0 {
            return self.floor;
        }

        let state = i64::from(tick % period);
        let rise_start = i64::from(self.rest);
        let rise_end = rise_start + i64::from(self.ramp);
        let fall_start = rise_end + 2 * i64::from(self.hold);
        let fall_end = fall_start + i64::from(self.ramp);

        if state < rise_start || state >= fall_end {
            self.floor
        } else if state < rise_end {
            map_u8(state, rise_start, rise_end, self.floor, self.peak)
        } else if state < fall_start {
            self.peak
        } else {
            map_u8(state, fall_start, fall_end, self.peak, self.floor)
        }
    }
}

impl Default for BreathEnvelope {
    fn default() -> Self {
        Self::REFERENCE
    }
}
