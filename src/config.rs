//! Configuration constants for the e-die firmware (board revision 1.2)

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 8_000_000;

/// Timer1 compare value. The counter runs `0..=COUNTER_TOP` and then resets.
pub const COUNTER_TOP: u16 = 63_599;

/// Ticks in one full Timer1 period (0.5088 s at clock/64).
pub const COUNTER_PERIOD: u32 = COUNTER_TOP as u32 + 1;

/// Button debounce settle time in milliseconds
pub const DEBOUNCE_MS: u16 = 25;

/// How long each digit stays lit per multiplex pass, in milliseconds.
/// Revision 1.0 boards were tuned to 1 ms.
pub const DIGIT_HOLD_MS: u16 = 10;

/// Timer1 periods without a button press before powering down (~60 s)
pub const IDLE_TIMEOUT_PERIODS: u16 = 118;

/// Die-type index selected at power-on (d6)
pub const STARTUP_DIE: u8 = 1;

/// Rolled value held before the first roll
pub const STARTUP_VALUE: u8 = 6;

/// Timing knobs consumed by the control loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub debounce_ms: u16,
    pub digit_hold_ms: u16,
    pub idle_timeout_periods: u16,
}

impl Timing {
    /// Delay inserted after waking so the wake press itself has settled.
    pub const fn wake_settle_ms(&self) -> u16 {
        self.debounce_ms * 2
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            digit_hold_ms: DIGIT_HOLD_MS,
            idle_timeout_periods: IDLE_TIMEOUT_PERIODS,
        }
    }
}
