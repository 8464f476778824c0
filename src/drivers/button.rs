//! Debounced, active-low push buttons.
//!
//! Sampling is stateless: [`Debouncer::poll`] reports the settled level every
//! time it is called. Turning a level into one event per physical press is the
//! job of a [`Latch`] kept in the application state.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;

/// Settled level of a button line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Released,
    Pressed,
}

/// Logical event extracted from consecutive levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    NoEvent,
    PressEdge,
}

/// Settle-and-recheck debouncer.
#[derive(Copy, Clone, Debug)]
pub struct Debouncer {
    settle_ms: u16,
}

impl Debouncer {
    pub const fn new(settle_ms: u16) -> Self {
        Self { settle_ms }
    }

    /// Sample `pin`; if it reads low, wait out the settle window and only
    /// report `Pressed` when it is still low afterwards.
    pub fn poll<P, D>(&self, pin: &P, delay: &mut D) -> Result<Level, P::Error>
    where
        P: InputPin,
        D: DelayMs<u16>,
    {
        if pin.is_low()? {
            delay.delay_ms(self.settle_ms);
            if pin.is_low()? {
                return Ok(Level::Pressed);
            }
        }
        Ok(Level::Released)
    }

    /// Same debounced read as [`poll`](Self::poll), as a plain flag.
    /// The control loop reuses the level from its own `poll` instead, to
    /// avoid paying the settle delay twice.
    pub fn is_held<P, D>(&self, pin: &P, delay: &mut D) -> Result<bool, P::Error>
    where
        P: InputPin,
        D: DelayMs<u16>,
    {
        Ok(self.poll(pin, delay)? == Level::Pressed)
    }
}

/// "Already handled this press" flag for one button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Latch {
    handled: bool,
}

impl Latch {
    pub const fn new() -> Self {
        Self { handled: false }
    }

    /// Feed the level seen this iteration. The first `Pressed` after a
    /// release yields `PressEdge`; releasing re-arms the latch.
    pub fn observe(&mut self, level: Level) -> Event {
        match level {
            Level::Pressed if !self.handled => {
                self.handled = true;
                Event::PressEdge
            }
            Level::Pressed => Event::NoEvent,
            Level::Released => {
                self.handled = false;
                Event::NoEvent
            }
        }
    }

    /// Treat the current press as consumed.
    pub fn force_handled(&mut self) {
        self.handled = true;
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }
}
