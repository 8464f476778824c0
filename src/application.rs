//! Application layer: the die's control loop and its state.

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use ufmt::uWrite;

use crate::config::{Timing, STARTUP_DIE, STARTUP_VALUE};
use crate::dice::{DieIndex, DisplayMode};
use crate::drivers::button::{Debouncer, Event, Latch, Level};
use crate::drivers::console::Console;
use crate::drivers::seven_segment::{Multiplexer, SegmentBus};
use crate::error::{Error, Result};
use crate::power::{PowerController, Standby};
use crate::roll::{self, FreeRunningCounter};

/// Everything the die remembers while powered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    pub die: DieIndex,
    pub mode: DisplayMode,
    pub value: u8,
    pub cycle_latch: Latch,
    pub roll_latch: Latch,
    /// Debounced roll level from the last poll
    pub roll_held: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            die: DieIndex::new(STARTUP_DIE).unwrap_or(DieIndex::FIRST),
            mode: DisplayMode::ShowDieType,
            value: STARTUP_VALUE,
            cycle_latch: Latch::new(),
            roll_latch: Latch::new(),
            roll_held: false,
        }
    }
}

/// Board resources the control loop drives.
pub struct Peripherals<I, O, S, T, P, D> {
    pub cycle: I,
    pub roll: I,
    pub segments: S,
    pub left: O,
    pub right: O,
    pub counter: T,
    pub standby: P,
    pub delay: D,
}

/// Main application state and logic
pub struct Application<I, O, S, T, P, D, W> {
    cycle: I,
    roll: I,
    display: Multiplexer<S, O>,
    counter: T,
    standby: P,
    delay: D,
    console: Console<W>,
    debouncer: Debouncer,
    power: PowerController,
    timing: Timing,
    state: State,
}

impl<I, O, S, T, P, D, W, E> Application<I, O, S, T, P, D, W>
where
    I: InputPin<Error = E>,
    O: OutputPin<Error = E>,
    S: SegmentBus,
    T: FreeRunningCounter,
    P: Standby,
    D: DelayMs<u16>,
    W: uWrite,
{
    /// Create new application instance
    pub fn new(board: Peripherals<I, O, S, T, P, D>, timing: Timing, console: Console<W>) -> Self {
        let mut app = Self {
            cycle: board.cycle,
            roll: board.roll,
            display: Multiplexer::new(board.segments, board.left, board.right, timing.digit_hold_ms),
            counter: board.counter,
            standby: board.standby,
            delay: board.delay,
            console,
            debouncer: Debouncer::new(timing.debounce_ms),
            power: PowerController::new(timing.idle_timeout_periods),
            timing,
            state: State::default(),
        };
        app.console.write_line("e-die ready");
        app
    }

    /// Run the control loop forever.
    pub fn run(mut self) -> Result<Infallible, E> {
        loop {
            self.step()?;
        }
    }

    /// One pass of the control loop: buttons, display, idle accounting.
    pub fn step(&mut self) -> Result<(), E> {
        self.poll_buttons()?;

        let state = &self.state;
        self.display
            .render(state.value, state.die, state.mode, state.roll_held, &mut self.delay)
            .map_err(Error::Output)?;

        // Any roll this pass has already sampled the counter
        match self.counter.poll_period() {
            Ok(()) => {
                if self.power.on_period() {
                    self.sleep()?;
                }
            }
            Err(nb::Error::WouldBlock) => {}
            Err(nb::Error::Other(never)) => match never {},
        }
        Ok(())
    }

    fn poll_buttons(&mut self) -> Result<(), E> {
        let cycle = self
            .debouncer
            .poll(&self.cycle, &mut self.delay)
            .map_err(Error::Input)?;
        if self.state.cycle_latch.observe(cycle) == Event::PressEdge {
            self.cycle_die();
        }

        let roll = self
            .debouncer
            .poll(&self.roll, &mut self.delay)
            .map_err(Error::Input)?;
        if self.state.roll_latch.observe(roll) == Event::PressEdge {
            self.roll_die();
        }
        self.state.roll_held = roll == Level::Pressed;
        Ok(())
    }

    /// Step to the next die type. From the value screen the first press
    /// only brings the die-type screen back.
    fn cycle_die(&mut self) {
        if self.state.mode == DisplayMode::ShowDieType {
            self.state.die = self.state.die.next();
        }
        self.state.mode = DisplayMode::ShowDieType;
        self.power.note_activity();
        self.console.debug("die", self.state.die.faces());
    }

    fn roll_die(&mut self) {
        self.state.value = roll::roll(&self.counter, self.state.die);
        self.state.mode = DisplayMode::ShowValue;
        self.power.note_activity();
        self.console.debug("roll", self.state.value);
    }

    fn sleep(&mut self) -> Result<(), E> {
        self.console.write_line("Entering power down mode...");
        self.display.blank().map_err(Error::Output)?;
        self.power.suspend(&mut self.standby);

        // Let the wake press settle, then treat it as already handled
        self.delay.delay_ms(self.timing.wake_settle_ms());
        self.state.roll_latch.force_handled();
        self.state.mode = DisplayMode::ShowValue;
        self.console.write_line("Waking up from power down");
        Ok(())
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn power(&self) -> &PowerController {
        &self.power
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }
}
