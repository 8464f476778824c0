//! Idle tracking and power-down.

/// Low-power halt with a single wake source (the roll button).
pub trait Standby {
    /// Enable the wake interrupt on the roll button line.
    fn arm_wake(&mut self);

    /// Halt the CPU in its lowest-power mode. Returns once the CPU runs
    /// again; `true` if the wake interrupt fired since `arm_wake`.
    fn halt(&mut self) -> bool;

    /// Disable interrupts and the wake source again (back to polling).
    fn disarm_wake(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerState {
    Awake,
    /// Between arming the wake source and the wake interrupt
    Asleep,
}

/// Counts counter periods without button activity.
#[derive(Clone, Copy, Debug)]
pub struct PowerController {
    idle_periods: u16,
    timeout_periods: u16,
    state: PowerState,
}

impl PowerController {
    pub const fn new(timeout_periods: u16) -> Self {
        Self {
            idle_periods: 0,
            timeout_periods,
            state: PowerState::Awake,
        }
    }

    /// A button edge was seen.
    #[inline]
    pub fn note_activity(&mut self) {
        self.idle_periods = 0;
    }

    /// One counter period elapsed. Returns `true` once the idle time
    /// exceeds the timeout.
    pub fn on_period(&mut self) -> bool {
        self.idle_periods = self.idle_periods.saturating_add(1);
        self.idle_periods > self.timeout_periods
    }

    /// Park the CPU until the wake interrupt fires. Wake-ups from any
    /// other source go straight back to sleep.
    pub fn suspend<S: Standby>(&mut self, standby: &mut S) {
        self.enter_sleep(standby);
        while !standby.halt() {}
        self.wake(standby);
    }

    pub fn enter_sleep<S: Standby>(&mut self, standby: &mut S) {
        standby.arm_wake();
        self.state = PowerState::Asleep;
    }

    pub fn wake<S: Standby>(&mut self, standby: &mut S) {
        self.state = PowerState::Awake;
        self.idle_periods = 0;
        standby.disarm_wake();
    }

    pub fn idle_periods(&self) -> u16 {
        self.idle_periods
    }

    pub fn state(&self) -> PowerState {
        self.state
    }
}
