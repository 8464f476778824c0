use avr_device::attiny2313::{CPU, EXINT};
use avr_device::interrupt::{self, Mutex};
use core::cell::Cell;

use crate::power::Standby;

// MCUCR
const SM1: u8 = 1 << 6;
const SE: u8 = 1 << 5;
const SM0: u8 = 1 << 4;
const ISC1_MASK: u8 = 0b0000_1100;
// GIMSK / EIFR
const INT1: u8 = 1 << 7;
const INTF1: u8 = 1 << 7;

static WOKE: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

/// Body of the INT1 handler. INT1 is level-triggered, so it disables itself
/// to fire once per press.
pub fn on_wake_interrupt() {
    interrupt::free(|cs| WOKE.borrow(cs).set(true));
    unsafe {
        (*EXINT::ptr())
            .gimsk
            .modify(|r, w| w.bits(r.bits() & !INT1));
    }
}

/// Power-down sleep, woken by the roll button on INT1.
pub struct PowerDown {
    cpu: CPU,
    exint: EXINT,
}

impl PowerDown {
    pub fn new(cpu: CPU, exint: EXINT) -> Self {
        Self { cpu, exint }
    }

    #[inline]
    fn select_power_down(&mut self) {
        self.cpu
            .mcucr
            .modify(|r, w| unsafe { w.bits((r.bits() & !(SM1 | SM0)) | SM0) });
    }

    #[inline]
    fn enable_sleep(&mut self) {
        self.cpu.mcucr.modify(|r, w| unsafe { w.bits(r.bits() | SE) });
    }

    #[inline]
    fn disable_sleep(&mut self) {
        self.cpu.mcucr.modify(|r, w| unsafe { w.bits(r.bits() & !SE) });
    }
}

impl Standby for PowerDown {
    fn arm_wake(&mut self) {
        interrupt::free(|cs| WOKE.borrow(cs).set(false));
        self.select_power_down();
        // Low-level sense: the only INT1 mode that works without the I/O clock
        self.cpu
            .mcucr
            .modify(|r, w| unsafe { w.bits(r.bits() & !ISC1_MASK) });
        self.exint.eifr.write(|w| unsafe { w.bits(INTF1) });
        self.exint
            .gimsk
            .modify(|r, w| unsafe { w.bits(r.bits() | INT1) });
    }

    fn halt(&mut self) -> bool {
        interrupt::disable();
        if !interrupt::free(|cs| WOKE.borrow(cs).get()) {
            self.enable_sleep();
            // SEI runs one more instruction before taking an interrupt,
            // so SLEEP is always reached once the flag has been checked.
            unsafe { interrupt::enable() };
            avr_device::asm::sleep();
            self.disable_sleep();
        }
        interrupt::free(|cs| WOKE.borrow(cs).replace(false))
    }

    fn disarm_wake(&mut self) {
        interrupt::disable();
        self.exint
            .gimsk
            .modify(|r, w| unsafe { w.bits(r.bits() & !INT1) });
        self.disable_sleep();
    }
}
