use avr_device::attiny2313::{TC0, TC1};
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;

use crate::config::{COUNTER_TOP, CPU_FREQ_HZ};
use crate::roll::FreeRunningCounter;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop = 0,
    Div64 = 3,
}

// TCCR1B
const WGM12: u8 = 1 << 3;
// TIFR
const OCF1A: u8 = 1 << 6;

const TICKS_PER_MS: u8 = (CPU_FREQ_HZ / 64 / 1000) as u8;

/// Timer1 as the free-running counter behind rolls and idle timing.
pub struct Timer1 {
    tc1: TC1,
}

impl Timer1 {
    /// CTC mode at clock/64, counting `0..=COUNTER_TOP`.
    pub fn start(tc1: TC1) -> Self {
        tc1.tccr1a.write(|w| unsafe { w.bits(0) });
        tc1.tcnt1.write(|w| unsafe { w.bits(0) });
        tc1.ocr1a.write(|w| unsafe { w.bits(COUNTER_TOP) });
        tc1.tccr1b
            .write(|w| unsafe { w.bits(WGM12 | Prescaler::Div64 as u8) });
        Self { tc1 }
    }
}

impl FreeRunningCounter for Timer1 {
    #[inline]
    fn count(&self) -> u16 {
        self.tc1.tcnt1.read().bits()
    }

    fn poll_period(&mut self) -> nb::Result<(), Infallible> {
        if self.tc1.tifr.read().bits() & OCF1A == 0 {
            return Err(nb::Error::WouldBlock);
        }
        // Flag bits clear by writing one
        self.tc1.tifr.write(|w| unsafe { w.bits(OCF1A) });
        Ok(())
    }
}

/// Millisecond busy-wait on Timer0.
pub struct Delay {
    tc0: TC0,
}

impl Delay {
    pub fn new(tc0: TC0) -> Self {
        tc0.tccr0a.write(|w| unsafe { w.bits(0) });
        tc0.tccr0b.write(|w| unsafe { w.bits(Prescaler::Stop as u8) });
        Self { tc0 }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        // 8MHz/64 = 125kHz, 125 ticks = 1ms
        self.tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        self.tc0.tccr0b.write(|w| unsafe { w.bits(Prescaler::Div64 as u8) });

        for _ in 0..ms {
            while self.tc0.tcnt0.read().bits() < TICKS_PER_MS {}
            self.tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        }

        self.tc0.tccr0b.write(|w| unsafe { w.bits(Prescaler::Stop as u8) });
    }
}
