use avr_device::attiny2313::{portd, PORTB, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::drivers::seven_segment::SegmentBus;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// A single PORTD line. Buttons and digit enables all live on PORTD.
#[derive(Debug)]
pub struct Pin<MODE> {
    mask: u8,
    _mode: PhantomData<MODE>,
}

pub type ButtonPin = Pin<Input>;
pub type DigitPin = Pin<Output>;

impl<MODE: PinMode> Pin<MODE> {
    /// Only `init_io` hands these out, after PORTD has been configured.
    pub(crate) const fn new(bit: u8) -> Self {
        Self {
            mask: 1 << bit,
            _mode: PhantomData,
        }
    }

    #[inline]
    fn port(&self) -> &portd::RegisterBlock {
        unsafe { &*PORTD::ptr() }
    }
}

// Input pin implementation
impl InputPin for Pin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok((self.port().pind.read().bits() & self.mask) != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!self.is_high()?)
    }
}

// Output pin implementation
impl OutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        let mask = self.mask;
        self.port().portd.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mask = self.mask;
        self.port().portd.modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
        Ok(())
    }
}

/// PORTB drives segments a..g on bits 0..6 and the decimal point on bit 7.
pub struct SegmentPort {
    port: PORTB,
}

impl SegmentPort {
    pub fn new(port: PORTB) -> Self {
        Self { port }
    }
}

impl SegmentBus for SegmentPort {
    #[inline]
    fn write(&mut self, pattern: u8) {
        self.port.portb.write(|w| unsafe { w.bits(pattern) });
    }
}

// Board revision 1.2 pin assignments (PORTD bit numbers)
pub mod board {
    pub const LEFT_DIGIT: u8 = 0;
    pub const RIGHT_DIGIT: u8 = 1;
    pub const CYCLE_BUTTON: u8 = 2;
    /// Also INT1, the wake source
    pub const ROLL_BUTTON: u8 = 3;

    /// PD0 and PD1 drive the digit cathodes
    pub const DDRD_OUTPUTS: u8 = (1 << LEFT_DIGIT) | (1 << RIGHT_DIGIT);
    /// Cathodes high (digits off), pull-ups on both buttons
    pub const PORTD_IDLE: u8 = 0x0F;
}
