//! ATtiny2313 bindings for the control loop.

pub mod gpio;
pub mod power;
pub mod timer;

use avr_device::attiny2313;

pub use gpio::{board, ButtonPin, DigitPin, Pin, SegmentPort};
pub use power::PowerDown;
pub use timer::{Delay, Prescaler, Timer1};

use crate::application::Peripherals;

pub type Board = Peripherals<ButtonPin, DigitPin, SegmentPort, Timer1, PowerDown, Delay>;

/// Configure port directions and pull-ups, start Timer1, and hand out the
/// board resources. Taking the device peripherals by value means this can
/// only run once.
pub fn init_io(dp: attiny2313::Peripherals) -> Board {
    // Port A is unused on revision 1.2; inputs with pull-ups
    dp.PORTA.ddra.write(|w| unsafe { w.bits(0x00) });
    dp.PORTA.porta.write(|w| unsafe { w.bits(0xFF) });
    // Port B drives the segments, all off
    dp.PORTB.ddrb.write(|w| unsafe { w.bits(0xFF) });
    dp.PORTB.portb.write(|w| unsafe { w.bits(0x00) });
    dp.PORTD.ddrd.write(|w| unsafe { w.bits(board::DDRD_OUTPUTS) });
    dp.PORTD.portd.write(|w| unsafe { w.bits(board::PORTD_IDLE) });

    Peripherals {
        cycle: Pin::new(board::CYCLE_BUTTON),
        roll: Pin::new(board::ROLL_BUTTON),
        segments: SegmentPort::new(dp.PORTB),
        left: Pin::new(board::LEFT_DIGIT),
        right: Pin::new(board::RIGHT_DIGIT),
        counter: Timer1::start(dp.TC1),
        standby: PowerDown::new(dp.CPU, dp.EXINT),
        delay: Delay::new(dp.TC0),
    }
}
