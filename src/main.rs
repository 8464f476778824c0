#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use avr_device::attiny2313::Peripherals;
use panic_halt as _;

use edice_firmware::drivers::Console;
use edice_firmware::{hal, Application, Error, Timing};

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();
    let board = hal::init_io(dp);

    let app = Application::new(board, Timing::default(), Console::silent());
    match app.run() {
        Ok(never) => match never {},
        Err(Error::Input(never) | Error::Output(never)) => match never {},
    }
}

#[avr_device::interrupt(attiny2313)]
fn INT1() {
    hal::power::on_wake_interrupt();
}
