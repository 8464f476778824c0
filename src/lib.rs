//! Firmware for a two-button electronic polyhedral die.
//!
//! The control logic is hardware-independent and runs on the host under
//! test; `hal` binds it to the ATtiny2313 registers.

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod dice;
pub mod drivers;
pub mod error;
pub mod power;
pub mod roll;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::{Application, Peripherals, State};
pub use config::Timing;
pub use dice::{DieIndex, DisplayMode, DIE_TYPES};
pub use error::Error;
pub use power::{PowerController, PowerState, Standby};
pub use roll::FreeRunningCounter;
