//! Timer PWM output driver.
//!
//! Configures one channel of a general purpose timer (TIM2..TIM5) and the GPIO
//! pin routed to it so the pin outputs PWM at a requested frequency and duty.
//!
//! The driver never touches memory itself: timer registers are reached through
//! [`timer::RegisterBus`] and pins through [`pinout::GpioPort`]. The
//! `titan_drivers` crate implements both for the STM32H7.
//!
//! ```ignore
//! let mut pwm = PwmDriver::new(bus, gpio);
//! pwm.set_pwm(&PwmConfig {
//!     channel: 1,
//!     instance: 2,
//!     freq: 1000,
//!     duty: 500, // tenths of a percent
//!     clock_freq: 2_000_000,
//! })?;
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod driver;
pub mod errc;
pub mod pinout;
pub mod timer;

#[cfg(test)]
mod sim;

pub use config::{PwmConfig, ValidPwm};
pub use driver::{PwmDriver, SharedPwm};
pub use errc::{Errc, PwmError};
pub use pinout::{GpioPort, PinRoute};
pub use timer::{Channel, RegisterBus, TimerInstance};
