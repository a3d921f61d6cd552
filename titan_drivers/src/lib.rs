#![no_std]
//! STM32H7 bindings of the Titan PWM driver: timer registers through the
//! `stm32-hal2` peripheral access crate (`hal::pac`), pins through its GPIO
//! and RCC register blocks.

pub mod mmio;
pub mod pinout;
pub mod pwm;

pub use titan_pwm::{Errc, PwmConfig, PwmDriver, PwmError, SharedPwm};
