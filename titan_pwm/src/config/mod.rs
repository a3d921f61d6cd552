//! PWM configuration record and its validation.

mod validate;

pub use validate::validate;

use crate::timer::{Channel, TimerInstance};

/// Duty cycle resolution: duty is given in tenths of a percent.
pub const MAX_DUTY_CYCLE: i32 = 1000;
/// Highest timer number the driver accepts.
pub const INSTANCE_COUNT: i32 = 5;
/// The clock divisor must fit a 16-bit reload value.
pub const MAX_PRESCALER: i32 = u16::MAX as i32;

/// PWM output request.
///
/// `freq` and `clock_freq` share the same unit (usually Hz).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmConfig {
    /// Compare channel, 1..=4
    pub channel: i32,
    /// Timer number, 2..=5
    pub instance: i32,
    /// Output frequency
    pub freq: i32,
    /// Duty cycle, 0..=1000 (0 = always low, 1000 = always high)
    pub duty: i32,
    /// Clock feeding the timer
    pub clock_freq: i32,
}

/// Number of input clock ticks per PWM period.
///
/// Both validation and register programming derive the period from this
/// function, so they always agree. `freq` must be non-zero.
#[inline(always)]
pub const fn clock_divisor(clock_freq: i32, freq: i32) -> i32 {
    clock_freq / freq
}

/// A configuration that passed [`validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidPwm {
    pub instance: TimerInstance,
    pub channel: Channel,
    /// Clock ticks per period, 1..=65535
    divisor: u32,
    /// 0..=1000
    duty: u32,
}

impl ValidPwm {
    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    pub fn duty(&self) -> u32 {
        self.duty
    }

    /// Auto-reload value. The counter is zero based, hence one less than the divisor.
    pub fn reload(&self) -> u32 {
        self.divisor - 1
    }

    /// Compare value for the duty cycle, truncated.
    pub fn compare(&self) -> u32 {
        // reload <= 65534 and duty <= 1000, no overflow
        self.reload() * self.duty / MAX_DUTY_CYCLE as u32
    }
}
