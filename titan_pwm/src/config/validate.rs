use super::{clock_divisor, PwmConfig, ValidPwm, MAX_DUTY_CYCLE, MAX_PRESCALER};
use crate::errc::PwmError;
use crate::timer::{Channel, TimerInstance};

/// Checks a configuration before any hardware is touched.
///
/// Rules are checked in this order and the first failure is returned:
/// 1. `freq > 0`
/// 2. `clock_freq > 0`
/// 3. `clock_freq / freq` (truncating) in `1..=65535`
/// 4. `duty` in `0..=1000`
/// 5. `channel` in `1..=4`
/// 6. `instance` in `2..=5`
pub fn validate(cfg: &PwmConfig) -> Result<ValidPwm, PwmError> {
    if cfg.freq <= 0 {
        warn!("PWM: frequency must be positive, got {}", cfg.freq);
        return Err(PwmError::InvalidArgument);
    }

    if cfg.clock_freq <= 0 {
        warn!("PWM: clock frequency must be positive, got {}", cfg.clock_freq);
        return Err(PwmError::InvalidArgument);
    }

    let divisor = clock_divisor(cfg.clock_freq, cfg.freq);
    if divisor == 0 || divisor > MAX_PRESCALER {
        warn!(
            "PWM: clock divisor {} out of range [clock: {}; freq: {}]",
            divisor,
            cfg.clock_freq,
            cfg.freq
        );
        return Err(PwmError::InvalidArgument);
    }

    if cfg.duty < 0 || cfg.duty > MAX_DUTY_CYCLE {
        warn!("PWM: duty {} out of range", cfg.duty);
        return Err(PwmError::InvalidArgument);
    }

    let channel = Channel::try_from(cfg.channel).map_err(|err| {
        warn!("PWM: no channel {}", cfg.channel);
        err
    })?;

    let instance = TimerInstance::try_from(cfg.instance).map_err(|err| {
        warn!("PWM: no timer TIM{}", cfg.instance);
        err
    })?;

    Ok(ValidPwm {
        instance,
        channel,
        // Both are non-negative and range checked above
        divisor: divisor as u32,
        duty: cfg.duty as u32,
    })
}
