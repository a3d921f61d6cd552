//! PWM driver entry point.

mod shared;

pub use shared::SharedPwm;

use crate::config::{validate, PwmConfig, ValidPwm, INSTANCE_COUNT};
use crate::errc::{Errc, PwmError};
use crate::pinout::{resolve, GpioPort, PinRoute};
use crate::timer::{RegisterBus, RegisterProgrammer};

/// Progress of one configuration request. Only the terminal states
/// (`Rejected`, `OutputEnabled`) are reported to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    Idle,
    Validated(ValidPwm),
    PinResolved(ValidPwm, PinRoute),
    ClocksEnabled(ValidPwm),
    Programmed(ValidPwm),
    OutputEnabled,
    Rejected(PwmError),
}

/// Drives timer PWM outputs through a register bus and a GPIO driver.
///
/// Each call to [`set_pwm`](Self::set_pwm) is independent: nothing is kept
/// between calls besides the hardware state it leaves behind.
pub struct PwmDriver<B, G> {
    bus: B,
    gpio: G,
}

impl<B: RegisterBus, G: GpioPort> PwmDriver<B, G> {
    pub const fn new(bus: B, gpio: G) -> Self {
        PwmDriver { bus, gpio }
    }

    /// Configures a timer channel and its pin to output PWM.
    ///
    /// On error no register or pin has been touched.
    pub fn set_pwm(&mut self, cfg: &PwmConfig) -> Result<(), PwmError> {
        let mut state = State::Idle;
        loop {
            state = self.step(state, cfg);
            match state {
                State::OutputEnabled => return Ok(()),
                State::Rejected(err) => return Err(err),
                _ => trace!("PWM: {}", state),
            }
        }
    }

    /// [`set_pwm`](Self::set_pwm) reporting through an error code slot.
    pub fn set_pwm_errc(&mut self, cfg: &PwmConfig, errc: &mut Errc) {
        *errc = self.set_pwm(cfg).into();
    }

    fn step(&mut self, state: State, cfg: &PwmConfig) -> State {
        match state {
            State::Idle => {
                if cfg.instance > INSTANCE_COUNT {
                    warn!("PWM: instance {} above TIM{}", cfg.instance, INSTANCE_COUNT);
                    return State::Rejected(PwmError::InvalidArgument);
                }
                match validate(cfg) {
                    Ok(pwm) => State::Validated(pwm),
                    Err(err) => State::Rejected(err),
                }
            }
            State::Validated(pwm) => State::PinResolved(pwm, resolve(pwm.instance, pwm.channel)),
            State::PinResolved(pwm, route) => {
                self.programmer().enable_clocks(&pwm, &route);
                State::ClocksEnabled(pwm)
            }
            State::ClocksEnabled(pwm) => {
                self.programmer().program_timer(&pwm);
                State::Programmed(pwm)
            }
            State::Programmed(pwm) => {
                self.programmer().enable_output(&pwm);
                debug!(
                    "PWM: TIM{} CH{} running, period {} ticks, duty {}",
                    pwm.instance.number(),
                    pwm.channel.number(),
                    pwm.divisor(),
                    pwm.duty()
                );
                State::OutputEnabled
            }
            State::OutputEnabled | State::Rejected(_) => state,
        }
    }

    fn programmer(&mut self) -> RegisterProgrammer<&mut B, &mut G> {
        RegisterProgrammer::new(&mut self.bus, &mut self.gpio)
    }

    pub fn bus(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Gives the bus and GPIO driver back.
    pub fn free(self) -> (B, G) {
        (self.bus, self.gpio)
    }
}
