use core::cell::RefCell;

use critical_section::Mutex;

use super::PwmDriver;
use crate::config::PwmConfig;
use crate::errc::PwmError;
use crate::pinout::GpioPort;
use crate::timer::RegisterBus;

/// A [`PwmDriver`] reachable from several execution contexts (tasks, interrupt handlers).
///
/// Configuring two channels of one timer interleaves read-modify-writes of
/// CR1 and CCER, so every request runs inside a critical section.
///
/// ```ignore
/// let pwm = SharedPwm::new(PwmDriver::new(bus, gpio));
/// // from any task or interrupt handler holding `&pwm`
/// pwm.set_pwm(&cfg)?;
/// ```
pub struct SharedPwm<B, G> {
    driver: Mutex<RefCell<PwmDriver<B, G>>>,
}

impl<B, G> SharedPwm<B, G> {
    pub const fn new(driver: PwmDriver<B, G>) -> Self {
        SharedPwm {
            driver: Mutex::new(RefCell::new(driver)),
        }
    }

    pub fn into_inner(self) -> PwmDriver<B, G> {
        self.driver.into_inner().into_inner()
    }
}

impl<B: RegisterBus, G: GpioPort> SharedPwm<B, G> {
    pub fn set_pwm(&self, cfg: &PwmConfig) -> Result<(), PwmError> {
        critical_section::with(|cs| self.driver.borrow_ref_mut(cs).set_pwm(cfg))
    }

    /// Runs `f` with exclusive access to the driver.
    pub fn lock<R>(&self, f: impl FnOnce(&mut PwmDriver<B, G>) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.driver.borrow_ref_mut(cs)))
    }
}
