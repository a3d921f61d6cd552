//! GPIO side of the PWM driver, on the `hal::pac` GPIOA/GPIOB and RCC accessors.

use hal::pac::{GPIOA, GPIOB, RCC};
use titan_pwm::pinout::{AltFunction, Afr, GpioPort, PinId, PinMode, Port};

/// Hands pins over to the timers, one register per `GpioPort` step.
pub struct HalGpio;

impl HalGpio {
    pub const fn new() -> Self {
        HalGpio
    }
}

/// Read-modify-write of `$field` in register `$reg` of the GPIO block `$gpio`.
macro_rules! gpio_modify {
    ($gpio:ident, $reg:ident, $field:expr, $value:expr) => {
        cortex_m::interrupt::free(|_| unsafe {
            (*$gpio::ptr())
                .$reg
                .modify(|r, w| w.bits($field.insert(r.bits(), $value)))
        })
    };
}

impl GpioPort for HalGpio {
    fn enable_clock(&mut self, pin: PinId) {
        // Port clock only, the pin keeps its reset configuration
        let rcc = unsafe { &*RCC::ptr() };
        match pin.port() {
            Port::A => rcc.ahb4enr.modify(|_, w| w.gpioaen().set_bit()),
            Port::B => rcc.ahb4enr.modify(|_, w| w.gpioben().set_bit()),
        }
    }

    fn set_mode(&mut self, pin: PinId, mode: PinMode) {
        let field = pin.mode_field();
        match pin.port() {
            Port::A => gpio_modify!(GPIOA, moder, field, mode as u32),
            Port::B => gpio_modify!(GPIOB, moder, field, mode as u32),
        }
    }

    fn set_alternate(&mut self, pin: PinId, alt: AltFunction) {
        defmt::trace!("GPIO: pin {} -> AF{}", pin.number(), alt.0);
        let af = alt.0 as u32;
        match (pin.port(), pin.alternate_field()) {
            (Port::A, (Afr::Low, field)) => gpio_modify!(GPIOA, afrl, field, af),
            (Port::A, (Afr::High, field)) => gpio_modify!(GPIOA, afrh, field, af),
            (Port::B, (Afr::Low, field)) => gpio_modify!(GPIOB, afrl, field, af),
            (Port::B, (Afr::High, field)) => gpio_modify!(GPIOB, afrh, field, af),
        }
    }
}
