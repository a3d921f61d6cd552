//! Physical pins routed to the timer channels and the GPIO collaborator interface.

mod table;

pub use table::*;

use crate::timer::{Channel, Field, TimerInstance};

/// GPIO port letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
}

/// Identifies a physical pin.
///
/// `number` is the package pin number used throughout the board files;
/// `port`/`index` locate it for the GPIO driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    number: u8,
    port: Port,
    index: u8,
}

impl PinId {
    pub const fn new(number: u8, port: Port, index: u8) -> Self {
        PinId {
            number,
            port,
            index,
        }
    }

    pub const fn number(&self) -> u8 {
        self.number
    }

    pub const fn port(&self) -> Port {
        self.port
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    /// MODERy bits of this pin.
    pub const fn mode_field(&self) -> Field {
        Field::new(2 * self.index, 2)
    }

    /// Alternate function register holding this pin and its AFRy bits in it.
    pub const fn alternate_field(&self) -> (Afr, Field) {
        if self.index < 8 {
            (Afr::Low, Field::new(4 * self.index, 4))
        } else {
            (Afr::High, Field::new(4 * (self.index - 8), 4))
        }
    }
}

/// AFRL covers pins 0..7 of a port, AFRH pins 8..15.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Afr {
    Low,
    High,
}

/// Alternate function selector (AFRL/AFRH value) of a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AltFunction(pub u8);

impl AltFunction {
    /// TIM2 is AF1 on every pin it reaches, TIM3..TIM5 are AF2.
    pub const fn for_timer(instance: TimerInstance) -> Self {
        match instance {
            TimerInstance::Tim2 => AltFunction(1),
            _ => AltFunction(2),
        }
    }
}

/// Pin mode (MODER encoding).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input = 0,
    Output = 1,
    Alternate = 2,
    Analog = 3,
}

/// Pin and alternate function that carry one timer channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinRoute {
    pub pin: PinId,
    pub alt: AltFunction,
}

/// GPIO driver used to hand a pin over to a timer.
pub trait GpioPort {
    /// Enables the clock of the port owning `pin`.
    fn enable_clock(&mut self, pin: PinId);

    fn set_mode(&mut self, pin: PinId, mode: PinMode);

    fn set_alternate(&mut self, pin: PinId, alt: AltFunction);
}

impl<G: GpioPort + ?Sized> GpioPort for &mut G {
    fn enable_clock(&mut self, pin: PinId) {
        (**self).enable_clock(pin)
    }

    fn set_mode(&mut self, pin: PinId, mode: PinMode) {
        (**self).set_mode(pin, mode)
    }

    fn set_alternate(&mut self, pin: PinId, alt: AltFunction) {
        (**self).set_alternate(pin, alt)
    }
}

/// Pin and alternate function carrying `channel` of `instance`.
pub fn resolve(instance: TimerInstance, channel: Channel) -> PinRoute {
    PinRoute {
        pin: PWM_PIN_TABLE[instance.index()][channel.index()],
        alt: AltFunction::for_timer(instance),
    }
}

/// Same as [`resolve`] for raw timer and channel numbers; `None` when the pair is not routed.
pub fn lookup(instance: i32, channel: i32) -> Option<PinRoute> {
    let instance = TimerInstance::try_from(instance).ok()?;
    let channel = Channel::try_from(channel).ok()?;
    Some(resolve(instance, channel))
}
