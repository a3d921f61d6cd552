use super::{Channel, TimerInstance};

/// Bit field inside a 32-bit register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    pub pos: u8,
    pub width: u8,
}

impl Field {
    pub const fn new(pos: u8, width: u8) -> Self {
        Field { pos, width }
    }

    /// Single bit field.
    pub const fn bit(pos: u8) -> Self {
        Field { pos, width: 1 }
    }

    /// Field bits in register position.
    pub const fn mask(self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            ((1u32 << self.width) - 1) << self.pos
        }
    }

    /// Replaces the field in `reg` with `value`; bits of `value` that do not fit are dropped.
    pub const fn insert(self, reg: u32, value: u32) -> u32 {
        (reg & !self.mask()) | ((value << self.pos) & self.mask())
    }
}

/// Registers of a general purpose timer touched by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimReg {
    Cr1,
    Ccmr1,
    Ccmr2,
    Ccer,
    Arr,
    Ccr(Channel),
}

/// CR1 counter enable.
pub const CR1_CEN: Field = Field::bit(0);
/// CR1 auto-reload preload enable.
pub const CR1_ARPE: Field = Field::bit(7);

/// A hardware register addressed by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// RCC APB1 low peripheral clock enable register, shared by all APB1 peripherals.
    Apb1lenr,
    Tim(TimerInstance, TimReg),
}

/// Access to memory mapped registers.
///
/// Implementors provide whole-register `read`/`write`; the field helpers are
/// read-modify-write by default and may be overridden with an atomic version.
pub trait RegisterBus {
    fn read(&mut self, reg: Register) -> u32;

    fn write(&mut self, reg: Register, value: u32);

    /// Writes `value` into `field`, leaving the other bits of `reg` untouched.
    fn write_field(&mut self, reg: Register, field: Field, value: u32) {
        let current = self.read(reg);
        self.write(reg, field.insert(current, value));
    }

    /// Sets every bit of `field`.
    fn set_field(&mut self, reg: Register, field: Field) {
        let current = self.read(reg);
        self.write(reg, current | field.mask());
    }
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    fn read(&mut self, reg: Register) -> u32 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u32) {
        (**self).write(reg, value)
    }

    fn write_field(&mut self, reg: Register, field: Field, value: u32) {
        (**self).write_field(reg, field, value)
    }

    fn set_field(&mut self, reg: Register, field: Field) {
        (**self).set_field(reg, field)
    }
}
