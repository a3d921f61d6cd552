//! Register bus over the TIM2..TIM5 blocks and RCC, through the `hal::pac` accessors.

use hal::pac::{RCC, TIM2, TIM3, TIM4, TIM5};
use titan_pwm::timer::{Channel, Field, Register, RegisterBus, TimReg};
use titan_pwm::TimerInstance;

/// Owns the four general purpose timers so no other driver can reach their registers.
pub struct TimerRegs {
    tim2: TIM2,
    tim3: TIM3,
    tim4: TIM4,
    tim5: TIM5,
}

impl TimerRegs {
    pub fn new(tim2: TIM2, tim3: TIM3, tim4: TIM4, tim5: TIM5) -> Self {
        TimerRegs {
            tim2,
            tim3,
            tim4,
            tim5,
        }
    }
}

/// Reads `$reg` of the timer block `$tim` as a raw word.
macro_rules! tim_read {
    ($tim:expr, $reg:expr) => {
        match $reg {
            TimReg::Cr1 => $tim.cr1.read().bits(),
            TimReg::Ccmr1 => $tim.ccmr1_output().read().bits(),
            TimReg::Ccmr2 => $tim.ccmr2_output().read().bits(),
            TimReg::Ccer => $tim.ccer.read().bits(),
            TimReg::Arr => $tim.arr.read().bits(),
            TimReg::Ccr(Channel::C1) => $tim.ccr1.read().bits(),
            TimReg::Ccr(Channel::C2) => $tim.ccr2.read().bits(),
            TimReg::Ccr(Channel::C3) => $tim.ccr3.read().bits(),
            TimReg::Ccr(Channel::C4) => $tim.ccr4.read().bits(),
        }
    };
}

/// Writes `$value` as a raw word into `$reg` of the timer block `$tim`.
macro_rules! tim_write {
    ($tim:expr, $reg:expr, $value:expr) => {
        match $reg {
            TimReg::Cr1 => $tim.cr1.write(|w| unsafe { w.bits($value) }),
            TimReg::Ccmr1 => $tim.ccmr1_output().write(|w| unsafe { w.bits($value) }),
            TimReg::Ccmr2 => $tim.ccmr2_output().write(|w| unsafe { w.bits($value) }),
            TimReg::Ccer => $tim.ccer.write(|w| unsafe { w.bits($value) }),
            TimReg::Arr => $tim.arr.write(|w| unsafe { w.bits($value) }),
            TimReg::Ccr(Channel::C1) => $tim.ccr1.write(|w| unsafe { w.bits($value) }),
            TimReg::Ccr(Channel::C2) => $tim.ccr2.write(|w| unsafe { w.bits($value) }),
            TimReg::Ccr(Channel::C3) => $tim.ccr3.write(|w| unsafe { w.bits($value) }),
            TimReg::Ccr(Channel::C4) => $tim.ccr4.write(|w| unsafe { w.bits($value) }),
        }
    };
}

impl RegisterBus for TimerRegs {
    fn read(&mut self, reg: Register) -> u32 {
        match reg {
            // RCC is shared with every other peripheral driver
            Register::Apb1lenr => unsafe { (*RCC::ptr()).apb1lenr.read().bits() },
            Register::Tim(TimerInstance::Tim2, r) => tim_read!(self.tim2, r),
            Register::Tim(TimerInstance::Tim3, r) => tim_read!(self.tim3, r),
            Register::Tim(TimerInstance::Tim4, r) => tim_read!(self.tim4, r),
            Register::Tim(TimerInstance::Tim5, r) => tim_read!(self.tim5, r),
        }
    }

    fn write(&mut self, reg: Register, value: u32) {
        match reg {
            Register::Apb1lenr => unsafe { (*RCC::ptr()).apb1lenr.write(|w| w.bits(value)) },
            Register::Tim(TimerInstance::Tim2, r) => tim_write!(self.tim2, r, value),
            Register::Tim(TimerInstance::Tim3, r) => tim_write!(self.tim3, r, value),
            Register::Tim(TimerInstance::Tim4, r) => tim_write!(self.tim4, r, value),
            Register::Tim(TimerInstance::Tim5, r) => tim_write!(self.tim5, r, value),
        }
    }

    fn write_field(&mut self, reg: Register, field: Field, value: u32) {
        if value & !(field.mask() >> field.pos) != 0 {
            defmt::warn!(
                "MMIO: value {} truncated to {} bits",
                value,
                field.width
            );
        }
        cortex_m::interrupt::free(|_| {
            let current = self.read(reg);
            self.write(reg, field.insert(current, value));
        });
    }

    fn set_field(&mut self, reg: Register, field: Field) {
        cortex_m::interrupt::free(|_| {
            let current = self.read(reg);
            self.write(reg, current | field.mask());
        });
    }
}
