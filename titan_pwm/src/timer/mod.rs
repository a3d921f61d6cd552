//! General purpose timers TIM2..TIM5 and their compare channels.

mod program;
mod regs;

pub use program::RegisterProgrammer;
pub use regs::{Field, Register, RegisterBus, TimReg, CR1_ARPE, CR1_CEN};

use crate::errc::PwmError;

/// One of the general purpose timers that can drive a PWM output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerInstance {
    Tim2 = 2,
    Tim3 = 3,
    Tim4 = 4,
    Tim5 = 5,
}

impl TimerInstance {
    /// Timer number as written in the reference manual (TIM2 -> 2).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero based row of the timer in the pin table.
    pub const fn index(self) -> usize {
        self as usize - 2
    }

    /// TIMxEN bit of this timer in RCC_APB1LENR.
    pub const fn clock_enable(self) -> Field {
        Field::bit(self.index() as u8)
    }

    /// TIM2 and TIM5 have 32-bit counters, TIM3 and TIM4 16-bit ones.
    pub const fn width(self) -> CounterWidth {
        match self {
            Self::Tim2 | Self::Tim5 => CounterWidth::Bits32,
            Self::Tim3 | Self::Tim4 => CounterWidth::Bits16,
        }
    }
}

impl TryFrom<i32> for TimerInstance {
    type Error = PwmError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Tim2),
            3 => Ok(Self::Tim3),
            4 => Ok(Self::Tim4),
            5 => Ok(Self::Tim5),
            _ => Err(PwmError::InvalidArgument),
        }
    }
}

/// Capture/compare channel of a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    C1 = 1,
    C2 = 2,
    C3 = 3,
    C4 = 4,
}

impl Channel {
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// CCMR1 holds channels 1 and 2, CCMR2 channels 3 and 4.
    pub const fn ccmr(self) -> TimReg {
        match self {
            Self::C1 | Self::C2 => TimReg::Ccmr1,
            Self::C3 | Self::C4 => TimReg::Ccmr2,
        }
    }

    /// Odd channels use the low byte of their CCMR register, even channels the high byte.
    const fn ccmr_shift(self) -> u8 {
        match self {
            Self::C1 | Self::C3 => 0,
            Self::C2 | Self::C4 => 8,
        }
    }

    /// OCxM[2:0]
    pub const fn oc_mode_low(self) -> Field {
        Field::new(4 + self.ccmr_shift(), 3)
    }

    /// OCxM[3], split off at bit 16 (odd) or 24 (even).
    pub const fn oc_mode_high(self) -> Field {
        Field::bit(16 + self.ccmr_shift())
    }

    /// OCxPE
    pub const fn oc_preload(self) -> Field {
        Field::bit(3 + self.ccmr_shift())
    }

    /// CCxE in CCER.
    pub const fn output_enable(self) -> Field {
        Field::bit(4 * self.index() as u8)
    }
}

impl TryFrom<i32> for Channel {
    type Error = PwmError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::C1),
            2 => Ok(Self::C2),
            3 => Ok(Self::C3),
            4 => Ok(Self::C4),
            _ => Err(PwmError::InvalidArgument),
        }
    }
}

/// Counter width of a timer, selecting how ARR and CCRx are packed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterWidth {
    /// Value lives in the low half of the 32-bit register.
    Bits16,
    /// Value spans the whole register.
    Bits32,
}

/// Field descriptors of the auto-reload and the four compare registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerFields {
    pub arr: Field,
    pub ccr: [Field; 4],
}

const FIELDS_16: TimerFields = TimerFields {
    arr: Field::new(0, 16),
    ccr: [Field::new(0, 16); 4],
};

const FIELDS_32: TimerFields = TimerFields {
    arr: Field::new(0, 32),
    ccr: [Field::new(0, 32); 4],
};

impl CounterWidth {
    pub const fn fields(self) -> &'static TimerFields {
        match self {
            Self::Bits16 => &FIELDS_16,
            Self::Bits32 => &FIELDS_32,
        }
    }
}

impl TimerFields {
    pub const fn ccr(&self, channel: Channel) -> Field {
        self.ccr[channel.index()]
    }
}
