use hal::{
    clocks::Clocks,
    pac::{TIM2, TIM3, TIM4, TIM5},
};
use titan_pwm::PwmDriver;

use crate::mmio::TimerRegs;
use crate::pinout::HalGpio;

/// PWM driver bound to the board's timers and pins.
pub type BoardPwm = PwmDriver<TimerRegs, HalGpio>;

/// Takes TIM2..TIM5 and returns a driver for their PWM outputs.
pub fn init_pwm(tim2: TIM2, tim3: TIM3, tim4: TIM4, tim5: TIM5) -> BoardPwm {
    PwmDriver::new(TimerRegs::new(tim2, tim3, tim4, tim5), HalGpio::new())
}

/// Frequency of the clock feeding TIM2..TIM5, to use as `PwmConfig::clock_freq`.
pub fn timer_clock(clock_cfg: &Clocks) -> i32 {
    // APB1 timer kernel clock, at most 240 MHz, fits i32
    clock_cfg.apb1_timer() as i32
}
