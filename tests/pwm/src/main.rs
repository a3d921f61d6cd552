#![no_std]
#![no_main]

use cortex_m_rt::entry;

use hal::{self, clocks::Clocks, pac};

use titan_drivers::pwm::{init_pwm, timer_clock};
use titan_pwm::pinout::{PA0, PA1, PA2, PA3};
use titan_pwm::timer::{Channel, Register, RegisterBus, TimReg, TimerInstance};
use titan_pwm::{Errc, PwmConfig};

use defmt_rtt as _;
// global logger
use panic_probe as _;

/// PWM on-target check: TIM2 CH1..CH4 (PA0..PA3) at 20 kHz with 12.5/25/50/75 % duty,
/// then two requests that must be rejected. Verify the outputs with a scope.
#[entry]
fn main() -> ! {
    // Set up microcontroller peripherals
    let dp = pac::Peripherals::take().unwrap();

    let clock_cfg = Clocks::default();
    clock_cfg.setup().unwrap();

    let clock_freq = timer_clock(&clock_cfg);
    defmt::println!("Timer clock frequency: {} Hz", clock_freq);

    let mut pwm = init_pwm(dp.TIM2, dp.TIM3, dp.TIM4, dp.TIM5);

    for (channel, duty) in [(1, 125), (2, 250), (3, 500), (4, 750)] {
        let cfg = PwmConfig {
            channel,
            instance: 2,
            freq: 20_000,
            duty,
            clock_freq,
        };
        let mut errc = Errc::None;
        pwm.set_pwm_errc(&cfg, &mut errc);
        defmt::println!("TIM2 CH{} duty {}: {}", channel, duty, errc);
    }

    // Read the registers back through the pac accessors
    let tim = TimerInstance::Tim2;
    let reload = (clock_freq / 20_000 - 1) as u32;
    defmt::assert_eq!(pwm.bus().read(Register::Tim(tim, TimReg::Arr)), reload);
    defmt::assert_eq!(
        pwm.bus().read(Register::Tim(tim, TimReg::Ccr(Channel::C3))),
        reload * 500 / 1000
    );
    defmt::assert_eq!(pwm.bus().read(Register::Tim(tim, TimReg::Ccer)), 0x1111);

    // PA0..PA3 in alternate mode on AF1
    let moder = dp.GPIOA.moder.read().bits();
    let afrl = dp.GPIOA.afrl.read().bits();
    for pin in [PA0, PA1, PA2, PA3] {
        let (_, af) = pin.alternate_field();
        defmt::assert_eq!(moder & pin.mode_field().mask(), pin.mode_field().insert(0, 2));
        defmt::assert_eq!(afrl & af.mask(), af.insert(0, 1));
    }

    // Out of range duty and a divisor that does not fit 16 bits
    let bad_duty = PwmConfig {
        channel: 1,
        instance: 3,
        freq: 20_000,
        duty: 1001,
        clock_freq,
    };
    let slow = PwmConfig {
        freq: 1,
        duty: 500,
        ..bad_duty
    };
    defmt::assert_eq!(pwm.set_pwm(&bad_duty), Err(titan_pwm::PwmError::InvalidArgument));
    defmt::assert_eq!(pwm.set_pwm(&slow), Err(titan_pwm::PwmError::InvalidArgument));
    defmt::println!("PWM test done");

    loop {
        cortex_m::asm::wfi();
    }
}

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
