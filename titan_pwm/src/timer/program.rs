use super::regs::{Register, RegisterBus, TimReg, CR1_ARPE, CR1_CEN};
use crate::config::ValidPwm;
use crate::pinout::{GpioPort, PinMode, PinRoute};

/// PWM mode 1: output active while the counter is below the compare value.
const OC_MODE_PWM1: u32 = 0b0110;

/// Writes a validated configuration into the timer and pin registers.
///
/// The sequence is split in three phases that must run in order:
/// 1. [`enable_clocks`](Self::enable_clocks): timer clock, then pin clock, mode and alternate function
/// 2. [`program_timer`](Self::program_timer): reload, compare, output compare mode
/// 3. [`enable_output`](Self::enable_output): channel output, counter, reload preload
///
/// The output is only enabled once period and compare value are in place, so
/// no pulse with a stale duty is emitted.
pub struct RegisterProgrammer<B, G> {
    bus: B,
    gpio: G,
}

impl<B: RegisterBus, G: GpioPort> RegisterProgrammer<B, G> {
    pub fn new(bus: B, gpio: G) -> Self {
        RegisterProgrammer { bus, gpio }
    }

    pub fn enable_clocks(&mut self, pwm: &ValidPwm, route: &PinRoute) {
        // Enable timer clock
        self.bus
            .set_field(Register::Apb1lenr, pwm.instance.clock_enable());

        // Enable port clock and hand the pin to the timer
        self.gpio.enable_clock(route.pin);
        self.gpio.set_mode(route.pin, PinMode::Alternate);
        self.gpio.set_alternate(route.pin, route.alt);
    }

    pub fn program_timer(&mut self, pwm: &ValidPwm) {
        let tim = pwm.instance;
        let ch = pwm.channel;
        let fields = tim.width().fields();

        let reload = pwm.reload();
        let compare = pwm.compare();
        trace!(
            "PWM: TIM{} CH{} reload {} compare {}",
            tim.number(),
            ch.number(),
            reload,
            compare
        );

        // Set period
        self.bus
            .write_field(Register::Tim(tim, TimReg::Arr), fields.arr, reload);
        // Set duty
        self.bus
            .write_field(Register::Tim(tim, TimReg::Ccr(ch)), fields.ccr(ch), compare);

        // PWM mode 1 with compare preload
        let ccmr = Register::Tim(tim, ch.ccmr());
        self.bus.write_field(ccmr, ch.oc_mode_low(), OC_MODE_PWM1 & 0b111);
        self.bus.write_field(ccmr, ch.oc_mode_high(), OC_MODE_PWM1 >> 3);
        self.bus.set_field(ccmr, ch.oc_preload());
    }

    pub fn enable_output(&mut self, pwm: &ValidPwm) {
        let tim = pwm.instance;

        // Enable channel output
        self.bus
            .set_field(Register::Tim(tim, TimReg::Ccer), pwm.channel.output_enable());
        // Start counter
        self.bus.set_field(Register::Tim(tim, TimReg::Cr1), CR1_CEN);
        // Buffer later period changes until the next update event
        self.bus.set_field(Register::Tim(tim, TimReg::Cr1), CR1_ARPE);
    }
}
