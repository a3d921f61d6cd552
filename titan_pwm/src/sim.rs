//! Simulated hardware for host tests: a register file and a GPIO driver that
//! record every access into one shared log, so ordering across both can be checked.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use crate::pinout::{AltFunction, GpioPort, PinId, PinMode, PinRoute};
use crate::timer::{Field, Register, RegisterBus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Set(Register, Field),
    Write(Register, Field, u32),
    PinClock(PinId),
    PinMode(PinId, PinMode),
    PinAlternate(PinId, AltFunction),
}

type Log = Rc<RefCell<Vec<Access>>>;

pub struct RegisterFile {
    values: Vec<(Register, u32)>,
    log: Log,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            values: Vec::new(),
            log: Log::default(),
        }
    }

    /// GPIO driver logging into the same access log as this register file.
    pub fn gpio(&self) -> RecordingGpio {
        RecordingGpio {
            log: self.log.clone(),
        }
    }

    /// Loads a reset value without logging it.
    pub fn preset(&mut self, reg: Register, value: u32) {
        self.store(reg, value);
    }

    pub fn value(&self, reg: Register) -> u32 {
        self.values
            .iter()
            .find(|(r, _)| *r == reg)
            .map_or(0, |(_, v)| *v)
    }

    /// All register contents, sorted so two files can be compared.
    pub fn snapshot(&self) -> Vec<(Register, u32)> {
        let mut regs = self.values.clone();
        regs.sort_by_key(|(reg, _)| std::format!("{:?}", reg));
        regs
    }

    pub fn log(&self) -> Vec<Access> {
        self.log.borrow().clone()
    }

    /// Field writes issued to `reg`, in order.
    pub fn field_writes(&self, reg: Register) -> Vec<(Field, u32)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|access| match *access {
                Access::Write(r, field, value) if r == reg => Some((field, value)),
                _ => None,
            })
            .collect()
    }

    fn store(&mut self, reg: Register, value: u32) {
        match self.values.iter_mut().find(|(r, _)| *r == reg) {
            Some((_, v)) => *v = value,
            None => self.values.push((reg, value)),
        }
    }
}

impl RegisterBus for RegisterFile {
    fn read(&mut self, reg: Register) -> u32 {
        self.value(reg)
    }

    fn write(&mut self, reg: Register, value: u32) {
        self.store(reg, value);
    }

    fn write_field(&mut self, reg: Register, field: Field, value: u32) {
        self.log.borrow_mut().push(Access::Write(reg, field, value));
        let current = self.value(reg);
        self.store(reg, field.insert(current, value));
    }

    fn set_field(&mut self, reg: Register, field: Field) {
        self.log.borrow_mut().push(Access::Set(reg, field));
        let current = self.value(reg);
        self.store(reg, current | field.mask());
    }
}

#[derive(Default)]
pub struct RecordingGpio {
    log: Log,
}

impl RecordingGpio {
    /// Calls a correct hand over of `route.pin` to its timer produces.
    pub fn alternate_sequence(route: &PinRoute) -> [Access; 3] {
        [
            Access::PinClock(route.pin),
            Access::PinMode(route.pin, PinMode::Alternate),
            Access::PinAlternate(route.pin, route.alt),
        ]
    }
}

impl GpioPort for RecordingGpio {
    fn enable_clock(&mut self, pin: PinId) {
        self.log.borrow_mut().push(Access::PinClock(pin));
    }

    fn set_mode(&mut self, pin: PinId, mode: PinMode) {
        self.log.borrow_mut().push(Access::PinMode(pin, mode));
    }

    fn set_alternate(&mut self, pin: PinId, alt: AltFunction) {
        self.log.borrow_mut().push(Access::PinAlternate(pin, alt));
    }
}
