//! Timer output pins of the flight computer board (LQFP144 package numbering).
use super::{PinId, Port};

pub const PA0: PinId = PinId::new(37, Port::A, 0);
pub const PA1: PinId = PinId::new(38, Port::A, 1);
pub const PA2: PinId = PinId::new(39, Port::A, 2);
pub const PA3: PinId = PinId::new(40, Port::A, 3);
pub const PA6: PinId = PinId::new(45, Port::A, 6);
pub const PA7: PinId = PinId::new(46, Port::A, 7);

pub const PB0: PinId = PinId::new(49, Port::B, 0);
pub const PB1: PinId = PinId::new(50, Port::B, 1);
pub const PB6: PinId = PinId::new(133, Port::B, 6);
pub const PB7: PinId = PinId::new(134, Port::B, 7);
pub const PB8: PinId = PinId::new(136, Port::B, 8);
pub const PB9: PinId = PinId::new(137, Port::B, 9);

/// Output pin per timer (rows TIM2..TIM5) and channel (columns CH1..CH4).
///
/// Only one routing per channel is wired on this board revision. The chip
/// offers others, left unused:
/// TIM2 CH1 PA5 (44) / PA15 (108), CH2 PB3 (130), CH3 PB10 (66), CH4 PB11 (67);
/// TIM3 CH1..CH4 PC6..PC9 (93..96).
pub const PWM_PIN_TABLE: [[PinId; 4]; 4] = [
    [PA0, PA1, PA2, PA3], // TIM2
    [PA6, PA7, PB0, PB1], // TIM3
    [PB6, PB7, PB8, PB9], // TIM4
    [PA0, PA1, PA2, PA3], // TIM5
];
