//! Error types reported by the PWM driver.

use core::fmt;

/// Failure of a PWM configuration request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// A field of the configuration is out of range (frequency, clock, prescaler,
    /// duty, channel or instance).
    InvalidArgument,
}

impl fmt::Display for PwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwmError::InvalidArgument => f.write_str("invalid PWM configuration"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PwmError {}

/// Error code written to a caller supplied slot, for callers that keep a
/// status word instead of matching on `Result`.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Errc {
    #[default]
    None = 0,
    InvalidArgument = 1,
}

impl From<PwmError> for Errc {
    fn from(err: PwmError) -> Self {
        match err {
            PwmError::InvalidArgument => Errc::InvalidArgument,
        }
    }
}

impl From<Result<(), PwmError>> for Errc {
    fn from(res: Result<(), PwmError>) -> Self {
        match res {
            Ok(()) => Errc::None,
            Err(err) => err.into(),
        }
    }
}
