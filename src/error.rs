//! Error type shared by the surface and the time keeping code

use core::{convert::Infallible, fmt};

/// Errors raised while building samples, labels or drawing a frame.
///
/// `E` is the error of the underlying draw target. Paths that never touch a
/// draw target use the default `Infallible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E = Infallible> {
    /// The draw target rejected a pixel write
    Draw(E),
    /// Label text exceeds the fixed label buffer
    LabelOverflow,
    /// Hour, minute or second out of range
    InvalidTime,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Draw(err) => write!(f, "drawing failed: {:?}", err),
            Error::LabelOverflow => f.write_str("label text too long"),
            Error::InvalidTime => f.write_str("time value out of range"),
        }
    }
}
