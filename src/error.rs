use core::fmt;

use crate::line::LineId;

/// Failure while bringing up one input line. `E` is the line driver's error,
/// passed through unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError<E> {
    NotReady,
    ConfigFailed(E),
    ReadFailed(E),
    InterruptRegistrationFailed(E),
}

impl<E: fmt::Debug> fmt::Display for LineError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::NotReady => write!(f, "input device is not ready"),
            LineError::ConfigFailed(e) => write!(f, "failed to configure input: {e:?}"),
            LineError::ReadFailed(e) => write!(f, "failed to read baseline level: {e:?}"),
            LineError::InterruptRegistrationFailed(e) => {
                write!(f, "failed to configure edge interrupt: {e:?}")
            }
        }
    }
}

/// Fatal error during startup. Nothing runs after one of these.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError<E> {
    IndicatorNotReady,
    Line { line: LineId, error: LineError<E> },
}

impl<E: fmt::Debug> fmt::Display for StartupError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::IndicatorNotReady => write!(f, "indicator device is not ready"),
            StartupError::Line { line, error } => write!(f, "{line:?} line: {error}"),
        }
    }
}
