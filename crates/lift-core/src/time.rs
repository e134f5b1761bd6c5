//! Simulated time model.
//!
//! # Design
//!
//! Time is continuous simulated seconds, advanced explicitly by the caller one
//! frame at a time.  Nothing in the simulator reads a wall clock; the driver
//! (a render loop, a test, a headless runner) decides how large each frame is.
//!
//! Every tick entry point receives two values derived from this clock:
//!
//!   delta_secs   — length of the frame just advanced (drives car motion)
//!   elapsed_secs — absolute simulated time (drives door windows and demand)

use std::fmt;

use crate::{LiftError, LiftResult};

/// Monotonic simulated clock.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds since the run started.
    elapsed_secs: f64,
    /// Number of frames advanced so far.
    frame: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `delta_secs` and return the new elapsed time.
    ///
    /// # Errors
    /// `LiftError::InvalidTime` if `delta_secs` is negative or not finite.
    pub fn advance(&mut self, delta_secs: f64) -> LiftResult<f64> {
        check_delta(delta_secs)?;
        self.elapsed_secs += delta_secs;
        self.frame += 1;
        Ok(self.elapsed_secs)
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{} (t={:.3}s)", self.frame, self.elapsed_secs)
    }
}

/// Reject frame lengths that would move time backwards or poison positions.
pub fn check_delta(delta_secs: f64) -> LiftResult<()> {
    if !delta_secs.is_finite() || delta_secs < 0.0 {
        return Err(LiftError::InvalidTime(format!(
            "frame length must be finite and non-negative, got {delta_secs}"
        )));
    }
    Ok(())
}

/// Reject an elapsed time that is earlier than the previously observed one.
pub fn check_elapsed(previous: f64, elapsed_secs: f64) -> LiftResult<()> {
    if !elapsed_secs.is_finite() || elapsed_secs < previous {
        return Err(LiftError::InvalidTime(format!(
            "elapsed time went from {previous} to {elapsed_secs}"
        )));
    }
    Ok(())
}
