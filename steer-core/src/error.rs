use core::fmt;

/// Domain errors for steering computations.
///
/// These are configuration or precondition violations detected at call
/// time. A call either returns a complete, finite steering output or fails
/// with one of these; the legacy behavior of dividing by zero is replaced
/// by a reported failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SteeringError {
    /// A timing-sensitive matching behavior was called with `dt <= 0`.
    NonPositiveDeltaTime(f32),
    /// A tunable that divides the computation (`time_to_target`,
    /// `slow_radius`, `deceleration_radius`, ...) was not strictly positive.
    NonPositiveParameter { name: &'static str, value: f32 },
    /// Flocking was asked to steer an agent index outside the flock slice.
    AgentIndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for SteeringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SteeringError::NonPositiveDeltaTime(dt) => {
                write!(f, "delta time must be positive, got {}", dt)
            }
            SteeringError::NonPositiveParameter { name, value } => {
                write!(f, "{} must be positive, got {}", name, value)
            }
            SteeringError::AgentIndexOutOfRange { index, len } => {
                write!(f, "agent index {} out of range for flock of {}", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SteeringError {}

/// Validates a strictly positive tunable at call time.
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<(), SteeringError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SteeringError::NonPositiveParameter { name, value })
    }
}

/// Validates the per-frame elapsed time for behaviors that divide by it.
pub(crate) fn require_delta_time(delta_time: f32) -> Result<(), SteeringError> {
    if delta_time > 0.0 {
        Ok(())
    } else {
        Err(SteeringError::NonPositiveDeltaTime(delta_time))
    }
}
