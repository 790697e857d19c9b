//! One-step matching behaviors.
//!
//! Each behavior drives a single kinematic quantity toward the target's
//! value: over the current frame for position/orientation matching, or over
//! a fixed time constant for velocity/rotation matching. These are one-step
//! corrections, not decelerating approaches.

use crate::error::{require_delta_time, require_positive, SteeringError};
use crate::kinematic::{Kinematic, SteeringOutput};
use crate::vector::{clamp_abs, wrap_angle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Accelerates so the agent would reach the target position within one
/// frame. Fails when `delta_time` is not positive.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionMatch;

impl PositionMatch {
    pub fn steering(
        &self,
        agent: &Kinematic,
        target: &Kinematic,
        delta_time: f32,
    ) -> Result<SteeringOutput, SteeringError> {
        require_delta_time(delta_time)?;
        let desired_velocity = (target.position - agent.position) / delta_time;
        Ok(SteeringOutput::linear(desired_velocity - agent.velocity))
    }
}

/// Rotates so the agent's orientation would match the target's within one
/// frame, taking the shortest angular path.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationMatch;

impl OrientationMatch {
    pub fn steering(
        &self,
        agent: &Kinematic,
        target: &Kinematic,
        delta_time: f32,
    ) -> Result<SteeringOutput, SteeringError> {
        require_delta_time(delta_time)?;
        let diff = wrap_angle(target.orientation - agent.orientation);
        let desired_rotation = diff / delta_time;
        Ok(SteeringOutput::angular(desired_rotation - agent.rotation))
    }
}

/// Matches the target's velocity over a fixed time constant.
///
/// `time_to_target` deliberately decouples responsiveness from the frame
/// rate; raising it makes the agent take longer to match the target.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VelocityMatch {
    pub max_acceleration: f32,
    pub time_to_target: f32,
}

impl VelocityMatch {
    pub fn steering(
        &self,
        agent: &Kinematic,
        target: &Kinematic,
        _delta_time: f32,
    ) -> Result<SteeringOutput, SteeringError> {
        require_positive("time_to_target", self.time_to_target)?;
        let linear = (target.velocity - agent.velocity) / self.time_to_target;
        Ok(SteeringOutput::linear(linear.limit(self.max_acceleration)))
    }
}

/// Matches the target's angular velocity over a fixed time constant.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationMatch {
    pub max_angular_acceleration: f32,
    pub time_to_target: f32,
}

impl RotationMatch {
    pub fn steering(
        &self,
        agent: &Kinematic,
        target: &Kinematic,
        _delta_time: f32,
    ) -> Result<SteeringOutput, SteeringError> {
        require_positive("time_to_target", self.time_to_target)?;
        let angular = (target.rotation - agent.rotation) / self.time_to_target;
        Ok(SteeringOutput::angular(clamp_abs(
            angular,
            self.max_angular_acceleration,
        )))
    }
}
