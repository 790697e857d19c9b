use crate::error::{require_positive, SteeringError};
use crate::kinematic::{Kinematic, SteeringOutput};
use crate::vector::{clamp_abs, wrap_angle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decelerating rotation toward a target orientation.
///
/// The rotation-space mirror of [`Arrive`](crate::arrive::Arrive): the
/// angular difference is wrapped into `[-PI, PI]`, the desired rotation
/// speed ramps down linearly inside `deceleration_radius`, and inside
/// `satisfaction_radius` no steering is applied.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Align {
    pub max_angular_acceleration: f32,
    pub max_rotation: f32,
    /// Within this angular difference the orientation counts as matched.
    pub satisfaction_radius: f32,
    /// Rotation speed ramps down inside this angular difference.
    pub deceleration_radius: f32,
    pub time_to_target: f32,
}

impl Align {
    pub fn steering(
        &self,
        agent: &Kinematic,
        target: &Kinematic,
    ) -> Result<SteeringOutput, SteeringError> {
        require_positive("deceleration_radius", self.deceleration_radius)?;
        require_positive("time_to_target", self.time_to_target)?;

        let rotation_diff = wrap_angle(target.orientation - agent.orientation);
        let rotation_size = rotation_diff.abs();

        if rotation_size < self.satisfaction_radius {
            return Ok(SteeringOutput::ZERO);
        }

        let mut desired_rotation = if rotation_size > self.deceleration_radius {
            self.max_rotation
        } else {
            self.max_rotation * rotation_size / self.deceleration_radius
        };
        // sign-match the desired speed to the direction of the difference
        desired_rotation *= rotation_diff / rotation_size;

        let angular = (desired_rotation - agent.rotation) / self.time_to_target;
        Ok(SteeringOutput::angular(clamp_abs(
            angular,
            self.max_angular_acceleration,
        )))
    }
}
