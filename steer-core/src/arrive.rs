use crate::error::{require_positive, SteeringError};
use crate::kinematic::{Kinematic, SteeringOutput};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decelerating approach toward a target position.
///
/// Outside `slow_radius` the agent aims for `max_speed`; inside it the
/// desired speed ramps down linearly with distance, and inside
/// `target_radius` the behavior stops steering altogether. Any snap-to-
/// target or freeze logic is the caller's policy, not this behavior's.
/// `target_radius <= slow_radius` is the expected configuration.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arrive {
    pub max_acceleration: f32,
    pub max_speed: f32,
    /// Within this distance the agent counts as arrived.
    pub target_radius: f32,
    /// Deceleration begins inside this distance.
    pub slow_radius: f32,
    /// Time constant over which to reach the desired velocity.
    pub time_to_target: f32,
}

impl Arrive {
    pub fn steering(
        &self,
        agent: &Kinematic,
        target: &Kinematic,
    ) -> Result<SteeringOutput, SteeringError> {
        require_positive("slow_radius", self.slow_radius)?;
        require_positive("time_to_target", self.time_to_target)?;

        let direction = target.position - agent.position;
        let distance = direction.magnitude();

        if distance < self.target_radius {
            return Ok(SteeringOutput::ZERO);
        }

        let target_speed = if distance > self.slow_radius {
            self.max_speed
        } else {
            self.max_speed * distance / self.slow_radius
        };

        let desired_velocity = direction.normalize() * target_speed;
        let linear = (desired_velocity - agent.velocity) / self.time_to_target;
        Ok(SteeringOutput::linear(linear.limit(self.max_acceleration)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector2D;

    fn arrive() -> Arrive {
        Arrive {
            max_acceleration: 50.0,
            max_speed: 50.0,
            target_radius: 5.0,
            slow_radius: 50.0,
            time_to_target: 0.1,
        }
    }

    #[test]
    fn test_zero_output_at_target() {
        let agent = Kinematic::at(Vector2D::new(7.0, -3.0));
        let target = Kinematic::at(Vector2D::new(7.0, -3.0));

        let out = arrive().steering(&agent, &target).unwrap();
        assert_eq!(out, SteeringOutput::ZERO);
    }

    #[test]
    fn test_first_tick_clamped_toward_target() {
        // agent at the origin, at rest; target 100 units along +x
        let agent = Kinematic::at(Vector2D::zero());
        let target = Kinematic::at(Vector2D::new(100.0, 0.0));

        let out = arrive().steering(&agent, &target).unwrap();

        // unclamped demand is (500, 0); the output clamps to max acceleration
        assert!((out.linear.magnitude() - 50.0).abs() < 1e-3);
        assert!((out.linear.normalize().x - 1.0).abs() < 1e-5);
        assert!(out.linear.y.abs() < 1e-5);
        assert_eq!(out.angular, 0.0);
    }

    #[test]
    fn test_speed_ramps_linearly_inside_slow_radius() {
        let behavior = arrive();
        let target = Kinematic::at(Vector2D::zero());

        // desired speed scales with distance; read it back from the output
        // of an agent at rest: linear = desired / time_to_target (unclamped
        // when small enough)
        let probe = |distance: f32| {
            let agent = Kinematic::at(Vector2D::new(distance, 0.0));
            let out = Arrive {
                max_acceleration: f32::MAX,
                ..behavior
            }
            .steering(&agent, &target)
            .unwrap();
            out.linear.magnitude() * behavior.time_to_target
        };

        let at_10 = probe(10.0);
        let at_20 = probe(20.0);
        let at_40 = probe(40.0);

        assert!(at_10 > 0.0 && at_10 < behavior.max_speed);
        assert!(at_20 > 0.0 && at_20 < behavior.max_speed);
        assert!((at_20 / at_10 - 2.0).abs() < 1e-3);
        assert!((at_40 / at_10 - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_speed_outside_slow_radius() {
        let behavior = Arrive {
            max_acceleration: f32::MAX,
            ..arrive()
        };
        let agent = Kinematic::at(Vector2D::new(200.0, 0.0));
        let target = Kinematic::at(Vector2D::zero());

        let out = behavior.steering(&agent, &target).unwrap();
        let desired_speed = out.linear.magnitude() * behavior.time_to_target;
        assert!((desired_speed - behavior.max_speed).abs() < 1e-2);
    }

    #[test]
    fn test_rejects_degenerate_config() {
        let mut behavior = arrive();
        behavior.slow_radius = 0.0;
        let agent = Kinematic::at(Vector2D::new(10.0, 0.0));
        let target = Kinematic::at(Vector2D::zero());
        assert_eq!(
            behavior.steering(&agent, &target),
            Err(SteeringError::NonPositiveParameter {
                name: "slow_radius",
                value: 0.0
            })
        );

        let mut behavior = arrive();
        behavior.time_to_target = -1.0;
        assert!(behavior.steering(&agent, &target).is_err());
    }
}
