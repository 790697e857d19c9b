use crate::vector::{wrap_angle, Vector2D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Instantaneous motion state of an agent or a target.
///
/// One instance per agent, plus one synthesized instance per target (a
/// clicked point, a pointer, or another agent).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Kinematic {
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Heading in radians.
    pub orientation: f32,
    /// Angular velocity in radians per second.
    pub rotation: f32,
}

impl Kinematic {
    pub fn new(position: Vector2D, velocity: Vector2D, orientation: f32, rotation: f32) -> Self {
        Self {
            position,
            velocity,
            orientation,
            rotation,
        }
    }

    /// A stationary state at `position`, facing along +x.
    pub fn at(position: Vector2D) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    /// Applies one steering output over `dt` seconds using explicit Euler
    /// integration. This is the contract every caller must honor:
    /// velocity before position, rotation before orientation, orientation
    /// wrapped back into `[-PI, PI]`.
    pub fn integrate(&mut self, steering: &SteeringOutput, dt: f32) {
        self.velocity += steering.linear * dt;
        self.position += self.velocity * dt;
        self.rotation += steering.angular * dt;
        self.orientation = wrap_angle(self.orientation + self.rotation * dt);
    }

    /// Points the orientation along the current velocity when the agent is
    /// actually moving; a near-zero velocity leaves the heading alone.
    pub fn face_velocity(&mut self) {
        if self.velocity.magnitude() > 0.01 {
            #[cfg(feature = "std")]
            {
                self.orientation = self.velocity.y.atan2(self.velocity.x);
            }
            #[cfg(not(feature = "std"))]
            {
                self.orientation = libm::atan2f(self.velocity.y, self.velocity.x);
            }
        }
    }
}

/// The bounded acceleration produced by one steering computation.
///
/// Returned fresh each call and never retained between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SteeringOutput {
    /// Linear acceleration.
    pub linear: Vector2D,
    /// Angular acceleration in radians per second squared.
    pub angular: f32,
}

impl SteeringOutput {
    pub const ZERO: SteeringOutput = SteeringOutput {
        linear: Vector2D { x: 0.0, y: 0.0 },
        angular: 0.0,
    };

    pub fn new(linear: Vector2D, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// Linear-only output, angular left at zero.
    pub fn linear(linear: Vector2D) -> Self {
        Self {
            linear,
            angular: 0.0,
        }
    }

    /// Angular-only output, linear left at zero.
    pub fn angular(angular: f32) -> Self {
        Self {
            linear: Vector2D::zero(),
            angular,
        }
    }
}
