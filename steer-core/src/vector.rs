use core::f32::consts::{PI, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D vector used for positions, velocities and accelerations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing along `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        #[cfg(feature = "std")]
        {
            Self {
                x: angle.cos(),
                y: angle.sin(),
            }
        }
        #[cfg(not(feature = "std"))]
        {
            Self {
                x: libm::cosf(angle),
                y: libm::sinf(angle),
            }
        }
    }

    pub fn magnitude(&self) -> f32 {
        #[cfg(feature = "std")]
        {
            (self.x * self.x + self.y * self.y).sqrt()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self.x * self.x + self.y * self.y)
        }
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Returns a unit vector in the same direction, or the zero vector
    /// unchanged when there is no direction. Callers treat the zero result
    /// as "no direction", never as an error.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            *self
        }
    }

    /// Clamps the magnitude to `max`, preserving direction.
    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            let normalized = self.normalize();
            Self {
                x: normalized.x * max,
                y: normalized.y * max,
            }
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*self - *other).magnitude()
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Clamps a scalar to `±max`, keeping its sign.
pub fn clamp_abs(value: f32, max: f32) -> f32 {
    if value > max {
        max
    } else if value < -max {
        -max
    } else {
        value
    }
}

/// Wraps an angle in radians into `[-PI, PI]`.
///
/// Uses a single modulo instead of repeated subtraction, so it terminates
/// for any finite input and is idempotent.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI) % TAU;
    if wrapped < 0.0 {
        wrapped + PI
    } else {
        wrapped - PI
    }
}
