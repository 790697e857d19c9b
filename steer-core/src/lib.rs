#![cfg_attr(not(feature = "std"), no_std)]

//! Per-frame kinematic steering behaviors for autonomous agents.
//!
//! Given an agent's [`Kinematic`] state and a target's (or a neighbor
//! list), each behavior produces a bounded [`SteeringOutput`] — a linear
//! and an angular acceleration — which the caller integrates into velocity
//! and position once per tick. The computation layer is synchronous and
//! single-threaded; the only state that persists between frames is the
//! per-agent [`WanderState`].

pub mod align;
pub mod arrive;
pub mod behavior;
pub mod error;
pub mod flocking;
pub mod kinematic;
pub mod matching;
pub mod sim;
pub mod vector;
pub mod wander;

pub use align::Align;
pub use arrive::Arrive;
pub use behavior::{Behavior, SteeringInput};
pub use error::SteeringError;
pub use flocking::Flocking;
pub use kinematic::{Kinematic, SteeringOutput};
pub use matching::{OrientationMatch, PositionMatch, RotationMatch, VelocityMatch};
pub use sim::{FixedFlock, FlockSettings};
pub use vector::{clamp_abs, wrap_angle, Vector2D};
pub use wander::{Wander, WanderState, WANDER_TARGET_RADIUS};

#[cfg(feature = "std")]
pub use sim::Flock;
