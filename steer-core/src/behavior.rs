//! Closed behavior set and per-frame dispatch.
//!
//! External callers pick one [`Behavior`] per agent per frame, build a
//! [`SteeringInput`] from the frame's kinematic snapshots, and integrate the
//! returned output themselves.

use rand::Rng;

use crate::align::Align;
use crate::arrive::Arrive;
use crate::error::SteeringError;
use crate::flocking::Flocking;
use crate::kinematic::{Kinematic, SteeringOutput};
use crate::matching::{OrientationMatch, PositionMatch, RotationMatch, VelocityMatch};
use crate::wander::{Wander, WanderState};

/// Everything a behavior may read during one steering call.
///
/// The flock slice is only consulted by [`Behavior::Flock`] and defaults to
/// empty; it is borrowed for this call and never retained.
#[derive(Debug, Clone, Copy)]
pub struct SteeringInput<'a> {
    pub agent: &'a Kinematic,
    pub target: &'a Kinematic,
    /// Elapsed frame time in seconds. Only the position/orientation
    /// matchers divide by it; they fail fast when it is not positive.
    pub delta_time: f32,
    /// Shared read-only flock snapshot for neighbor-based behaviors.
    pub flock: &'a [Kinematic],
    /// Index of the agent within `flock`, used for self-exclusion.
    pub agent_index: usize,
}

impl<'a> SteeringInput<'a> {
    pub fn new(agent: &'a Kinematic, target: &'a Kinematic, delta_time: f32) -> Self {
        Self {
            agent,
            target,
            delta_time,
            flock: &[],
            agent_index: 0,
        }
    }

    /// Attaches this tick's flock snapshot and the agent's own index.
    pub fn with_flock(mut self, flock: &'a [Kinematic], agent_index: usize) -> Self {
        self.flock = flock;
        self.agent_index = agent_index;
        self
    }
}

/// The closed set of steering behaviors, each carrying its own tuning.
///
/// A tagged sum instead of an open trait hierarchy: dispatch is one
/// exhaustive match, and adding a behavior is a compile-checked change at
/// every call site.
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    PositionMatch(PositionMatch),
    OrientationMatch(OrientationMatch),
    VelocityMatch(VelocityMatch),
    RotationMatch(RotationMatch),
    Arrive(Arrive),
    Align(Align),
    Wander(Wander),
    Flock(Flocking),
}

impl Behavior {
    /// Computes one bounded steering output.
    ///
    /// `wander_state` is the caller-owned per-agent state; only the wander
    /// and flocking variants touch it (and `rng`).
    pub fn steering<R: Rng>(
        &self,
        input: &SteeringInput<'_>,
        wander_state: &mut WanderState,
        rng: &mut R,
    ) -> Result<SteeringOutput, SteeringError> {
        match self {
            Behavior::PositionMatch(b) => b.steering(input.agent, input.target, input.delta_time),
            Behavior::OrientationMatch(b) => {
                b.steering(input.agent, input.target, input.delta_time)
            }
            Behavior::VelocityMatch(b) => b.steering(input.agent, input.target, input.delta_time),
            Behavior::RotationMatch(b) => b.steering(input.agent, input.target, input.delta_time),
            Behavior::Arrive(b) => b.steering(input.agent, input.target),
            Behavior::Align(b) => b.steering(input.agent, input.target),
            Behavior::Wander(b) => b.steering(input.agent, wander_state, rng),
            Behavior::Flock(b) => b.steering(input.flock, input.agent_index, wander_state, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector2D;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dispatch_matches_direct_call() {
        let arrive = Arrive {
            max_acceleration: 50.0,
            max_speed: 50.0,
            target_radius: 5.0,
            slow_radius: 50.0,
            time_to_target: 0.1,
        };
        let agent = Kinematic::at(Vector2D::zero());
        let target = Kinematic::at(Vector2D::new(100.0, 0.0));

        let mut state = WanderState::default();
        let mut rng = StdRng::seed_from_u64(0);
        let input = SteeringInput::new(&agent, &target, 1.0 / 60.0);

        let via_enum = Behavior::Arrive(arrive)
            .steering(&input, &mut state, &mut rng)
            .unwrap();
        let direct = arrive.steering(&agent, &target).unwrap();

        assert_eq!(via_enum, direct);
    }

    #[test]
    fn test_matching_variants_validate_delta_time() {
        let agent = Kinematic::default();
        let target = Kinematic::default();
        let mut state = WanderState::default();
        let mut rng = StdRng::seed_from_u64(0);

        for behavior in [
            Behavior::PositionMatch(PositionMatch),
            Behavior::OrientationMatch(OrientationMatch),
        ] {
            let input = SteeringInput::new(&agent, &target, 0.0);
            assert_eq!(
                behavior.steering(&input, &mut state, &mut rng),
                Err(SteeringError::NonPositiveDeltaTime(0.0))
            );
        }
    }

    #[test]
    fn test_flock_variant_uses_attached_flock() {
        let flocking = Flocking {
            neighbor_radius: 20.0,
            separation_radius: 20.0,
            separation_weight: 5.0,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            max_acceleration: 250.0,
            wander: Wander {
                max_acceleration: 5.0,
                max_speed: 7.0,
                wander_offset: 10.0,
                wander_radius: 15.0,
                wander_rate: 1.0,
                time_to_target: 0.1,
            },
        };
        let flock = [
            Kinematic::at(Vector2D::zero()),
            Kinematic::at(Vector2D::new(2.0, 0.0)),
        ];
        let mut state = WanderState::default();
        let mut rng = StdRng::seed_from_u64(0);

        let input =
            SteeringInput::new(&flock[0], &flock[0], 1.0 / 60.0).with_flock(&flock, 0);
        let out = Behavior::Flock(flocking)
            .steering(&input, &mut state, &mut rng)
            .unwrap();

        // the neighbor at +x repels the agent toward -x
        assert!(out.linear.x < 0.0);
    }
}
