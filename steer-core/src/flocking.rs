use rand::Rng;

use crate::error::SteeringError;
use crate::kinematic::{Kinematic, SteeringOutput};
use crate::vector::Vector2D;
use crate::wander::{Wander, WanderState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separation/alignment/cohesion blend over a shared neighbor list, with a
/// wander fallback when no neighbor is in range.
///
/// The flock slice is borrowed read-only for the duration of one call and
/// never retained. Self-exclusion is by index, not by address: two agents
/// at the same position are still distinct. Cost is O(n) per agent per
/// call, so O(n^2) per tick for the whole flock; spatial partitioning is
/// deliberately out of scope at this scale.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flocking {
    /// Neighbors inside this distance contribute to alignment and cohesion.
    pub neighbor_radius: f32,
    /// Neighbors inside this distance additionally repel, weighted by
    /// inverse distance.
    pub separation_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub max_acceleration: f32,
    /// Fallback behavior when the agent has no in-range neighbor.
    pub wander: Wander,
}

impl Flocking {
    /// Steering for `flock[index]` against the rest of the flock.
    ///
    /// `wander_state` and `rng` are only touched on the no-neighbor
    /// fallback path.
    pub fn steering<R: Rng>(
        &self,
        flock: &[Kinematic],
        index: usize,
        wander_state: &mut WanderState,
        rng: &mut R,
    ) -> Result<SteeringOutput, SteeringError> {
        if index >= flock.len() {
            return Err(SteeringError::AgentIndexOutOfRange {
                index,
                len: flock.len(),
            });
        }
        let agent = &flock[index];

        let mut separation = Vector2D::zero();
        let mut alignment = Vector2D::zero();
        let mut cohesion = Vector2D::zero();
        let mut count = 0usize;

        for (i, other) in flock.iter().enumerate() {
            if i == index {
                continue;
            }
            let distance = other.position.distance(&agent.position);
            if distance > 0.0 && distance < self.neighbor_radius {
                alignment += other.velocity;
                cohesion += other.position;
                count += 1;
                if distance < self.separation_radius {
                    // closer neighbors repel harder
                    separation += (agent.position - other.position) / distance;
                }
            }
        }

        if count == 0 {
            return self.wander.steering(agent, wander_state, rng);
        }

        let inv = 1.0 / count as f32;
        let alignment = alignment * inv;
        let cohesion = cohesion * inv - agent.position;

        let force = separation * self.separation_weight
            + alignment * self.alignment_weight
            + cohesion * self.cohesion_weight;
        Ok(SteeringOutput::linear(force.limit(self.max_acceleration)))
    }
}
