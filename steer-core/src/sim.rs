//! Caller-side tick containers.
//!
//! Steering behaviors only produce accelerations; these containers show the
//! integration contract a caller must honor: compute every agent's force
//! against a frozen snapshot first, then integrate, so neighbor reads stay
//! consistent within a tick. [`Flock`] is the heap-backed container;
//! [`FixedFlock`] is its fixed-capacity twin for `no_std` callers.

use rand::Rng;

use crate::error::SteeringError;
use crate::flocking::Flocking;
use crate::kinematic::{Kinematic, SteeringOutput};
use crate::wander::WanderState;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World settings for a simulated flock.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlockSettings {
    /// Hard cap on agent speed after integration.
    pub max_speed: f32,
    /// Toroidal world width.
    pub width: f32,
    /// Toroidal world height.
    pub height: f32,
}

impl Default for FlockSettings {
    fn default() -> Self {
        Self {
            max_speed: 13.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

fn apply(agent: &mut Kinematic, steering: &SteeringOutput, dt: f32, settings: &FlockSettings) {
    agent.velocity += steering.linear * dt;
    agent.velocity = agent.velocity.limit(settings.max_speed);
    agent.position += agent.velocity * dt;

    // wrap around the world edges
    if agent.position.x < 0.0 {
        agent.position.x += settings.width;
    }
    if agent.position.x > settings.width {
        agent.position.x -= settings.width;
    }
    if agent.position.y < 0.0 {
        agent.position.y += settings.height;
    }
    if agent.position.y > settings.height {
        agent.position.y -= settings.height;
    }

    agent.face_velocity();
}

/// A simulated flock of agents driven by one [`Flocking`] behavior.
#[cfg(feature = "std")]
pub struct Flock {
    agents: Vec<Kinematic>,
    wander_states: Vec<WanderState>,
    behavior: Flocking,
    settings: FlockSettings,
}

#[cfg(feature = "std")]
impl Flock {
    pub fn new(behavior: Flocking, settings: FlockSettings) -> Self {
        Self {
            agents: Vec::new(),
            wander_states: Vec::new(),
            behavior,
            settings,
        }
    }

    pub fn push(&mut self, agent: Kinematic) {
        self.agents.push(agent);
        self.wander_states.push(WanderState::default());
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Kinematic] {
        &self.agents
    }

    /// Advances the flock by `dt` seconds.
    ///
    /// Two strict phases: every agent's steering is computed against the
    /// tick's frozen snapshot, then all integrations are applied. No
    /// position mutates mid-pass.
    pub fn tick<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Result<(), SteeringError> {
        let mut outputs = Vec::with_capacity(self.agents.len());
        for (i, state) in self.wander_states.iter_mut().enumerate() {
            outputs.push(self.behavior.steering(&self.agents, i, state, rng)?);
        }

        for (agent, steering) in self.agents.iter_mut().zip(&outputs) {
            apply(agent, steering, dt, &self.settings);
        }
        Ok(())
    }
}

/// Fixed-capacity flock for environments without an allocator.
pub struct FixedFlock<const N: usize> {
    agents: heapless::Vec<Kinematic, N>,
    wander_states: heapless::Vec<WanderState, N>,
    behavior: Flocking,
    settings: FlockSettings,
}

impl<const N: usize> FixedFlock<N> {
    pub fn new(behavior: Flocking, settings: FlockSettings) -> Self {
        Self {
            agents: heapless::Vec::new(),
            wander_states: heapless::Vec::new(),
            behavior,
            settings,
        }
    }

    /// Adds an agent, returning it back when the flock is full.
    pub fn push(&mut self, agent: Kinematic) -> Result<(), Kinematic> {
        self.agents.push(agent)?;
        if self.wander_states.push(WanderState::default()).is_err() {
            let agent = self.agents.pop().unwrap_or_default();
            return Err(agent);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Kinematic] {
        &self.agents
    }

    /// Advances the flock by `dt` seconds; same two-phase pass as
    /// [`Flock::tick`].
    pub fn tick<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Result<(), SteeringError> {
        let mut outputs = heapless::Vec::<SteeringOutput, N>::new();
        for (i, state) in self.wander_states.iter_mut().enumerate() {
            let out = self.behavior.steering(&self.agents, i, state, rng)?;
            let _ = outputs.push(out);
        }

        for (agent, steering) in self.agents.iter_mut().zip(&outputs) {
            apply(agent, steering, dt, &self.settings);
        }
        Ok(())
    }
}
