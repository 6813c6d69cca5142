//! Cosmetic effects owned by the simulation: score popups and fireworks
//!
//! Nothing here feeds back into gameplay.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, MAX_PARTICLES, Particle};
use crate::consts::*;

/// Particles per firework burst
const FIREWORK_PARTICLES: usize = 32;
/// Initial particle speed (grids/tick)
const FIREWORK_SPEED: f32 = 0.15;
/// Downward pull per tick
const FIREWORK_GRAVITY: f32 = 0.004;
const FIREWORK_LIFE_DECAY: f32 = 0.015;
/// Number of palette entries the renderer knows about
const FIREWORK_COLORS: u32 = 6;

/// Expire popups and animate particles
pub fn update(state: &mut GameState, now: f64) {
    state
        .floating_scores
        .retain(|fs| now - fs.created_at <= FLOATING_SCORE_FADE);

    for particle in state.fireworks.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += FIREWORK_GRAVITY;
        particle.vel *= 0.98;
        particle.life -= FIREWORK_LIFE_DECAY;
        particle.size *= 0.995;
    }
    state.fireworks.retain(|p| p.life > 0.0);
}

/// Burst of particles somewhere in the upper half of the screen
pub fn launch_fireworks(state: &mut GameState) {
    let origin = Vec2::new(
        state.rng.random_range(2.0..SCREEN_WIDTH_GRIDS - 2.0),
        state.rng.random_range(2.0..SCREEN_HEIGHT_GRIDS / 2.0),
    );
    let color = state.rng.random_range(0..FIREWORK_COLORS);

    for i in 0..FIREWORK_PARTICLES {
        if state.fireworks.len() >= MAX_PARTICLES {
            state.fireworks.remove(0);
        }
        let angle = std::f32::consts::TAU * i as f32 / FIREWORK_PARTICLES as f32;
        let speed = FIREWORK_SPEED * state.rng.random_range(0.6..1.0);
        state.fireworks.push(Particle {
            pos: origin,
            vel: Vec2::from_angle(angle) * speed,
            color,
            life: 1.0,
            size: state.rng.random_range(0.15..0.3),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_floating_scores_expire() {
        let mut state = GameState::new(1, &Tuning::default());
        state.push_floating_score(100, Vec2::ZERO, 0.0);
        state.push_floating_score(200, Vec2::ZERO, 500.0);

        update(&mut state, 1000.0);
        assert_eq!(state.floating_scores.len(), 2);
        update(&mut state, 1001.0);
        assert_eq!(state.floating_scores.len(), 1);
        assert_eq!(state.floating_scores[0].text, "+200");
    }

    #[test]
    fn test_fireworks_fade_out() {
        let mut state = GameState::new(1, &Tuning::default());
        launch_fireworks(&mut state);
        assert_eq!(state.fireworks.len(), FIREWORK_PARTICLES);

        for _ in 0..100 {
            update(&mut state, 0.0);
        }
        assert!(state.fireworks.is_empty());
    }

    #[test]
    fn test_fireworks_capped() {
        let mut state = GameState::new(1, &Tuning::default());
        for _ in 0..20 {
            launch_fireworks(&mut state);
        }
        assert_eq!(state.fireworks.len(), MAX_PARTICLES);
    }
}
