//! Game instance for frontends
//!
//! Input handlers call the intent methods at any time; `update` folds the
//! pending intents into one tick and returns the resulting state for drawing.

use crate::sim::{GameEvent, GamePhase, GameState, TickInput, TongueCommand, advance_phase, tick};
use crate::tuning::Tuning;

/// Game instance holding state, tuning and pending input
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    tuning: Tuning,
    input: TickInput,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, &tuning),
            tuning,
            input: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Notifications from the last `update`, in order
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    /// Swap in freshly loaded tuning. A game still on the title screen is
    /// re-initialised so the new base values take effect.
    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning;
        if self.state.phase == GamePhase::Title {
            self.state.reset(&self.tuning);
        }
    }

    fn can_move(&self) -> bool {
        self.state.phase == GamePhase::Playing && !self.state.tongue.is_active()
    }

    pub fn start_move_left(&mut self) {
        if self.can_move() {
            self.input.left = true;
        }
    }

    pub fn stop_move_left(&mut self) {
        self.input.left = false;
    }

    pub fn start_move_right(&mut self) {
        if self.can_move() {
            self.input.right = true;
        }
    }

    pub fn stop_move_right(&mut self) {
        self.input.right = false;
    }

    pub fn extend_tongue(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.input.tongue = Some(TongueCommand::Extend);
        }
    }

    pub fn retract_tongue(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.input.tongue = Some(TongueCommand::Retract);
        }
    }

    pub fn toggle_debug(&mut self) {
        self.state.debug = !self.state.debug;
        log::info!("Debug mode toggled to: {}", self.state.debug);
    }

    /// Title starts play; game over resets to the title. Held directions are
    /// dropped either way.
    pub fn advance_phase_on_input(&mut self) -> bool {
        let consumed = advance_phase(&mut self.state, &self.tuning);
        if consumed {
            self.input = TickInput::default();
        }
        consumed
    }

    /// Advance one tick at `now_ms`
    pub fn update(&mut self, now_ms: f64) -> &GameState {
        tick(&mut self.state, &self.tuning, &self.input, now_ms);

        // One-shot commands are consumed by the tick
        self.input.tongue = None;
        if self.state.phase != GamePhase::Playing {
            self.input.left = false;
            self.input.right = false;
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TongueMode;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn test_intents_ignored_on_title() {
        let mut game = Game::new(1, Tuning::default());
        game.start_move_right();
        game.extend_tongue();
        game.update(0.0);
        assert_eq!(game.state().phase, GamePhase::Title);
        assert!(!game.state().tongue.is_active());
        assert_eq!(game.state().player.pos.x, 14.5);
    }

    #[test]
    fn test_walk_and_stop() {
        let mut game = Game::new(1, Tuning::default());
        assert!(game.advance_phase_on_input());

        game.start_move_right();
        let mut now = 0.0;
        for _ in 0..30 {
            now += FRAME_MS;
            game.update(now);
        }
        let walked = game.state().player.pos.x;
        assert!(walked > 14.5);
        assert_eq!(game.state().player.direction, 1);

        game.stop_move_right();
        for _ in 0..10 {
            now += FRAME_MS;
            game.update(now);
        }
        assert_eq!(game.state().player.pos.x, walked);
        assert_eq!(game.state().player.frame, 0);
    }

    #[test]
    fn test_move_refused_while_tongue_out() {
        let mut game = Game::new(1, Tuning::default());
        game.advance_phase_on_input();
        game.extend_tongue();
        game.update(0.0);
        assert_eq!(game.events().first(), Some(&GameEvent::TongueExtended));

        game.start_move_left();
        game.update(FRAME_MS);
        assert_eq!(game.state().player.pos.x, 14.5);
        assert_eq!(game.state().player.direction, 1);
    }

    #[test]
    fn test_last_tongue_intent_wins() {
        let mut game = Game::new(1, Tuning::default());
        game.advance_phase_on_input();
        game.extend_tongue();
        game.retract_tongue();
        game.update(0.0);
        // Retract while idle is a no-op
        assert_eq!(game.state().tongue.mode, TongueMode::Idle);

        game.retract_tongue();
        game.extend_tongue();
        game.update(FRAME_MS);
        assert_eq!(game.state().tongue.mode, TongueMode::Extending);
    }

    #[test]
    fn test_toggle_debug() {
        let mut game = Game::new(1, Tuning::default());
        game.toggle_debug();
        assert!(game.state().debug);
        game.toggle_debug();
        assert!(!game.state().debug);
    }

    #[test]
    fn test_set_tuning_on_title() {
        let mut game = Game::new(1, Tuning::unloaded());
        let tuning = Tuning {
            base_spawn_interval: 1000.0,
            ..Tuning::default()
        };
        game.set_tuning(tuning);
        assert_eq!(game.state().spawn_interval, 1000.0);
        assert!(game.tuning().scoring_enabled());
    }
}
