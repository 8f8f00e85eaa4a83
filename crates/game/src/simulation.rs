//! Game simulation - the main loop.
//!
//! This module contains the deterministic fixed-step simulation. All state
//! lives in the [`Simulation`] struct, so any number of independent
//! simulations can run side by side; there are no globals.

use hopper_physics::{MovementConfig, PlayerController};
use serde::{Deserialize, Serialize};

use crate::input::PlayerInput;
use crate::level::Level;
use crate::player::{EntityId, Player};

/// Game simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Movement physics configuration.
    pub movement: MovementConfig,
}

/// The main game simulation.
///
/// Owns the level and every player, and advances them deterministically from
/// per-tick input snapshots: two simulations built the same way and fed the
/// same inputs stay identical tick for tick.
///
/// One update is one tick; there is no delta time anywhere.
#[derive(Debug)]
pub struct Simulation {
    /// Current tick number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Current level.
    pub level: Level,

    /// All players in the game.
    pub players: Vec<Player>,

    /// Movement physics controller.
    controller: PlayerController,

    /// Next entity ID to assign.
    next_entity_id: EntityId,
}

impl Simulation {
    /// Create a new simulation with the given configuration and level.
    pub fn new(config: SimulationConfig, level: Level) -> Self {
        let controller = PlayerController::new(config.movement.clone());

        Self {
            frame: 0,
            config,
            level,
            players: Vec::new(),
            controller,
            next_entity_id: 1,
        }
    }

    /// Create a simulation with default configuration and the bundled course.
    pub fn test() -> Self {
        Self::new(SimulationConfig::default(), Level::test_course())
    }

    /// Add a player at the level's spawn point.
    ///
    /// Returns the player's ID.
    pub fn add_player(&mut self) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id += 1;

        self.players
            .push(Player::new(id, self.level.spawn, &self.config.movement));
        id
    }

    /// Remove a player from the simulation.
    pub fn remove_player(&mut self, player_id: EntityId) {
        self.players.retain(|p| p.id != player_id);
    }

    /// Get a player by ID.
    pub fn get_player(&self, player_id: EntityId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Get a mutable reference to a player by ID.
    pub fn get_player_mut(&mut self, player_id: EntityId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Advance the simulation by one tick.
    ///
    /// # Arguments
    ///
    /// * `inputs` - input snapshots indexed by player position in the
    ///   `players` array; missing entries read as idle
    pub fn tick(&mut self, inputs: &[PlayerInput]) {
        for (i, player) in self.players.iter_mut().enumerate() {
            let input = inputs.get(i).copied().unwrap_or_default();
            let command = input.to_command();

            self.controller.update(
                &mut player.movement,
                &command,
                &self.level.grid,
                self.level.bounds,
            );

            log::trace!("tick {} player {}: {}", self.frame, player.id, player.status_line());
        }

        self.frame += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn test_simulation_creation() {
        let sim = Simulation::test();
        assert_eq!(sim.frame, 0);
        assert!(sim.players.is_empty());
    }

    #[test]
    fn test_add_and_remove_player() {
        let mut sim = Simulation::test();

        let id = sim.add_player();
        assert!(id > 0);
        assert_eq!(sim.players.len(), 1);
        assert!(sim.get_player(id).is_some());

        sim.remove_player(id);
        assert!(sim.get_player(id).is_none());
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut sim = Simulation::test();
        sim.add_player();

        sim.tick(&[PlayerInput::default()]);
        assert_eq!(sim.frame, 1);

        sim.tick(&[]);
        assert_eq!(sim.frame, 2);
    }

    #[test]
    fn test_drop_settles_on_two_tile_floor() {
        let mut level = Level::from_rows("drop", &["..", "xx"], 30.0, 30.0);
        level.spawn = Vec2::new(0.0, -40.0);

        let mut sim = Simulation::new(SimulationConfig::default(), level);
        let id = sim.add_player();

        for _ in 0..120 {
            sim.tick(&[PlayerInput::default()]);
        }

        let player = sim.get_player(id).unwrap();
        assert!(player.on_floor());
        assert_eq!(player.velocity().y, 0.0);
        assert_eq!(player.hitbox(&sim.config.movement).max.y, 30.0);
    }

    #[test]
    fn test_run_stays_inside_world_bounds() {
        let mut sim = Simulation::test();
        let id = sim.add_player();

        let run_right = PlayerInput {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..600 {
            sim.tick(&[run_right]);
        }

        let player = sim.get_player(id).unwrap();
        let bounds = sim.level.bounds.unwrap();
        assert!(player.rect().max.x <= bounds.right);
        assert!(player.rect().min.x >= bounds.left);
    }

    #[test]
    fn test_players_are_independent() {
        let mut level = Level::from_rows("flat", &["....", "xxxx"], 30.0, 30.0);
        level.spawn = Vec2::new(0.0, -10.0);

        let mut sim = Simulation::new(SimulationConfig::default(), level);
        let first = sim.add_player();
        let second = sim.add_player();

        let run_right = PlayerInput {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..30 {
            sim.tick(&[run_right, PlayerInput::default()]);
        }

        let moved = sim.get_player(first).unwrap().rect().min.x;
        let idle = sim.get_player(second).unwrap().rect().min.x;
        assert!(moved > idle, "only the driven player should travel");
    }

    #[test]
    fn test_determinism() {
        // Run the same scripted inputs twice; the end states must match
        // exactly, not approximately.
        let inputs: Vec<PlayerInput> = (0..400)
            .map(|i| PlayerInput {
                move_right: i % 3 != 0,
                move_left: i % 50 > 40,
                jump_held: i % 60 < 10,
            })
            .collect();

        let run = || {
            let mut sim = Simulation::test();
            let id = sim.add_player();
            for input in &inputs {
                sim.tick(&[*input]);
            }
            sim.get_player(id).unwrap().clone()
        };

        let first = run();
        let second = run();
        assert_eq!(first.movement, second.movement);
    }
}
