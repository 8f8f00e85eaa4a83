//! Jump and fall state machine.
//!
//! Jump initiation is edge triggered: the input must be seen released before
//! a new press can fire, and a press only takes effect while the player is on
//! the floor. Holding the input sustains the full ascent; releasing it early
//! caps the remaining ascent speed, which is what makes a tap jump shorter
//! than a held jump.

use serde::{Deserialize, Serialize};

use super::config::MovementConfig;

/// Vertical phase of the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpPhase {
    /// Standing on terrain.
    #[default]
    Grounded,
    /// Powered ascent: the jump input has been held since initiation.
    Rising,
    /// Unpowered ascent: the input was released before the apex and the
    /// remaining ascent speed is capped.
    Hovering,
    /// Past the apex, or airborne without having jumped.
    Falling,
}

/// Jump state machine.
///
/// Owns the current [`JumpPhase`] plus the edge-trigger latch for the jump
/// input. The machine itself never integrates gravity; it only rewrites the
/// vertical velocity at initiation and at the early-release cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpState {
    phase: JumpPhase,
    /// Previous tick saw the jump input down (for edge detection).
    latched: bool,
}

impl JumpState {
    /// Create a grounded machine with a released input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    /// True during the powered ascent.
    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.phase == JumpPhase::Rising
    }

    /// Advance the machine by one tick.
    ///
    /// # Arguments
    ///
    /// * `jump_held` - whether the jump input is down this tick
    /// * `on_floor` - floor contact, as detected at the start of the tick
    /// * `vy` - current vertical velocity (negative is up)
    /// * `config` - movement tuning
    ///
    /// # Returns
    ///
    /// The adjusted vertical velocity.
    pub fn update(
        &mut self,
        jump_held: bool,
        on_floor: bool,
        vy: f32,
        config: &MovementConfig,
    ) -> f32 {
        let mut vy = vy;

        // The powered ascent ends at the apex, before input is considered.
        if vy >= 0.0 && matches!(self.phase, JumpPhase::Rising | JumpPhase::Hovering) {
            self.phase = JumpPhase::Falling;
        }

        if jump_held {
            if !self.latched {
                self.latched = true;
                if on_floor {
                    vy = -config.jump_speed;
                    self.phase = JumpPhase::Rising;
                }
            }
        } else {
            self.latched = false;
            if self.phase == JumpPhase::Rising {
                // Early release: cap whatever ascent speed is left.
                if vy < -config.jump_hover_speed {
                    vy = -config.jump_hover_speed;
                }
                self.phase = JumpPhase::Hovering;
            }
        }

        if on_floor && self.phase != JumpPhase::Rising {
            self.phase = JumpPhase::Grounded;
        } else if !on_floor && self.phase == JumpPhase::Grounded {
            self.phase = JumpPhase::Falling;
        }

        vy
    }
}

// ============================================================================
// Tests
// ============================================================================
