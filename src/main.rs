//! Hopper - headless demo host.
//!
//! Drives the platformer simulation with a scripted input sequence and logs
//! the player state along the way. There is no window, renderer, or input
//! device here: the library crates expose numeric state and a real host
//! draws from it.
//!
//! Run with `RUST_LOG=debug` to see the per-tick trace.

use hopper_game::{PlayerInput, Simulation};

/// One stretch of held input in the demo script.
struct Segment {
    /// What this stretch demonstrates.
    label: &'static str,
    /// How many ticks to hold the input.
    ticks: u32,
    /// The input snapshot held for the whole stretch.
    input: PlayerInput,
}

fn main() {
    env_logger::init();

    let mut simulation = Simulation::test();
    let player_id = simulation.add_player();

    let idle = PlayerInput::default();
    let right = PlayerInput {
        move_right: true,
        ..Default::default()
    };
    let right_jump = PlayerInput {
        move_right: true,
        jump_held: true,
        ..Default::default()
    };
    let tap_jump = PlayerInput {
        jump_held: true,
        ..Default::default()
    };
    let left = PlayerInput {
        move_left: true,
        ..Default::default()
    };

    let script = [
        Segment { label: "settle onto the floor", ticks: 60, input: idle },
        Segment { label: "run right", ticks: 90, input: right },
        Segment { label: "full jump while running", ticks: 20, input: right_jump },
        Segment { label: "land", ticks: 40, input: right },
        Segment { label: "tap jump for a short hop", ticks: 2, input: tap_jump },
        Segment { label: "fall back down", ticks: 60, input: idle },
        Segment { label: "run back left", ticks: 120, input: left },
    ];

    for segment in &script {
        log::info!("{} ({} ticks)", segment.label, segment.ticks);
        for _ in 0..segment.ticks {
            simulation.tick(&[segment.input]);
            if let Some(player) = simulation.get_player(player_id) {
                log::debug!("tick {:4}: {}", simulation.frame, player.status_line());
            }
        }
    }

    if let Some(player) = simulation.get_player(player_id) {
        log::info!(
            "finished after {} ticks: {}",
            simulation.frame,
            player.status_line()
        );
    }
}
