//! Game logic: input processing, physics, pipe management, scoring.

use super::types::*;
use rand::Rng;

/// Physics tick interval in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space, or a click on the play field).
    Flap,
    /// Start a fresh round (`r` or the game-over button; Over only).
    Restart,
}

/// Apply a player action to the game state.
///
/// Flapping overwrites the velocity with the fixed impulse; there is no
/// debouncing, so rapid repeats simply keep resetting it. The first flap of
/// a round starts the clock.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) {
    match input {
        FlappyInput::Flap => match game.state {
            RunState::NotStarted => {
                game.state = RunState::Running;
                game.bird_vel = FLAP_IMPULSE;
            }
            RunState::Running => {
                game.bird_vel = FLAP_IMPULSE;
            }
            RunState::Over => {}
        },
        FlappyInput::Restart => {
            if game.state == RunState::Over {
                *game = FlappyGame::new();
            }
        }
    }
}

/// Advance the game clock. Called from the main loop with the milliseconds
/// elapsed since the previous call; steps physics in fixed 16ms increments.
/// Returns true if at least one tick ran.
pub fn advance<R: Rng>(game: &mut FlappyGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.state != RunState::Running {
        return false;
    }

    // Clamp dt to 100ms so a stall cannot burst a long run of ticks
    let dt_ms = dt_ms.min(100);

    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step(game, rng);
        changed = true;

        if game.state != RunState::Running {
            break;
        }
    }

    changed
}

/// Single physics tick. Runs the full update pass in a fixed order over
/// the state it commits as it goes.
fn step<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    game.tick_count += 1;

    // 1. Bird physics, semi-implicit: position moves by the current
    //    velocity, then gravity updates the velocity for the next tick.
    let new_y = game.bird_y + game.bird_vel;

    // 2. Bounds check. Leaving the field ends the round and discards this
    //    tick's movement, freezing the bird at its last valid position.
    if new_y < 0.0 || new_y > FIELD_HEIGHT {
        game.state = RunState::Over;
        return;
    }
    game.bird_y = new_y;
    game.bird_vel += GRAVITY;

    // 3. Drop pipes that finished scrolling off the left edge on an
    //    earlier tick.
    game.pipes.retain(|p| p.trailing_edge() > 0.0);

    // 4. Scroll pipes left.
    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;
    }

    // 5. Spawn the next pipe once the newest one is far enough in.
    let spawn_due = match game.pipes.last() {
        Some(last) => last.x < PIPE_SPAWN_THRESHOLD,
        None => true,
    };
    if spawn_due {
        game.spawn_pipe(rng);
    }

    // 6. Score pipes whose trailing edge crossed the bird's column this
    //    tick, at most once each.
    for pipe in &mut game.pipes {
        if !pipe.passed && pipe.trailing_edge() <= BIRD_X {
            pipe.passed = true;
            game.score += 1;
        }
    }

    // 7. Collision ends the round; the committed movement stands.
    if check_collision(game) {
        game.state = RunState::Over;
    }
}

/// True if the bird overlaps any pipe outside its gap. Strict comparisons
/// on both axes, so exact edge alignment never collides.
fn check_collision(game: &FlappyGame) -> bool {
    let bird_top = game.bird_y;
    let bird_bottom = game.bird_y + BIRD_SIZE;

    for pipe in &game.pipes {
        // Horizontal overlap with the bird's fixed span
        if pipe.x < BIRD_X + BIRD_SIZE && pipe.trailing_edge() > BIRD_X {
            // Bird must sit entirely inside the gap
            if bird_top < pipe.gap_top || bird_bottom > pipe.gap_bottom() {
                return true;
            }
        }
    }

    false
}
