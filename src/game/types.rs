//! Flappy Bird data structures.
//!
//! All state lives in one serializable struct so the update logic can run
//! and be tested without any terminal attached.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Play-field dimensions in world units. Rendering scales these to the
/// terminal; the model never sees cell coordinates.
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 500.0;

/// Bird fixed horizontal position (left edge) and square sprite size.
pub const BIRD_X: f64 = 100.0;
pub const BIRD_SIZE: f64 = 30.0;

/// Vertical start position, measured from the field top.
pub const BIRD_START_Y: f64 = 250.0;

/// Gravity (velocity change per 16ms tick, positive = downward).
pub const GRAVITY: f64 = 0.5;

/// Flap impulse — velocity override (negative = upward). Sets velocity
/// directly rather than adding to it.
pub const FLAP_IMPULSE: f64 = -10.0;

/// Pipe width in world units.
pub const PIPE_WIDTH: f64 = 60.0;

/// Vertical gap size between a pipe's top and bottom blocks.
pub const PIPE_GAP: f64 = 150.0;

/// Horizontal scroll speed in units/tick.
pub const PIPE_SPEED: f64 = 2.0;

/// X position where new pipes enter the field.
pub const PIPE_SPAWN_X: f64 = FIELD_WIDTH;

/// A new pipe spawns once the newest one has scrolled left of this x.
pub const PIPE_SPAWN_THRESHOLD: f64 = 300.0;

/// Gap-top range, bounded so the gap always fits inside the field.
pub const GAP_TOP_MIN: f64 = 100.0;
pub const GAP_TOP_MAX: f64 = FIELD_HEIGHT - PIPE_GAP;

/// Coarse game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Fresh round; physics paused until the first flap.
    NotStarted,
    /// Live round; physics advances every tick.
    Running,
    /// Round ended by collision or leaving the field. Only restart exits.
    Over,
}

/// A single pipe obstacle (top + bottom pair with a gap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge x in world units (float for smooth scrolling).
    pub x: f64,
    /// Top edge of the gap, measured from the field top.
    pub gap_top: f64,
    /// Whether this pipe has already been scored.
    pub passed: bool,
}

impl Pipe {
    /// Right edge of the pipe.
    pub fn trailing_edge(&self) -> f64 {
        self.x + PIPE_WIDTH
    }

    /// Bottom edge of the gap.
    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + PIPE_GAP
    }
}

/// Main game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlappyGame {
    pub state: RunState,

    // Bird state
    /// Vertical position of the sprite's top edge (0 = field top).
    pub bird_y: f64,
    /// Current vertical velocity in units/tick (positive = downward).
    pub bird_vel: f64,

    // Pipe state
    /// Active pipes, oldest first; the last element is the newest spawn.
    pub pipes: Vec<Pipe>,

    // Scoring
    /// Pipes cleared this round.
    pub score: u32,

    // Timing
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Physics ticks elapsed this round.
    pub tick_count: u64,
}

impl FlappyGame {
    /// Create a fresh round: bird centered, no pipes, score zero.
    pub fn new() -> Self {
        Self {
            state: RunState::NotStarted,
            bird_y: BIRD_START_Y,
            bird_vel: 0.0,
            pipes: Vec::new(),
            score: 0,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Spawn a new pipe at the right field edge with a random gap position.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let gap_top = rng.gen_range(GAP_TOP_MIN..GAP_TOP_MAX);
        self.pipes.push(Pipe {
            x: PIPE_SPAWN_X,
            gap_top,
            passed: false,
        });
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let game = FlappyGame::new();
        assert_eq!(game.state, RunState::NotStarted);
        assert!((game.bird_y - BIRD_START_Y).abs() < f64::EPSILON);
        assert!((game.bird_vel).abs() < f64::EPSILON);
        assert!(game.pipes.is_empty());
        assert_eq!(game.score, 0);
        assert_eq!(game.accumulated_time_ms, 0);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_spawn_pipe_enters_at_right_edge() {
        let mut game = FlappyGame::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        game.spawn_pipe(&mut rng);

        assert_eq!(game.pipes.len(), 1);
        let pipe = &game.pipes[0];
        assert!((pipe.x - PIPE_SPAWN_X).abs() < f64::EPSILON);
        assert!(!pipe.passed);
    }

    #[test]
    fn test_spawn_pipe_gap_stays_inside_field() {
        let mut game = FlappyGame::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..200 {
            game.spawn_pipe(&mut rng);
        }
        for pipe in &game.pipes {
            assert!(pipe.gap_top >= GAP_TOP_MIN);
            assert!(pipe.gap_top < GAP_TOP_MAX);
            assert!(pipe.gap_bottom() <= FIELD_HEIGHT);
        }
    }

    #[test]
    fn test_pipe_edge_helpers() {
        let pipe = Pipe {
            x: 100.0,
            gap_top: 300.0,
            passed: false,
        };
        assert!((pipe.trailing_edge() - 160.0).abs() < f64::EPSILON);
        assert!((pipe.gap_bottom() - 450.0).abs() < f64::EPSILON);
    }
}
