//! Flappy bird data structures.
//!
//! A bird with vertical position and velocity, and a stream of paired pipe
//! obstacles scrolling left at constant speed. Coordinates are floats in a
//! fixed 400x400 playfield; the renderer scales them to the terminal.

use rand::Rng;

/// Playfield width in game units.
pub const GAME_WIDTH: f64 = 400.0;

/// Playfield height in game units. Row 0 is the ceiling.
pub const GAME_HEIGHT: f64 = 400.0;

/// The bird's fixed horizontal position (left edge).
pub const BIRD_X: f64 = 50.0;

/// Side length of the bird's square bounding box.
pub const BIRD_SIZE: f64 = 20.0;

/// Velocity change per tick (positive = downward).
pub const GRAVITY: f64 = 0.5;

/// Velocity override on a flap (negative = upward).
pub const LIFT: f64 = -10.0;

/// Pipe width in game units.
pub const PIPE_WIDTH: f64 = 40.0;

/// Horizontal scroll speed in game units per tick.
pub const PIPE_SPEED: f64 = 2.0;

/// Vertical opening between a pipe's top and bottom segments.
pub const PIPE_GAP: f64 = 150.0;

/// A new pipe spawns every this many ticks.
pub const PIPE_INTERVAL_TICKS: u64 = 75;

/// Physics tick interval in milliseconds (~60 ticks per second).
pub const TICK_INTERVAL_MS: u64 = 16;

/// A paired obstacle: a segment hanging from the ceiling and one rising
/// from the floor, with the gap between them.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge in game units. Scrolls left each tick.
    pub x: f64,
    /// Height of the top segment.
    pub top: f64,
    /// Height of the bottom segment, derived so the opening is `PIPE_GAP`.
    pub bottom: f64,
}

impl Pipe {
    /// Spawn at the right edge with a random gap position.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let top = rng.gen_range(0.0..GAME_HEIGHT / 2.0);
        Self {
            x: GAME_WIDTH,
            top,
            bottom: GAME_HEIGHT - (top + PIPE_GAP),
        }
    }

    /// Fully scrolled past the left edge.
    pub fn offscreen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    /// Bird top edge in game units.
    pub bird_y: f64,
    /// Vertical velocity in game units per tick (positive = downward).
    pub bird_velocity: f64,
    /// Live pipes in encounter order; the front of the list reaches the
    /// bird first.
    pub pipes: Vec<Pipe>,
    /// Ticks since process start or the last soft reset.
    pub tick_count: u64,
}

impl FlappyGame {
    /// Create a new game with the bird centered and no pipes.
    pub fn new() -> Self {
        Self {
            bird_y: GAME_HEIGHT / 2.0,
            bird_velocity: 0.0,
            pipes: Vec::new(),
            tick_count: 0,
        }
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}
