//! Game logic for the flappy bird minigame.
//!
//! One `process_tick` per frame: gravity integration, pipe spawning and
//! scrolling, collision, and the soft reset that stands in for a game
//! over. Input is a single discrete flap command.

use super::types::{
    FlappyGame, Pipe, BIRD_SIZE, BIRD_X, GAME_HEIGHT, GRAVITY, LIFT, PIPE_INTERVAL_TICKS,
    PIPE_SPEED, PIPE_WIDTH,
};
use rand::Rng;

/// Flap: override the bird's velocity with the fixed lift impulse. Not
/// additive; a flap discards any existing velocity.
pub fn flap(game: &mut FlappyGame) {
    game.bird_velocity = LIFT;
}

/// Process one physics tick.
///
/// Order per tick: gravity, floor/ceiling check, pipe spawn (every
/// `PIPE_INTERVAL_TICKS`), scroll, collision, off-screen culling. The tick
/// counter advances even on a reset tick, so the first pipe after a reset
/// arrives a full interval later.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    game.bird_velocity += GRAVITY;
    game.bird_y += game.bird_velocity;

    // Leaving the playfield is a crash, same path as hitting a pipe.
    if game.bird_y + BIRD_SIZE > GAME_HEIGHT || game.bird_y < 0.0 {
        soft_reset(game);
        game.tick_count += 1;
        return;
    }

    if game.tick_count % PIPE_INTERVAL_TICKS == 0 {
        let pipe = Pipe::new(rng);
        game.pipes.push(pipe);
    }

    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;
    }

    if game.pipes.iter().any(|pipe| hits(pipe, game.bird_y)) {
        soft_reset(game);
        game.tick_count += 1;
        return;
    }

    game.pipes.retain(|pipe| !pipe.offscreen());
    game.tick_count += 1;
}

/// Whether the bird's bounding box intersects a pipe: vertically outside
/// the gap while horizontally overlapping the pipe's span. The horizontal
/// test is strict on both edges, so merely touching does not collide.
pub fn hits(pipe: &Pipe, bird_y: f64) -> bool {
    let outside_gap = bird_y < pipe.top || bird_y + BIRD_SIZE > GAME_HEIGHT - pipe.bottom;
    let overlaps_x = BIRD_X + BIRD_SIZE > pipe.x && BIRD_X < pipe.x + PIPE_WIDTH;
    outside_gap && overlaps_x
}

/// Recenter the bird, clear the pipes, and restart the spawn counter. The
/// process keeps running; there is no hard game over.
pub fn soft_reset(game: &mut FlappyGame) {
    game.bird_y = GAME_HEIGHT / 2.0;
    game.bird_velocity = 0.0;
    game.pipes.clear();
    game.tick_count = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::flappy::types::GAME_WIDTH;

    #[test]
    fn test_gravity_accumulates() {
        let mut game = FlappyGame::new();
        game.bird_y = 100.0;
        let mut rng = rand::thread_rng();

        process_tick(&mut game, &mut rng);
        assert!((game.bird_velocity - GRAVITY).abs() < f64::EPSILON);
        assert!((game.bird_y - 100.5).abs() < f64::EPSILON);

        process_tick(&mut game, &mut rng);
        assert!((game.bird_velocity - 2.0 * GRAVITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut game = FlappyGame::new();
        game.bird_velocity = 7.5;
        flap(&mut game);
        assert!((game.bird_velocity - LIFT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_pipe_spawns_on_first_tick() {
        let mut game = FlappyGame::new();
        let mut rng = rand::thread_rng();
        process_tick(&mut game, &mut rng);
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.tick_count, 1);
    }

    #[test]
    fn test_pipes_scroll_left() {
        let mut game = FlappyGame::new();
        game.tick_count = 1;
        game.pipes.push(Pipe {
            x: 300.0,
            top: 50.0,
            bottom: 200.0,
        });
        let mut rng = rand::thread_rng();
        process_tick(&mut game, &mut rng);
        assert!((game.pipes[0].x - (300.0 - PIPE_SPEED)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_contact_soft_resets() {
        let mut game = FlappyGame::new();
        game.tick_count = 10;
        game.bird_y = GAME_HEIGHT - BIRD_SIZE - 0.1;
        game.bird_velocity = 1.0;
        game.pipes.push(Pipe {
            x: 300.0,
            top: 50.0,
            bottom: 200.0,
        });
        let mut rng = rand::thread_rng();
        process_tick(&mut game, &mut rng);

        assert!((game.bird_y - GAME_HEIGHT / 2.0).abs() < f64::EPSILON);
        assert_eq!(game.bird_velocity, 0.0);
        assert!(game.pipes.is_empty());
        // The reset zeroes the counter, then the tick still advances it
        assert_eq!(game.tick_count, 1);
    }

    #[test]
    fn test_ceiling_contact_soft_resets() {
        let mut game = FlappyGame::new();
        game.tick_count = 10;
        game.bird_y = 2.0;
        game.bird_velocity = -5.0;
        let mut rng = rand::thread_rng();
        process_tick(&mut game, &mut rng);

        assert!((game.bird_y - GAME_HEIGHT / 2.0).abs() < f64::EPSILON);
        assert_eq!(game.tick_count, 1);
    }

    #[test]
    fn test_hit_outside_gap_with_overlap() {
        let pipe = Pipe {
            x: BIRD_X,
            top: 50.0,
            bottom: 200.0,
        };
        // Above the gap
        assert!(hits(&pipe, 40.0));
        // Inside the gap
        assert!(!hits(&pipe, 100.0));
        // Below the gap: bottom segment starts at GAME_HEIGHT - 200 = 200
        assert!(hits(&pipe, 190.0));
    }

    #[test]
    fn test_no_hit_without_horizontal_overlap() {
        let pipe = Pipe {
            x: GAME_WIDTH,
            top: 50.0,
            bottom: 200.0,
        };
        assert!(!hits(&pipe, 40.0));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Pipe's left edge exactly at the bird's right edge
        let pipe = Pipe {
            x: BIRD_X + BIRD_SIZE,
            top: 50.0,
            bottom: 200.0,
        };
        assert!(!hits(&pipe, 40.0));

        // Pipe's right edge exactly at the bird's left edge
        let pipe = Pipe {
            x: BIRD_X - PIPE_WIDTH,
            top: 50.0,
            bottom: 200.0,
        };
        assert!(!hits(&pipe, 40.0));
    }

    #[test]
    fn test_collision_clears_all_pipes() {
        let mut game = FlappyGame::new();
        game.tick_count = 1;
        game.bird_y = 40.0;
        game.bird_velocity = 0.0;
        game.pipes.push(Pipe {
            x: BIRD_X + PIPE_SPEED,
            top: 100.0,
            bottom: 150.0,
        });
        game.pipes.push(Pipe {
            x: 300.0,
            top: 80.0,
            bottom: 170.0,
        });
        let mut rng = rand::thread_rng();
        process_tick(&mut game, &mut rng);

        assert!(game.pipes.is_empty());
        assert!((game.bird_y - GAME_HEIGHT / 2.0).abs() < f64::EPSILON);
        assert_eq!(game.tick_count, 1);
    }

    #[test]
    fn test_offscreen_pipes_culled() {
        let mut game = FlappyGame::new();
        game.tick_count = 1;
        game.pipes.push(Pipe {
            x: -PIPE_WIDTH + 1.0,
            top: 100.0,
            bottom: 150.0,
        });
        let mut rng = rand::thread_rng();
        process_tick(&mut game, &mut rng);
        assert!(game.pipes.is_empty());
    }
}
