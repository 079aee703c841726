use crate::{Ball, Config, Events, GameRng, Paddle, Side};
use hecs::World;
use rand::Rng;
use tracing::debug;

/// Check ball collisions with walls and paddles
///
/// Walls clamp the ball back inside and flip vertical velocity. Paddles are
/// tested player first; a tick that returns off the player paddle never checks
/// the AI paddle. Only the leading edge facing each paddle is tested, so a ball
/// fast enough to jump past a paddle's x-extent in one tick can pass through.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    // First, collect ball and paddle data without holding borrows
    let ball_data = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.pos, ball.vel));

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Top and bottom walls
    if ball_pos.y <= 0.0 {
        ball_pos.y = 0.0;
        ball_vel.y = -ball_vel.y;
        events.ball_hit_wall = true;
        debug!(x = ball_pos.x, "ball hit top wall");
    }
    if ball_pos.y + config.ball_size >= config.arena_height {
        ball_pos.y = config.arena_height - config.ball_size;
        ball_vel.y = -ball_vel.y;
        events.ball_hit_wall = true;
        debug!(x = ball_pos.x, "ball hit bottom wall");
    }

    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    let paddle_on = |side: Side| paddles.iter().find(|p| p.side == side);

    let player_face = config.paddle_x(Side::Player) + config.paddle_width;
    let ai_face = config.paddle_x(Side::Ai);

    let hit = if paddle_on(Side::Player)
        .is_some_and(|p| ball_pos.x <= player_face && p.spans(ball_pos.y, config))
    {
        ball_pos.x = player_face;
        Some(Side::Player)
    } else if paddle_on(Side::Ai)
        .is_some_and(|p| ball_pos.x + config.ball_size >= ai_face && p.spans(ball_pos.y, config))
    {
        ball_pos.x = ai_face - config.ball_size;
        Some(Side::Ai)
    } else {
        None
    };

    if let Some(side) = hit {
        ball_vel.x = -ball_vel.x;
        // Vary the return angle
        ball_vel.y += rng.0.gen_range(-config.return_spin..config.return_spin);
        events.ball_hit_paddle = true;
        debug!(?side, vx = ball_vel.x, vy = ball_vel.y, "ball returned");
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}
