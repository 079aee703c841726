use hecs::World;

use crate::{Ball, Config, Paddle, Side};

/// Vertical move for the AI paddle this tick.
///
/// Steps a fixed amount toward the ball's centre, holding still while the
/// paddle centre is within the dead zone.
pub fn ai_move(paddle_center: f32, ball_center: f32, config: &Config) -> f32 {
    if paddle_center < ball_center - config.ai_dead_zone {
        config.ai_step
    } else if paddle_center > ball_center + config.ai_dead_zone {
        -config.ai_step
    } else {
        0.0
    }
}

/// Move the AI paddle toward the ball
pub fn move_ai(world: &mut World, config: &Config) {
    let ball_center = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center_y(config));

    let Some(ball_center) = ball_center else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            let dy = ai_move(paddle.center_y(config), ball_center, config);
            paddle.y = config.clamp_paddle_y(paddle.y + dy);
        }
    }
}
