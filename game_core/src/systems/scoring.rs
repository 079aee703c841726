use crate::{Ball, Config, Events, GameRng, MatchState, Score, Side};
use hecs::World;
use tracing::info;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Past the player's edge: AI scores
        if ball.pos.x < 0.0 {
            award_point(Side::Ai, ball, config, score, events, rng);
        }
        // Past the AI's edge: player scores
        if ball.pos.x > config.arena_width - config.ball_size {
            award_point(Side::Player, ball, config, score, events, rng);
        }
    }
}

fn award_point(
    side: Side,
    ball: &mut Ball,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    score.increment(side);
    events.scored(side);
    ball.reset(config, rng);
    info!(
        ?side,
        player = score.player,
        ai = score.ai,
        vx = ball.vel.x,
        vy = ball.vel.y,
        "point scored, ball served"
    );
}

/// End the match once either side reaches the win score
pub fn check_winner(
    score: &Score,
    config: &Config,
    match_state: &mut MatchState,
    events: &mut Events,
) {
    if match_state.is_over() {
        return;
    }
    if let Some(winner) = score.has_winner(config.win_score) {
        match_state.end();
        events.game_ended = true;
        info!(?winner, player = score.player, ai = score.ai, "game over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap()
    }

    #[test]
    fn test_ai_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.5, 200.0), Vec2::new(-6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.ai, 1, "AI should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.ai_scored, "Should trigger ai_scored event");
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let x = config.arena_width - config.ball_size + 0.5;
        create_ball(&mut world, Vec2::new(x, 200.0), Vec2::new(6.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.ai, 0, "AI should not score");
        assert!(events.player_scored, "Should trigger player_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-3.0, 17.0), Vec2::new(-6.0, 9.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let ball = ball(&world);
        assert_eq!(ball.pos, config.ball_serve_pos(), "Ball should reset to center");
        assert_eq!(ball.vel.x.abs(), config.serve_speed_x);
    }

    #[test]
    fn test_no_scoring_at_the_edges() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 200.0), Vec2::new(-6.0, 0.0));
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let mut world = World::new();
        let x = config.arena_width - config.ball_size;
        create_ball(&mut world, Vec2::new(x, 200.0), Vec2::new(6.0, 0.0));
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "No score while the ball is in bounds");
        assert!(!events.player_scored && !events.ai_scored, "No scoring events");
    }

    #[test]
    fn test_winner_ends_match() {
        let (_world, config, _score, mut events, _rng) = setup_world();
        let mut match_state = MatchState::new();

        check_winner(&Score { player: 6, ai: 6 }, &config, &mut match_state, &mut events);
        assert!(!match_state.is_over());

        check_winner(&Score { player: 7, ai: 5 }, &config, &mut match_state, &mut events);
        assert!(match_state.is_over());
        assert!(events.game_ended);
    }
}
