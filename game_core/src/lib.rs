pub mod components;
pub mod config;
pub mod frame_loop;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frame_loop::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// The pointer is applied even after the match ends so the player paddle keeps
/// following the mouse on the end screen; everything else is frozen.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    match_state: &mut MatchState,
    events: &mut Events,
    pointer: &mut PointerInput,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Latest pointer position drives the player paddle
    apply_pointer(world, pointer, config);

    if match_state.is_over() {
        return;
    }

    // 2. Move ball
    move_ball(world);

    // 3. AI follows the ball
    move_ai(world, config);

    // 4. Check collisions (walls, then player paddle else AI paddle)
    check_collisions(world, config, events, rng);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, config, score, events, rng);

    // 6. First to the win score ends the match
    check_winner(score, config, match_state, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// The whole simulation state: entities plus the resources the systems share
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub match_state: MatchState,
    pub events: Events,
    pub pointer: PointerInput,
    pub rng: GameRng,
    pub tick: u64,
}

impl Game {
    /// Centred paddles and a freshly served ball
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        let start_y = config.paddle_start_y();
        create_paddle(&mut world, Side::Player, start_y);
        create_paddle(&mut world, Side::Ai, start_y);

        let ball = Ball::served(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);
        tracing::info!(
            width = config.arena_width,
            height = config.arena_height,
            vx = ball.vel.x,
            vy = ball.vel.y,
            "new game"
        );

        Self {
            world,
            config,
            score: Score::new(),
            match_state: MatchState::new(),
            events: Events::new(),
            pointer: PointerInput::new(),
            rng,
            tick: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::new(), GameRng::new(seed))
    }

    pub fn step(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.match_state,
            &mut self.events,
            &mut self.pointer,
            &mut self.rng,
        );
        self.tick += 1;
    }

    pub fn is_over(&self) -> bool {
        self.match_state.is_over()
    }

    pub fn winner(&self) -> Option<Side> {
        if self.is_over() {
            self.score.has_winner(self.config.win_score)
        } else {
            None
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.y)
    }

    /// Overwrite the ball's state, e.g. to set up a rally
    pub fn set_ball(&mut self, ball: Ball) {
        for (_entity, current) in self.world.query_mut::<&mut Ball>() {
            *current = ball;
        }
    }

    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = self.config.clamp_paddle_y(y);
            }
        }
    }
}
