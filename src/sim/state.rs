//! Entities and world state
//!
//! The [`World`] is the single aggregate the simulation thread owns. Every
//! entity is updated exactly once per tick, in a fixed order: ball, then
//! player paddle, then opponent paddle.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{CollisionResult, segment_hit};
use crate::config::Config;
use crate::consts::*;

/// The rectangular play area, `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Which wall a paddle defends. Determines the sign of the leading-edge
/// offset: the edge always faces the court interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Velocity magnitude; `|vel| == speed` except mid-tick
    pub speed: f32,
}

impl Ball {
    /// Serve a ball from `pos` with a randomized rightward direction
    pub fn serve(pos: Vec2, speed: f32, rng: &mut Pcg32) -> Self {
        let dir = Vec2::new(
            (1 + rng.random_range(0..5)) as f32,
            rng.random_range(0..5) as f32,
        );
        Self {
            pos,
            vel: dir.normalize() * speed,
            radius: BALL_RADIUS,
            speed,
        }
    }

    /// Advance the ball one tick, bouncing off the court's top and bottom
    /// edges and the two paddles' leading edges.
    ///
    /// Returns the wall the ball crossed this tick, if any. Wall crossings
    /// flip `vel.x` but do not reposition the ball; the caller decides
    /// whether to respawn it.
    ///
    /// Bounces are detected against `future`, the position one pre-bounce
    /// velocity ahead, while the final position advance uses the possibly
    /// flipped velocity. The ball therefore turns one tick before visually
    /// reaching the surface it bounced off.
    pub fn update(&mut self, player: &Paddle, opponent: &Paddle, court: Court) -> Option<Side> {
        let future = self.pos + self.vel;
        let mut exit = None;

        if self.vel.y < 0.0 && future.y <= self.radius {
            self.vel.y = -self.vel.y;
        }
        if self.vel.y > 0.0 && future.y >= court.height - self.radius {
            self.vel.y = -self.vel.y;
        }

        if self.vel.x < 0.0 {
            if player.hit(self.pos, future).hit {
                self.vel.x = -self.vel.x;
                self.rescale_velocity();
            } else if future.x <= self.radius {
                exit = Some(Side::Left);
                self.vel.x = -self.vel.x;
            }
        }

        if self.vel.x > 0.0 {
            if opponent.hit(self.pos, future).hit {
                self.vel.x = -self.vel.x;
                self.rescale_velocity();
            } else if future.x >= court.width {
                exit = Some(Side::Right);
                self.vel.x = -self.vel.x;
            }
        }

        self.pos += self.vel;
        exit
    }

    /// Snap `|vel|` back to `speed` after a paddle bounce
    fn rescale_velocity(&mut self) {
        // speed > 0 is a construction invariant, so vel is never zero here
        debug_assert!(self.vel.length_squared() > 0.0);
        self.vel = self.vel.normalize() * self.speed;
    }
}

/// Target-update policy for a paddle
#[derive(Debug, Clone)]
pub enum Control {
    /// Driven by input intents; holds the absolute target position
    Player { target: Vec2 },
    /// Chases the ball while it approaches; holds the clamped per-tick
    /// step, which keeps being applied while the ball moves away
    Tracking { step: Vec2 },
}

/// A paddle. The opponent is the same type with a [`Control::Tracking`]
/// policy and a mirrored leading edge, not a separate entity.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Maximum displacement per tick
    pub speed: f32,
    pub side: Side,
    pub control: Control,
}

impl Paddle {
    pub fn player(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed,
            side: Side::Left,
            control: Control::Player { target: pos },
        }
    }

    pub fn tracking(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed,
            side: Side::Right,
            control: Control::Tracking { step: Vec2::ZERO },
        }
    }

    /// Set the desired vertical position. The horizontal target is always
    /// pinned to the paddle's current x; paddles move vertically only.
    /// No-op for a tracking paddle.
    pub fn go(&mut self, y: f32) {
        if let Control::Player { target } = &mut self.control {
            *target = Vec2::new(self.pos.x, y);
        }
    }

    /// Move toward the target, at most `speed` per tick. Moves that would
    /// push the paddle's vertical extent outside the court are rejected
    /// outright, leaving the position unchanged this tick.
    pub fn update(&mut self, ball: &Ball, court: Court) {
        let step = match &mut self.control {
            Control::Player { target } => {
                let mut goal = *target - self.pos;
                if goal.length() > self.speed {
                    goal = goal.normalize() * self.speed;
                }
                goal
            }
            Control::Tracking { step } => {
                if ball.vel.x > 0.0 {
                    let mut goal = Vec2::new(self.pos.x, ball.pos.y) - self.pos;
                    if goal.length() > self.speed {
                        goal = goal.normalize() * self.speed;
                    }
                    *step = goal;
                }
                *step
            }
        };

        let future = self.pos + step;
        if future.y < self.height / 2.0 {
            return;
        }
        if future.y + self.height / 2.0 > court.height {
            return;
        }
        self.pos = future;
    }

    /// The collision segment facing the court interior
    pub fn leading_edge(&self) -> (Vec2, Vec2) {
        let dx = match self.side {
            Side::Left => self.width / 2.0,
            Side::Right => -self.width / 2.0,
        };
        let x = self.pos.x + dx;
        (
            Vec2::new(x, self.pos.y - self.height / 2.0),
            Vec2::new(x, self.pos.y + self.height / 2.0),
        )
    }

    /// Test the ball's travel segment against the leading edge
    pub fn hit(&self, past: Vec2, future: Vec2) -> CollisionResult {
        let (a, b) = self.leading_edge();
        segment_hit(a, b, past, future)
    }
}

/// Point counters; each increments exactly once per ball-exits-court event
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    /// Ball left past the left wall: the opponent scores
    pub fn record_left_exit(&mut self) {
        self.opponent += 1;
    }

    /// Ball left past the right wall: the player scores
    pub fn record_right_exit(&mut self) {
        self.player += 1;
    }
}

/// The shared mutable aggregate. Owned exclusively by the simulation
/// thread; the input side reaches it only through intents.
#[derive(Debug)]
pub struct World {
    /// Flips true -> false exactly once; no further ticks after that
    pub running: bool,
    pub paused: bool,
    pub court: Court,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    pub score: Score,
    respawn_on_score: bool,
    rng: Pcg32,
}

impl World {
    pub fn new(config: &Config) -> Self {
        let court = Court {
            width: config.width as f32,
            height: config.height as f32,
        };
        let seed = config.seed.unwrap_or_else(seed_from_clock);
        log::debug!("serve rng seed: {seed}");
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::serve(court.center(), config.ball_speed as f32, &mut rng);

        Self {
            running: true,
            paused: false,
            court,
            ball,
            player: Paddle::player(
                Vec2::new(PADDLE_MARGIN, court.height / 2.0),
                config.player_speed as f32,
            ),
            opponent: Paddle::tracking(
                Vec2::new(court.width - PADDLE_MARGIN, court.height / 2.0),
                config.enemy_speed as f32,
            ),
            score: Score::default(),
            respawn_on_score: config.respawn_on_score,
            rng,
        }
    }

    /// Advance every entity one tick and record any scoring event
    pub fn update(&mut self) {
        let Self {
            ball,
            player,
            opponent,
            court,
            ..
        } = self;

        match ball.update(player, opponent, *court) {
            Some(Side::Left) => {
                println!("Enemy scores");
                self.score.record_left_exit();
                self.maybe_respawn();
            }
            Some(Side::Right) => {
                println!("Player scores");
                self.score.record_right_exit();
                self.maybe_respawn();
            }
            None => {}
        }

        let Self {
            ball,
            player,
            opponent,
            court,
            ..
        } = self;
        player.update(ball, *court);
        opponent.update(ball, *court);
    }

    /// Re-serve from center court when the respawn policy is enabled.
    /// Without it the ball re-enters play from wherever it crossed the
    /// wall, as the classic behavior has it.
    fn maybe_respawn(&mut self) {
        if self.respawn_on_score {
            self.ball = Ball::serve(self.court.center(), self.ball.speed, &mut self.rng);
        }
    }

    /// Terminal transition; idempotent
    pub fn terminate(&mut self) {
        if self.running {
            log::info!(
                "game over: player {} opponent {}",
                self.score.player,
                self.score.opponent
            );
        }
        self.running = false;
    }
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
