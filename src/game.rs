//! The tick orchestrator.
//!
//! `Game` owns the world and the random source, sequences one tick of the
//! pipeline per `step()`, applies player commands between ticks and keeps
//! track of whether the run is still going.

use std::time::Duration;

use log::{info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai;
use crate::collision;
use crate::commands::{Command, HELP_TEXT};
use crate::config::{GameConfig, PlayerSpawn};
use crate::entities::{Bullet, BulletOwner, Drawable, HasPosition, Player, Sprite, World};
use crate::error::{ConfigError, Result};
use crate::geometry::{Direction, Position};
use crate::spawner;

/// Points per destroyed enemy.
pub const KILL_SCORE: u64 = 200;
/// Points per second survived.
pub const SURVIVAL_SCORE_PER_SECOND: u64 = 100;

pub const FAREWELL: &str = "Bye bye! See ya later!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cause {
    Death,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Termination {
    pub cause: Cause,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated(Termination),
}

pub struct Game<R = StdRng> {
    world: World,
    rng: R,
    tick_duration: Duration,
    status: Status,
}

impl Game<StdRng> {
    /// Build a run from `config`, seeding the RNG from `config.seed` when set.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    /// Build a run driven by an externally supplied random source.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let mut world = World::new(config.width, config.height, config.origin());
        if config.player_spawn == PlayerSpawn::Random {
            let start = spawner::random_free_cell(&world, &mut rng)
                .ok_or(ConfigError::NoFreeSpawnCell)?;
            world.player = Player::new(start);
        }
        info!(
            "new run: {}x{} viewport, player at {:?}",
            config.width,
            config.height,
            world.player.coordinates()
        );
        Ok(Self {
            world,
            rng,
            tick_duration: config.tick_duration,
            status: Status::Running,
        })
    }

    // ── Per-tick pipeline ───────────────────────────────────────────────────

    /// Advance the simulation by one tick. Does nothing once terminated.
    pub fn step(&mut self) {
        if !self.is_running() {
            return;
        }

        self.world.refresh_blocked();

        for bullet in self.world.bullets.iter_mut() {
            bullet.advance();
        }

        if collision::resolve_collisions(&mut self.world) {
            self.die();
            return;
        }

        ai::move_enemies(&mut self.world, &mut self.rng);

        if collision::player_touched(&self.world) {
            self.die();
            return;
        }

        spawner::spawn_wave(&mut self.world, &mut self.rng);
        self.world.tick += 1;

        trace!(
            "tick {}: {} bullets, {} shooters, {} chasers",
            self.world.tick,
            self.world.bullets.len(),
            self.world.shooters.len(),
            self.world.chasers.len()
        );
    }

    // ── Player commands ─────────────────────────────────────────────────────

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Move(direction) => self.move_player(direction),
            Command::Shoot(direction) => self.shoot(direction),
            Command::Quit => self.quit(),
        }
    }

    /// Step the player unless a wall is in the way.
    pub fn move_player(&mut self, direction: Direction) {
        if !self.is_running() {
            return;
        }
        let step = direction.vector();
        let target = self.world.player.desired_coordinates(step);
        if !self.world.is_blocked(target) {
            self.world.player.move_by(step);
        }
    }

    /// Fire from the player's own cell.
    pub fn shoot(&mut self, direction: Direction) {
        if !self.is_running() {
            return;
        }
        let at = self.world.player.coordinates();
        self.world
            .bullets
            .push(Bullet::new(BulletOwner::Player, direction, at));
    }

    pub fn quit(&mut self) {
        if !self.is_running() {
            return;
        }
        info!("player quit at tick {}", self.world.tick);
        self.status = Status::Terminated(Termination {
            cause: Cause::Quit,
            message: FAREWELL.to_string(),
        });
    }

    fn die(&mut self) {
        let elapsed = self.elapsed();
        let message = format!(
            "You are dead! You lasted {:.2} seconds and destroyed {} enemies. Score: {}",
            elapsed.as_secs_f64(),
            self.world.kills,
            self.score()
        );
        info!("player died at tick {}", self.world.tick);
        self.status = Status::Terminated(Termination {
            cause: Cause::Death,
            message,
        });
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// The status line once terminated.
    pub fn exit_message(&self) -> Option<&str> {
        match &self.status {
            Status::Running => None,
            Status::Terminated(t) => Some(&t.message),
        }
    }

    pub fn help_text(&self) -> &'static str {
        HELP_TEXT
    }

    pub fn tick(&self) -> u64 {
        self.world.tick
    }

    pub fn kills(&self) -> u32 {
        self.world.kills
    }

    /// Game time survived so far.
    pub fn elapsed(&self) -> Duration {
        elapsed_after(self.tick_duration, self.world.tick)
    }

    /// `floor(seconds * 100 + kills * 200)`, computed without floats.
    pub fn score(&self) -> u64 {
        let survival = self.elapsed().as_nanos() * u128::from(SURVIVAL_SCORE_PER_SECOND)
            / 1_000_000_000;
        u64::try_from(survival).unwrap_or(u64::MAX) + u64::from(self.world.kills) * KILL_SCORE
    }

    pub fn player_position(&self) -> Position {
        self.world.player.coordinates()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access to the board, for scripted setups.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Everything drawable, player last so it draws on top.
    pub fn objects(&self) -> Vec<Drawable> {
        let w = &self.world;
        let mut out = Vec::with_capacity(
            w.walls.len() + w.bullets.len() + w.shooters.len() + w.chasers.len() + 1,
        );
        out.extend(w.walls.iter().map(Sprite::drawable));
        out.extend(w.bullets.iter().map(Sprite::drawable));
        out.extend(w.shooters.iter().map(Sprite::drawable));
        out.extend(w.chasers.iter().map(Sprite::drawable));
        out.push(w.player.drawable());
        out
    }
}

fn elapsed_after(tick_duration: Duration, ticks: u64) -> Duration {
    let nanos = tick_duration.as_nanos() * u128::from(ticks);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
