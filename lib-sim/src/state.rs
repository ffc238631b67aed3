use log::info;

use crate::{Obstacle, Player, Tuning, Viewport};

/// Gates whether the simulation advances. Only [RunMode::Running]
/// ticks the world and accumulates score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Initial state, and where a collision or the Stop button lands.
    Stopped,
    Running,
    Paused,
}

/// The whole mutable game world. Owned exclusively by the loop driver
/// and mutated only inside [GameState::tick] or one of the explicit
/// requests below; nothing here is shared.
pub struct GameState {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub player: Player,
    /// Insertion order is spawn order; the spawn policy keys off the
    /// most recently appended entry.
    pub obstacles: Vec<Obstacle>,
    /// Survived ticks.
    pub score: u64,
    /// Signed horizontal speed applied to every obstacle, per tick.
    pub scroll_speed: f32,
    pub mode: RunMode,
    /// Distinguishes a fresh [RunMode::Stopped] from one entered
    /// through a collision, so the UI can announce the right thing.
    pub game_over: bool,
}

impl GameState {
    pub fn new(tuning: Tuning, viewport: Viewport) -> Self {
        Self {
            player: Player::new(&tuning, viewport),
            obstacles: vec![Obstacle::at_spawn(&tuning, viewport)],
            score: 0,
            scroll_speed: tuning.scroll_speed,
            mode: RunMode::Stopped,
            game_over: false,
            tuning,
            viewport,
        }
    }

    /// Advance the world by one fixed tick. A no-op outside
    /// [RunMode::Running], which is what freezes the score while
    /// paused or stopped.
    pub fn tick(&mut self, blink: f32) {
        if self.mode != RunMode::Running {
            return;
        }

        self.player.update(blink, &self.tuning, self.viewport);

        for obstacle in &mut self.obstacles {
            obstacle.update(self.scroll_speed);
        }

        let tuning = self.tuning;
        self.obstacles.retain(|o| !o.off_screen(&tuning));

        // One spawn per half-viewport of travel, cadence implied by
        // the scroll speed rather than a timer.
        let want_spawn = self
            .obstacles
            .last()
            .map_or(true, |last| last.pos.x < self.viewport.mid_x());
        if want_spawn {
            self.obstacles
                .push(Obstacle::at_spawn(&self.tuning, self.viewport));
        }

        if self.check_collisions() {
            info!("run over, final score {}", self.score);
            self.mode = RunMode::Stopped;
            self.game_over = true;
            return;
        }

        self.score += 1;
    }

    /// First contact ends the run; there is no health model.
    pub fn check_collisions(&self) -> bool {
        let player = self.player.aabb(&self.tuning);
        self.obstacles
            .iter()
            .any(|o| player.overlaps(o.aabb(&self.tuning)))
    }

    /// Back to a freshly initialized world: one obstacle at the spawn
    /// position, zero score, initial speed, not running. Accepted from
    /// any state.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.tuning, self.viewport);
        self.obstacles = vec![Obstacle::at_spawn(&self.tuning, self.viewport)];
        self.score = 0;
        self.scroll_speed = self.tuning.scroll_speed;
        self.mode = RunMode::Stopped;
        self.game_over = false;
    }

    /// Nudge the scroll speed, clamped to the tuned bounds so mashing
    /// a key can neither stall the obstacles nor send them off the
    /// charts.
    pub fn adjust_speed(&mut self, delta: f32) {
        self.scroll_speed = (self.scroll_speed + delta)
            .clamp(self.tuning.scroll_speed_min, self.tuning.scroll_speed_max);
    }
}
