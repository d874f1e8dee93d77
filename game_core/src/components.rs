use glam::Vec2;

use crate::config::Config;
use crate::rect::Aabb;
use crate::resources::GameRng;

/// Bird component - the player-controlled sprite
///
/// Only the vertical axis is stored; the bird's X position and size are
/// fixed configuration, so the horizontal position cannot drift.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub y: f32,   // top edge, pixels from the top of the screen
    pub vel: f32, // px/tick, positive is down
}

impl Bird {
    pub fn new(y: f32) -> Self {
        Self { y, vel: 0.0 }
    }

    /// Put the bird back at its round-start position
    pub fn reset(&mut self, config: &Config) {
        self.y = config.bird_start_y;
        self.vel = 0.0;
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(config.bird_x, self.y),
            Vec2::new(config.bird_width, config.bird_height),
        )
    }
}

/// Pipe component - one gated obstacle of the three-slot ring
#[derive(Debug, Clone, Copy)]
pub struct Pipe {
    pub slot: u8,     // 0..3, fixes the spawn stagger on reset
    pub x: f32,       // left edge, pixels
    pub gap_top: i32, // height of the top span, pixels
    pub scored: bool,
}

impl Pipe {
    pub fn new(slot: u8, x: f32, gap_top: i32) -> Self {
        Self {
            slot,
            x,
            gap_top,
            scored: false,
        }
    }

    /// Uniformly sampled top-span height
    pub fn sample_gap_top(rng: &mut GameRng, config: &Config) -> i32 {
        use rand::Rng;
        rng.0.gen_range(config.gap_top_min..=config.gap_top_max)
    }

    /// Move the pipe to a new column with a fresh gap and a cleared score flag
    pub fn respawn(&mut self, x: f32, rng: &mut GameRng, config: &Config) {
        self.x = x;
        self.gap_top = Self::sample_gap_top(rng, config);
        self.scored = false;
    }

    pub fn right_edge(&self, config: &Config) -> f32 {
        self.x + config.pipe_width
    }

    /// Solid span from the top of the screen down to the gap
    pub fn top_rect(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(self.x, 0.0),
            Vec2::new(config.pipe_width, self.gap_top as f32),
        )
    }

    /// Solid span from below the gap down to the bottom of the screen
    pub fn bottom_rect(&self, config: &Config) -> Aabb {
        let top = (self.gap_top + config.pipe_gap) as f32;
        Aabb::from_top_left(
            Vec2::new(self.x, top),
            Vec2::new(config.pipe_width, config.screen_height - top),
        )
    }
}
