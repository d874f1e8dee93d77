/// Game tuning parameters for Pixel Bird
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    // Bird
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_WIDTH: f32 = 35.0;
    pub const BIRD_HEIGHT: f32 = 35.0;
    pub const BIRD_START_Y: f32 = 400.0;

    // Per-tick physics (60 ticks per second)
    pub const GRAVITY: f32 = 0.65; // px/tick^2, positive is down
    pub const FLAP_IMPULSE: f32 = -10.0; // px/tick

    // Pipes
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: i32 = 175;
    pub const PIPE_SPAWN_X: f32 = 550.0;
    pub const PIPE_START_XS: [f32; 3] = [600.0, 800.0, 1000.0];
    pub const GAP_TOP_MIN: i32 = 100;
    pub const GAP_TOP_MAX: i32 = 400;

    // Scroll
    pub const SCROLL_SPEED: f32 = 3.0; // px/tick while a round is running

    // Timing
    pub const TICKS_PER_SECOND: u32 = 60;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_start_y: f32,
    pub gravity: f32,
    pub flap_impulse: f32,
    pub pipe_width: f32,
    pub pipe_gap: i32,
    pub pipe_spawn_x: f32,
    pub pipe_start_xs: [f32; 3],
    pub gap_top_min: i32,
    pub gap_top_max: i32,
    pub scroll_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            bird_x: Params::BIRD_X,
            bird_width: Params::BIRD_WIDTH,
            bird_height: Params::BIRD_HEIGHT,
            bird_start_y: Params::BIRD_START_Y,
            gravity: Params::GRAVITY,
            flap_impulse: Params::FLAP_IMPULSE,
            pipe_width: Params::PIPE_WIDTH,
            pipe_gap: Params::PIPE_GAP,
            pipe_spawn_x: Params::PIPE_SPAWN_X,
            pipe_start_xs: Params::PIPE_START_XS,
            gap_top_min: Params::GAP_TOP_MIN,
            gap_top_max: Params::GAP_TOP_MAX,
            scroll_speed: Params::SCROLL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the spawn-time X position for a pipe slot
    pub fn pipe_start_x(&self, slot: u8) -> f32 {
        self.pipe_start_xs[slot as usize % self.pipe_start_xs.len()]
    }

    /// A pipe recycles once its position drops below this threshold
    pub fn recycle_threshold(&self) -> f32 {
        -self.pipe_width
    }

    /// Height of the bottom span for a given gap top
    pub fn bottom_span_height(&self, gap_top: i32) -> f32 {
        self.screen_height - (gap_top + self.pipe_gap) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_pipe_start_x() {
        let config = Config::new();
        assert_eq!(config.pipe_start_x(0), 600.0, "First pipe spawn column");
        assert_eq!(config.pipe_start_x(1), 800.0, "Second pipe spawn column");
        assert_eq!(config.pipe_start_x(2), 1000.0, "Third pipe spawn column");
    }

    #[test]
    fn test_config_recycle_threshold() {
        let config = Config::new();
        assert_eq!(config.recycle_threshold(), -50.0);
    }

    #[test]
    fn test_bottom_span_never_negative() {
        let config = Config::new();
        // Worst case: the largest sampled gap top
        let height = config.bottom_span_height(config.gap_top_max);
        assert!(
            height >= 0.0,
            "Bottom span must fit on screen even for the largest gap top, got {}",
            height
        );
        assert_eq!(height, 700.0 - 400.0 - 175.0);
    }

    #[test]
    fn test_bottom_span_smallest_gap_top() {
        let config = Config::new();
        let height = config.bottom_span_height(config.gap_top_min);
        assert_eq!(height, 700.0 - 100.0 - 175.0);
    }
}
