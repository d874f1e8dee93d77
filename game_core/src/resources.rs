/// Running score for the current round
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.points += 1;
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }
}

/// Horizontal scroll velocity shared by the whole pipe ring
///
/// Equals the configured constant while a round runs and is forced to
/// zero when the round freezes on a collision.
#[derive(Debug, Clone, Copy)]
pub struct Scroll {
    pub vel: f32,
}

impl Scroll {
    pub fn new(vel: f32) -> Self {
        Self { vel }
    }

    pub fn stop(&mut self) {
        self.vel = 0.0;
    }

    pub fn resume(&mut self, vel: f32) {
        self.vel = vel;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy for a real play session
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub flapped: bool,
    pub restarted: bool,
    pub passed_pipe: bool,
    pub recycled: bool,
    pub collided: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Activate actions queued by the shell, drained once per tick
///
/// Keyboard, pointer, and touch presses all land here as the same action.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputQueue {
    pending: u32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_activate(&mut self) {
        self.pending += 1;
    }

    /// Take all queued activations, leaving the queue empty
    pub fn drain(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending == 0
    }
}
