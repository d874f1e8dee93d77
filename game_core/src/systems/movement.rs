use crate::{Bird, Config, Pipe, Scroll};
use hecs::World;

/// Integrate the bird one tick under gravity
///
/// Semi-implicit Euler: the position moves by the pre-update velocity,
/// then gravity accumulates into the velocity for the next tick.
pub fn integrate_bird(world: &mut World, config: &Config) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.y += bird.vel;
        bird.vel += config.gravity;
    }
}

/// Move every pipe left by the current scroll velocity
pub fn scroll_pipes(world: &mut World, scroll: &Scroll) {
    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        pipe.x -= scroll.vel;
    }
}
