pub mod components;
pub mod config;
pub mod fsm;
pub mod rect;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use rect::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pixel Bird simulation by exactly one tick
///
/// Integration is discrete: positions and velocities change by per-tick
/// constants, so the caller is expected to run this at the fixed tick
/// rate (`Params::TICKS_PER_SECOND`).
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    fsm: &mut GameFsm,
    config: &Config,
    score: &mut Score,
    scroll: &mut Scroll,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply queued activate actions (a press may restart the round)
    apply_actions(world, input, fsm, score, scroll, rng, config, events);

    // 2. Physics and recycling only run while the round is active
    if fsm.is_active() {
        integrate_bird(world, config);
        scroll_pipes(world, scroll);
        recycle_pipes(world, rng, config, events);
    }

    // 3. Scoring runs every tick; frozen positions award nothing new
    check_scoring(world, score, config, events);

    // 4. Collision can only freeze an active round
    check_collisions(world, fsm, scroll, config, events);
}

/// Helper to create the bird entity
pub fn create_bird(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Bird::new(config.bird_start_y),))
}

/// Helper to create the three-pipe ring at its staggered spawn columns
pub fn create_pipes(world: &mut World, rng: &mut GameRng, config: &Config) -> [hecs::Entity; 3] {
    [0u8, 1, 2].map(|slot| {
        let gap_top = Pipe::sample_gap_top(rng, config);
        world.spawn((Pipe::new(slot, config.pipe_start_x(slot), gap_top),))
    })
}
