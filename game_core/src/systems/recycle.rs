use crate::{Config, Events, GameRng, Pipe};
use hecs::World;

/// Recycle pipes that have scrolled fully off the left edge
///
/// Each pipe is checked against its own position, so the three slots
/// recycle independently and keep their stagger.
pub fn recycle_pipes(world: &mut World, rng: &mut GameRng, config: &Config, events: &mut Events) {
    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        if pipe.x < config.recycle_threshold() {
            pipe.respawn(config.pipe_spawn_x, rng, config);
            events.recycled = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (World, GameRng, Config, Events) {
        (
            World::new(),
            GameRng::new(12345),
            Config::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_off_screen_pipe_recycles() {
        let (mut world, mut rng, config, mut events) = setup();
        let entity = world.spawn((Pipe {
            slot: 0,
            x: -51.0,
            gap_top: 200,
            scored: true,
        },));

        recycle_pipes(&mut world, &mut rng, &config, &mut events);

        let pipe = *world.get::<&Pipe>(entity).unwrap();
        assert_eq!(pipe.x, config.pipe_spawn_x);
        assert!(!pipe.scored, "Recycling must re-arm scoring");
        assert!((config.gap_top_min..=config.gap_top_max).contains(&pipe.gap_top));
        assert!(events.recycled);
    }

    #[test]
    fn test_pipe_at_threshold_does_not_recycle() {
        let (mut world, mut rng, config, mut events) = setup();
        let entity = world.spawn((Pipe {
            slot: 0,
            x: -50.0,
            gap_top: 200,
            scored: true,
        },));

        recycle_pipes(&mut world, &mut rng, &config, &mut events);

        let pipe = *world.get::<&Pipe>(entity).unwrap();
        assert_eq!(pipe.x, -50.0, "Recycle only fires strictly past the threshold");
        assert!(pipe.scored);
        assert!(!events.recycled);
    }

    #[test]
    fn test_pipes_recycle_independently() {
        let (mut world, mut rng, config, mut events) = setup();
        let gone = world.spawn((Pipe::new(0, -60.0, 150),));
        let visible = world.spawn((Pipe::new(1, 120.0, 300),));

        recycle_pipes(&mut world, &mut rng, &config, &mut events);

        assert_eq!(world.get::<&Pipe>(gone).unwrap().x, config.pipe_spawn_x);
        assert_eq!(
            world.get::<&Pipe>(visible).unwrap().x,
            120.0,
            "On-screen pipes must not move on recycle"
        );
        assert_eq!(world.get::<&Pipe>(visible).unwrap().gap_top, 300);
    }
}
