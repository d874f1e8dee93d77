use crate::{Bird, Config, Events, GameAction, GameFsm, Pipe, Scroll};
use hecs::World;

/// Freeze the round on the first overlap between the bird and any pipe span
///
/// Only an active round can collide; once frozen, further overlaps are
/// ignored until a restart.
pub fn check_collisions(
    world: &mut World,
    fsm: &mut GameFsm,
    scroll: &mut Scroll,
    config: &Config,
    events: &mut Events,
) {
    if !fsm.is_active() {
        return;
    }

    let bird_box = {
        let mut bird_query = world.query::<&Bird>();
        bird_query
            .iter()
            .next()
            .map(|(_e, bird)| bird.aabb(config))
    };

    let bird_box = match bird_box {
        Some(aabb) => aabb,
        None => return, // No bird in world
    };

    let mut hit = false;
    for (_entity, pipe) in world.query::<&Pipe>().iter() {
        if bird_box.overlaps(&pipe.top_rect(config)) || bird_box.overlaps(&pipe.bottom_rect(config))
        {
            hit = true;
            break;
        }
    }

    if hit {
        fsm.transition(GameAction::Collide);
        scroll.stop();
        for (_entity, bird) in world.query_mut::<&mut Bird>() {
            bird.vel = 0.0;
        }
        events.collided = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_bird;

    fn setup() -> (World, GameFsm, Scroll, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_bird(&mut world, &config);
        (
            world,
            GameFsm::new(),
            Scroll::new(config.scroll_speed),
            config,
            Events::new(),
        )
    }

    #[test]
    fn test_bird_hits_top_span() {
        let (mut world, mut fsm, mut scroll, config, mut events) = setup();
        // Bird sits at y=400..435; a gap top of 500 reaches well below it
        world.spawn((Pipe::new(0, config.bird_x, 500),));

        check_collisions(&mut world, &mut fsm, &mut scroll, &config, &mut events);

        assert!(fsm.is_paused(), "Overlap with the top span must pause");
        assert_eq!(scroll.vel, 0.0);
        for (_e, bird) in world.query::<&Bird>().iter() {
            assert_eq!(bird.vel, 0.0);
        }
        assert!(events.collided);
    }

    #[test]
    fn test_bird_hits_bottom_span() {
        let (mut world, mut fsm, mut scroll, config, mut events) = setup();
        // Gap 100..275 sits entirely above the bird at 400..435
        world.spawn((Pipe::new(0, config.bird_x, 100),));

        check_collisions(&mut world, &mut fsm, &mut scroll, &config, &mut events);

        assert!(fsm.is_paused(), "Overlap with the bottom span must pause");
        assert!(events.collided);
    }

    #[test]
    fn test_bird_inside_gap_survives() {
        let (mut world, mut fsm, mut scroll, config, mut events) = setup();
        // Gap 390..565 brackets the bird at 400..435
        world.spawn((Pipe::new(0, config.bird_x, 390),));

        check_collisions(&mut world, &mut fsm, &mut scroll, &config, &mut events);

        assert!(fsm.is_active(), "Flying through the gap is not a collision");
        assert_eq!(scroll.vel, config.scroll_speed);
        assert!(!events.collided);
    }

    #[test]
    fn test_distant_pipe_does_not_collide() {
        let (mut world, mut fsm, mut scroll, config, mut events) = setup();
        world.spawn((Pipe::new(0, 300.0, 500),));

        check_collisions(&mut world, &mut fsm, &mut scroll, &config, &mut events);

        assert!(fsm.is_active());
        assert!(!events.collided);
    }

    #[test]
    fn test_no_retrigger_while_paused() {
        let (mut world, mut fsm, mut scroll, config, mut events) = setup();
        world.spawn((Pipe::new(0, config.bird_x, 500),));

        check_collisions(&mut world, &mut fsm, &mut scroll, &config, &mut events);
        assert!(fsm.is_paused());

        // Give the bird a velocity a re-trigger would wrongly clear
        for (_e, bird) in world.query_mut::<&mut Bird>() {
            bird.vel = 4.0;
        }
        events.clear();

        check_collisions(&mut world, &mut fsm, &mut scroll, &config, &mut events);

        assert!(fsm.is_paused());
        assert!(!events.collided, "A frozen round must not report new collisions");
        for (_e, bird) in world.query::<&Bird>().iter() {
            assert_eq!(bird.vel, 4.0, "Velocities are only zeroed on the first hit");
        }
    }

    #[test]
    fn test_no_collision_when_no_bird() {
        let (_, mut fsm, mut scroll, config, mut events) = setup();
        let mut world = World::new();
        world.spawn((Pipe::new(0, 50.0, 500),));

        // Should not panic or error
        check_collisions(&mut world, &mut fsm, &mut scroll, &config, &mut events);

        assert!(fsm.is_active());
        assert!(!events.collided);
    }
}
