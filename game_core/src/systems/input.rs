use hecs::World;

use crate::{Bird, Config, Events, GameAction, GameFsm, GameRng, InputQueue, Pipe, Score, Scroll};

/// Drain queued activate actions and apply each one to the world
#[allow(clippy::too_many_arguments)]
pub fn apply_actions(
    world: &mut World,
    input: &mut InputQueue,
    fsm: &mut GameFsm,
    score: &mut Score,
    scroll: &mut Scroll,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    for _ in 0..input.drain() {
        jump_or_reset(world, fsm, score, scroll, rng, config, events);
    }
}

/// One activate action: restart the round if frozen, then always flap
///
/// Reset and flap are a single indivisible action; the press that
/// restarts the round also imparts the jump impulse.
pub fn jump_or_reset(
    world: &mut World,
    fsm: &mut GameFsm,
    score: &mut Score,
    scroll: &mut Scroll,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    if fsm.is_paused() {
        reset_round(world, score, scroll, rng, config);
        fsm.transition(GameAction::Restart);
        events.restarted = true;
    }

    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.vel = config.flap_impulse;
    }
    events.flapped = true;
}

/// Put every entity back to its round-start state
fn reset_round(
    world: &mut World,
    score: &mut Score,
    scroll: &mut Scroll,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.reset(config);
    }

    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        let start_x = config.pipe_start_x(pipe.slot);
        pipe.respawn(start_x, rng, config);
    }

    score.reset();
    scroll.resume(config.scroll_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_bird, create_pipes};

    #[allow(clippy::type_complexity)]
    fn setup() -> (World, GameFsm, Score, Scroll, GameRng, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(12345);
        create_bird(&mut world, &config);
        create_pipes(&mut world, &mut rng, &config);
        (
            world,
            GameFsm::new(),
            Score::new(),
            Scroll::new(config.scroll_speed),
            rng,
            config,
            Events::new(),
        )
    }

    #[test]
    fn test_flap_while_active_sets_impulse() {
        let (mut world, mut fsm, mut score, mut scroll, mut rng, config, mut events) = setup();

        jump_or_reset(
            &mut world, &mut fsm, &mut score, &mut scroll, &mut rng, &config, &mut events,
        );

        for (_e, bird) in world.query::<&Bird>().iter() {
            assert_eq!(bird.vel, config.flap_impulse);
            assert_eq!(bird.y, config.bird_start_y, "Flap must not move the bird");
        }
        assert!(events.flapped);
        assert!(!events.restarted, "No reset happened while active");
        assert!(fsm.is_active());
    }

    #[test]
    fn test_activate_while_paused_resets_and_flaps() {
        let (mut world, mut fsm, mut score, mut scroll, mut rng, config, mut events) = setup();

        // Simulate a crashed round: frozen, scored, displaced pipes
        fsm.transition(GameAction::Collide);
        scroll.stop();
        score.increment();
        score.increment();
        for (_e, bird) in world.query_mut::<&mut Bird>() {
            bird.y = 650.0;
            bird.vel = 0.0;
        }
        for (_e, pipe) in world.query_mut::<&mut Pipe>() {
            pipe.x = 40.0;
            pipe.scored = true;
        }

        jump_or_reset(
            &mut world, &mut fsm, &mut score, &mut scroll, &mut rng, &config, &mut events,
        );

        assert!(fsm.is_active());
        assert!(events.restarted);
        assert_eq!(score.points, 0, "Restart must zero the score");
        assert_eq!(scroll.vel, config.scroll_speed);

        for (_e, bird) in world.query::<&Bird>().iter() {
            assert_eq!(bird.y, config.bird_start_y);
            assert_eq!(
                bird.vel, config.flap_impulse,
                "The restarting press also flaps: velocity is the impulse, not zero"
            );
        }

        let mut xs: Vec<f32> = world
            .query::<&Pipe>()
            .iter()
            .map(|(_e, p)| p.x)
            .collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, vec![600.0, 800.0, 1000.0]);
        for (_e, pipe) in world.query::<&Pipe>().iter() {
            assert!(!pipe.scored, "Restart must clear every scored flag");
            assert!((config.gap_top_min..=config.gap_top_max).contains(&pipe.gap_top));
        }
    }

    #[test]
    fn test_queued_actions_apply_in_order() {
        let (mut world, mut fsm, mut score, mut scroll, mut rng, config, mut events) = setup();
        let mut input = InputQueue::new();

        fsm.transition(GameAction::Collide);
        input.push_activate();
        input.push_activate();

        apply_actions(
            &mut world, &mut input, &mut fsm, &mut score, &mut scroll, &mut rng, &config,
            &mut events,
        );

        // First press restarted, second just flapped again
        assert!(fsm.is_active());
        assert!(input.is_empty());
        for (_e, bird) in world.query::<&Bird>().iter() {
            assert_eq!(bird.vel, config.flap_impulse);
        }
    }
}
