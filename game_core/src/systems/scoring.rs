use crate::{Config, Events, Pipe, Score};
use hecs::World;

/// Award a point for each pipe whose trailing edge has cleared the bird column
///
/// The scored flag latches until the pipe recycles, so a pass is worth
/// exactly one point. Runs every tick; while the round is frozen the
/// positions no longer change, so it awards nothing new.
pub fn check_scoring(world: &mut World, score: &mut Score, config: &Config, events: &mut Events) {
    for (_entity, pipe) in world.query_mut::<&mut Pipe>() {
        if !pipe.scored && pipe.right_edge(config) <= config.bird_x {
            score.increment();
            pipe.scored = true;
            events.passed_pipe = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (World, Score, Config, Events) {
        (World::new(), Score::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_pipe_past_bird_scores() {
        let (mut world, mut score, config, mut events) = setup();
        // Right edge at 0 + 50 = 50 <= bird_x 50
        let entity = world.spawn((Pipe::new(0, 0.0, 200),));

        check_scoring(&mut world, &mut score, &config, &mut events);

        assert_eq!(score.points, 1);
        assert!(world.get::<&Pipe>(entity).unwrap().scored);
        assert!(events.passed_pipe);
    }

    #[test]
    fn test_pipe_ahead_of_bird_does_not_score() {
        let (mut world, mut score, config, mut events) = setup();
        // Right edge at 1 + 50 = 51 > bird_x 50
        world.spawn((Pipe::new(0, 1.0, 200),));

        check_scoring(&mut world, &mut score, &config, &mut events);

        assert_eq!(score.points, 0);
        assert!(!events.passed_pipe);
    }

    #[test]
    fn test_pass_scores_only_once() {
        let (mut world, mut score, config, mut events) = setup();
        world.spawn((Pipe::new(0, 0.0, 200),));

        check_scoring(&mut world, &mut score, &config, &mut events);
        check_scoring(&mut world, &mut score, &config, &mut events);
        check_scoring(&mut world, &mut score, &config, &mut events);

        assert_eq!(score.points, 1, "The scored flag must prevent double counting");
    }

    #[test]
    fn test_recycled_pipe_scores_again() {
        let (mut world, mut score, config, mut events) = setup();
        let entity = world.spawn((Pipe::new(0, 0.0, 200),));

        check_scoring(&mut world, &mut score, &config, &mut events);
        assert_eq!(score.points, 1);

        // Recycle puts the pipe back on the right with the flag cleared
        {
            let mut pipe = world.get::<&mut Pipe>(entity).unwrap();
            pipe.x = config.pipe_spawn_x;
            pipe.scored = false;
        }
        check_scoring(&mut world, &mut score, &config, &mut events);
        assert_eq!(score.points, 1, "Still right of the bird, no new point yet");

        {
            let mut pipe = world.get::<&mut Pipe>(entity).unwrap();
            pipe.x = -10.0;
        }
        check_scoring(&mut world, &mut score, &config, &mut events);
        assert_eq!(score.points, 2, "A recycled pipe can score once more");
    }

    #[test]
    fn test_score_counts_each_pipe() {
        let (mut world, mut score, config, mut events) = setup();
        world.spawn((Pipe::new(0, -20.0, 200),));
        world.spawn((Pipe::new(1, -5.0, 300),));
        world.spawn((Pipe::new(2, 500.0, 150),));

        check_scoring(&mut world, &mut score, &config, &mut events);

        assert_eq!(score.points, 2, "Both passed pipes score, the far one does not");
    }
}
