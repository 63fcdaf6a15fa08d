//! Per-tick orchestration
//!
//! Input events never touch the [`World`] directly. The window side turns
//! them into [`Intent`] values posted on a queue; each tick drains the
//! queue, applies every pending intent, then advances the world once if it
//! is running and not paused. Paused worlds still drain intents so the
//! pause toggle stays responsive.

use super::state::World;

/// A single discrete effect of an input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Nudge the player paddle target up by one paddle-speed step
    MoveUp,
    /// Nudge the player paddle target down by one paddle-speed step
    MoveDown,
    /// Absolute pointer position in court coordinates; only y is meaningful
    PointerTarget { x: f32, y: f32 },
    TogglePause,
    Quit,
}

/// Apply one intent to the world
pub fn apply_intent(world: &mut World, intent: Intent) {
    match intent {
        Intent::MoveUp => {
            let y = world.player.pos.y - world.player.speed;
            world.player.go(y);
        }
        Intent::MoveDown => {
            let y = world.player.pos.y + world.player.speed;
            world.player.go(y);
        }
        Intent::PointerTarget { x: _, y } => world.player.go(y),
        Intent::TogglePause => world.paused = !world.paused,
        Intent::Quit => world.terminate(),
    }
}

/// Drain pending intents, then advance the world one tick
pub fn tick(world: &mut World, intents: impl IntoIterator<Item = Intent>) {
    for intent in intents {
        apply_intent(world, intent);
    }

    if world.running && !world.paused {
        world.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_world() -> World {
        World::new(&Config {
            seed: Some(7),
            ..Config::default()
        })
    }

    #[test]
    fn test_quit_intent_terminates() {
        let mut world = test_world();
        tick(&mut world, [Intent::Quit]);
        assert!(!world.running);
    }

    #[test]
    fn test_pause_skips_update() {
        let mut world = test_world();
        tick(&mut world, [Intent::TogglePause]);
        assert!(world.paused);
        let pos = world.ball.pos;
        tick(&mut world, std::iter::empty());
        assert_eq!(world.ball.pos, pos);
        // Toggling back resumes updates
        tick(&mut world, [Intent::TogglePause]);
        assert!(!world.paused);
        assert_ne!(world.ball.pos, pos);
    }

    #[test]
    fn test_move_intents_step_by_paddle_speed() {
        let mut world = test_world();
        let start = world.player.pos.y;
        tick(&mut world, [Intent::MoveDown]);
        assert!((world.player.pos.y - (start + world.player.speed)).abs() < 0.001);
        tick(&mut world, [Intent::MoveUp, Intent::MoveUp]);
        // Both intents land in one tick but the target moves relative to
        // the current position, so the net step is one paddle speed
        assert!((world.player.pos.y - start).abs() < 0.001);
    }

    #[test]
    fn test_pointer_target_drives_paddle() {
        let mut world = test_world();
        tick(&mut world, [Intent::PointerTarget { x: 50.0, y: 130.0 }]);
        let expected = world.court.height / 2.0 + world.player.speed;
        assert!((world.player.pos.y - expected).abs() < 0.001);
        // x stays pinned to the paddle column
        assert!((world.player.pos.x - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_no_updates_after_termination() {
        let mut world = test_world();
        tick(&mut world, [Intent::Quit]);
        let pos = world.ball.pos;
        tick(&mut world, std::iter::empty());
        assert_eq!(world.ball.pos, pos);
    }
}
