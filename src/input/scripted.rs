use std::collections::VecDeque;

use crate::controllers::interactive::ports::input_source::InputSource;
use crate::core::viewport::commands::InputSnapshot;

/// Replays a fixed sequence of snapshots, then reports quit on every poll.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// `count` frames with nothing held.
    #[must_use]
    pub fn idle(count: usize) -> Self {
        Self::new(std::iter::repeat_n(InputSnapshot::default(), count))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSnapshot {
        self.frames.pop_front().unwrap_or_else(InputSnapshot::quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::commands::Command;

    #[test]
    fn replays_frames_in_order_then_quits() {
        let mut input = ScriptedInput::new([
            InputSnapshot::holding([Command::ZoomIn]),
            InputSnapshot::holding([Command::PanLeft]),
        ]);

        assert!(input.poll().commands.contains(Command::ZoomIn));
        assert!(input.poll().commands.contains(Command::PanLeft));
        assert!(input.poll().quit);
        assert!(input.poll().quit);
    }

    #[test]
    fn idle_frames_hold_nothing() {
        let mut input = ScriptedInput::idle(2);

        assert_eq!(input.poll(), InputSnapshot::default());
        assert_eq!(input.poll(), InputSnapshot::default());
        assert!(input.poll().quit);
    }

    #[test]
    fn repeated_snapshots_replay_the_same_commands() {
        let held = InputSnapshot::holding([Command::ZoomIn, Command::AccuracyUp]);
        let mut input = ScriptedInput::new(std::iter::repeat_n(held, 3));

        for _ in 0..3 {
            let snapshot = input.poll();
            assert!(!snapshot.quit);
            assert!(snapshot.commands.contains(Command::ZoomIn));
            assert!(snapshot.commands.contains(Command::AccuracyUp));
        }
        assert!(input.poll().quit);
    }

    #[test]
    fn empty_script_quits_immediately() {
        let mut input = ScriptedInput::default();

        assert!(input.poll().quit);
    }
}
