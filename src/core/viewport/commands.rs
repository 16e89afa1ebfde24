/// Named viewport commands an input source can report as held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    AccuracyUp,
    AccuracyDown,
}

impl Command {
    /// Every command, in the order they are applied within a frame.
    pub const ALL: [Command; 8] = [
        Command::ZoomIn,
        Command::ZoomOut,
        Command::PanLeft,
        Command::PanRight,
        Command::PanUp,
        Command::PanDown,
        Command::AccuracyUp,
        Command::AccuracyDown,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// The set of commands held during one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandSet {
    held: [bool; Command::ALL.len()],
}

impl CommandSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, command: Command) {
        self.held[command.slot()] = true;
    }

    pub fn set(&mut self, command: Command, held: bool) {
        self.held[command.slot()] = held;
    }

    #[must_use]
    pub fn contains(&self, command: Command) -> bool {
        self.held[command.slot()]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.held.iter().any(|&held| held)
    }

    /// Held commands in application order.
    pub fn iter(&self) -> impl Iterator<Item = Command> + '_ {
        Command::ALL.into_iter().filter(|&command| self.contains(command))
    }
}

impl FromIterator<Command> for CommandSet {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut set = Self::new();
        for command in iter {
            set.insert(command);
        }
        set
    }
}

/// What an input source reports for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub quit: bool,
    pub commands: CommandSet,
}

impl InputSnapshot {
    #[must_use]
    pub fn quit() -> Self {
        Self {
            quit: true,
            commands: CommandSet::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn holding(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            quit: false,
            commands: commands.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_empty() {
        let set = CommandSet::default();

        assert!(set.is_empty());
        assert!(Command::ALL.iter().all(|&c| !set.contains(c)));
    }

    #[test]
    fn insert_and_set_toggle_membership() {
        let mut set = CommandSet::new();

        set.insert(Command::PanUp);
        set.insert(Command::ZoomOut);
        assert!(set.contains(Command::PanUp));
        assert!(set.contains(Command::ZoomOut));
        assert!(!set.is_empty());

        set.set(Command::PanUp, false);
        assert!(!set.contains(Command::PanUp));
        assert!(set.contains(Command::ZoomOut));
    }

    #[test]
    fn iter_yields_application_order_regardless_of_insertion_order() {
        let set: CommandSet = [Command::AccuracyDown, Command::PanLeft, Command::ZoomIn]
            .into_iter()
            .collect();

        let held: Vec<Command> = set.iter().collect();

        assert_eq!(held, vec![Command::ZoomIn, Command::PanLeft, Command::AccuracyDown]);
    }

    #[test]
    fn duplicate_inserts_are_held_once() {
        let set: CommandSet = [Command::PanRight, Command::PanRight].into_iter().collect();

        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn quit_snapshot_holds_nothing() {
        let snapshot = InputSnapshot::quit();

        assert!(snapshot.quit);
        assert!(snapshot.commands.is_empty());
    }
}
