//! Input mapping
//!
//! Every supported input collapses to a single `Jump` command. The adapter
//! decides nothing about game state.

/// Raw platform input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent<'a> {
    /// `KeyboardEvent.code`
    Key(&'a str),
    /// Touch start on the canvas
    Tap,
    /// Pointer click on the canvas
    Click,
}

/// Game command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Jump,
}

/// Key codes that jump
pub const JUMP_KEYS: [&str; 2] = ["Space", "ArrowUp"];

impl InputEvent<'_> {
    pub fn command(&self) -> Option<InputCommand> {
        match self {
            InputEvent::Key(code) if JUMP_KEYS.contains(code) => Some(InputCommand::Jump),
            InputEvent::Key(_) => None,
            InputEvent::Tap | InputEvent::Click => Some(InputCommand::Jump),
        }
    }

    /// Whether the browser default must be cancelled (page scroll on Space,
    /// synthetic mouse events and zoom after a tap)
    pub fn suppresses_default(&self) -> bool {
        match self {
            InputEvent::Key(_) | InputEvent::Tap => self.command().is_some(),
            InputEvent::Click => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_keys() {
        assert_eq!(InputEvent::Key("Space").command(), Some(InputCommand::Jump));
        assert_eq!(InputEvent::Key("ArrowUp").command(), Some(InputCommand::Jump));
        assert_eq!(InputEvent::Key("KeyW").command(), None);
        assert_eq!(InputEvent::Key("ArrowDown").command(), None);
    }

    #[test]
    fn test_pointer_inputs_jump() {
        assert_eq!(InputEvent::Tap.command(), Some(InputCommand::Jump));
        assert_eq!(InputEvent::Click.command(), Some(InputCommand::Jump));
    }

    #[test]
    fn test_default_suppression() {
        assert!(InputEvent::Key("Space").suppresses_default());
        assert!(!InputEvent::Key("Tab").suppresses_default());
        assert!(InputEvent::Tap.suppresses_default());
        assert!(!InputEvent::Click.suppresses_default());
    }
}
