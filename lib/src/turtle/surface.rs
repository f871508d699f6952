use std::error;

use derive_more::Display;

use super::{Command, Cursor};

/// An error raised by a [Surface] while drawing or saving.
#[derive(Debug, Display)]
pub enum DrawError {
    /// The plotting backend failed, this includes failing to write the file
    #[display("drawing backend error: {_0}")]
    Backend(String),
    /// The output path has an extension no backend can write
    #[display("unsupported output format {_0:?}")]
    UnsupportedFormat(String),
}

impl error::Error for DrawError {}

/// Something a [Turtle](super::Turtle) can draw on.
///
/// The surface receives every primitive together with the cursor as it was
/// right before the primitive took effect, so it never has to track the
/// turtle's state itself.
pub trait Surface {
    fn execute(&mut self, command: &Command, cursor: &Cursor) -> Result<(), DrawError>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn execute(&mut self, command: &Command, cursor: &Cursor) -> Result<(), DrawError> {
        (**self).execute(command, cursor)
    }
}

/// Feeds every command to both surfaces, the first one sees it first.
impl<A: Surface, B: Surface> Surface for (A, B) {
    fn execute(&mut self, command: &Command, cursor: &Cursor) -> Result<(), DrawError> {
        self.0.execute(command, cursor)?;
        self.1.execute(command, cursor)
    }
}

/// A surface that simply records the primitives it receives.
#[derive(Debug, Default, Clone)]
pub struct CommandLog {
    commands: Vec<Command>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for CommandLog {
    fn execute(&mut self, command: &Command, _cursor: &Cursor) -> Result<(), DrawError> {
        self.commands.push(*command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fails on the first movement
    struct Broken;

    impl Surface for Broken {
        fn execute(&mut self, command: &Command, _cursor: &Cursor) -> Result<(), DrawError> {
            match command {
                Command::Forward(_) => Err(DrawError::Backend("broken".to_string())),
                _ => Ok(()),
            }
        }
    }

    #[test]
    fn test_log_records_in_order() {
        let mut log = CommandLog::new();
        let cursor = Cursor::new();
        log.execute(&Command::PenUp, &cursor).unwrap();
        log.execute(&Command::Forward(2.0), &cursor).unwrap();
        assert_eq!(log.into_commands(), vec![Command::PenUp, Command::Forward(2.0)]);
    }

    #[test]
    fn test_pair_feeds_both() {
        let mut pair = (CommandLog::new(), CommandLog::new());
        pair.execute(&Command::HideCursor, &Cursor::new()).unwrap();
        assert_eq!(pair.0.commands(), pair.1.commands());
        assert_eq!(pair.0.len(), 1);
    }

    #[test]
    fn test_pair_stops_on_error() {
        let mut pair = (Broken, CommandLog::new());
        let cursor = Cursor::new();
        pair.execute(&Command::PenDown, &cursor).unwrap();
        let err = pair.execute(&Command::Forward(1.0), &cursor).unwrap_err();
        assert_eq!(err.to_string(), "drawing backend error: broken");
        assert_eq!(pair.1.commands(), &[Command::PenDown]);
    }
}
