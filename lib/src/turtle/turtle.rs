use log::trace;

use super::{Command, Cursor, DrawError, Surface};

/// A drawing pointer bound to a surface.
///
/// Every movement is forwarded to the surface as a [Command] and then applied
/// to the [Cursor], which the turtle owns exclusively.
pub struct Turtle<S: Surface> {
    cursor: Cursor,
    surface: S,
}

impl<S: Surface> Turtle<S> {
    pub fn new(surface: S) -> Self {
        Self::with_cursor(surface, Cursor::new())
    }

    pub fn with_cursor(surface: S, cursor: Cursor) -> Self {
        Turtle { cursor, surface }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Releases the surface, dropping the cursor.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Sends the command to the surface and applies it to the cursor.
    pub fn issue(&mut self, command: Command) -> Result<(), DrawError> {
        trace!("{} at {:?}", command, self.cursor.position());
        self.surface.execute(&command, &self.cursor)?;
        self.cursor.apply(&command);
        Ok(())
    }

    pub fn pen_up(&mut self) -> Result<(), DrawError> {
        self.issue(Command::PenUp)
    }

    pub fn pen_down(&mut self) -> Result<(), DrawError> {
        self.issue(Command::PenDown)
    }

    pub fn forward(&mut self, distance: f64) -> Result<(), DrawError> {
        self.issue(Command::Forward(distance))
    }

    pub fn backward(&mut self, distance: f64) -> Result<(), DrawError> {
        self.issue(Command::Forward(-distance))
    }

    pub fn left(&mut self, angle: f64) -> Result<(), DrawError> {
        self.issue(Command::Turn(angle))
    }

    pub fn right(&mut self, angle: f64) -> Result<(), DrawError> {
        self.issue(Command::Turn(-angle))
    }

    pub fn set_speed(&mut self, level: u8) -> Result<(), DrawError> {
        self.issue(Command::SetSpeed(level))
    }

    pub fn hide_cursor(&mut self) -> Result<(), DrawError> {
        self.issue(Command::HideCursor)
    }

    pub fn pen_size(&mut self, width: u32) -> Result<(), DrawError> {
        self.issue(Command::PenSize(width))
    }
}

#[cfg(test)]
mod tests {
    use super::super::CommandLog;
    use super::*;

    #[test]
    fn test_issue_records_and_moves() {
        let mut turtle = Turtle::new(CommandLog::new());
        turtle.left(90.0).unwrap();
        turtle.forward(10.0).unwrap();
        turtle.right(90.0).unwrap();
        turtle.backward(4.0).unwrap();
        assert_eq!(turtle.cursor().position(), (-4.0, 10.0));
        assert_eq!(
            turtle.surface().commands(),
            &[
                Command::Turn(90.0),
                Command::Forward(10.0),
                Command::Turn(-90.0),
                Command::Forward(-4.0)
            ]
        );
    }

    #[test]
    fn test_borrowed_surface() {
        let mut log = CommandLog::new();
        {
            let mut turtle = Turtle::new(&mut log);
            turtle.pen_up().unwrap();
            turtle.hide_cursor().unwrap();
        }
        assert_eq!(log.commands(), &[Command::PenUp, Command::HideCursor]);
    }
}
