use log::trace;

use super::super::{
    dust::{Generation, Symbol},
    turtle::{DrawError, Surface, Turtle},
};

/// Turns generations into turtle movement, one row per generation.
///
/// The renderer only knows the geometry of the row layout, the cursor it
/// moves is handed to it on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    /// The width of the top level row, every line reset returns by this much
    width: f64,
    /// The vertical distance between two consecutive rows
    row_spacing: f64,
}

impl Renderer {
    pub fn new(width: f64, row_spacing: f64) -> Self {
        Renderer { width, row_spacing }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn row_spacing(&self) -> f64 {
        self.row_spacing
    }

    /// Walks the generation's symbols, drawing ink segments and skipping gaps.
    /// The pen is left raised.
    pub fn render<S: Surface>(
        &self,
        turtle: &mut Turtle<S>,
        generation: &Generation,
    ) -> Result<(), DrawError> {
        trace!("row {}: {}", generation.level(), generation);
        let length = generation.segment_length();
        for symbol in generation.symbols() {
            match symbol {
                Symbol::Draw => {
                    turtle.pen_down()?;
                    turtle.forward(length)?;
                    turtle.pen_up()?;
                }
                Symbol::Skip => {
                    if turtle.cursor().is_pen_down() {
                        turtle.pen_up()?;
                    }
                    turtle.forward(length)?;
                }
            }
        }
        Ok(())
    }

    /// Moves the cursor to the left margin of the next row down.
    ///
    /// The return distance is always the full top level width, not the width
    /// of the row that was just drawn.
    pub fn reset_line<S: Surface>(&self, turtle: &mut Turtle<S>) -> Result<(), DrawError> {
        turtle.right(90.0)?;
        turtle.forward(self.row_spacing)?;
        turtle.left(90.0)?;
        turtle.backward(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::turtle::{Command, CommandLog, Cursor};
    use super::*;

    fn raised_cursor() -> Cursor {
        let mut cursor = Cursor::new();
        cursor.apply(&Command::PenUp);
        cursor
    }

    fn horizontal_travel(commands: &[Command]) -> f64 {
        commands.iter().filter_map(|c| c.distance()).sum()
    }

    #[test]
    fn test_render_seed() {
        let renderer = Renderer::new(600.0, 20.0);
        let mut turtle = Turtle::with_cursor(CommandLog::new(), raised_cursor());
        renderer
            .render(&mut turtle, &Generation::seed(600.0))
            .unwrap();
        assert_eq!(
            turtle.surface().commands(),
            &[Command::PenDown, Command::Forward(600.0), Command::PenUp]
        );
        assert!(!turtle.cursor().is_pen_down());
        assert_eq!(turtle.cursor().position(), (600.0, 0.0));
    }

    #[test]
    fn test_render_gap() {
        let renderer = Renderer::new(600.0, 20.0);
        let mut turtle = Turtle::with_cursor(CommandLog::new(), raised_cursor());
        renderer
            .render(&mut turtle, &Generation::seed(600.0).next())
            .unwrap();
        assert_eq!(
            turtle.surface().commands(),
            &[
                Command::PenDown,
                Command::Forward(200.0),
                Command::PenUp,
                Command::Forward(200.0),
                Command::PenDown,
                Command::Forward(200.0),
                Command::PenUp,
            ]
        );
    }

    #[test]
    fn test_travel_matches_width() {
        let renderer = Renderer::new(729.0, 20.0);
        let mut row = Generation::seed(729.0);
        for _ in 0..5 {
            let mut turtle = Turtle::with_cursor(CommandLog::new(), raised_cursor());
            renderer.render(&mut turtle, &row).unwrap();
            let travel = horizontal_travel(turtle.surface().commands());
            assert!((travel - row.segment_length() * row.len() as f64).abs() < 1e-9);
            assert!((turtle.cursor().position().0 - 729.0).abs() < 1e-9);
            row = row.next();
        }
    }

    #[test]
    fn test_reset_line_uses_full_width() {
        let renderer = Renderer::new(600.0, 20.0);
        let mut turtle = Turtle::with_cursor(CommandLog::new(), raised_cursor());
        let deep = Generation::seed(600.0).next().next().next();
        renderer.render(&mut turtle, &deep).unwrap();
        renderer.reset_line(&mut turtle).unwrap();
        let (x, y) = turtle.cursor().position();
        assert!(x.abs() < 1e-9);
        assert_eq!(y, -20.0);
        assert_eq!(turtle.cursor().heading(), 0.0);
        let tail = &turtle.surface().commands()[turtle.surface().len() - 4..];
        assert_eq!(
            tail,
            &[
                Command::Turn(-90.0),
                Command::Forward(20.0),
                Command::Turn(90.0),
                Command::Forward(-600.0)
            ]
        );
    }
}
