use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    display::Renderer,
    dust::{Generation, Generations},
    turtle::{DrawError, Surface, Turtle},
};

/// The width of the top level row in the reference drawing
pub const DEFAULT_WIDTH: f64 = 600.0;
/// The vertical distance between rows in the reference drawing
pub const DEFAULT_ROW_SPACING: f64 = 20.0;
/// How far above the origin the first row is placed
pub const DEFAULT_TOP_OFFSET: f64 = 200.0;
/// How far left of the origin the rows start
pub const DEFAULT_LEFT_OFFSET: f64 = DEFAULT_WIDTH / 2.0;
pub const DEFAULT_PEN_SIZE: u32 = 3;
/// The fastest turtle speed
pub const DEFAULT_SPEED: u8 = 0;

/// The parameters of a cantor dust drawing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DustConfig {
    /// How many times the seed is rewritten. A depth of N draws N + 1 rows.
    pub depth: u32,
    pub width: f64,
    pub row_spacing: f64,
    pub top_offset: f64,
    pub left_offset: f64,
    pub pen_size: u32,
    pub speed: u8,
}

impl DustConfig {
    /// The reference drawing at the given depth.
    pub fn new(depth: u32) -> Self {
        DustConfig {
            depth,
            width: DEFAULT_WIDTH,
            row_spacing: DEFAULT_ROW_SPACING,
            top_offset: DEFAULT_TOP_OFFSET,
            left_offset: DEFAULT_LEFT_OFFSET,
            pen_size: DEFAULT_PEN_SIZE,
            speed: DEFAULT_SPEED,
        }
    }

    /// The number of rows the drawing will have.
    pub fn rows(&self) -> u32 {
        self.depth + 1
    }
}

/// Draws cantor dust onto a [Surface].
///
/// ## Example
///
/// ```rust
/// use cantor_dust_lib::{drawing::{CantorDust, DustConfig}, turtle::CommandLog};
///
/// let turtle = CantorDust::new(DustConfig::new(2)).draw(CommandLog::new()).unwrap();
/// assert!(!turtle.surface().is_empty());
/// ```
pub struct CantorDust {
    config: DustConfig,
    renderer: Renderer,
}

impl CantorDust {
    pub fn new(config: DustConfig) -> Self {
        let renderer = Renderer::new(config.width, config.row_spacing);
        CantorDust { config, renderer }
    }

    pub fn config(&self) -> &DustConfig {
        &self.config
    }

    /// The generations this drawing is made of, seed first.
    pub fn generations(&self) -> Generations {
        Generations::new(Generation::seed(self.config.width), self.config.depth)
    }

    /// Hides the cursor and places it at the start of the first row, facing east.
    pub fn setup<S: Surface>(&self, turtle: &mut Turtle<S>) -> Result<(), DrawError> {
        turtle.pen_size(self.config.pen_size)?;
        turtle.pen_up()?;
        turtle.hide_cursor()?;
        turtle.set_speed(self.config.speed)?;
        turtle.left(90.0)?;
        turtle.forward(self.config.top_offset)?;
        turtle.left(90.0)?;
        turtle.forward(self.config.left_offset)?;
        turtle.left(180.0)
    }

    /// Draws the whole dust and hands back the turtle with its surface.
    pub fn draw<S: Surface>(&self, surface: S) -> Result<Turtle<S>, DrawError> {
        self.draw_with(surface, |_| {})
    }

    /// Like [CantorDust::draw], calling `on_generation` after every row.
    pub fn draw_with<S: Surface, F: FnMut(&Generation)>(
        &self,
        surface: S,
        mut on_generation: F,
    ) -> Result<Turtle<S>, DrawError> {
        let mut turtle = Turtle::new(surface);
        self.setup(&mut turtle)?;
        for generation in self.generations() {
            debug!(
                "Rendering level {} with {} segments of length {}",
                generation.level(),
                generation.len(),
                generation.segment_length()
            );
            self.renderer.render(&mut turtle, &generation)?;
            self.renderer.reset_line(&mut turtle)?;
            on_generation(&generation);
        }
        Ok(turtle)
    }
}
