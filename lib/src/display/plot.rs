use std::{error, path::Path};

use log::{debug, info};
use plotters::{
    coord::{types::RangedCoordf64, Shift},
    drawing::{DrawingArea, DrawingAreaErrorKind},
    prelude::*,
};

use super::super::turtle::{Command, Cursor, DrawError, Surface};

/// Blank space left around the drawing, in pixels
const CANVAS_MARGIN: f64 = 20.0;

/// The canvas size used when nothing was drawn at all
const EMPTY_CANVAS: (u32, u32) = (100, 100);

/// A straight line left behind by the pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub width: u32,
}

/// The image formats a [PlotSurface] can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    /// Picks the format based on the file extension, case insensitive.
    pub fn from_path<P: AsRef<Path> + ?Sized>(path: &P) -> Result<Self, DrawError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            _ => Err(DrawError::UnsupportedFormat(ext)),
        }
    }
}

fn backend_error<E: error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> DrawError {
    DrawError::Backend(err.to_string())
}

/// A [Surface] that collects the pen strokes and renders them with plotters.
///
/// One turtle unit maps to one pixel, the canvas is sized to fit the drawing.
#[derive(Debug, Default, Clone)]
pub struct PlotSurface {
    strokes: Vec<Stroke>,
}

impl Surface for PlotSurface {
    fn execute(&mut self, command: &Command, cursor: &Cursor) -> Result<(), DrawError> {
        match command {
            Command::Forward(d) if cursor.is_pen_down() && *d != 0.0 => {
                self.strokes.push(Stroke {
                    from: cursor.position(),
                    to: cursor.destination(*d),
                    width: cursor.pen_size(),
                });
            }
            // there is no live window, so animation related state has nothing to affect
            Command::SetSpeed(_) | Command::HideCursor => {
                debug!("ignoring {}", command);
            }
            _ => {}
        }
        Ok(())
    }
}

impl PlotSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// The extent of the drawing as `((min_x, max_x), (min_y, max_y))`,
    /// including the thickness of the pen.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut iter = self.strokes.iter();
        let first = iter.next()?;
        let mut min_x = first.from.0;
        let mut max_x = first.from.0;
        let mut min_y = first.from.1;
        let mut max_y = first.from.1;
        for stroke in self.strokes.iter() {
            let pad = stroke.width.max(1) as f64 / 2.0;
            for (x, y) in [stroke.from, stroke.to] {
                min_x = min_x.min(x - pad);
                max_x = max_x.max(x + pad);
                min_y = min_y.min(y - pad);
                max_y = max_y.max(y + pad);
            }
        }
        Some(((min_x, max_x), (min_y, max_y)))
    }

    /// The pixel size of the canvas the drawing is saved onto.
    pub fn canvas_size(&self) -> (u32, u32) {
        match self.bounds() {
            Some(((min_x, max_x), (min_y, max_y))) => (
                (max_x - min_x + 2.0 * CANVAS_MARGIN).ceil() as u32,
                (max_y - min_y + 2.0 * CANVAS_MARGIN).ceil() as u32,
            ),
            None => EMPTY_CANVAS,
        }
    }

    /// Renders the collected strokes into an image file, the format is picked
    /// from the file extension.
    pub fn save<P: AsRef<Path> + ?Sized>(&self, path: &P) -> Result<(), DrawError> {
        let size = self.canvas_size();
        match ImageFormat::from_path(path)? {
            ImageFormat::Svg => self.draw_on(SVGBackend::new(path, size).into_drawing_area())?,
            ImageFormat::Png => {
                self.draw_on(BitMapBackend::new(path, size).into_drawing_area())?
            }
        }
        info!(
            "Wrote {} strokes to {}",
            self.strokes.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    fn draw_on<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> Result<(), DrawError> {
        root.fill(&WHITE).map_err(backend_error)?;
        let ((min_x, max_x), (min_y, max_y)) = match self.bounds() {
            Some(bounds) => bounds,
            None => return root.present().map_err(backend_error),
        };
        let (width, height) = root.dim_in_pixel();
        let margin = CANVAS_MARGIN as i32;
        // plotters puts the largest y at the top, same as the turtle's coordinates
        let root = root.apply_coord_spec(Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
            min_x..max_x,
            min_y..max_y,
            (
                margin..(width as i32 - margin),
                margin..(height as i32 - margin),
            ),
        ));
        for stroke in &self.strokes {
            root.draw(&PathElement::new(
                vec![stroke.from, stroke.to],
                Into::<ShapeStyle>::into(&BLACK).stroke_width(stroke.width),
            ))
            .map_err(backend_error)?;
        }
        root.present().map_err(backend_error)
    }
}
