use super::Command;

/// Headings are kept in `[0, FULL_TURN)`
const FULL_TURN: f64 = 360.0;

/// Default pen width, matches a freshly created turtle
const DEFAULT_PEN_SIZE: u32 = 1;

/// Default animation speed
const DEFAULT_SPEED: u8 = 3;

/// The state of the drawing pointer.
///
/// The coordinate system has its origin in the middle of the canvas, with y
/// growing upwards. The heading is measured in degrees counter-clockwise from
/// east.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    position: (f64, f64),
    heading: f64,
    pen_down: bool,
    pen_size: u32,
    speed: u8,
    visible: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor {
            position: (0.0, 0.0),
            heading: 0.0,
            pen_down: true,
            pen_size: DEFAULT_PEN_SIZE,
            speed: DEFAULT_SPEED,
            visible: true,
        }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn pen_size(&self) -> u32 {
        self.pen_size
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Where the cursor would end up after moving `distance` along its heading.
    pub fn destination(&self, distance: f64) -> (f64, f64) {
        let rad = self.heading.to_radians();
        let (x, y) = self.position;
        // snap the trig noise so right angles land on exact coordinates
        let dx = round_off(rad.cos());
        let dy = round_off(rad.sin());
        (x + distance * dx, y + distance * dy)
    }

    /// Updates the state according to the command.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::PenUp => self.pen_down = false,
            Command::PenDown => self.pen_down = true,
            Command::Forward(d) => self.position = self.destination(*d),
            Command::Turn(angle) => {
                self.heading = (self.heading + angle).rem_euclid(FULL_TURN);
            }
            Command::SetSpeed(level) => self.speed = *level,
            Command::HideCursor => self.visible = false,
            Command::PenSize(size) => self.pen_size = *size,
        }
    }
}

fn round_off(value: f64) -> f64 {
    const EPSILON: f64 = 1e-12;
    if value.abs() < EPSILON {
        0.0
    } else if (value.abs() - 1.0).abs() < EPSILON {
        value.signum()
    } else {
        value
    }
}
