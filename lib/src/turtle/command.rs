use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A drawing primitive issued by a [Turtle](super::Turtle) to a [Surface](super::Surface).
///
/// Distances are in turtle units and angles in degrees, positive angles turn
/// counter-clockwise.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    #[display("pen_up")]
    PenUp,
    #[display("pen_down")]
    PenDown,
    /// Negative distances move backwards
    #[display("move_forward({_0})")]
    Forward(f64),
    #[display("turn({_0})")]
    Turn(f64),
    /// 0 is the fastest, 1 to 10 go from slowest to fast
    #[display("set_speed({_0})")]
    SetSpeed(u8),
    #[display("hide_cursor")]
    HideCursor,
    #[display("pen_size({_0})")]
    PenSize(u32),
}

impl Command {
    /// The distance this command moves the cursor, if it moves it.
    pub fn distance(&self) -> Option<f64> {
        match self {
            Command::Forward(d) => Some(*d),
            _ => None,
        }
    }
}
