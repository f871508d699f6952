/// The primitive [Command] set understood by every surface.
mod command;
pub use command::Command;

/// The explicit [Cursor] state of the drawing pointer.
mod cursor;
pub use cursor::Cursor;

/// The [Surface] trait and the recording [CommandLog] surface.
mod surface;
pub use surface::{CommandLog, DrawError, Surface};

/// The [Turtle] that drives a surface.
#[allow(clippy::module_inception)]
mod turtle;
pub use turtle::Turtle;
