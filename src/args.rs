use clap_derive::Parser;
use derive_more::{Display, From};
use dialoguer::Input;

use std::{
    error,
    io::{stdin, BufRead, IsTerminal},
    num::ParseIntError,
    path::PathBuf,
};

use super::error::AppError;

/// The deepest dust we are willing to draw, beyond this segments are far
/// thinner than a pixel.
pub const MAX_DEPTH: u32 = 10;

/// Where the image goes if the user doesn't say otherwise.
const DEFAULT_OUTPUT: &str = "cantor_dust.svg";

#[derive(Debug, Display, From)]
pub enum DepthError {
    #[display("depth must be a whole number ({_0})")]
    Parse(ParseIntError),
    #[display("depth {_0} is too large, the maximum is {}", MAX_DEPTH)]
    #[from(ignore)]
    TooDeep(u32),
    #[display("no depth provided")]
    #[from(ignore)]
    Missing,
}

impl error::Error for DepthError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// A function to parse the depth argument.
pub fn parse_depth(input: &str) -> Result<u32, DepthError> {
    let depth = input.trim().parse::<u32>()?;
    if depth > MAX_DEPTH {
        return Err(DepthError::TooDeep(depth));
    }
    Ok(depth)
}

/// The arguments to the program.
#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    #[arg(value_parser = parse_depth)]
    /// The fractal depth. Prompted for if not provided.
    pub depth: Option<u32>,
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    /// The image to write, the extension picks the format (svg or png).
    pub output: PathBuf,
    #[arg(long, default_value = None)]
    /// A path to a json file to dump the drawing commands to.
    pub dump: Option<PathBuf>,
    #[arg(short, long, default_value_t = false)]
    /// A flag that tells the program not to interact with the user.
    pub no_interaction: bool,
}

impl Args {
    /// Returns the depth, reading it from the user if it wasn't an argument.
    ///
    /// On a terminal the user is prompted once, otherwise a single line is
    /// read from stdin. Input that isn't a number is not retried.
    pub fn get_depth(&self) -> Result<u32, AppError> {
        if let Some(depth) = self.depth {
            return Ok(depth);
        }
        let input = if stdin().is_terminal() {
            if self.no_interaction {
                return Err(DepthError::Missing.into());
            }
            Input::<String>::new()
                .with_prompt("Please input fractal depth")
                .interact_text()?
        } else {
            let mut line = String::new();
            stdin().lock().read_line(&mut line)?;
            line
        };
        Ok(parse_depth(&input)?)
    }
}
