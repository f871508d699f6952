use std::{error, io};

use cantor_dust_lib::turtle::DrawError;
use derive_more::{Display, From};
use indicatif::style::TemplateError;

use super::args::DepthError;

/// Anything that can stop a run.
#[derive(Debug, Display, From)]
pub enum AppError {
    Depth(DepthError),
    Draw(DrawError),
    #[display("prompt failed: {_0}")]
    Prompt(dialoguer::Error),
    #[display("io error: {_0}")]
    Io(io::Error),
    #[display("could not serialize the commands: {_0}")]
    Dump(serde_json::Error),
    #[display("invalid progress bar template: {_0}")]
    Style(TemplateError),
}

impl error::Error for AppError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Depth(err) => Some(err),
            Self::Draw(err) => Some(err),
            Self::Prompt(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Dump(err) => Some(err),
            Self::Style(err) => Some(err),
        }
    }
}
