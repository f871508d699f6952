use clap::Parser;
use human_panic::setup_panic;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::{
    fs,
    io::{stdin, stdout, IsTerminal},
    path::Path,
    process::ExitCode,
};

use cantor_dust_lib::{
    display::{ImageFormat, PlotSurface},
    drawing::{CantorDust, DustConfig},
    turtle::CommandLog,
};

/// A submodule that handles the command line arguments and the depth prompt
mod args;
use args::Args;

/// The error type covering everything that can go wrong during a run
mod error;
use error::AppError;

/// Draws the dust described by the arguments and writes the outputs.
///
/// # Process
///
/// 1. Resolves the depth, prompting the user if needed
/// 2. Draws every generation onto a [PlotSurface], recording the commands alongside
/// 3. Saves the image, and optionally dumps the commands to json
fn run(args: &Args) -> Result<(), AppError> {
    // check the format before asking for anything so bad paths fail fast
    ImageFormat::from_path(&args.output)?;
    let depth = args.get_depth()?;
    let dust = CantorDust::new(DustConfig::new(depth));
    info!("Drawing cantor dust of depth {}", depth);

    let bar_style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
        .progress_chars("#>-");
    let progress_bar = ProgressBar::new(dust.config().rows() as u64);
    progress_bar.set_style(bar_style);
    let turtle = dust.draw_with((PlotSurface::new(), CommandLog::new()), |generation| {
        progress_bar.set_message(format!("level {}", generation.level()));
        progress_bar.inc(1);
    })?;
    progress_bar.finish_with_message("Dust drawn");

    let (plot, log) = turtle.into_surface();
    debug!(
        "{} commands issued, {} strokes",
        log.len(),
        plot.strokes().len()
    );
    plot.save(&args.output)?;
    println!("Saved the drawing to {}", args.output.display());
    if let Some(dump) = &args.dump {
        dump_commands(&log, dump)?;
        println!("Dumped the drawing commands to {}", dump.display());
    }
    if stdin().is_terminal() && stdout().is_terminal() && !args.no_interaction {
        open::that(&args.output)?;
    }
    Ok(())
}

/// Writes the recorded commands as pretty printed json.
fn dump_commands(log: &CommandLog, path: &Path) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(log.commands())?;
    fs::write(path, json)?;
    Ok(())
}

/// Main function. This is the entry point of the program.
///
/// # Arguments
///
/// 1. `depth` - The fractal depth. If not provided, the program will prompt the user to enter it.
/// 2. `--output` - Where to write the image. Defaults to `cantor_dust.svg`.
/// 3. `--dump` - A path to dump the drawing commands to as json.
/// 4. `--no-interaction` - Don't prompt and don't open the image afterwards.
fn main() -> ExitCode {
    setup_panic!();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_run_writes_outputs() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("dust.svg");
        let dump = dir.path().join("dust.json");
        let args = Args::try_parse_from([
            "cantor_dust",
            "2",
            "-n",
            "-o",
            output.to_str().unwrap(),
            "--dump",
            dump.to_str().unwrap(),
        ])
        .unwrap();
        run(&args).unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("<svg"));
        let commands: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&dump).unwrap()).unwrap();
        // setup, then three rows each followed by a reset; ink costs three commands, gaps one
        let expected = 9 + (3 + 4) + (7 + 4) + (4 * 3 + 5 + 4);
        assert_eq!(commands.as_array().unwrap().len(), expected);
    }

    #[test]
    fn test_run_rejects_format() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("dust.gifx");
        let args =
            Args::try_parse_from(["cantor_dust", "1", "-n", "-o", output.to_str().unwrap()])
                .unwrap();
        assert!(matches!(run(&args), Err(AppError::Draw(_))));
        assert!(!output.exists());
    }
}
