//! Command implementations for the temperature matrix CLI.
//!
//! Provides subcommands for drawing the matrix to an SVG file and for
//! printing the monthly aggregates.

use clap::{Subcommand, ValueEnum};
use tmx_chart::ViewMode;

pub mod export;
pub mod render;
pub mod source;
pub mod summary;

/// Aggregate that colors the cells when the chart is first drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Max,
    Min,
}

impl From<Mode> for ViewMode {
    fn from(mode: Mode) -> ViewMode {
        match mode {
            Mode::Max => ViewMode::Max,
            Mode::Min => ViewMode::Min,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw the year x month matrix to a standalone SVG file
    Render {
        /// Daily CSV: a file path (plain or gzip) or an http(s) URL
        #[arg(short = 'i', long)]
        input: String,

        /// Output path for the SVG document
        #[arg(short = 'o', long)]
        output: String,

        /// Field that colors the cells
        #[arg(long, value_enum, default_value_t = Mode::Max)]
        mode: Mode,
    },

    /// Print the monthly maximum/minimum for the selected years
    Summary {
        /// Daily CSV: a file path (plain or gzip) or an http(s) URL
        #[arg(short = 'i', long)]
        input: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            input,
            output,
            mode,
        } => render::run_render(&input, &output, mode.into()).await,
        Command::Summary { input, json } => summary::run_summary(&input, json).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_render_args() {
        let args = ["tmx", "render", "-i", "a.csv", "-o", "b.svg"];
        let cli = TestCli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Render { input, output, mode } => {
                assert_eq!((input.as_str(), output.as_str()), ("a.csv", "b.svg"));
                assert_eq!(mode, Mode::Max);
            }
            Command::Summary { .. } => panic!("expected render"),
        }
    }

    #[test]
    fn test_year_count_is_not_an_option() {
        let render = ["tmx", "render", "-i", "a.csv", "-o", "b.svg", "--years", "3"];
        assert!(TestCli::try_parse_from(render).is_err());
        let summary = ["tmx", "summary", "-i", "a.csv", "--years", "3"];
        assert!(TestCli::try_parse_from(summary).is_err());
    }
}
