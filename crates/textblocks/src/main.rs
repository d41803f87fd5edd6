#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod document;
mod error;
mod grid;
mod info;
mod prelude;
mod segment;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Recover paragraphs, headings and captions from the text layout of document pages"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Maximum difference in starting column (exclusive) for two blocks to merge
    #[clap(long, env = "TEXTBLOCKS_THRESHOLD", global = true, default_value = "3")]
    threshold: usize,

    /// Output format
    #[clap(long, env = "TEXTBLOCKS_FORMAT", global = true, default_value = "text")]
    format: OutputFormat,

    /// Whether to display additional information.
    #[clap(long, env = "TEXTBLOCKS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one header line per block
    Text,
    /// Aligned table with one row per block
    Table,
    /// JSON with structured data
    Json,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Print page count and backend of a document
    Info(crate::info::App),

    /// Split every page into text blocks
    Segment(crate::segment::App),

    /// Render the occupancy grid of one page
    Grid(crate::grid::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Info(sub_app) => crate::info::run(sub_app, app.global),
        SubCommands::Segment(sub_app) => crate::segment::run(sub_app, app.global),
        SubCommands::Grid(sub_app) => crate::grid::run(sub_app, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
