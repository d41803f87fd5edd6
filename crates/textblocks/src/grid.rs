use std::path::PathBuf;

use textblocks_core::{islands, OccupancyGrid};

use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Parser)]
#[command(name = "grid")]
#[command(about = "Render the occupancy grid of one page ('#' occupied, '.' blank)")]
pub struct App {
    /// Path to the document (PDF or form-feed separated text)
    path: PathBuf,

    /// Page to render (1-based)
    #[arg(short, long, default_value = "1")]
    page: usize,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let document = crate::document::load(&app.path)?;
    let selected = crate::document::select_pages(&document, Some(app.page))?;
    let (_, lines) = selected[0];

    let grid = OccupancyGrid::from_lines(lines).map_err(|e| eyre!(e))?;

    if global.verbose {
        eprintln!(
            "page {}: {} rows x {} columns, {} occupied cells, {} islands",
            app.page,
            grid.rows(),
            grid.width(),
            grid.occupied_count(),
            islands::label(&grid).count()
        );
    }

    print!("{}", grid.render());

    Ok(())
}
