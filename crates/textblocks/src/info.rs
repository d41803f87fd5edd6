use std::path::PathBuf;

use pages::DocumentSource;
use serde::Serialize;

use crate::prelude::{println, *};
use crate::OutputFormat;

#[derive(Debug, clap::Parser)]
#[command(name = "info")]
#[command(about = "Print page count and backend of a document")]
pub struct App {
    /// Path to the document (PDF or form-feed separated text)
    path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct InfoOutput {
    pub path: String,
    pub source: DocumentSource,
    pub pages: usize,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let document = crate::document::load(&app.path)?;
    let output = InfoOutput {
        path: app.path.display().to_string(),
        source: document.source,
        pages: document.page_count(),
    };

    match global.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Table => format_info_table(&output).printstd(),
        OutputFormat::Text => print!("{}", format_info_text(&output)),
    }

    Ok(())
}

fn format_info_text(output: &InfoOutput) -> String {
    f!(
        "\"{}\" has been successfully loaded\nNumber of pages: {}\n",
        output.path,
        output.pages
    )
}

fn format_info_table(output: &InfoOutput) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["Path", output.path]);
    table.add_row(prettytable::row!["Source", f!("{:?}", output.source)]);
    table.add_row(prettytable::row!["Pages", output.pages]);
    table
}
