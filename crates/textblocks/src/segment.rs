use std::path::PathBuf;

use serde::Serialize;
use textblocks_core::{segment_pages, Page, SegmentOptions, TextBlock};

use crate::prelude::{eprintln, println, *};
use crate::OutputFormat;

/// Characters of block text shown in the table preview column.
const PREVIEW_CHARS: usize = 40;

#[derive(Debug, clap::Parser)]
#[command(name = "segment")]
#[command(about = "Split every page into text blocks")]
pub struct App {
    /// Path to the document (PDF or form-feed separated text)
    path: PathBuf,

    /// Only segment this page (1-based)
    #[arg(short, long)]
    page: Option<usize>,
}

/// Segmentation outcome of one page. Exactly one of `blocks` and `error` is set.
#[derive(Debug, Serialize)]
pub struct PageReport {
    pub page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<TextBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let document = crate::document::load(&app.path)?;
    let selected = crate::document::select_pages(&document, app.page)?;
    let options = SegmentOptions::new().with_indentation_threshold(global.threshold);

    let reports = segment_selected(&selected, &options);
    let failed = reports.iter().filter(|r| r.error.is_some()).count();

    if global.verbose {
        let blocks: usize = reports
            .iter()
            .filter_map(|r| r.blocks.as_ref())
            .map(Vec::len)
            .sum();
        eprintln!(
            "{} page(s), {} block(s), threshold {}",
            reports.len(),
            blocks,
            options.indentation_threshold
        );
    }

    match global.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Table => format_reports_table(&reports).printstd(),
        OutputFormat::Text => print!("{}", format_reports_text(&reports)),
    }

    for report in &reports {
        if let Some(error) = &report.error {
            eprintln!("page {}: {}", report.page, error);
        }
    }

    if failed > 0 {
        return Err(Error::PagesFailed(failed).into());
    }

    Ok(())
}

/// Segment the selected pages and label each result with its page number.
fn segment_selected(selected: &[(usize, &Page)], options: &SegmentOptions) -> Vec<PageReport> {
    let pages: Vec<&Page> = selected.iter().map(|(_, page)| *page).collect();

    selected
        .iter()
        .zip(segment_pages::<_, String>(&pages, options))
        .map(|(&(page, _), result)| match result {
            Ok(blocks) => PageReport {
                page,
                blocks: Some(blocks),
                error: None,
            },
            Err(err) => {
                log::warn!("page {} failed: {}", page, err.source);
                PageReport {
                    page,
                    blocks: None,
                    error: Some(err.source.to_string()),
                }
            }
        })
        .collect()
}

fn format_reports_text(reports: &[PageReport]) -> String {
    let mut out = String::new();

    for report in reports {
        let Some(blocks) = &report.blocks else {
            continue;
        };
        for (i, tb) in blocks.iter().enumerate() {
            let b = &tb.block;
            out.push_str(&f!(
                "--- page {} block {} ({},{})-({},{}) ---\n",
                report.page,
                i + 1,
                b.row_min,
                b.col_min,
                b.row_max,
                b.col_max
            ));
            out.push_str(&tb.text);
        }
    }

    out
}

fn format_reports_table(reports: &[PageReport]) -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(prettytable::row!["Page", "Block", "Top-left", "Bottom-right", "Preview"]);

    for report in reports {
        match (&report.blocks, &report.error) {
            (Some(blocks), _) => {
                for (i, tb) in blocks.iter().enumerate() {
                    let b = &tb.block;
                    table.add_row(prettytable::row![
                        report.page,
                        i + 1,
                        f!("({},{})", b.row_min, b.col_min),
                        f!("({},{})", b.row_max, b.col_max),
                        preview(tb.first_line())
                    ]);
                }
            }
            (None, error) => {
                table.add_row(prettytable::row![
                    report.page,
                    "-",
                    "-",
                    "-",
                    f!("error: {}", error.as_deref().unwrap_or("unknown"))
                ]);
            }
        }
    }

    table
}

fn preview(line: &str) -> String {
    if line.chars().count() <= PREVIEW_CHARS {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(PREVIEW_CHARS - 1).collect();
    cut.push('…');
    cut
}
