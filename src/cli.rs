// src/cli.rs
//
// Headless report: the same numbers the three pages draw, printed as text.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    analysis::{mean_length_by_county, summarize, top_longest, yearly_counts},
    config::{consts::OTHER_MATERIAL_LABEL, options::DashboardOptions},
    data::{CategoryField, Dataset, YearField},
    file,
    present::{county_lines, map_view, pie_slices, pivot_table, top_table, TableData},
    store,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Georgia bridges report")]
pub struct Args {
    /// Bridges CSV (default: $GA_BRIDGES_DATA or bridges_georgia_dataset.csv)
    #[arg(long)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Main span material mix and reconstructions per year
    Home {
        /// Merge materials below this share (%) into "Other"
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Built-year series and mean structure length per county
    County {
        /// County to include (repeatable); default: first two alphabetically
        #[arg(long = "county")]
        counties: Vec<String>,
        /// Write the pivot table as CSV
        #[arg(long)]
        out: Option<String>,
    },
    /// Longest bridges: centroid and Top-10
    Map {
        /// How many of the longest bridges (clamped to 50..=1000)
        #[arg(long)]
        top: Option<usize>,
        /// Write the Top-10 table as CSV
        #[arg(long)]
        out: Option<String>,
    },
}

pub fn run(args: Args) -> Result<()> {
    let mut options = DashboardOptions::resolve(args.data);
    let ds = store::load_dataset(&options.data_path)
        .wrap_err_with(|| format!("loading {}", options.data_path.display()))?;

    match args.command {
        Command::Home { threshold } => {
            if let Some(t) = threshold { options.other_threshold_pct = t; }
            home(&ds, &options);
        }
        Command::County { counties, out } => {
            let counties = if counties.is_empty() {
                ds.default_counties(options.default_county_count)
            } else {
                counties
            };
            let table = county(&ds, &options, &counties);
            write_out(&table, out, "county_lengths.csv")?;
        }
        Command::Map { top, out } => {
            let n = options.clamp_top_n(top.unwrap_or(options.top_n_default));
            let table = map(&ds, &options, n);
            write_out(&table, out, "top_bridges.csv")?;
        }
    }
    Ok(())
}

fn home(ds: &Dataset, options: &DashboardOptions) {
    let summary = summarize(ds, CategoryField::MainSpanMaterial, options.other_threshold_pct);
    println!("Distribution of Bridges by Main Span Material");
    for s in pie_slices(&summary, OTHER_MATERIAL_LABEL) {
        println!("  {:<32} {:>6}  {}", s.label, s.count, s.percent_label());
    }

    let years = &options.reconstructed_years;
    println!();
    println!("Number of Reconstructed Bridges Since {}", years.start());
    for (year, n) in yearly_counts(ds, YearField::Reconstructed, *years.start(), *years.end()) {
        println!("  {year}  {n}");
    }
}

fn county(ds: &Dataset, options: &DashboardOptions, counties: &[String]) -> TableData {
    println!("Number of Bridges Built Each Year Per County ({} - Present)", options.built_from);
    for series in county_lines(ds, counties, options.built_from) {
        let pts: Vec<String> = series.points.iter().map(|(y, n)| format!("{y}:{n}")).collect();
        println!("  {}: {}", series.label, pts.join(" "));
    }

    let table = pivot_table(&mean_length_by_county(ds, counties));
    println!();
    print!("{}", render_text(&table));
    table
}

fn map(ds: &Dataset, options: &DashboardOptions, n: usize) -> TableData {
    let sel = top_longest(ds, n);
    let view = map_view(&sel, options.map_zoom);
    println!("Top {} longest bridges (selected {})", n, sel.len());
    println!("View: lon {:.4}, lat {:.4}, zoom {}", view.lon, view.lat, view.zoom);

    let table = top_table(&sel, options.top_table_rows);
    println!();
    println!("Top 10 Info:");
    print!("{}", render_text(&table));
    table
}

fn write_out(table: &TableData, out: Option<String>, default_name: &str) -> Result<()> {
    if let Some(path) = out {
        let written = file::export_table(table, &path, default_name)?;
        println!("Wrote {}", written.display());
    }
    Ok(())
}

/// Left-aligned, space-padded columns.
pub fn render_text(table: &TableData) -> String {
    let cols = table.ncols();
    let mut widths = vec![0usize; cols];
    for row in std::iter::once(&table.headers).chain(table.rows.iter()) {
        for (i, cell) in row.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&table.headers).chain(table.rows.iter()) {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(cols)
            .map(|(i, c)| format!("{:<w$}", c, w = widths[i]))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}
