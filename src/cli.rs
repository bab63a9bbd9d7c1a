/// CLI argument parsing and command handling.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::Options;
use crate::layout::{ColumnSizeGenerator, Grid, RowConfig, Size, layout_rows};
use crate::palette::Palette;

#[derive(Parser)]
#[command(
    name = "modernart",
    version,
    about = "Modern Art UI - a random color palette in your terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Number of cells in the palette
    #[arg(long, default_value_t = 12)]
    pub items: u16,
    /// Cells per row
    #[arg(long, default_value_t = 3)]
    pub columns: u16,
    /// Seed for reproducible colors and layouts
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the cell sizes generated for a row geometry
    Layout {
        #[arg(long)]
        width: u16,
        #[arg(long)]
        height: u16,
        #[arg(short = 'c', long, default_value_t = 3)]
        columns: u16,
        #[arg(short = 'r', long, default_value_t = 1)]
        rows: u16,
        #[arg(long, default_value_t = 0)]
        min_width: u16,
        #[arg(long, default_value_t = 0)]
        min_height: u16,
        #[arg(long)]
        uniform_width: bool,
        #[arg(long)]
        uniform_height: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a random palette as hex colors
    Colors {
        #[arg(long, default_value_t = 12)]
        items: u16,
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Options for the interactive palette.
    pub fn options(&self) -> Result<Options> {
        let grid = Grid::new(self.items, self.columns).context("invalid palette shape")?;
        Ok(Options {
            grid,
            seed: self.seed,
        })
    }
}

/// Execute a non-interactive command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Layout {
            width,
            height,
            columns,
            rows,
            min_width,
            min_height,
            uniform_width,
            uniform_height,
            seed,
        } => {
            let config = RowConfig::new(
                columns,
                width,
                height,
                uniform_width,
                uniform_height,
                min_width,
                min_height,
            );
            let mut generator = ColumnSizeGenerator::new(config, seeded_rng(seed))
                .context("cannot lay out row")?;
            let rows = layout_rows(&mut generator, rows)?;
            print!("{}", format_rows(&rows));
        }
        Command::Colors { items, seed } => {
            let palette = Palette::random(usize::from(items), &mut seeded_rng(seed));
            let white = palette.white_index();
            for (index, color) in palette.colors().iter().enumerate() {
                let marker = if Some(index) == white { " *" } else { "" };
                println!("{:>3}  {}{marker}", index + 1, color.to_hex());
            }
        }
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn format_rows(rows: &[Vec<Size>]) -> String {
    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|size| format!("{}x{}", size.width, size.height))
            .collect();
        let width: u32 = row.iter().map(|size| u32::from(size.width)).sum();
        out.push_str(&format!(
            "row {}: {} (total width {width})\n",
            index + 1,
            cells.join(" ")
        ));
    }
    out
}
