use std::path::PathBuf;

use anyhow::{Context, Result};
use cd_core::{dedup_in_place, load_csv_path};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cd_dedup")]
#[command(about = "Remove exact-duplicate coordinates from a CSV point list")]
struct Cli {
    /// CSV input with one `x,y` coordinate per row.
    #[arg(long, default_value = "city.csv")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut points = load_csv_path(&cli.input)
        .with_context(|| format!("loading coordinates from {}", cli.input.display()))?;

    for removal in dedup_in_place(&mut points) {
        println!("{}", removal.point);
    }

    Ok(())
}
