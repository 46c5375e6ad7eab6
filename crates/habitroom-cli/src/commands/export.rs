use clap::Args;
use habitroom_core::{write_csv, Config};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::open_registry;

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (config `export.file_name` if omitted)
    #[arg(long, short, conflicts_with = "stdout")]
    output: Option<PathBuf>,
    /// Write the CSV to stdout instead of a file
    #[arg(long)]
    stdout: bool,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let registry = open_registry(&config)?;

    if args.stdout {
        write_csv(registry.habits(), std::io::stdout().lock())?;
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.export.file_name));
    let file = File::create(&path)?;
    write_csv(registry.habits(), BufWriter::new(file))?;

    let rows: usize = registry.habits().iter().map(|h| h.entries().len()).sum();
    println!("exported {rows} entries to {}", path.display());
    Ok(())
}
