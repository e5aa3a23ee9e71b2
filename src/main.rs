use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

mod csv;
mod log;
mod random;
mod textio;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "bytesum-bench")]
#[command(about = "Byte-sum benchmark log to CSV converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a benchmark log into CSV.
    Csv {
        /// Benchmark log to read.
        log: String,

        /// Output file; a path without an extension is treated as a
        /// directory receiving one `<dataset>.csv` per dataset.
        out: String,
    },

    /// Write a file of uniformly-sampled random integers.
    RandomInts {
        /// Generation spec, as `<count>,<min>,<max>` (bounds inclusive).
        spec: String,

        /// Output file.
        out: String,
    },
}

/// An output path selects per-dataset directory mode by carrying no
/// dot-extension on its final component. The path string alone decides;
/// whether a directory already exists there does not.
fn has_extension(path: &str) -> bool {
    Path::new(path).extension().is_some()
}

fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Csv { log, out } => {
            let table = log::parse_log_file(&log)?;

            if has_extension(&out) {
                // Single combined file: every dataset's rows, first-seen
                // dataset order.
                csv::write_csv(&out, &log::flatten(&table))?;
                println!("Wrote {}", out);
            } else {
                fs::create_dir_all(&out)
                    .with_context(|| format!("create output directory {}", out))?;
                for (graph, rows) in &table {
                    let path = Path::new(&out).join(format!("{graph}.csv"));
                    csv::write_csv(&path, rows)?;
                    println!("Wrote {}", path.display());
                }
            }
        }

        Commands::RandomInts { spec, out } => {
            // The extensionless-path rule turns this into a "-dir" variant
            // no dispatcher arm handles; report it and write nothing.
            if !has_extension(&out) {
                bail!("unrecognized command \"random-ints-dir\"");
            }
            let (n, min, max) = random::parse_spec(&spec)?;
            random::write_random_ints(&out, n, min, max)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli.cmd)
}
