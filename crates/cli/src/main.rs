#![deny(unsafe_code)]
//! CLI binary for pixel-filter.
//!
//! Subcommands:
//! - `apply` — load an image, run one filter over it, write the result
//! - `list` — print available filters
//!
//! Logging goes to stderr and follows `RUST_LOG`.

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use pixel_filter_core::Filter;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pixel-filter", about = "Apply an image filter to a BMP or PNG file")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter and codec activity at debug level (ignored when RUST_LOG is set).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply exactly one filter and write the result.
    Apply {
        #[command(flatten)]
        selection: Selection,

        /// Input image (.bmp, or any raster format when built with `png`).
        input: PathBuf,

        /// Output image; the extension picks the encoder.
        output: PathBuf,
    },
    /// List available filters.
    List,
}

/// Filter choice: a name or one of the single-letter flags.
#[derive(Args)]
struct Selection {
    /// Filter name (grayscale, sepia, reflect, blur).
    #[arg(short, long)]
    filter: Option<String>,

    /// Grayscale.
    #[arg(short = 'g')]
    grayscale: bool,

    /// Sepia.
    #[arg(short = 's')]
    sepia: bool,

    /// Reflect horizontally.
    #[arg(short = 'r')]
    reflect: bool,

    /// Box blur.
    #[arg(short = 'b')]
    blur: bool,
}

impl Selection {
    /// Resolves the selection to a single filter.
    ///
    /// Returns `CliError::Selection` when nothing or more than one filter is
    /// selected, and `CliError::Filter` for an unknown `--filter` name.
    fn resolve(&self) -> Result<Filter, CliError> {
        let mut chosen = [
            (self.grayscale, 'g'),
            (self.sepia, 's'),
            (self.reflect, 'r'),
            (self.blur, 'b'),
        ]
        .into_iter()
        .filter(|&(set, _)| set)
        .map(|(_, flag)| Filter::from_flag(flag))
        .collect::<Result<Vec<_>, _>>()?;
        if let Some(name) = &self.filter {
            chosen.push(Filter::from_name(name)?);
        }
        match chosen.as_slice() {
            [one] => Ok(*one),
            [] => Err(CliError::Selection(
                "no filter given; use -g, -s, -r, -b or --filter <NAME>".into(),
            )),
            _ => Err(CliError::Selection("only one filter allowed".into())),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "pixel_filter=debug"
    } else {
        "pixel_filter=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let filters = Filter::list_names()
                .iter()
                .map(|name| Filter::from_name(name))
                .collect::<Result<Vec<_>, _>>()?;
            if cli.json {
                let entries: Vec<_> = filters
                    .iter()
                    .map(|f| serde_json::json!({"name": f, "flag": format!("-{}", f.flag())}))
                    .collect();
                let info = serde_json::json!({ "filters": entries });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Filters:");
                for f in filters {
                    println!("  -{}  {f}", f.flag());
                }
            }
        }
        Command::Apply {
            selection,
            input,
            output,
        } => {
            let filter = selection.resolve()?;

            let mut doc = pixel_filter_io::open(&input)?;
            let (width, height) = (doc.image().width(), doc.image().height());
            filter.apply(doc.image_mut());
            pixel_filter_io::save(&doc, &output)?;

            info!(%filter, width, height, output = %output.display(), "filter applied");
            if cli.json {
                let info = serde_json::json!({
                    "filter": filter,
                    "width": width,
                    "height": height,
                    "input": input.display().to_string(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "applied {filter} ({width}x{height}) {} -> {}",
                    input.display(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            eprintln!("{}", serde_json::to_string_pretty(&e.to_json()).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
