use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use docsimp_core::consts::COLUMN_OVERLAP_THRESHOLD;
use docsimp_core::simplify::{SimplifyConfig, batch};

#[derive(Parser)]
#[command(name = "simplify")]
#[command(about = "Flatten layout-analysis page annotations into reading order")]
struct Args {
    #[arg(help = "Input page JSON file, or a directory of page JSON files")]
    input: PathBuf,

    #[arg(
        short,
        long,
        help = "Output file path (single-file mode; defaults to <stem>_processed.json)"
    )]
    output: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = COLUMN_OVERLAP_THRESHOLD,
        help = "Horizontal overlap fraction for column assignment"
    )]
    threshold: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = SimplifyConfig {
        column_overlap_threshold: args.threshold,
        ..Default::default()
    };

    if args.input.is_dir() {
        let outcome = batch::simplify_dir(&args.input, &config)?;
        info!(
            "Processing complete: {} file(s) simplified, {} failed",
            outcome.processed, outcome.failed
        );
        if outcome.failed > 0 {
            return Err(format!("{} file(s) failed to simplify", outcome.failed).into());
        }
    } else {
        let out = batch::simplify_file(&args.input, args.output.as_deref(), &config)?;
        info!("Processing complete: wrote {}", out.display());
    }

    Ok(())
}
