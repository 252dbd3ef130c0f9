//! The `stackshot stack` command: average a directory of images.

use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use stackshot_core::{output, Config, MatchMode, StackReport, Stacker};

/// Arguments for the `stack` command.
#[derive(Args, Debug)]
pub struct StackArgs {
    /// Directory of images to average
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output image path (defaults to the configured path, result.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Marker matched against file names (defaults to ".png")
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Match the marker as an exact file extension instead of a
    /// case-sensitive substring
    #[arg(long)]
    pub exact_extension: bool,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Execute the stack command.
pub fn execute(args: StackArgs, mut config: Config) -> anyhow::Result<()> {
    apply_overrides(&args, &mut config);
    let output_path = args.output.clone().unwrap_or_else(|| config.output_path());

    let stacker = Stacker::new(&config);
    let files = stacker.discover(&args.input)?;
    tracing::info!("Found {} image(s) to average", files.len());

    let start_time = std::time::Instant::now();
    let progress = create_progress_bar(files.len() as u64);
    let stacked = stacker.stack_files(&args.input, files, |done, total| {
        if progress.is_hidden() {
            // Plain "<index>/<total>" lines when there is no terminal
            println!("{}/{}", done, total);
        } else {
            progress.set_position(done as u64);
        }
    })?;
    progress.finish_and_clear();

    output::write_image(&stacked.image, &output_path)?;

    let report = StackReport::new(&stacked, output_path.clone());
    if let Some(report_path) = &args.report {
        let file = File::create(report_path)?;
        output::write_report(BufWriter::new(file), &report)?;
        tracing::info!("Report written to {:?}", report_path);
    }

    print_summary(&report, start_time.elapsed());
    Ok(())
}

/// Fold CLI flags into the loaded configuration.
fn apply_overrides(args: &StackArgs, config: &mut Config) {
    if let Some(marker) = &args.marker {
        config.discovery.marker = marker.clone();
    }
    if args.exact_extension {
        config.discovery.mode = MatchMode::Extension;
    }
    if args.recursive {
        config.discovery.recursive = true;
    }
}

/// Create a progress bar rendering "<pos>/<len>".
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

/// Print a formatted summary after a stacking run.
fn print_summary(report: &StackReport, elapsed: std::time::Duration) {
    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Images:       {:>8}", report.images);
    eprintln!(
        "    Dimensions:   {:>8}",
        format!("{}x{}", report.width, report.height)
    );
    eprintln!("    Duration:     {:>7.1}s", elapsed.as_secs_f64());
    eprintln!("    Output:       {}", report.output.display());
    eprintln!("  ====================================");
}
