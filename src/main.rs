//! parls binary
//!
//! Lists one directory, printing files plainly and everything else styled.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use parls::render::{self, Style};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "parls")]
#[command(about = "List a directory, fetching entry metadata concurrently")]
#[command(version)]
struct Args {
    /// Directory to list (defaults to the current directory)
    directory: Option<PathBuf>,

    /// Worker threads for metadata lookups (defaults to the CPU count)
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Classify symlinks by the type of their target
    #[arg(short = 'L', long)]
    dereference: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let dir = match args.directory {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("parls: cannot determine current directory: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut builder = parls::list().dir(dir).follow_links(args.dereference);
    if let Some(n) = args.threads {
        builder = builder.threads(n);
    }

    let listing = match builder.run() {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("parls: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stats = &listing.stats;
    log::info!(
        "{} files, {} dirs, {} other, {} failed in {:.3}s",
        stats.files,
        stats.dirs,
        stats.others,
        stats.failed,
        stats.duration.as_secs_f64()
    );

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match render::write_listing(&listing, Style::detect(), &mut out, &mut err) {
        Ok(()) => ExitCode::SUCCESS,
        // Closed pipe on the reader side, e.g. `parls | head`
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("failed to write listing: {e}");
            ExitCode::FAILURE
        }
    }
}
