#![forbid(unsafe_code)]

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use md2html::batch::{convert_folder, ConversionOutcome};
use md2html::paths::resolve_absolute;

/// Config for the converter (as well as the CLI parser itself)
#[derive(Parser, Debug)]
#[command(
	version,
	about = "Convert a folder of Markdown documents to HTML with pandoc",
	long_about = None,
)]
struct Cli {
	#[arg(
		value_name = "SOURCE",
		help = "Folder containing .md files (default: current directory)"
	)]
	source: Option<PathBuf>,

	#[arg(
		value_name = "DESTINATION",
		help = "Output folder (default: the source folder, converting in place)"
	)]
	destination: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
	// Parse command line arguments first: --help/--version exit here,
	// before anything touches the filesystem
	let cli = Cli::parse();

	// Load environment variables
	_ = dotenvy::dotenv();

	// Initialize logger
	pretty_env_logger::init();

	// Run the batch
	match run(&cli).await {
		Ok(0) => ExitCode::SUCCESS,
		Ok(_) => ExitCode::FAILURE,
		Err(e) => {
			eprintln!("fatal: {e}");
			ExitCode::FAILURE
		}
	}
}

/// Run a batch conversion with a given config, returning the failure count.
async fn run(cli: &Cli) -> Result<usize, Box<dyn Error>> {
	// Resolve user-supplied paths before any filesystem work
	let source = match &cli.source {
		Some(path) => resolve_absolute(path)?,
		None => env::current_dir()?,
	};
	let destination = match &cli.destination {
		Some(path) => resolve_absolute(path)?,
		None => source.clone(),
	};

	println!("Converting Markdown files to HTML...");
	println!("Source folder: {}", source.display());
	println!("Destination folder: {}", destination.display());

	let outcomes = convert_folder(&source, &destination).await?;

	if outcomes.is_empty() {
		println!("No markdown files found in the source folder.");
		return Ok(0);
	}

	println!("Processing {} file(s):", outcomes.len());

	Ok(report(&outcomes))
}

/// Print one line per outcome and a final tally, returning the failure count.
fn report(outcomes: &[ConversionOutcome]) -> usize {
	let mut succeeded = 0;
	let mut failed = 0;

	for outcome in outcomes {
		match &outcome.error {
			None => {
				println!("ok     {}", outcome.source.display());
				succeeded += 1;
			}
			Some(error) => {
				println!("failed {}", outcome.source.display());
				println!("       {error}");
				failed += 1;
			}
		}
	}

	println!("Conversion complete: {succeeded} succeeded, {failed} failed");

	failed
}
