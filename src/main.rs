mod cli;
mod config;

use cli::Args;
use melange_vex::prelude::*;
use melange_vex::shared::error::ExitCode;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config file: explicit path, else auto-discovery in the current directory
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let vex_config = config::resolve_vex_config(&args, config_file);

    // Create adapters (Dependency Injection)
    let configuration_reader = FileSystemReader::new();
    let sbom_reader = FileSystemReader::new();
    let merger = OpenVexMerger::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case =
        GenerateVexUseCase::new(configuration_reader, sbom_reader, merger, progress_reporter);

    // Create request
    let request = VexRequest::builder()
        .configuration_paths(args.configurations)
        .sbom_path(args.sbom)
        .config(vex_config)
        .build()?;

    // Execute use case
    let response = use_case.execute(request)?;

    let formatted_output = OpenVexFormatter::new().format(&response.document)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&formatted_output)?;

    Ok(())
}
