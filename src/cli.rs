use clap::Parser;
use melange_vex::shared::error::ExitCode;
use std::path::PathBuf;
use std::process;

/// Default distribution namespace of generated product identifiers
pub const DEFAULT_DISTRO: &str = "wolfi";

/// Generate OpenVEX documents from melange package configurations
#[derive(Parser, Debug)]
#[command(name = "melange-vex")]
#[command(version)]
#[command(
    about = "Generate OpenVEX documents from melange package configurations",
    long_about = None
)]
pub struct Args {
    /// Package configuration files (melange YAML)
    #[arg(value_name = "CONFIG.yaml", required = true)]
    pub configurations: Vec<PathBuf>,

    /// Path to a melange-vex.config.yml file (defaults to auto-discovery in the current directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Distribution namespace of the generated package URLs [default: wolfi]
    #[arg(long)]
    pub distro: Option<String>,

    /// Author recorded in the VEX document
    #[arg(long)]
    pub author: Option<String>,

    /// Role of the author recorded in the VEX document
    #[arg(long)]
    pub author_role: Option<String>,

    /// SPDX JSON SBOM whose package URLs scope the products
    #[arg(long, value_name = "SPDX.json")]
    pub sbom: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parses the process arguments, exiting with `ExitCode::InvalidArguments`
    /// on usage errors. `--help` and `--version` exit with success.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(e) if e.use_stderr() => {
                // Usage errors keep clap's rendering, only the exit code is ours
                let _ = e.print();
                process::exit(ExitCode::InvalidArguments.as_i32());
            }
            Err(e) => e.exit(),
        }
    }
}
