use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bilevel::models::{resolve_algorithm, resolve_mode, AppConfig, CONFIG_ENV};
use bilevel::services::{run_interactive, DitherJob};
use bilevel_dither::DitherAlgorithm;

#[derive(Parser)]
#[command(name = "bilevel")]
#[command(about = "Bilevel - error diffusion dithering for JPEG and PNG images")]
struct Cli {
    /// YAML config file (defaults to $BILEVEL_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither an image file to PNG
    Dither {
        /// JPEG or PNG input file
        input: PathBuf,

        /// Method: atkinson, floyd_steinberg, shtuki, sierra_lite or 1-4
        #[arg(short, long)]
        method: Option<String>,

        /// Mode: color (1) or mono (2)
        #[arg(short = 'M', long)]
        mode: Option<String>,

        /// Output PNG path (default: <output-dir>/output_<method>_<mode>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for the default output name
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Dither colour channels in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Prompt for file, mode and method on the console
    Interactive,
    /// List the available diffusion kernels
    Kernels,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bilevel=info,bilevel_dither=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Dither {
            input,
            method,
            mode,
            output,
            output_dir,
            parallel,
        }) => run_dither_command(
            &config,
            &input,
            method.as_deref(),
            mode.as_deref(),
            output,
            output_dir,
            parallel,
        ),
        Some(Commands::Kernels) => {
            run_kernels_command();
            Ok(())
        }
        Some(Commands::Interactive) | None => run_interactive_command(&config),
    }
}

/// Dither one file non-interactively
fn run_dither_command(
    config: &AppConfig,
    input: &Path,
    method: Option<&str>,
    mode: Option<&str>,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    parallel: bool,
) -> anyhow::Result<()> {
    let algorithm = method.map_or_else(|| config.method(), resolve_algorithm);
    let mode = mode.map_or_else(|| config.mode(), resolve_mode);

    let job = DitherJob {
        output_dir: output_dir.unwrap_or_else(|| config.output_dir.clone()),
        output,
        parallel: parallel || config.parallel_channels,
        ..DitherJob::new(input, algorithm, mode)
    };

    let written = job.run()?;
    println!("Dithered image saved as {}", written.display());
    Ok(())
}

/// Run the console prompt flow
fn run_interactive_command(config: &AppConfig) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    run_interactive(&mut input, &mut out, config)?;
    Ok(())
}

/// Print the kernel catalog
fn run_kernels_command() {
    println!("{:<16} {:>7} {:>12}", "NAME", "DIVISOR", "PROPAGATION");
    for algorithm in DitherAlgorithm::ALL {
        let kernel = algorithm.kernel();
        println!(
            "{:<16} {:>7} {:>11.1}%",
            kernel.name,
            kernel.divisor,
            kernel.propagation() * 100.0
        );
        for (dy, row) in kernel.weights.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, w)| {
                    let mark = if dy == 0 && col == kernel.anchor { '*' } else { ' ' };
                    format!("{mark}{w}")
                })
                .collect();
            println!("    [{}]", cells.join(" "));
        }
    }
}
