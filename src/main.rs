use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bundle_restrict::config::{self, PartialOptions};
use bundle_restrict::error::Error;
use bundle_restrict::logger::{Level, Logger};
use bundle_restrict::{report, restrict, stats};

#[derive(Parser)]
#[command(
    name = "bundle-restrict",
    version,
    about = "Assert that restricted modules are absent from a bundle chunk"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TraceArgs {
    /// Maximum depth of the printed import trace [default: 3]
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum number of importers shown per module [default: 3]
    #[arg(long)]
    max_width: Option<usize>,

    /// Width of each indentation level [default: 2]
    #[arg(long)]
    indent: Option<usize>,

    /// Report verbosity [default: info]
    #[arg(long, value_enum)]
    log: Option<Level>,

    /// Path prefix shown as `.` in traces (defaults to the current directory)
    #[arg(long)]
    root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fail if any restricted module is bundled in the chunk
    Check {
        /// Stats dump produced by the build
        stats: PathBuf,

        /// Chunk name or emitted file name to examine
        #[arg(long)]
        chunk: Option<String>,

        /// Restricted module request (repeatable)
        #[arg(long = "module", short = 'm')]
        modules: Vec<String>,

        /// TOML file with default options
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        trace: TraceArgs,
    },

    /// Show why a module is part of the build
    Explain {
        /// Stats dump produced by the build
        stats: PathBuf,

        /// Module identity (resolved path) or request
        module: String,

        #[command(flatten)]
        trace: TraceArgs,
    },
}

fn path_prefix(root: Option<PathBuf>) -> String {
    root.or_else(|| std::env::current_dir().ok())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Commands::Check {
            stats,
            chunk,
            modules,
            config,
            trace,
        } => {
            let file = match config {
                Some(path) => PartialOptions::load(&path)?,
                None => PartialOptions::default(),
            };
            let flags = PartialOptions {
                chunk,
                modules: (!modules.is_empty()).then_some(modules),
                max_depth: trace.max_depth,
                max_width: trace.max_width,
                indent: trace.indent,
                log: trace.log,
            };
            let mut opts = flags.or(file).resolve()?;
            opts.prefix = path_prefix(trace.root);
            tracing::debug!(?opts, "resolved options");

            let graph = stats::load_stats(&stats)?;
            let mut logger = Logger::console(opts.log);
            restrict::check(&graph, &opts, &mut logger)?.into_result()?;
            Ok(())
        }
        Commands::Explain {
            stats,
            module,
            trace,
        } => {
            let bounds = config::resolve_bounds(trace.max_depth, trace.max_width)?;
            let graph = stats::load_stats(&stats)?;
            let id = graph
                .find_module(&module)
                .ok_or_else(|| Error::UnknownModule(module.clone()))?;
            let mut logger = Logger::console(trace.log.unwrap_or_default());
            report::print_reasons(
                &graph,
                id,
                &format!("Module `{module}' included because of"),
                bounds,
                trace.indent.unwrap_or(config::DEFAULT_INDENT),
                &path_prefix(trace.root),
                &mut logger,
            )
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}
