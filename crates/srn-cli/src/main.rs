//! Command-line entry point for the Saturn compiler front-end.
//!
//! Everything downstream of namespace loading — the JIT engine, MLIR
//! lowering — lives outside this workspace, so `run` "executes" a namespace
//! by printing its analyzed forms rather than invoking them.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use srn_location::LocationRange;
use srn_options::{JitError, JitHandle, Options, SymbolAddress};
use srn_source::SourceManager;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "saturn", version, about, long_about = None)]
struct Cli {
    /// Raise the tracing filter from `warn` to `debug`.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Delegate to the external C front-end. Not implemented by this core.
    Cc {
        /// Source file to hand to the C front-end.
        path: PathBuf,
    },
    /// Load, parse, and analyze a namespace file, printing its forms.
    Run {
        /// Namespace file to compile and run.
        path: PathBuf,
    },
}

/// A JIT handle with nowhere to load modules: this workspace stops at the
/// analyzed namespace, so every mutating method is an accepted no-op.
struct NullJit(Options);

impl JitHandle for NullJit {
    fn options(&self) -> &Options {
        &self.0
    }

    fn load_module(&mut self, _name: &str, _ir_bytes: &[u8]) -> Result<(), JitError> {
        Ok(())
    }

    fn lookup(&self, _symbol: &str) -> Option<SymbolAddress> {
        None
    }

    fn invoke_packed(&self, _symbol: &str, _args: &[u64]) -> Result<u64, JitError> {
        Ok(0)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Cc { path } => cc(&path),
        Command::Run { path } => run(&path, cli.verbose),
    }
}

fn cc(path: &Path) -> Result<()> {
    Err(anyhow!(
        "cc: {} was not compiled — the external C front-end is a collaborator this core does not implement",
        path.display()
    ))
}

fn run(path: &Path, verbose: bool) -> Result<()> {
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .ok_or_else(|| anyhow!("{}: path has no file stem to use as a namespace name", path.display()))?
        .to_string_lossy()
        .into_owned();

    let mut manager = SourceManager::new();
    manager.set_load_paths(vec![root.to_path_buf()]);

    let options = Options { verbose, ..Options::default() };
    let jit = NullJit(options);

    let namespace = manager
        .read_namespace(&jit, &stem, LocationRange::unknown(&stem))
        .with_context(|| format!("loading namespace {stem}"))?;

    tracing::info!(namespace = namespace.name(), forms = namespace.tree().len(), "run: loaded namespace");

    for form in namespace.tree() {
        println!("{form:?}");
    }

    Ok(())
}
