//! `lexi` command-line tool for translation catalogs.
//!
//! `check` validates catalog files, `coverage` compares locales against the
//! default one and `eval` renders a single key.

mod commands;
mod output;

use std::io::stderr;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{run_check, run_coverage, run_eval, CheckArgs, CoverageArgs, EvalArgs};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lexi", version, about = "lexi translation catalog tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log more; repeat for trace output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    /// Follow the terminal, `NO_COLOR` and `FORCE_COLOR`
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// The forced color setting, or `None` to detect it.
    fn forced(self) -> Option<bool> {
        match self {
            ColorWhen::Auto => None,
            ColorWhen::Always => Some(true),
            ColorWhen::Never => Some(false),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check catalog files for errors and suspicious entries
    Check(CheckArgs),
    /// Report translation coverage against the default locale
    Coverage(CoverageArgs),
    /// Render a key from a catalog
    Eval(EvalArgs),
}

impl Cli {
    /// Default log level when `RUST_LOG` is unset.
    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

/// Configure colors, logging and error reports for this run.
fn init(cli: &Cli) -> miette::Result<()> {
    let forced = cli.color.forced();
    if let Some(enabled) = forced {
        owo_colors::set_override(enabled);
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .try_init();

    miette::set_hook(Box::new(move |_| {
        let mut opts = miette::MietteHandlerOpts::new()
            .terminal_links(true)
            .unicode(true)
            .context_lines(2);
        if let Some(enabled) = forced {
            opts = opts.color(enabled);
        }
        Box::new(opts.build())
    }))?;
    Ok(())
}

fn run(command: Commands) -> miette::Result<i32> {
    match command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Eval(args) => run_eval(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match init(&cli).and_then(|()| run(cli.command)) {
        Ok(code) => code,
        Err(report) => {
            eprintln!("{report:?}");
            exitcode::SOFTWARE
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
