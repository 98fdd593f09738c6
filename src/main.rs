mod session;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use baltree_config::{Config, OrderPolicy};
use baltree_core::{
    Comparator, Lexicographic, Numbers, NumbersReversed, Strings, StringsReversed, Tree,
};
use baltree_render::TreePrinter;
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use session::{ScriptValue, Session};

#[derive(Debug, Parser)]
#[command(
    name = "baltree",
    version,
    about = "Build and query red-black trees from the command line"
)]
struct Cli {
    /// Configuration file, instead of the usual search paths
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ordering policy, overriding the configuration
    #[arg(short, long)]
    order: Option<OrderPolicy>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Insert values and draw the resulting tree
    Show {
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Print values in tree order
    Sort {
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Run a script of operations, one per line, from a file or stdin
    Run { script: Option<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::load()?,
    };
    if let Some(order) = cli.order {
        config.tree.order = order;
    }

    initialize_logging(log_level(cli.verbose, config.logging.level))?;
    info!("ordering values by {}", config.tree.order);

    let driver = Driver {
        printer: TreePrinter::from_config(&config.render),
        validate: config.tree.validate_after_each,
        command: &cli.command,
    };

    match config.tree.order {
        OrderPolicy::Lexicographic => driver.drive::<String, _>(Lexicographic),
        OrderPolicy::Numbers => driver.drive::<f64, _>(Numbers),
        OrderPolicy::NumbersReversed => driver.drive::<f64, _>(NumbersReversed),
        OrderPolicy::Strings => driver.drive::<String, _>(Strings),
        OrderPolicy::StringsReversed => driver.drive::<String, _>(StringsReversed),
    }
}

/// Everything a session needs except the value type and its ordering.
struct Driver<'a> {
    printer: TreePrinter,
    validate: bool,
    command: &'a Command,
}

impl Driver<'_> {
    fn drive<T: ScriptValue, C: Comparator<T>>(self, comparator: C) -> Result<()> {
        let tree: Tree<T, C> = Tree::with_comparator(comparator);
        let mut session = Session::new(tree, self.printer).validate_after_each(self.validate);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Command::Show { values } => {
                session.insert_all(values.as_slice())?;
                write!(out, "{}", session.render())?;
            }
            Command::Sort { values } => {
                session.insert_all(values.as_slice())?;
                writeln!(out, "{}", session.listing())?;
            }
            Command::Run { script: Some(path) } => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                session.run_script(BufReader::new(file), &mut out)?;
            }
            Command::Run { script: None } => {
                session.run_script(io::stdin().lock(), &mut out)?;
            }
        }

        info!("finished with {} values", session.tree().len());
        Ok(())
    }
}

fn log_level(verbose: u8, configured: LevelFilter) -> LevelFilter {
    let requested = match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    configured.max(requested)
}

fn initialize_logging(level: LevelFilter) -> Result<()> {
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logging")
}
