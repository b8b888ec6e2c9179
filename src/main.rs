use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use log::{info, warn};
use ploot::MarkerKind;
use ploot::core::config::{self, CliOverrides, ConfigSource, ResolvedConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "ploot",
    version,
    about = "Plot a stream of numbers piped from stdin as a live, scrolling chart. \
             Press q or Ctrl+C to quit."
)]
struct Args {
    /// Number of samples in the window (default: terminal width)
    #[arg(short, long)]
    width: Option<usize>,

    /// Upper bound of the y axis (default: largest sample in the window)
    #[arg(short = 'M', long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Lower bound of the y axis (default: smallest sample in the window)
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Chart title
    #[arg(short, long)]
    title: Option<String>,

    /// Glyphs used to draw the line
    #[arg(long, value_enum)]
    marker: Option<MarkerKind>,

    /// Print a shell completion script to stdout and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            title: self.title.clone(),
            width: self.width,
            min: self.min,
            max: self.max,
            marker: self.marker,
        }
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    generate(shell, &mut Args::command(), "ploot", out);
}

/// Creates the log file, and its directory if needed.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Initialize the file logger. The terminal belongs to the chart, so logs go
/// to a file or nowhere.
fn init_logging(config: &ResolvedConfig) {
    if config.log_level == LevelFilter::Off {
        return;
    }
    let Some(path) = &config.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match open_log_file(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => eprintln!("ploot: cannot open log file {}: {e}", path.display()),
    }
}

/// Log what happened while loading config, now that the logger exists.
fn report_config(source: &ConfigSource, config: &ResolvedConfig) {
    if source.is_degraded() {
        warn!("{}", source);
    } else {
        info!("{}", source);
    }
    for diagnostic in &config.diagnostics {
        warn!("{}", diagnostic);
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        write_completions(shell, &mut io::stdout());
        return Ok(());
    }

    let is_pipe = ploot::ingest::stdin_is_pipe().inspect_err(|e| {
        eprintln!("ploot: cannot inspect standard input: {e}");
    })?;
    if !is_pipe {
        println!("The command is intended to work with pipes.");
        println!("Usage: seq 10 | ploot");
        return Ok(());
    }

    let (file_config, source) = config::load_config().map_err(|e| {
        eprintln!("ploot: {e}");
        io::Error::other(e)
    })?;
    let config = config::resolve(&file_config, &args.overrides());

    init_logging(&config);
    report_config(&source, &config);
    info!("Ploot starting up with config: {:?}", config);

    ploot::tui::run(config).await
}
