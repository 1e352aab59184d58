// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::Write;
use std::path::PathBuf;

use subtext::app_config::{Config, LogLevel};
use subtext::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for subtext
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subtext - subtitles to plain text
///
/// Quickly convert SRT, VTT, SSA or ASS subtitles into a plain text file.
#[derive(Parser, Debug)]
#[command(name = "subtext")]
#[command(version)]
#[command(about = "Convert SRT, WebVTT and SubStation Alpha subtitles into plain text")]
#[command(long_about = "subtext strips cue numbers, timecodes and markup from subtitle files and
writes the spoken dialogue to <name>.txt next to the input.

EXAMPLES:
    subtext movie.srt                 # Convert a single file
    subtext -8 -1 movie.ass           # Force UTF-8 output and join split sentences
    subtext -n --nosort episode.ssa   # Drop speaker names, keep file order
    subtext -o ./season1/             # Convert every subtitle in a folder, replacing old output
    subtext -c broken.srt             # Copy without processing, to check encodings
    subtext completions bash > subtext.bash")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force output file to use UTF-8 instead of the input encoding
    #[arg(short = '8', long)]
    utf8: bool,

    /// Print the output to the console as it is produced
    #[arg(short, long)]
    screen: bool,

    /// Copy input to <name>-copy.<ext> without processing
    #[arg(short, long)]
    copy: bool,

    /// Replace existing output files
    #[arg(short, long)]
    overwrite: bool,

    /// Join sentences split over several lines or subtitles
    #[arg(short = '1', long)]
    oneliners: bool,

    /// Remove character names where present
    #[arg(short = 'n', long)]
    nonames: bool,

    /// For SubStation Alpha, keep file order instead of sorting by timecode
    #[arg(long)]
    nosort: bool,

    /// Process subdirectories too
    #[arg(short, long)]
    recursive: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() {
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "subtext", &mut std::io::stdout());
        return;
    }

    if let Err(e) = run(cli) {
        error!("Execution stopped because: {:#}", e);
        std::process::exit(1);
    }
}

fn run(options: CommandLineOptions) -> Result<()> {
    // Command line log level applies before the config is read
    if let Some(level) = &options.log_level {
        log::set_max_level(LogLevel::from(level.clone()).to_level_filter());
    }

    let mut config = Config::load(options.config.as_deref())?;

    // Flags switch options on; they never switch off what the config enabled
    config.force_utf8 |= options.utf8;
    config.screen |= options.screen;
    config.overwrite |= options.overwrite;
    config.one_line |= options.oneliners;
    config.suppress_names |= options.nonames;
    config.preserve_order |= options.nosort;
    config.recursive |= options.recursive;
    match &options.log_level {
        Some(level) => config.log_level = level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let input_path = options
        .input_path
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    info!("subtext v{}", env!("CARGO_PKG_VERSION"));
    let controller = Controller::with_config(config)?;

    if input_path.is_file() {
        if options.copy {
            controller.copy(&input_path)?;
        } else {
            controller.run(&input_path)?;
        }
    } else if input_path.is_dir() {
        if options.copy {
            return Err(anyhow!("Copy mode works on a single file, not a directory"));
        }
        let summary = controller.run_folder(&input_path)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} of {} files failed", summary.failed, summary.found));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    info!("Finished!");
    Ok(())
}
