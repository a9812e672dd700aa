use anyhow::Result;
use clap::{Parser, Subcommand};

use dochunt::cli::{handle_check_command, handle_range_command, CheckArgs, RangeArgs};
use dochunt::config::{paths::DocHuntPaths, settings::Settings};
use dochunt::display::format_check_error;
use dochunt::logging::{init_logging, LogTarget};

#[derive(Parser)]
#[command(
    name = "dochunt",
    version,
    about = "Find missing daily documents in a date range",
    long_about = "DocHunt lists the days in a date range that still need a document. \
                  Weekday labels count forward from the weekday you say the range \
                  starts on, and weekend-labelled days can be left out."
)]
struct Cli {
    /// Log filter when DOCHUNT_LOG is unset (e.g. "info", "dochunt=debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive form (default)
    #[command(alias = "ui")]
    Tui,

    /// Check which dates are missing
    Check(CheckArgs),

    /// List the dates a range expands to
    Range(RangeArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DocHuntPaths::new()?;
    let command = cli.command.unwrap_or(Commands::Tui);

    // init replaces whatever is on disk, including an unreadable file
    let settings = match command {
        Commands::Init => Settings::default(),
        _ => Settings::load_or_create(&paths)?,
    };

    let log_filter = cli
        .log_level
        .clone()
        .unwrap_or_else(|| settings.log_level.clone());
    let log_target = match command {
        Commands::Tui => LogTarget::File(paths.log_file()),
        _ => LogTarget::Stderr,
    };
    init_logging(&log_filter, log_target)?;

    match command {
        Commands::Tui => {
            dochunt::tui::run_tui(&settings)?;
        }
        Commands::Check(args) => {
            if let Err(e) = handle_check_command(&settings, args) {
                eprintln!("{}", format_check_error(&e));
                std::process::exit(1);
            }
        }
        Commands::Range(args) => {
            if let Err(e) = handle_range_command(&settings, args) {
                eprintln!("{}", format_check_error(&e));
                std::process::exit(1);
            }
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("DocHunt Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Year:            {}", settings.year);
            println!("  Start / end:     {} / {}", settings.default_start, settings.default_end);
            println!("  Start weekday:   {}", settings.default_weekday);
            println!("  Skip weekends:   {}", settings.skip_weekends);
            println!("  Held dates:      {}", settings.default_held);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}
