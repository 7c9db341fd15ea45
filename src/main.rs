use babytracker::application::{init, ConfigService, HistoryService, LogService};
use babytracker::cli::{format_entries, Cli, Commands, Listing};
use babytracker::domain::{Category, DiaperEntry, FeedEntry, GrowthEntry, SleepEntry};
use babytracker::error::{Result, TrackerError};
use babytracker::infrastructure::{Config, ConfigFile, StoreHandle};
use chrono::Local;
use clap::Parser;
use log::{debug, LevelFilter};
use std::path::PathBuf;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr at warn (debug with -v); RUST_LOG takes precedence
fn setup_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("babytracker - Log feeds, sleep, growth and diaper changes");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            let config_path = config_path()?;
            let path = match path.or(cli.data_dir) {
                Some(path) => path,
                None => Config::load_from(&config_path)?.data_dir,
            };
            let handle = StoreHandle::new();
            let root = init(&handle, &path, &config_path)?;
            println!("Initialized data directory at {}", root.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(config_path()?);

            if list {
                let config = service.list()?;
                println!("data_dir = {}", config.data_dir.display());
                println!("app_title = {}", config.app_title);
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: babytracker config [--list | <key> [<value>]]");
                println!("Valid keys: data_dir, app_title");
            }
            Ok(())
        }
        Commands::Where => {
            let handle = open_handle(cli.data_dir)?;
            println!("{}", handle.current_root()?.display());
            Ok(())
        }
        Commands::Feed(args) => {
            let handle = open_handle(cli.data_dir)?;
            let now = Local::now();
            let entry = args.to_entry(now.date_naive(), now.fixed_offset())?;
            let saved = LogService::new(&handle).log_feed(entry)?;
            println!("Logged feed #{}", saved.id);
            Ok(())
        }
        Commands::Sleep(args) => {
            let handle = open_handle(cli.data_dir)?;
            let now = Local::now();
            let entry = args.to_entry(now.date_naive(), now.fixed_offset())?;
            let saved = LogService::new(&handle).log_sleep(entry)?;
            println!("Logged sleep #{} ({} min)", saved.id, saved.duration);
            Ok(())
        }
        Commands::Growth(args) => {
            let handle = open_handle(cli.data_dir)?;
            let entry = args.to_entry(Local::now().date_naive())?;
            let saved = LogService::new(&handle).log_growth(entry)?;
            println!("Logged growth #{}", saved.id);
            Ok(())
        }
        Commands::Diaper(args) => {
            let handle = open_handle(cli.data_dir)?;
            let now = Local::now();
            let entry = args.to_entry(now.date_naive(), now.fixed_offset())?;
            let saved = LogService::new(&handle).log_diaper(entry)?;
            println!("Logged diaper change #{}", saved.id);
            Ok(())
        }
        Commands::List { category, json } => {
            let handle = open_handle(cli.data_dir)?;
            let history = HistoryService::new(&handle);
            match parse_category(&category)? {
                Category::Feed => print_list::<FeedEntry>(&history, json),
                Category::Sleep => print_list::<SleepEntry>(&history, json),
                Category::Growth => print_list::<GrowthEntry>(&history, json),
                Category::Diaper => print_list::<DiaperEntry>(&history, json),
            }
        }
        Commands::Show { category, id } => {
            let handle = open_handle(cli.data_dir)?;
            let history = HistoryService::new(&handle);
            match parse_category(&category)? {
                Category::Feed => print_one::<FeedEntry>(&history, id),
                Category::Sleep => print_one::<SleepEntry>(&history, id),
                Category::Growth => print_one::<GrowthEntry>(&history, id),
                Category::Diaper => print_one::<DiaperEntry>(&history, id),
            }
        }
    }
}

fn config_path() -> Result<PathBuf> {
    let path = ConfigFile::default_path()?;
    debug!("Using config file {}", path.display());
    Ok(path)
}

/// Store handle rooted at `--data-dir`, else at the configured directory.
///
/// The config file is only consulted when no `--data-dir` was given.
fn open_handle(data_dir: Option<PathBuf>) -> Result<StoreHandle> {
    let root = match data_dir {
        Some(dir) => dir,
        None => Config::load_from(&config_path()?)?.data_dir,
    };
    debug!("Data directory {}", root.display());
    Ok(StoreHandle::with_default_root(root))
}

fn parse_category(input: &str) -> Result<Category> {
    Category::from_str(input).map_err(TrackerError::InvalidValue)
}

fn print_list<R: Listing>(history: &HistoryService, json: bool) -> Result<()> {
    let entries = history.list::<R>()?;
    if json {
        println!("{}", to_json(&entries)?);
    } else {
        print!("{}", format_entries(&entries));
        if entries.is_empty() {
            println!();
        }
    }
    Ok(())
}

fn print_one<R: Listing>(history: &HistoryService, id: u64) -> Result<()> {
    let entry = history.find::<R>(id)?;
    println!("{}", to_json(&entry)?);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).map_err(std::io::Error::from)?)
}
