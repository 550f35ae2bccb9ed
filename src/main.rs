use std::path::PathBuf;

use addressbook::config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so they never mix with the bot's replies.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut import_path: Option<PathBuf> = None;
    let mut export_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => match args.next() {
                Some(path) => config.db_path = PathBuf::from(path),
                None => {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            },
            "--import" => {
                import_path = args.next().map(PathBuf::from);
                if import_path.is_none() {
                    eprintln!("Error: --import requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--export" => {
                export_path = args.next().map(PathBuf::from);
                if export_path.is_none() {
                    eprintln!("Error: --export requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Address book assistant");
                println!();
                println!("Usage: addressbook [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>      Database file path (default: {})", addressbook::config::DEFAULT_DB_PATH);
                println!("  --import <JSON_PATH>   Import contacts from a JSON file into a new database");
                println!("  --export <JSON_PATH>   Export contacts to a JSON file");
                println!("  -h, --help             Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = &config.db_path;

    if let Some(json_path) = import_path {
        println!("Importing from {}...", json_path.display());
        if db_path.exists() {
            eprintln!("Error: Database file {} already exists.", db_path.display());
            eprintln!("Remove it first or use --file to specify a different path.");
            std::process::exit(1);
        }
        match addressbook::migrate::import_json(&json_path, db_path) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Contacts: {}", stats.contacts);
                println!("  Phones: {}", stats.phones);
                println!("  Birthdays: {}", stats.birthdays);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(json_path) = export_path {
        match addressbook::migrate::export_json(db_path, &json_path) {
            Ok(stats) => println!("Exported {} contacts to {}", stats.contacts, json_path.display()),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    addressbook::cli::run(&config);
}
