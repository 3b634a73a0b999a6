use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use hiscore::output::{format_board, should_use_colors, BoardOptions};
use hiscore::ScoreTable;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_INPUT: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    #[command(flatten)]
    Table(TableCommand),
}

/// Commands that work on the stored table
#[derive(Subcommand, Debug)]
enum TableCommand {
    /// Show the table (default if no subcommand)
    List {
        /// Show scores as 1.5k / 2.3M
        #[arg(long)]
        compact: bool,
        /// Show at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Submit a score: the rank key first, then one value per remaining column
    Add {
        #[arg(allow_hyphen_values = true)]
        score: String,
        values: Vec<String>,
    },
    /// Show the position a score would take without storing it
    Check {
        #[arg(allow_hyphen_values = true)]
        score: String,
    },
    /// Show the best and worst scores
    Top,
    /// List the table's columns
    Columns,
    /// Remove every score (the columns are kept)
    Clear,
}

#[derive(Parser, Debug)]
#[command(name = "hiscore")]
#[command(about = "Ranked high score tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/hiscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to table file (defaults to ~/.config/hiscore/table.json)
    #[arg(short, long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = hiscore::logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config_path = cli.config.map(PathBuf::from);
    let command = match cli.command {
        Some(Commands::Init { force }) => std::process::exit(run_init(config_path, force)),
        Some(Commands::Table(command)) => command,
        None => TableCommand::List {
            compact: false,
            limit: None,
        },
    };

    // Load and validate config
    let config = match hiscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = hiscore::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let table_path = match cli.table.map(PathBuf::from) {
        Some(p) => p,
        None => match hiscore::store::get_table_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Storage error: {:#}", e);
                std::process::exit(EXIT_STORAGE);
            }
        },
    };

    let mut table = match hiscore::store::load_table(&table_path, &config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Storage error: {:#}", e);
            std::process::exit(EXIT_STORAGE);
        }
    };

    let use_colors = should_use_colors();

    match command {
        TableCommand::List { compact, limit } => {
            let options = BoardOptions { compact, limit };
            println!("{}", format_board(&table, options, use_colors));
        }
        TableCommand::Add { score, values } => {
            let mut fields = vec![score];
            fields.extend(values);

            let entry = match table.schema().parse_entry(&fields) {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("Invalid score: {}", e);
                    eprintln!("Columns: {}", column_list(&table));
                    std::process::exit(EXIT_INPUT);
                }
            };

            match table.add_score(entry) {
                Some(position) => {
                    let message = format!("New entry at rank #{}", position + 1);
                    if use_colors {
                        println!("{}", message.green().bold());
                    } else {
                        println!("{}", message);
                    }
                    if let Err(e) = hiscore::store::save_table(&table_path, &table) {
                        eprintln!("Storage error: {:#}", e);
                        std::process::exit(EXIT_STORAGE);
                    }
                }
                None => println!("Score did not qualify for the table."),
            }
        }
        TableCommand::Check { score } => {
            let Some(key) = table
                .column_details()
                .first()
                .and_then(|c| hiscore::Value::parse_as(c.data_type, &score).ok())
            else {
                eprintln!("Invalid score '{}'", score);
                std::process::exit(EXIT_INPUT);
            };

            match table.score_check_value(&key) {
                Some(position) => println!("{} would place at rank #{}", score, position + 1),
                None => println!("{} would not qualify", score),
            }
        }
        TableCommand::Top => {
            if table.is_empty() {
                println!("No scores yet.");
            } else {
                println!("Top:    {}", table.top_score_large());
                println!("Bottom: {}", table.bottom_score_large());
                println!("Entries: {}/{}", table.entries(), table.maximum_entries());
            }
        }
        TableCommand::Columns => {
            println!("Order: {}", table.score_order());
            for (i, column) in table.column_details().iter().enumerate() {
                let label = if i == 0 { " (rank key)" } else { "" };
                println!(
                    "{:>2}. {} [{}, width {}]{}",
                    i + 1,
                    column.name,
                    column.data_type,
                    column.max_length,
                    label
                );
            }
        }
        TableCommand::Clear => {
            table.clear_table();
            if let Err(e) = hiscore::store::save_table(&table_path, &table) {
                eprintln!("Storage error: {:#}", e);
                std::process::exit(EXIT_STORAGE);
            }
            println!("Table cleared.");
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn column_list(table: &ScoreTable) -> String {
    table
        .column_details()
        .iter()
        .map(|c| format!("{} ({})", c.name, c.data_type))
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_init(config_path: Option<PathBuf>, force: bool) -> i32 {
    let path = match config_path.map(Ok).unwrap_or_else(hiscore::config::get_config_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    if path.exists() && !force {
        eprintln!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
        return EXIT_CONFIG;
    }

    let config = hiscore::config::TableConfig::default();
    if let Err(e) = hiscore::config::write_config(&path, &config) {
        eprintln!("Config error: {:#}", e);
        return EXIT_CONFIG;
    }

    println!("Config written to {}", path.display());
    EXIT_SUCCESS
}
