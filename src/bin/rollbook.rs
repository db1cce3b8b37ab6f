//! Rollbook Binary
//!
//! Interactive menu by default, plus one-shot subcommands for scripting.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rollbook::form::{render_table, sort_records, Column};
use rollbook::menu::MenuSession;
use rollbook::{validation, Config, Result, StudentStore, UpdateOutcome};
use tracing_subscriber::{fmt, EnvFilter};

/// Rollbook
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Student records manager backed by SQLite")]
#[command(version)]
struct Args {
    /// Database file
    #[arg(short, long, env = "ROLLBOOK_DB", default_value = rollbook::config::DEFAULT_DB_FILE)]
    db: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive text menu (default)
    Menu,

    /// Add a student
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        roll: String,

        #[arg(long, default_value = "")]
        course: String,

        /// Marks between 0 and 100
        #[arg(long, default_value = "")]
        marks: String,
    },

    /// List all students
    List {
        /// Column to sort by (id, name, roll, course, marks)
        #[arg(long)]
        sort: Option<Column>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find a student by roll number
    Find { roll: String },

    /// Search students whose name contains the given text (case-sensitive)
    Search {
        #[arg(default_value = "")]
        name: String,
    },

    /// Change course and/or marks of a student
    Update {
        roll: String,

        #[arg(long, default_value = "")]
        course: String,

        #[arg(long, default_value = "")]
        marks: String,
    },

    /// Delete a student by roll number
    Delete {
        roll: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so menu output on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Rollbook v{}", rollbook::VERSION);

    let config = Config::builder().db_path(&args.db).build();

    let store = match StudentStore::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let command = args.command.unwrap_or(Commands::Menu);
    match run(&store, command) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Execute one command; `Ok(false)` means a user-facing failure was printed
fn run(store: &StudentStore, command: Commands) -> Result<bool> {
    let stdout = io::stdout();

    match command {
        Commands::Menu => {
            let stdin = io::stdin();
            MenuSession::new(store, stdin.lock(), stdout.lock()).run()?;
            Ok(true)
        }
        Commands::Add {
            name,
            roll,
            course,
            marks,
        } => {
            let student = validation::new_student(&name, &roll, &course, &marks)?;
            let record = store.add(&student)?;
            println!("Student added: {}", record);
            Ok(true)
        }
        Commands::List { sort, desc, json } => {
            let mut rows = store.list_all()?;
            if let Some(column) = sort {
                sort_records(&mut rows, column, desc);
            } else if desc {
                rows.reverse();
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No students found.");
            } else {
                print!("{}", render_table(&rows));
            }
            Ok(true)
        }
        Commands::Find { roll } => {
            let roll_no = validation::parse_roll_no(&roll)?;
            match store.find_by_roll(roll_no)? {
                Some(record) => {
                    println!("{}", record);
                    Ok(true)
                }
                None => {
                    println!("No student found with that roll number.");
                    Ok(false)
                }
            }
        }
        Commands::Search { name } => {
            let rows = store.search_by_name(&name)?;
            if rows.is_empty() {
                println!("No matching students found.");
            } else {
                for row in &rows {
                    println!("{}", row);
                }
            }
            Ok(true)
        }
        Commands::Update {
            roll,
            course,
            marks,
        } => {
            let (roll_no, update) = validation::student_update(&roll, &course, &marks)?;
            match store.update(roll_no, &update)? {
                UpdateOutcome::Updated => {
                    println!("Student updated.");
                    Ok(true)
                }
                UpdateOutcome::NotFound => {
                    println!("No student found with that roll number.");
                    Ok(false)
                }
                UpdateOutcome::NothingToUpdate => {
                    println!("Nothing to update (pass --course and/or --marks).");
                    Ok(true)
                }
            }
        }
        Commands::Delete { roll, yes } => {
            let roll_no = validation::parse_roll_no(&roll)?;
            if !yes && !confirm(&format!("Delete student with roll {}? (y/n): ", roll_no))? {
                println!("Delete cancelled.");
                return Ok(true);
            }
            if store.delete(roll_no)? {
                println!("Student deleted.");
                Ok(true)
            } else {
                println!("No student found with that roll number.");
                Ok(false)
            }
        }
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
