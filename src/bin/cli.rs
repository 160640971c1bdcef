//! fatkv CLI
//!
//! Thin non-interactive shell over the engine: one operation per
//! invocation, already-validated string arguments. Error-to-message
//! translation and display formatting live here; the engine itself has no
//! user-facing text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fatkv::{Engine, FileRecord};

/// fatkv CLI
#[derive(Parser, Debug)]
#[command(name = "fatkv-cli")]
#[command(about = "CLI for the fatkv chained-segment file store")]
#[command(version = fatkv::VERSION)]
struct Args {
    /// Data directory holding metadata and segment records
    #[arg(short, long, default_value = "./fatkv_data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new file
    Create {
        /// The file name
        name: String,

        /// The file content
        content: String,
    },

    /// List files
    List {
        /// Show recycled files instead of active ones
        #[arg(long)]
        recycled: bool,
    },

    /// Print a file's metadata and content
    Cat {
        /// The file to read
        name: String,
    },

    /// Replace a file's content
    Update {
        /// The file to update
        name: String,

        /// The replacement content
        content: String,
    },

    /// Move a file to the recycle bin
    Rm {
        /// The file to soft-delete
        name: String,
    },

    /// Bring a file back from the recycle bin
    Restore {
        /// The file to restore
        name: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> fatkv::Result<()> {
    let engine = Engine::open_path(&args.data_dir)?;

    match args.command {
        Commands::Create { name, content } => {
            let record = engine.create(&name, &content)?;
            println!("created '{}' ({} chars)", record.name, record.total_chars);
        }

        Commands::List { recycled } => {
            let mut records: Vec<FileRecord> = engine
                .list()?
                .into_iter()
                .filter(|r| r.recycled == recycled)
                .collect();
            records.sort_by(|a, b| a.name.cmp(&b.name));

            for record in records {
                println!(
                    "{}  {} chars  created {}  modified {}",
                    record.name,
                    record.total_chars,
                    format_ts(record.created_at),
                    format_ts(record.modified_at),
                );
            }
        }

        Commands::Cat { name } => {
            let (record, content) = engine.read(&name)?;
            println!("name: {}", record.name);
            println!("chars: {}", record.total_chars);
            println!("created: {}", format_ts(record.created_at));
            println!("modified: {}", format_ts(record.modified_at));
            println!("content:");
            println!("{}", content);
        }

        Commands::Update { name, content } => {
            let record = engine.update(&name, &content)?;
            println!("updated '{}' ({} chars)", record.name, record.total_chars);
        }

        Commands::Rm { name } => {
            engine.soft_delete(&name)?;
            println!("moved '{}' to the recycle bin", name);
        }

        Commands::Restore { name } => {
            engine.restore(&name)?;
            println!("restored '{}'", name);
        }
    }

    Ok(())
}

/// Render a unix-milli timestamp as seconds since the epoch
fn format_ts(millis: u64) -> String {
    format!("{}.{:03}s", millis / 1000, millis % 1000)
}
