//! Command-line surface for the expiry tracker.
//!
//! # Responsibility
//! - Parse add/list/remove commands and drive a `TrackerView` over the
//!   SQLite snapshot store.
//! - Render the item list sorted by expiry date with status markers.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use shelflife_core::db::open_db;
use shelflife_core::{
    classify, default_log_level, format_expiry_date, init_logging, ExpiryStatus, ItemId,
    SnapshotStore, SqliteSnapshotStore, TrackerView,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "shelflife",
    version,
    about = "Track items by expiry date",
    arg_required_else_help = true
)]
struct Cli {
    /// Database file holding the persisted item snapshot.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = "shelflife.sqlite3"
    )]
    db: PathBuf,

    /// Write rotating logs into this directory (absolute path).
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new item.
    Add {
        /// Item name.
        #[arg(long)]
        name: String,
        /// Expiry date (YYYY-MM-DD).
        #[arg(long, value_name = "DATE")]
        expires: NaiveDate,
        /// Optional free-text note.
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Show all items, soonest expiry first.
    List,
    /// Delete an item by the id printed by `list`.
    Remove { id: ItemId },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(default_log_level(), log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let store = SqliteSnapshotStore::new(&conn);
    let mut tracker = TrackerView::hydrate(store);

    match cli.command {
        Command::Add {
            name,
            expires,
            notes,
        } => {
            let id = tracker.add_item(&name, expires, &notes)?;
            println!("added {id}");
        }
        Command::Remove { id } => {
            if tracker.delete_item(id)? {
                println!("removed {id}");
            } else {
                println!("no item with id {id}");
            }
        }
        Command::List => {}
    }

    render_list(&tracker);
    Ok(())
}

fn render_list<S: SnapshotStore>(tracker: &TrackerView<S>) {
    let items = tracker.sorted_for_display();
    if items.is_empty() {
        println!("no items tracked");
        return;
    }

    // Classification is time-dependent: take today's local date once per
    // render and pass it down explicitly.
    let today = Local::now().date_naive();
    for item in items {
        let marker = status_marker(classify(item.expiry_date, today));
        print!(
            "[{marker:<7}] {}  {}  {}",
            format_expiry_date(item.expiry_date),
            item.name,
            item.id
        );
        if item.notes.is_empty() {
            println!();
        } else {
            println!("  ({})", item.notes);
        }
    }
}

fn status_marker(status: ExpiryStatus) -> &'static str {
    match status {
        ExpiryStatus::Expired => "EXPIRED",
        ExpiryStatus::ExpiringSoon => "SOON",
        ExpiryStatus::Fresh => "ok",
    }
}
