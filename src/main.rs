use std::io;

use anyhow::Result;
use clap::Parser;

use rolodex::cli::Repl;
use rolodex::config::{paths::RolodexPaths, settings::Settings};
use rolodex::storage::BookRepository;

#[derive(Parser)]
#[command(
    name = "rolodex",
    version,
    about = "Terminal-based contact book with birthday reminders",
    long_about = "rolodex is an interactive contact book for the terminal. It stores \
                  names, phone numbers, and birthdays, and reports whose birthdays \
                  are coming up, moving weekend dates to the next Monday."
)]
struct Cli {
    /// Override the data directory (defaults to ROLODEX_DATA_DIR or the
    /// XDG config directory)
    #[arg(long, env = "ROLODEX_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Override the birthday lookahead window in days for this session
    #[arg(long)]
    lookahead_days: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => RolodexPaths::with_base_dir(dir),
        None => RolodexPaths::new()?,
    };
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(&paths)?;
    let lookahead_days = cli.lookahead_days.unwrap_or(settings.lookahead_days);

    let repo = BookRepository::new(paths.book_file());
    let mut repl = Repl::new(repo, lookahead_days)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
