use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roster::config::DataPaths;
use roster::menu::MenuLoop;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Terminal-based employee roster manager",
    long_about = "Roster is a terminal-based employee record manager. It loads \
                  records from a CSV file into memory, offers add/search/update/\
                  display/analytics operations through an interactive menu, and \
                  persists back to CSV or JSON on demand."
)]
struct Cli {
    /// Path to the employee CSV data file
    #[arg(long, env = "ROSTER_CSV_FILE", default_value = "employees.csv")]
    csv_file: PathBuf,

    /// Path to the JSON save file
    #[arg(long, env = "ROSTER_JSON_FILE", default_value = "employees.json")]
    json_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = DataPaths::with_files(cli.csv_file, cli.json_file);

    match cli.command {
        Some(Commands::Config) => {
            println!("Roster Configuration");
            println!("====================");
            println!("CSV data file:  {}", paths.csv_file().display());
            println!("JSON save file: {}", paths.json_file().display());
        }
        Some(Commands::Menu) | None => {
            let mut menu = MenuLoop::new(paths);
            menu.run()?;
        }
    }

    Ok(())
}
