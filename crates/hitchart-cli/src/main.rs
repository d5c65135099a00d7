use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use hitchart::repl::{Repl, ReplInput};
use hitchart::session::Session;

#[derive(Debug, Parser)]
#[command(name = "hitchart", version, about)]
struct Cli {
    /// Path to the backing store (created by LOAD DATA)
    #[arg(long, default_value = "music.db")]
    db: PathBuf,

    /// Path to the artists CSV source
    #[arg(long, default_value = "artists.csv")]
    artists: PathBuf,

    /// Path to the songs CSV source
    #[arg(long, default_value = "songs.csv")]
    songs: PathBuf,
}

fn banner() {
    println!("--------------------------------------------------");
    println!("Welcome to the Query Interface!");
    println!("--------------------------------------------------");
    println!("Start by entering \"LOAD DATA\" into the prompt!");
    println!("--------------------------------------------------");
    println!("Then type \"HELP\" to view commands!");
    println!("--------------------------------------------------");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    banner();

    let mut session = Session::new(cli.db, cli.artists, cli.songs);
    let mut repl = Repl::new()?;

    loop {
        match repl.read_line("Enter a command: ")? {
            ReplInput::Line(line) => {
                if line.trim().eq_ignore_ascii_case("EXIT") {
                    break;
                }
                let output = session.handle(&line);
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            ReplInput::Exit => break,
        }
    }

    // Session drop closes the store connection.
    Ok(())
}
