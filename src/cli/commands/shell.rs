use std::io::Write as _;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error};

use crate::cli::{Cli, execute};
use crate::services::Session;
use crate::state::AppState;

const PROMPT: &str = "anime-finder> ";

/// Reads commands from stdin until EOF or `exit`, sharing one session.
pub async fn cmd_shell(state: &mut AppState, session: &mut Session) -> anyhow::Result<()> {
    println!("{} ({} Jikan API)", state.t("tagline"), state.t("poweredBy"));
    println!("Type 'help' for commands, 'exit' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["exit" | "quit" | "q"] => break,
            _ => {}
        }

        let cli = match Cli::try_parse_from(std::iter::once("anime-finder").chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                // also covers `help` and `--version`
                let _ = e.print();
                continue;
            }
        };

        let Some(command) = cli.command else {
            continue;
        };

        debug!(?command, "Shell command");
        if let Err(e) = execute(state, session, command).await {
            error!(error = %e, "Command failed");
            eprintln!("{}: {e}", state.t("errorUnexpected"));
        }
    }

    Ok(())
}
