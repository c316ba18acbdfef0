//! CLI module - Command-line interface for Anime Finder
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;
pub mod display;

use clap::{Parser, Subcommand};

use crate::services::Session;
use crate::state::AppState;

/// Anime Finder - discover your next favorite anime
#[derive(Parser, Debug)]
#[command(name = "anime-finder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// UI language for this run ("es" or "en")
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Search anime and show genre-based recommendations for the results
    #[command(alias = "s")]
    Search {
        /// Search query
        query: Vec<String>,
    },

    /// Quick title suggestions while typing
    Suggest {
        query: Vec<String>,
    },

    /// Show details about an anime
    #[command(alias = "i")]
    Info {
        /// Anime ID
        id: i32,
    },

    /// Recommendations for a single anime
    #[command(alias = "r", alias = "rec")]
    Recommend {
        /// Anime ID
        id: i32,
    },

    /// Popular anime
    #[command(alias = "home")]
    Top {
        /// Number of entries to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Manage favorites
    #[command(alias = "fav")]
    Favorites {
        #[command(subcommand)]
        command: Option<FavoritesCommands>,
    },

    /// Show or change the UI language
    Lang {
        /// "es" or "en"
        code: Option<String>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Interactive mode
    Shell,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FavoritesCommands {
    /// List favorites
    #[command(alias = "ls")]
    List,
    /// Add an anime to favorites
    Add {
        /// Anime ID
        id: i32,
    },
    /// Remove an anime from favorites
    #[command(alias = "rm")]
    Remove {
        /// Anime ID
        id: i32,
    },
    /// Add the anime if missing, remove it otherwise
    Toggle {
        /// Anime ID
        id: i32,
    },
}

/// Runs one command against `state`.
///
/// `shell` is handled by the caller since it drives this function itself.
pub async fn execute(
    state: &mut AppState,
    session: &mut Session,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Search { query } => cmd_search(state, session, &query.join(" ")).await,
        Commands::Suggest { query } => cmd_suggest(state, &query.join(" ")).await,
        Commands::Info { id } => cmd_info(state, session, id).await,
        Commands::Recommend { id } => cmd_recommend(state, session, id).await,
        Commands::Top { limit } => cmd_top(state, session, limit).await,
        Commands::Favorites { command } => match command.unwrap_or(FavoritesCommands::List) {
            FavoritesCommands::List => cmd_favorites_list(state).await,
            FavoritesCommands::Add { id } => cmd_favorites_add(state, session, id).await,
            FavoritesCommands::Remove { id } => cmd_favorites_remove(state, id).await,
            FavoritesCommands::Toggle { id } => cmd_favorites_toggle(state, session, id).await,
        },
        Commands::Lang { code } => cmd_lang(state, code.as_deref()).await,
        Commands::Init => cmd_init(),
        Commands::Shell => {
            println!("Already in interactive mode");
            Ok(())
        }
    }
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_query_words() {
        let cli = Cli::try_parse_from(["anime-finder", "search", "cowboy", "bebop"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                query: vec!["cowboy".to_string(), "bebop".to_string()]
            })
        );
    }

    #[test]
    fn test_parse_aliases_and_defaults() {
        let cli = Cli::try_parse_from(["anime-finder", "home"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Top { limit: None }));

        let cli = Cli::try_parse_from(["anime-finder", "fav"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Favorites { command: None }));

        let cli = Cli::try_parse_from(["anime-finder", "--lang", "en", "rec", "20"]).unwrap();
        assert_eq!(cli.lang.as_deref(), Some("en"));
        assert_eq!(cli.command, Some(Commands::Recommend { id: 20 }));

        let cli = Cli::try_parse_from(["anime-finder"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["anime-finder", "info", "abc"]).is_err());
    }
}
