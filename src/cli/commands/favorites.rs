use std::collections::HashSet;

use tracing::error;

use super::resolve_anime;
use crate::cli::display::{render_empty, render_grid};
use crate::services::{FavoriteChange, Session};
use crate::state::AppState;

pub async fn cmd_favorites_list(state: &AppState) -> anyhow::Result<()> {
    let favorites = state.favorites.list().await;
    let title = state.t_with("favoritesTitle", &[("count", &favorites.len().to_string())]);

    if favorites.is_empty() {
        println!("{title}");
        print!(
            "{}",
            render_empty(&state.t("noFavorites"), &state.t("noFavoritesDesc"))
        );
        return Ok(());
    }

    let ids: HashSet<i32> = favorites.iter().map(|a| a.mal_id).collect();
    print!("{}", render_grid(&title, &favorites, &ids, &state.translator));
    Ok(())
}

pub async fn cmd_favorites_add(
    state: &AppState,
    session: &mut Session,
    id: i32,
) -> anyhow::Result<()> {
    let anime = match resolve_anime(state, session, id).await {
        Ok(anime) => anime,
        Err(e) => {
            error!(mal_id = id, error = %e, "Could not load anime for favorites");
            eprintln!("{}", state.t("noAnimeInfo"));
            return Ok(());
        }
    };

    let title = anime.title.clone();
    let key = if state.favorites.add(anime).await? {
        "addedToFavorites"
    } else {
        "alreadyFavorite"
    };
    println!("{}", state.t_with(key, &[("title", &title)]));
    Ok(())
}

pub async fn cmd_favorites_remove(state: &AppState, id: i32) -> anyhow::Result<()> {
    match state.favorites.remove(id).await? {
        Some(removed) => println!(
            "{}",
            state.t_with("removedFromFavorites", &[("title", &removed.title)])
        ),
        None => println!(
            "{}",
            state.t_with("notInFavorites", &[("id", &id.to_string())])
        ),
    }
    Ok(())
}

pub async fn cmd_favorites_toggle(
    state: &AppState,
    session: &mut Session,
    id: i32,
) -> anyhow::Result<()> {
    if state.favorites.is_favorite(id).await {
        return cmd_favorites_remove(state, id).await;
    }

    let anime = match resolve_anime(state, session, id).await {
        Ok(anime) => anime,
        Err(e) => {
            error!(mal_id = id, error = %e, "Could not load anime for favorites");
            eprintln!("{}", state.t("noAnimeInfo"));
            return Ok(());
        }
    };

    let message = match state.favorites.toggle(anime).await? {
        FavoriteChange::Added(anime) => {
            state.t_with("addedToFavorites", &[("title", &anime.title)])
        }
        FavoriteChange::Removed(anime) => {
            state.t_with("removedFromFavorites", &[("title", &anime.title)])
        }
    };
    println!("{message}");
    Ok(())
}
