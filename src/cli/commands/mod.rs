mod favorites;
mod info;
mod init;
mod lang;
mod recommend;
mod search;
mod shell;
mod top;

use std::collections::HashSet;

use crate::models::anime::Anime;
use crate::services::{CatalogError, Session};
use crate::state::AppState;

pub use favorites::{
    cmd_favorites_add, cmd_favorites_list, cmd_favorites_remove, cmd_favorites_toggle,
};
pub use info::cmd_info;
pub use init::cmd_init;
pub use lang::cmd_lang;
pub use recommend::cmd_recommend;
pub use search::{cmd_search, cmd_suggest};
pub use shell::cmd_shell;
pub use top::cmd_top;

/// Record for `id`, looked up in the session and favorites before the catalog.
async fn resolve_anime(
    state: &AppState,
    session: &mut Session,
    id: i32,
) -> Result<Anime, CatalogError> {
    if let Some(anime) = session.lookup(id) {
        return Ok(anime.clone());
    }
    if let Some(anime) = state.favorites.get(id).await {
        return Ok(anime);
    }

    let anime = state.catalog.get_by_id(id).await?;
    session.remember(std::slice::from_ref(&anime));
    Ok(anime)
}

async fn favorite_ids(state: &AppState) -> HashSet<i32> {
    state
        .favorites
        .list()
        .await
        .iter()
        .map(|a| a.mal_id)
        .collect()
}
