use tracing::error;

use super::resolve_anime;
use crate::cli::display::render_details;
use crate::services::Session;
use crate::state::AppState;

pub async fn cmd_info(state: &AppState, session: &mut Session, id: i32) -> anyhow::Result<()> {
    if id <= 0 {
        println!("{}", state.t_with("invalidId", &[("id", &id.to_string())]));
        return Ok(());
    }

    let anime = match resolve_anime(state, session, id).await {
        Ok(anime) => anime,
        Err(e) => {
            error!(mal_id = id, error = %e, "Error loading anime details");
            eprintln!("{}", state.t("errorAnimeDetails"));
            return Ok(());
        }
    };

    let synopsis = state
        .translation
        .translate_synopsis(anime.synopsis.as_deref(), &state.translator)
        .await;
    let is_favorite = state.favorites.is_favorite(id).await;

    println!();
    print!(
        "{}",
        render_details(&anime, &synopsis, is_favorite, &state.translator)
    );
    println!();

    session.select(anime);
    Ok(())
}
