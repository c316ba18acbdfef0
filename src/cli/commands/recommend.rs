use tracing::error;

use super::{favorite_ids, resolve_anime};
use crate::cli::display::{render_empty, render_grid};
use crate::services::Session;
use crate::state::AppState;

pub async fn cmd_recommend(state: &AppState, session: &mut Session, id: i32) -> anyhow::Result<()> {
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

    println!("{}", state.t("loadingRecommendations"));
    let recommendations = state.recommendations.recommend_from_anime(&anime).await;
    let title = [("title", anime.title.as_str())];

    if recommendations.is_empty() {
        print!(
            "{}",
            render_empty(
                &state.t_with("noRecommendations", &title),
                &state.t("noRecommendationsDesc")
            )
        );
    } else {
        let favorites = favorite_ids(state).await;
        println!();
        print!(
            "{}",
            render_grid(
                &state.t_with("recommendationsFor", &title),
                &recommendations,
                &favorites,
                &state.translator
            )
        );
        println!(
            "{}",
            state.t_with(
                "recommendationsSuccess",
                &[
                    ("count", &recommendations.len().to_string()),
                    ("title", &anime.title)
                ]
            )
        );
    }

    session.select(anime);
    session.set_recommendations(recommendations);
    Ok(())
}
