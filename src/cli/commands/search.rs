use tracing::error;

use super::favorite_ids;
use crate::cli::display::{format_score, render_empty, render_grid};
use crate::constants::limits::MIN_SUGGESTION_CHARS;
use crate::services::Session;
use crate::state::AppState;

pub async fn cmd_search(state: &AppState, session: &mut Session, query: &str) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        println!("{}", state.t("emptySearch"));
        return Ok(());
    }

    println!("{}", state.t("loading"));

    let results = match state
        .catalog
        .search_by_query(query, state.config.catalog.search_limit)
        .await
    {
        Ok(results) => results,
        Err(e) => {
            error!(query, error = %e, "Search failed");
            eprintln!("{}", state.t("errorSearch"));
            return Ok(());
        }
    };

    if results.is_empty() {
        print!(
            "{}",
            render_empty(&state.t("noAnimesFound"), &state.t("noAnimesFoundDesc"))
        );
        session.set_search_results(results);
        session.set_recommendations(Vec::new());
        return Ok(());
    }

    let favorites = favorite_ids(state).await;
    println!();
    print!(
        "{}",
        render_grid(&state.t("searchResults"), &results, &favorites, &state.translator)
    );

    println!("{}", state.t("loadingRecommendations"));
    let recommendations = state.recommendations.recommend_from_seeds(&results).await;
    if !recommendations.is_empty() {
        print!(
            "{}",
            render_grid(
                &state.t("recommendations"),
                &recommendations,
                &favorites,
                &state.translator
            )
        );
    }

    println!(
        "{}",
        state.t_with("searchSuccess", &[("count", &results.len().to_string())])
    );

    session.set_search_results(results);
    session.set_recommendations(recommendations);
    Ok(())
}

pub async fn cmd_suggest(state: &AppState, query: &str) -> anyhow::Result<()> {
    let query = query.trim();
    if query.chars().count() < MIN_SUGGESTION_CHARS {
        return Ok(());
    }

    let suggestions = match state
        .catalog
        .search_by_query(query, state.config.catalog.suggestion_limit)
        .await
    {
        Ok(suggestions) => suggestions,
        Err(e) => {
            // suggestions are a convenience, stay quiet on failure
            error!(query, error = %e, "Error fetching suggestions");
            return Ok(());
        }
    };

    for anime in &suggestions {
        let year = anime
            .year
            .map_or_else(|| state.t("yearNotAvailable"), |y| y.to_string());
        println!(
            "• {} ({year}) ⭐ {} [ID: {}]",
            anime.title,
            format_score(anime.score),
            anime.mal_id
        );
    }

    Ok(())
}
