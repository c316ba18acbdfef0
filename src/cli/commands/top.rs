use tracing::error;

use super::favorite_ids;
use crate::cli::display::{render_empty, render_grid};
use crate::services::Session;
use crate::state::AppState;

pub async fn cmd_top(
    state: &AppState,
    session: &mut Session,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(state.config.catalog.top_limit);

    let top = match state.catalog.get_top_ranked(limit).await {
        Ok(top) => top,
        Err(e) => {
            error!(error = %e, "Error loading popular anime");
            eprintln!("{}", state.t("homeError"));
            return Ok(());
        }
    };

    if top.is_empty() {
        print!(
            "{}",
            render_empty(&state.t("noAnimesFound"), &state.t("noAnimesFoundDesc"))
        );
    } else {
        let favorites = favorite_ids(state).await;
        print!(
            "{}",
            render_grid(&state.t("popularAnime"), &top, &favorites, &state.translator)
        );
    }

    session.clear();
    session.set_search_results(top);
    Ok(())
}
