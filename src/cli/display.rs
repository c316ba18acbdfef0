//! Plain-text rendering of catalog records.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::constants::limits::{CARD_GENRES, SYNOPSIS_PREVIEW_CHARS};
use crate::i18n::Translator;
use crate::models::anime::Anime;
use crate::services::translation::truncate_chars;

const FAVORITE_MARKER: &str = "★";

#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "N/A".to_string(), |s| format!("{s:.1}"))
}

#[must_use]
pub fn format_synopsis(synopsis: Option<&str>, max_chars: usize, t: &Translator) -> String {
    match synopsis.map(str::trim) {
        Some(text) if !text.is_empty() => truncate_chars(text, max_chars),
        _ => t.t("synopsisNotAvailable"),
    }
}

#[must_use]
pub fn episode_label(anime: &Anime, t: &Translator) -> String {
    if let Some(n) = anime.episodes {
        return format!("{n} {}", t.t("episodes"));
    }

    let Some(status) = anime.status.as_deref() else {
        return t.t("episodesAiring");
    };

    let lower = status.to_lowercase();
    if lower.contains("finished") || lower.contains("completed") {
        t.t("episodesCompleted")
    } else if lower.contains("airing") {
        t.t("episodesAiring")
    } else {
        status.to_string()
    }
}

#[must_use]
pub fn status_label(status: Option<&str>, t: &Translator) -> String {
    let Some(status) = status else {
        return t.t("unknown");
    };

    let lower = status.to_lowercase();
    if lower.contains("finished") {
        t.t("statusFinished")
    } else if lower.contains("airing") {
        t.t("statusAiring")
    } else {
        status.to_string()
    }
}

fn genre_names(anime: &Anime, limit: usize) -> String {
    anime
        .genres
        .iter()
        .take(limit)
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A compact result card.
#[must_use]
pub fn render_card(anime: &Anime, is_favorite: bool, t: &Translator) -> String {
    let mut out = String::new();

    let marker = if is_favorite {
        format!(" {FAVORITE_MARKER}")
    } else {
        String::new()
    };
    let _ = writeln!(out, "• {}{marker}", anime.title);
    let _ = writeln!(
        out,
        "  ID: {} | ⭐ {} | {}",
        anime.mal_id,
        format_score(anime.score),
        episode_label(anime, t)
    );

    let genres = genre_names(anime, CARD_GENRES);
    if !genres.is_empty() {
        let _ = writeln!(out, "  {genres}");
    }

    let _ = writeln!(
        out,
        "  {}",
        format_synopsis(anime.synopsis.as_deref(), SYNOPSIS_PREVIEW_CHARS, t)
    );
    out
}

/// A titled list of cards.
#[must_use]
pub fn render_grid(title: &str, animes: &[Anime], favorites: &HashSet<i32>, t: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{:-<60}", "");

    for anime in animes {
        out.push_str(&render_card(anime, favorites.contains(&anime.mal_id), t));
        out.push('\n');
    }
    out
}

/// A heading followed by a short explanation, used for empty lists.
#[must_use]
pub fn render_empty(title: &str, description: &str) -> String {
    format!("{title}\n  {description}\n")
}

/// Full detail view. `synopsis` is passed in already translated.
#[must_use]
pub fn render_details(anime: &Anime, synopsis: &str, is_favorite: bool, t: &Translator) -> String {
    let mut out = String::new();
    let marker = if is_favorite {
        format!(" {FAVORITE_MARKER}")
    } else {
        String::new()
    };

    let _ = writeln!(out, "{}{marker}", anime.title);
    let _ = writeln!(out, "{:-<60}", "");
    if let Some(en) = anime.title_english.as_deref().filter(|en| *en != anime.title) {
        let _ = writeln!(out, "English:  {en}");
    }
    let _ = writeln!(out, "ID:       {}", anime.mal_id);
    let _ = writeln!(out, "Score:    {}", format_score(anime.score));
    let _ = writeln!(out, "{}", episode_label(anime, t));
    let _ = writeln!(out, "{}", status_label(anime.status.as_deref(), t));

    let year = anime
        .year
        .map_or_else(|| t.t("yearNotAvailable"), |y| y.to_string());
    let _ = writeln!(out, "{}: {year}", t.t("year"));

    let rating = anime
        .rating
        .clone()
        .unwrap_or_else(|| t.t("notAvailable"));
    let _ = writeln!(out, "{}: {rating}", t.t("rating"));

    let studios = if anime.studios.is_empty() {
        t.t("notAvailable")
    } else {
        anime
            .studios
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "{}: {studios}", t.t("studios"));

    let genres = genre_names(anime, usize::MAX);
    if !genres.is_empty() {
        let _ = writeln!(out, "{}: {genres}", t.t("genres"));
    }

    if let Some(url) = &anime.url {
        let _ = writeln!(out, "URL:      {url}");
    }
    if let Some(cover) = anime.cover_url() {
        let _ = writeln!(out, "Cover:    {cover}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", t.t("synopsis"));
    let _ = writeln!(out, "{synopsis}");
    out
}
