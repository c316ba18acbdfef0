//! Genre-driven recommendation aggregation.
//!
//! Two entry points feed the UI:
//!
//! - [`RecommendationService::recommend_from_seeds`] takes a result set (usually
//!   a search), finds its dominant genres and fans out one catalog query per
//!   genre.
//! - [`RecommendationService::recommend_from_anime`] prefers the catalog's
//!   curated "similar anime" list for one title and falls back to fanning out
//!   over that title's own genres.
//!
//! Neither path ever fails outward: a broken sub-request is logged and counts
//! as zero results, so callers always get a (possibly empty) list.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::RecommendationConfig;
use crate::models::anime::{Anime, Genre};
use crate::services::catalog::CatalogClient;

/// How many seed records reference a genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreFrequency {
    pub genre: Genre,
    pub count: usize,
}

/// Counts genre occurrences across `animes`, most frequent first.
///
/// A record contributes each distinct genre once. Ties keep the order in which
/// genres were first seen, so the output is deterministic for a given input.
#[must_use]
pub fn genre_frequencies(animes: &[Anime]) -> Vec<GenreFrequency> {
    let mut frequencies: Vec<GenreFrequency> = Vec::new();
    let mut positions: HashMap<i32, usize> = HashMap::new();

    for anime in animes {
        let mut seen_in_record = HashSet::new();
        for genre in &anime.genres {
            if !seen_in_record.insert(genre.mal_id) {
                continue;
            }
            match positions.get(&genre.mal_id) {
                Some(&index) => frequencies[index].count += 1,
                None => {
                    positions.insert(genre.mal_id, frequencies.len());
                    frequencies.push(GenreFrequency {
                        genre: genre.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    // stable: equal counts stay in first-seen order
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

/// The `limit` most frequent genres across `animes`.
#[must_use]
pub fn top_genres(animes: &[Anime], limit: usize) -> Vec<GenreFrequency> {
    let mut frequencies = genre_frequencies(animes);
    frequencies.truncate(limit);
    frequencies
}

/// Insertion-ordered, id-keyed accumulator for recommendation candidates.
///
/// The first record offered for an id wins; later offers with the same id are
/// ignored, as are ids in the exclusion set.
#[derive(Debug, Default)]
pub struct CandidateSet {
    entries: Vec<Anime>,
    accepted: HashSet<i32>,
    excluded: HashSet<i32>,
}

impl CandidateSet {
    pub fn new(excluded: impl IntoIterator<Item = i32>) -> Self {
        Self {
            entries: Vec::new(),
            accepted: HashSet::new(),
            excluded: excluded.into_iter().collect(),
        }
    }

    /// Returns `true` when the record was accepted.
    pub fn offer(&mut self, anime: Anime) -> bool {
        if self.excluded.contains(&anime.mal_id) || !self.accepted.insert(anime.mal_id) {
            return false;
        }
        self.entries.push(anime);
        true
    }

    pub fn offer_all(&mut self, animes: impl IntoIterator<Item = Anime>) -> usize {
        let mut accepted = 0;
        for anime in animes {
            if self.offer(anime) {
                accepted += 1;
            }
        }
        accepted
    }

    #[must_use]
    pub fn contains(&self, id: i32) -> bool {
        self.accepted.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `limit` accepted records in acceptance order.
    #[must_use]
    pub fn into_limited(mut self, limit: usize) -> Vec<Anime> {
        self.entries.truncate(limit);
        self.entries
    }
}

pub struct RecommendationService {
    catalog: Arc<dyn CatalogClient>,
    settings: RecommendationConfig,
}

impl RecommendationService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogClient>, settings: RecommendationConfig) -> Self {
        Self { catalog, settings }
    }

    /// Recommendations for a whole result set.
    ///
    /// Takes the top genres of `seeds`, queries them one after another and
    /// returns up to `max_results` records that are neither seeds nor
    /// duplicates, in order of first acceptance.
    pub async fn recommend_from_seeds(&self, seeds: &[Anime]) -> Vec<Anime> {
        if seeds.is_empty() {
            return Vec::new();
        }

        let genres: Vec<Genre> = top_genres(seeds, self.settings.seed_genre_limit)
            .into_iter()
            .map(|f| f.genre)
            .collect();

        if genres.is_empty() {
            debug!(seeds = seeds.len(), "Seeds carry no genres, skipping recommendations");
            return Vec::new();
        }

        let mut candidates = CandidateSet::new(seeds.iter().map(|a| a.mal_id));
        self.fan_out(&genres, self.settings.per_genre_limit, &mut candidates)
            .await;

        let result = candidates.into_limited(self.settings.max_results);
        info!(
            seeds = seeds.len(),
            genres = genres.len(),
            results = result.len(),
            "Generated recommendations from seeds"
        );
        result
    }

    /// Recommendations for the anime currently being viewed.
    ///
    /// Uses the catalog's curated similar list when it produces anything,
    /// otherwise [`Self::recommend_from_anime_genres_only`].
    pub async fn recommend_from_anime(&self, anime: &Anime) -> Vec<Anime> {
        let similar = self.similar_anime(anime.mal_id).await;
        if !similar.is_empty() {
            return similar;
        }

        debug!(
            mal_id = anime.mal_id,
            "No curated recommendations, falling back to genres"
        );
        self.recommend_from_anime_genres_only(anime).await
    }

    /// Genre fan-out over the first genres of a single anime.
    pub async fn recommend_from_anime_genres_only(&self, anime: &Anime) -> Vec<Anime> {
        if anime.genres.is_empty() {
            debug!(mal_id = anime.mal_id, "No genres found for anime");
            return Vec::new();
        }

        let genres: Vec<Genre> = anime
            .genres
            .iter()
            .take(self.settings.anime_genre_limit)
            .cloned()
            .collect();

        let mut candidates = CandidateSet::new([anime.mal_id]);
        self.fan_out(&genres, self.settings.anime_per_genre_limit, &mut candidates)
            .await;

        let result = candidates.into_limited(self.settings.max_results);
        info!(
            mal_id = anime.mal_id,
            results = result.len(),
            "Generated recommendations from genres"
        );
        result
    }

    /// Curated similar anime for `anime_id`, enriched to full records.
    ///
    /// Returns an empty list when the curated call fails, has no usable
    /// references, or every enrichment fails.
    pub async fn similar_anime(&self, anime_id: i32) -> Vec<Anime> {
        let references = match self.catalog.get_curated_similar(anime_id).await {
            Ok(references) => references,
            Err(e) => {
                warn!(mal_id = anime_id, error = %e, "Failed to get similar anime");
                return Vec::new();
            }
        };

        let ids: Vec<i32> = references
            .into_iter()
            .take(self.settings.curated_limit)
            .map(|r| r.mal_id)
            .filter(|&id| id > 0)
            .collect();

        if ids.is_empty() {
            debug!(mal_id = anime_id, "No valid curated references");
            return Vec::new();
        }

        let mut candidates = CandidateSet::new([anime_id]);
        candidates.offer_all(self.enrich_references(&ids).await);
        candidates.into_limited(self.settings.max_results)
    }

    /// Fetches full records for `ids`, `enrichment_batch_size` at a time.
    ///
    /// Each batch is dispatched together and awaited as a whole before the next
    /// one starts. A failed lookup drops that id only.
    pub async fn enrich_references(&self, ids: &[i32]) -> Vec<Anime> {
        let batch_size = self.settings.enrichment_batch_size.max(1);
        let mut enriched = Vec::with_capacity(ids.len());

        for (batch_index, batch) in ids.chunks(batch_size).enumerate() {
            debug!(batch = batch_index, size = batch.len(), "Dispatching detail batch");

            let results = join_all(batch.iter().map(|&id| async move {
                (id, self.catalog.get_by_id(id).await)
            }))
            .await;

            for (id, result) in results {
                match result {
                    Ok(anime) => enriched.push(anime),
                    Err(e) => warn!(
                        mal_id = id,
                        error = %e,
                        transient = e.is_transient(),
                        "Failed to get details for anime"
                    ),
                }
            }
        }

        enriched
    }

    async fn fan_out(&self, genres: &[Genre], per_genre: usize, candidates: &mut CandidateSet) {
        for genre in genres {
            match self.catalog.search_by_genre(genre.mal_id, per_genre).await {
                Ok(animes) => {
                    if animes.is_empty() {
                        debug!(genre = %genre.name, "No anime found for genre");
                    }
                    let accepted = candidates.offer_all(animes);
                    debug!(
                        genre = %genre.name,
                        accepted,
                        total = candidates.len(),
                        "Genre pass finished"
                    );
                }
                Err(e) => {
                    warn!(
                        genre = %genre.name,
                        genre_id = genre.mal_id,
                        error = %e,
                        transient = e.is_transient(),
                        "Failed to get recommendations for genre"
                    );
                }
            }
        }
    }
}
