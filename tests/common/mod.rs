//! In-memory catalog shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anime_finder::models::{Anime, AnimeReference, Genre};
use anime_finder::services::{CatalogClient, CatalogError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search(String, usize),
    Details(i32),
    Genre(i32, usize),
    Curated(i32),
    Top(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Start(i32),
    End(i32),
}

#[derive(Default)]
pub struct FakeCatalog {
    pub search_results: Vec<Anime>,
    pub by_genre: HashMap<i32, Vec<Anime>>,
    pub details: HashMap<i32, Anime>,
    pub curated: HashMap<i32, Vec<AnimeReference>>,
    pub top: Vec<Anime>,

    pub failing_search: bool,
    pub failing_genres: HashSet<i32>,
    pub failing_details: HashSet<i32>,
    pub failing_curated: bool,

    calls: Mutex<Vec<Call>>,
    detail_events: Mutex<Vec<DetailEvent>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn genre_calls(&self) -> Vec<(i32, usize)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Genre(id, limit) => Some((id, limit)),
                _ => None,
            })
            .collect()
    }

    pub fn detail_calls(&self) -> Vec<i32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Details(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn detail_events(&self) -> Vec<DetailEvent> {
        self.detail_events.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl CatalogClient for FakeCatalog {
    async fn search_by_query(&self, query: &str, limit: usize) -> Result<Vec<Anime>, CatalogError> {
        self.record(Call::Search(query.to_string(), limit));
        if self.failing_search {
            return Err(CatalogError::Api {
                status: 500,
                message: "search down".to_string(),
            });
        }
        Ok(self.search_results.iter().take(limit).cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Anime, CatalogError> {
        self.record(Call::Details(id));
        self.detail_events.lock().unwrap().push(DetailEvent::Start(id));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.detail_events.lock().unwrap().push(DetailEvent::End(id));

        if self.failing_details.contains(&id) {
            return Err(CatalogError::Api {
                status: 429,
                message: "rate limited".to_string(),
            });
        }
        self.details
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn search_by_genre(
        &self,
        genre_id: i32,
        limit: usize,
    ) -> Result<Vec<Anime>, CatalogError> {
        self.record(Call::Genre(genre_id, limit));
        if self.failing_genres.contains(&genre_id) {
            return Err(CatalogError::Decode("bad genre page".to_string()));
        }
        Ok(self
            .by_genre
            .get(&genre_id)
            .map(|animes| animes.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn get_curated_similar(&self, id: i32) -> Result<Vec<AnimeReference>, CatalogError> {
        self.record(Call::Curated(id));
        if self.failing_curated {
            return Err(CatalogError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(self.curated.get(&id).cloned().unwrap_or_default())
    }

    async fn get_top_ranked(&self, limit: usize) -> Result<Vec<Anime>, CatalogError> {
        self.record(Call::Top(limit));
        Ok(self.top.iter().take(limit).cloned().collect())
    }
}

pub fn genre(id: i32) -> Genre {
    let name = match id {
        1 => "Action",
        2 => "Adventure",
        4 => "Comedy",
        8 => "Drama",
        10 => "Fantasy",
        22 => "Romance",
        24 => "Sci-Fi",
        _ => "Other",
    };
    Genre::new(id, name)
}

pub fn anime(id: i32, genres: &[i32]) -> Anime {
    Anime::new(id, format!("Anime {id}")).with_genres(genres.iter().map(|&g| genre(g)).collect())
}

/// `count` records with consecutive ids starting at `first`, all tagged `genre_id`.
pub fn genre_page(first: i32, count: i32, genre_id: i32) -> Vec<Anime> {
    (first..first + count).map(|id| anime(id, &[genre_id])).collect()
}

pub fn ids(animes: &[Anime]) -> Vec<i32> {
    animes.iter().map(|a| a.mal_id).collect()
}

pub fn temp_storage_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("anime-finder-test-{}", uuid::Uuid::new_v4()))
        .join("storage.json")
}
