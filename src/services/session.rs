use std::collections::HashMap;

use crate::models::anime::Anime;

/// What the user is currently looking at during an interactive session.
///
/// Every list shown is also remembered by id so later commands can act on an
/// anime without asking the catalog again.
#[derive(Debug, Default)]
pub struct Session {
    pub current_search_results: Vec<Anime>,

    pub current_recommendations: Vec<Anime>,

    pub selected: Option<Anime>,

    seen: HashMap<i32, Anime>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember(&mut self, animes: &[Anime]) {
        for anime in animes {
            self.seen.insert(anime.mal_id, anime.clone());
        }
    }

    #[must_use]
    pub fn lookup(&self, mal_id: i32) -> Option<&Anime> {
        self.seen.get(&mal_id).or_else(|| {
            self.current_search_results
                .iter()
                .chain(&self.current_recommendations)
                .chain(&self.selected)
                .find(|a| a.mal_id == mal_id)
        })
    }

    pub fn set_search_results(&mut self, results: Vec<Anime>) {
        self.remember(&results);
        self.current_search_results = results;
    }

    pub fn set_recommendations(&mut self, recommendations: Vec<Anime>) {
        self.remember(&recommendations);
        self.current_recommendations = recommendations;
    }

    pub fn select(&mut self, anime: Anime) {
        self.remember(std::slice::from_ref(&anime));
        self.selected = Some(anime);
    }

    /// Drops the search and recommendation lists. The id cache is kept.
    pub fn clear(&mut self) {
        self.current_search_results.clear();
        self.current_recommendations.clear();
        self.selected = None;
    }
}
