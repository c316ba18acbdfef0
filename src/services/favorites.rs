use tokio::sync::RwLock;
use tracing::{error, info};

use crate::db::{Store, StoreError, keys};
use crate::models::anime::Anime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteChange {
    Added(Anime),
    Removed(Anime),
}

/// Favorites list kept in the local store under [`keys::FAVORITES`].
///
/// The list holds full records so it can be shown without the catalog.
pub struct FavoritesService {
    store: Store,
    favorites: RwLock<Vec<Anime>>,
}

impl FavoritesService {
    /// Loads the saved list. Unreadable data is logged and treated as empty.
    pub async fn load(store: Store) -> Self {
        let favorites = match store.get::<Vec<Anime>>(keys::FAVORITES).await {
            Ok(Some(favorites)) => favorites,
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(error = %e, "Error loading favorites");
                Vec::new()
            }
        };

        Self {
            store,
            favorites: RwLock::new(favorites),
        }
    }

    pub async fn list(&self) -> Vec<Anime> {
        self.favorites.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.favorites.read().await.len()
    }

    pub async fn is_favorite(&self, mal_id: i32) -> bool {
        self.favorites.read().await.iter().any(|a| a.mal_id == mal_id)
    }

    pub async fn get(&self, mal_id: i32) -> Option<Anime> {
        self.favorites
            .read()
            .await
            .iter()
            .find(|a| a.mal_id == mal_id)
            .cloned()
    }

    /// Adds `anime` unless it is already a favorite. Returns whether it was added.
    pub async fn add(&self, anime: Anime) -> Result<bool, StoreError> {
        let mut favorites = self.favorites.write().await;
        if favorites.iter().any(|a| a.mal_id == anime.mal_id) {
            return Ok(false);
        }

        info!(mal_id = anime.mal_id, title = %anime.title, "Adding favorite");
        let mut updated = favorites.clone();
        updated.push(anime);
        self.save(&updated).await?;
        *favorites = updated;
        Ok(true)
    }

    /// Removes the favorite with `mal_id`, returning the removed record.
    pub async fn remove(&self, mal_id: i32) -> Result<Option<Anime>, StoreError> {
        let mut favorites = self.favorites.write().await;
        let Some(index) = favorites.iter().position(|a| a.mal_id == mal_id) else {
            return Ok(None);
        };

        let mut updated = favorites.clone();
        let removed = updated.remove(index);
        info!(mal_id, title = %removed.title, "Removing favorite");
        self.save(&updated).await?;
        *favorites = updated;
        Ok(Some(removed))
    }

    pub async fn toggle(&self, anime: Anime) -> Result<FavoriteChange, StoreError> {
        if let Some(removed) = self.remove(anime.mal_id).await? {
            return Ok(FavoriteChange::Removed(removed));
        }
        self.add(anime.clone()).await?;
        Ok(FavoriteChange::Added(anime))
    }

    async fn save(&self, favorites: &[Anime]) -> Result<(), StoreError> {
        self.store.set(keys::FAVORITES, &favorites).await.map_err(|e| {
            error!(error = %e, "Error saving favorites");
            e
        })
    }
}
