use serde::{Deserialize, Deserializer, Serialize};

/// An anime as returned by the catalog.
///
/// Field names follow the catalog's JSON so the same shape round-trips through
/// the local store. Two records are the same anime when their `mal_id` matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anime {
    pub mal_id: i32,
    pub title: String,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub studios: Vec<Studio>,
}

impl Anime {
    #[must_use]
    pub fn new(mal_id: i32, title: impl Into<String>) -> Self {
        Self {
            mal_id,
            title: title.into(),
            title_english: None,
            url: None,
            images: None,
            score: None,
            episodes: None,
            status: None,
            rating: None,
            year: None,
            synopsis: None,
            genres: Vec::new(),
            studios: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Largest cover image available, falling back to the regular one.
    #[must_use]
    pub fn cover_url(&self) -> Option<&str> {
        let jpg = self.images.as_ref()?.jpg.as_ref()?;
        jpg.large_image_url
            .as_deref()
            .or(jpg.image_url.as_deref())
    }
}

impl PartialEq for Anime {
    fn eq(&self, other: &Self) -> bool {
        self.mal_id == other.mal_id
    }
}

impl Eq for Anime {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub mal_id: i32,
    pub name: String,
}

impl Genre {
    #[must_use]
    pub fn new(mal_id: i32, name: impl Into<String>) -> Self {
        Self {
            mal_id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    pub mal_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub jpg: Option<ImageSet>,
    #[serde(default)]
    pub webp: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub small_image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

/// Light pointer to an anime, as found in the catalog's curated
/// "users also recommend" lists. Needs a detail lookup to become an [`Anime`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeReference {
    pub mal_id: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl AnimeReference {
    #[must_use]
    pub fn new(mal_id: i32) -> Self {
        Self {
            mal_id,
            title: None,
            url: None,
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
