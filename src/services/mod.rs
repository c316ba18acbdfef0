pub mod catalog;
pub use catalog::{CatalogClient, CatalogError};

pub mod recommendations;
pub use recommendations::{CandidateSet, GenreFrequency, RecommendationService};

pub mod favorites;
pub use favorites::{FavoriteChange, FavoritesService};

pub mod translation;
pub use translation::{TextTranslator, TranslationService};

pub mod session;
pub use session::Session;
