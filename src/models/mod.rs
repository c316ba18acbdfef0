pub mod anime;

pub use anime::{Anime, AnimeReference, Genre, ImageSet, Images, Studio};
