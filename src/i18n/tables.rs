use super::Language;

pub const KEYS: &[&str] = &[
    "searchResults",
    "recommendations",
    "recommendationsFor",
    "popularAnime",
    "noRecommendations",
    "viewRecommendations",
    "search",
    "searchPlaceholder",
    "loading",
    "loadingRecommendations",
    "rating",
    "studios",
    "genres",
    "synopsis",
    "year",
    "yearNotAvailable",
    "statusFinished",
    "statusAiring",
    "notAvailable",
    "unknown",
    "searchSuccess",
    "recommendationsSuccess",
    "noRecommendationsFound",
    "errorSearch",
    "errorRecommendations",
    "errorAnimeDetails",
    "errorUnexpected",
    "homeSuccess",
    "homeError",
    "emptySearch",
    "noAnimeInfo",
    "invalidId",
    "noAnimesFound",
    "noAnimesFoundDesc",
    "noRecommendationsAvailable",
    "noRecommendationsDesc",
    "episodes",
    "episodesAiring",
    "episodesCompleted",
    "synopsisNotAvailable",
    "favoritesTitle",
    "noFavorites",
    "noFavoritesDesc",
    "addedToFavorites",
    "removedFromFavorites",
    "alreadyFavorite",
    "notInFavorites",
    "currentLanguage",
    "languageChanged",
    "invalidLanguage",
    "createdBy",
    "poweredBy",
    "tagline",
];

pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    match language {
        Language::Es => spanish(key),
        Language::En => english(key),
    }
}

fn spanish(key: &str) -> Option<&'static str> {
    let text = match key {
        "searchResults" => "Resultados de búsqueda",
        "recommendations" => "Recomendaciones basadas en géneros",
        "recommendationsFor" => "Recomendaciones para \"{title}\"",
        "popularAnime" => "Animes Populares",
        "noRecommendations" => "No se encontraron recomendaciones para \"{title}\"",

        "viewRecommendations" => "Ver Recomendaciones",
        "search" => "Buscar",
        "searchPlaceholder" => "Busca tu anime favorito...",
        "loading" => "Buscando animes...",
        "loadingRecommendations" => "Generando recomendaciones...",
        "rating" => "Clasificación",
        "studios" => "Estudios",
        "genres" => "Géneros",
        "synopsis" => "Sinopsis",
        "year" => "Año",
        "yearNotAvailable" => "Año no disponible",
        "statusFinished" => "Finalizado",
        "statusAiring" => "En Emisión",
        "notAvailable" => "No disponible",
        "unknown" => "Desconocido",

        "searchSuccess" => "Se encontraron {count} animes",
        "recommendationsSuccess" => "Se encontraron {count} recomendaciones para \"{title}\"",
        "noRecommendationsFound" => "No se encontraron recomendaciones para este anime",
        "errorSearch" => "Error al buscar animes. Intenta de nuevo.",
        "errorRecommendations" => "Error al obtener recomendaciones",
        "errorAnimeDetails" => "Error al cargar los detalles del anime",
        "errorUnexpected" => "Error inesperado al obtener recomendaciones",
        "homeSuccess" => "Volviendo a la página principal",
        "homeError" => "Error al cargar la página principal",
        "emptySearch" => "Por favor ingresa un término de búsqueda",
        "noAnimeInfo" => "No se pudo obtener información del anime",
        "invalidId" => "ID de anime inválido: {id}",

        "noAnimesFound" => "No se encontraron animes",
        "noAnimesFoundDesc" => "Intenta con otros términos de búsqueda",
        "noRecommendationsAvailable" => "No hay recomendaciones disponibles",
        "noRecommendationsDesc" => {
            "Este anime no tiene recomendaciones en la base de datos o no se pudieron generar recomendaciones basadas en géneros."
        }

        "episodes" => "episodios",
        "episodesAiring" => "En emisión",
        "episodesCompleted" => "Completado",
        "synopsisNotAvailable" => "Sinopsis no disponible",

        "favoritesTitle" => "Mis Favoritos ({count})",
        "noFavorites" => "No tienes favoritos aún",
        "noFavoritesDesc" => "¡Añade animes a tus favoritos con 'favorites add <id>'!",
        "addedToFavorites" => "{title} añadido a favoritos",
        "removedFromFavorites" => "{title} eliminado de favoritos",
        "alreadyFavorite" => "{title} ya está en favoritos",
        "notInFavorites" => "El anime {id} no está en favoritos",

        "currentLanguage" => "Idioma actual: {language}",
        "languageChanged" => "Idioma cambiado a {language}",
        "invalidLanguage" => "Idioma no soportado: {language} (usa 'es' o 'en')",

        "createdBy" => "Creado por",
        "poweredBy" => "Powered by",
        "tagline" => "Descubre tu próximo anime favorito",
        _ => return None,
    };
    Some(text)
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "searchResults" => "Search Results",
        "recommendations" => "Genre-based Recommendations",
        "recommendationsFor" => "Recommendations for \"{title}\"",
        "popularAnime" => "Popular Anime",
        "noRecommendations" => "No recommendations found for \"{title}\"",

        "viewRecommendations" => "View Recommendations",
        "search" => "Search",
        "searchPlaceholder" => "Search your favorite anime...",
        "loading" => "Searching animes...",
        "loadingRecommendations" => "Generating recommendations...",
        "rating" => "Rating",
        "studios" => "Studios",
        "genres" => "Genres",
        "synopsis" => "Synopsis",
        "year" => "Year",
        "yearNotAvailable" => "Year not available",
        "statusFinished" => "Finished Airing",
        "statusAiring" => "Currently Airing",
        "notAvailable" => "Not available",
        "unknown" => "Unknown",

        "searchSuccess" => "Found {count} animes",
        "recommendationsSuccess" => "Found {count} recommendations for \"{title}\"",
        "noRecommendationsFound" => "No recommendations found for this anime",
        "errorSearch" => "Error searching animes. Please try again.",
        "errorRecommendations" => "Error getting recommendations",
        "errorAnimeDetails" => "Error loading anime details",
        "errorUnexpected" => "Unexpected error getting recommendations",
        "homeSuccess" => "Returning to main page",
        "homeError" => "Error loading main page",
        "emptySearch" => "Please enter a search term",
        "noAnimeInfo" => "Could not get anime information",
        "invalidId" => "Invalid anime ID: {id}",

        "noAnimesFound" => "No animes found",
        "noAnimesFoundDesc" => "Try with other search terms",
        "noRecommendationsAvailable" => "No recommendations available",
        "noRecommendationsDesc" => {
            "This anime has no recommendations in the database or recommendations could not be generated based on genres."
        }

        "episodes" => "episodes",
        "episodesAiring" => "Airing",
        "episodesCompleted" => "Completed",
        "synopsisNotAvailable" => "Synopsis not available",

        "favoritesTitle" => "My Favorites ({count})",
        "noFavorites" => "You have no favorites yet",
        "noFavoritesDesc" => "Add anime to your favorites with 'favorites add <id>'!",
        "addedToFavorites" => "{title} added to favorites",
        "removedFromFavorites" => "{title} removed from favorites",
        "alreadyFavorite" => "{title} is already in favorites",
        "notInFavorites" => "Anime {id} is not in favorites",

        "currentLanguage" => "Current language: {language}",
        "languageChanged" => "Language changed to {language}",
        "invalidLanguage" => "Unsupported language: {language} (use 'es' or 'en')",

        "createdBy" => "Created by",
        "poweredBy" => "Powered by",
        "tagline" => "Discover your next favorite anime",
        _ => return None,
    };
    Some(text)
}
