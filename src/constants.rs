pub mod limits {

    /// Characters a query needs before suggestions are fetched.
    pub const MIN_SUGGESTION_CHARS: usize = 2;

    pub const SYNOPSIS_PREVIEW_CHARS: usize = 150;

    /// Genres listed on a result card.
    pub const CARD_GENRES: usize = 3;
}
