pub mod jikan;
pub mod mymemory;
