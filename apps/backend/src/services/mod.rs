pub mod deck;
pub mod sessions;
