//! Card piles shared by the table.
//!
//! Corporation and project cards live in two separate [`Deck`]s and never
//! mix. Hands and played cards belong to the players.

mod deck;

pub use deck::Deck;
