//! Core engine for crossword-style word puzzles.
//!
//! The pipeline: a [`Lexicon`] filters a raw word source, an
//! [`AnagramIndex`] groups the accepted words by sorted-letter
//! signature, and a [`Generator`] picks a root word, collects every
//! word whose letters fit inside the root's, and lays them out on a
//! sparse grid so that words only meet at matching-letter crossings.
//!
//! The crate does no rendering and no I/O beyond the word-source
//! string handed to [`Lexicon::from_source`]; frontends consume the
//! [`LevelData`] it produces.

mod anagram;
mod generator;
mod grid;
mod layout;
mod level;
mod lexicon;
mod rng;

pub use anagram::{signature, AnagramIndex, Signature};
pub use generator::{Generator, GeneratorConfig};
pub use grid::{Axis, PlacedWord};
pub use level::LevelData;
pub use lexicon::{Lexicon, LexiconConfig};
pub use rng::Rng;
